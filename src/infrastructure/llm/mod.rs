//! Generation provider implementations

pub mod factory;
pub mod gemini;
pub mod http_client;

pub use factory::LlmProviderFactory;
pub use gemini::GeminiProvider;
pub use http_client::{HttpClient, HttpClientTrait};
