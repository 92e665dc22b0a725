//! Document decoding implementations

pub mod decoders;
pub mod factory;

pub use factory::DecoderFactory;
