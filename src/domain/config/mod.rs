//! Configuration domain module

mod encode_config;
pub mod env_path;
mod locations;

pub use encode_config::EncodeConfig;
pub use locations::Locations;
