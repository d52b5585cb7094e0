//! Optional `.setenv.toml` configuration.

pub mod settings;

pub use settings::Settings;
