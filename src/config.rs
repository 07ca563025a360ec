//! Configuration file parsing and validation

pub mod marklint_toml;

pub use marklint_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, MarklintMeta, OutputConfig, OutputFormat, RulesConfig,
};
