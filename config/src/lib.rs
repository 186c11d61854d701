//! Configuration for the EduTrack command parser.
//!
//! A [`ParserConfig`] is read once from YAML at startup and turned into the
//! [`FieldValidators`](edutrack_core::FieldValidators) every command
//! builder validates against. It is immutable afterwards.

mod config;
mod error;

pub use config::{CONFIG_VERSION, ParserConfig};
pub use error::{ConfigError, Result};
