//! Configuration trees for appconf.
//!
//! This crate loads a configuration file (JSON, TOML, or YAML) through a parser
//! adapter and exposes it as an ordered tree of named fields, with typed and
//! dotted-path access and export back to text.
//!
//! ```rust,ignore
//! let config = appconf::Config::load("app.toml")?;
//! let port: u16 = config.lookup_as("server.port")?;
//! println!("{}", config.to_text()?);
//! ```

mod config;
mod error;
mod export;
pub mod node;
pub mod parser;
pub mod value;

pub use config::Config;
pub use error::ConfigError;
pub use node::{ConfigNode, Field, FieldKind, FromField};
pub use parser::{FileParser, Format, ParseToMapping, mapping_from_json};
pub use value::{Mapping, Scalar, Value, mapping_depth};
