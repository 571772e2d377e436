//! CLI command implementations.

pub mod check;
pub mod dump;
pub mod get;
pub mod keys;

use appconf::{ConfigError, ConfigNode};

/// Resolves an optional dotted path to a section; `None` is the root.
pub(crate) fn resolve_section<'a>(
    root: &'a ConfigNode,
    path: Option<&str>,
) -> Result<&'a ConfigNode, ConfigError> {
    match path {
        Some(path) => root.lookup_as(path),
        None => Ok(root),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use appconf::{Config, mapping_from_json};
    use serde_json::json;

    /// The server/debug scenario plus a list, as an in-memory config.
    pub fn sample_config() -> Config {
        let mapping = mapping_from_json(json!({
            "server": {"port": 8080, "host": "localhost", "ratio": 0.25},
            "debug": true,
            "tags": ["a", "b"],
            "proxy": null
        }))
        .expect("valid sample mapping");
        Config::from_mapping("sample.json", mapping)
    }

    pub fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).expect("utf-8 output")
    }
}
