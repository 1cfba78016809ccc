pub mod definition;

pub use definition::*;

/// Parses the JSON array returned by the block catalog endpoint.
pub fn parse_catalog(json: &str) -> Result<Vec<BlockDefinition>, serde_json::Error> {
    serde_json::from_str(json)
}
