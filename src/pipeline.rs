use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;

/// The payload handed to the backend's pipeline-registration API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRegistration {
    pub name: String,
    pub description: String,
    pub source: String,
    /// JSON schema describing the parameters needed to instantiate the pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

impl PipelineRegistration {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source: source.into(),
            schema: None,
        }
    }

    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the payload to `path` as pretty-printed JSON.
    pub fn save(&self, path: &str) -> Result<(), PipelineError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| PipelineError::Io {
            path: path.to_string(),
            source,
        })?;
        tracing::debug!(path, name = %self.name, "saved pipeline registration");
        Ok(())
    }

    pub fn from_file(path: &str) -> Result<Self, PipelineError> {
        let content = fs::read_to_string(path).map_err(|source| PipelineError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
