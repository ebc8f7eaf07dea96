//! The top-level document wrapper.

use serde::Serialize;

use crate::{DataDictionary, MiningModel, PmmlError};

pub const PMML_VERSION: &str = "4.4";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub name: String,
    pub version: String,
}

impl Default for Application {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub application: Application,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A complete document around one mining model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PmmlDocument<M> {
    pub version: &'static str,
    pub header: Header,
    pub data_dictionary: DataDictionary,
    pub model: MiningModel<M>,
}

impl<M: Serialize> PmmlDocument<M> {
    pub fn new(data_dictionary: DataDictionary, model: MiningModel<M>) -> Self {
        Self {
            version: PMML_VERSION,
            header: Header::default(),
            data_dictionary,
            model,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.header.description = Some(description.into());
        self
    }

    pub fn to_json_value(&self) -> Result<serde_json::Value, PmmlError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, PmmlError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
