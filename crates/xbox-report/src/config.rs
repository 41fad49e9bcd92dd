//! Decoder configuration loading

use std::path::Path;

use xbox_controller_protocol::DecoderConfig;

use crate::error::ToolError;

/// Load a [`DecoderConfig`] from a `.json`, `.yaml` or `.yml` file and validate it.
pub fn load_config(path: &Path) -> Result<DecoderConfig, ToolError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let text = std::fs::read_to_string(path)?;
    let config = parse_config(&text, &extension)?;
    tracing::info!(path = %path.display(), ?config, "loaded decoder config");
    Ok(config)
}

pub fn parse_config(text: &str, extension: &str) -> Result<DecoderConfig, ToolError> {
    let config: DecoderConfig = match extension {
        "json" => serde_json::from_str(text)
            .map_err(|e| ToolError::InvalidConfiguration(e.to_string()))?,
        "yaml" | "yml" => serde_yaml::from_str(text)
            .map_err(|e| ToolError::InvalidConfiguration(e.to_string()))?,
        other => return Err(ToolError::UnsupportedConfigFormat(other.to_string())),
    };

    config
        .validate()
        .map_err(|e| ToolError::InvalidConfiguration(e.to_string()))?;
    Ok(config)
}
