use crate::dependency_report::domain::DependencyFile;
use crate::shared::error::GemnasiumError;
use crate::shared::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// DependencyFileEncoder - Serializes the dependency file
///
/// Two renditions exist: the wire form (compact JSON wrapped in base64,
/// sent as the `content` of an upload) and a pretty JSON form for humans.
pub struct DependencyFileEncoder;

impl DependencyFileEncoder {
    /// Encodes the dependency file for upload: compact JSON, then base64
    pub fn encode(file: &DependencyFile) -> Result<String> {
        let json = serde_json::to_string(file).map_err(|e| GemnasiumError::Serialization {
            what: "dependency file".to_string(),
            details: e.to_string(),
        })?;
        Ok(STANDARD.encode(json))
    }

    /// Renders the dependency file as indented JSON
    pub fn to_pretty_json(file: &DependencyFile) -> Result<String> {
        let json =
            serde_json::to_string_pretty(file).map_err(|e| GemnasiumError::Serialization {
                what: "dependency file".to_string(),
                details: e.to_string(),
            })?;
        Ok(json)
    }
}
