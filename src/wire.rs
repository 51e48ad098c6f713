use serde::{Deserialize, Deserializer};

/// Error response body returned by OCI distribution registries.
///
/// Shape: `{"errors": [{"code": "...", "message": "...", "detail": ...}]}`.
/// Every field is optional on the wire, `null` reads as absent, and unknown
/// fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "entries")]
    pub errors: Vec<ErrorInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorInfo {
    /// Registry error code. Usually a string such as `"MANIFEST_UNKNOWN"`,
    /// but kept as raw JSON so other shapes do not break decoding.
    #[serde(default)]
    pub code: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorInfo {
    /// Returns the code when the registry sent it as a string.
    pub fn code_str(&self) -> Option<&str> {
        self.code.as_ref().and_then(serde_json::Value::as_str)
    }
}

impl ErrorResponse {
    /// Returns the message of the last entry that carries a non-empty one.
    pub fn last_message(&self) -> Option<&str> {
        let mut message = None;
        for info in &self.errors {
            if let Some(text) = info.message.as_deref().filter(|text| !text.is_empty()) {
                message = Some(text);
            }
        }
        message
    }
}

// `"errors": null` and `null` entries decode as nothing.
fn entries<'de, D>(deserializer: D) -> Result<Vec<ErrorInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<Option<ErrorInfo>>>::deserialize(deserializer)?;
    Ok(entries.into_iter().flatten().flatten().collect())
}
