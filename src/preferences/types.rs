use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Characteristics of one target HDR display, used downstream for
/// tone-mapping output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayProfile {
    /// Display shape as (height, width), e.g. (2160, 3840) for 4K.
    pub shape: (u32, u32),
    /// Color space scaling to the display maximum.
    pub scaling: f64,
    /// Postfix appended to filenames when exporting for this display.
    pub post: String,
    /// Tag name, repeated inside the profile for self-description.
    pub tag: String,
}

impl DisplayProfile {
    pub fn new(tag: &str, shape: (u32, u32), scaling: f64, post: &str) -> Self {
        Self {
            shape,
            scaling,
            post: post.into(),
            tag: tag.into(),
        }
    }
}

/// Execution strategy for downstream image processing.
///
/// Stored as a preference but not interpreted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputationBackend {
    /// Plain interpreter path.
    #[default]
    Python,
    /// JIT-accelerated path.
    Numba,
    /// GPU path.
    Cuda,
}

impl ComputationBackend {
    /// Get backend name for display.
    pub fn name(&self) -> &'static str {
        match self {
            ComputationBackend::Python => "python",
            ComputationBackend::Numba => "numba",
            ComputationBackend::Cuda => "cuda",
        }
    }
}

impl std::fmt::Display for ComputationBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Persisted preferences file structure.
///
/// Exactly the three keys the original uHDR wrote; unknown extra keys are
/// ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPreferences {
    /// Known HDR displays by tag.
    #[serde(rename = "HDRdisplays")]
    pub displays: HashMap<String, DisplayProfile>,
    /// Tag of the currently selected display.
    #[serde(rename = "HDRdisplay")]
    pub current_display: String,
    /// Last-used image directory.
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_profile_wire_names() {
        let profile = DisplayProfile::new("HLG1", (2160, 3840), 1.0, "_HLG_1");
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(json["shape"][0], 2160);
        assert_eq!(json["shape"][1], 3840);
        assert_eq!(json["scaling"], 1.0);
        assert_eq!(json["post"], "_HLG_1");
        assert_eq!(json["tag"], "HLG1");
    }

    #[test]
    fn test_stored_preferences_top_level_keys() {
        let stored = StoredPreferences {
            displays: HashMap::from([(
                "none".to_string(),
                DisplayProfile::new("none", (2160, 3840), 1.0, ""),
            )]),
            current_display: "none".to_string(),
            image_path: ".".to_string(),
        };

        let json = serde_json::to_value(&stored).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert!(json.get("HDRdisplays").is_some());
        assert_eq!(json["HDRdisplay"], "none");
        assert_eq!(json["imagePath"], ".");
    }

    #[test]
    fn test_extra_keys_ignored_on_read() {
        let raw = r#"{
            "HDRdisplays": {},
            "HDRdisplay": "none",
            "imagePath": ".",
            "someFutureKey": 42
        }"#;

        let stored: StoredPreferences = serde_json::from_str(raw).unwrap();
        assert_eq!(stored.current_display, "none");
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let raw = r#"{ "HDRdisplay": "none", "imagePath": "." }"#;
        assert!(serde_json::from_str::<StoredPreferences>(raw).is_err());
    }

    #[test]
    fn test_computation_backend_serialization() {
        assert_eq!(
            serde_json::to_string(&ComputationBackend::Cuda).unwrap(),
            "\"cuda\""
        );
        assert_eq!(ComputationBackend::default(), ComputationBackend::Python);
        assert_eq!(ComputationBackend::Numba.to_string(), "numba");
    }
}
