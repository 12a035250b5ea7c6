//! Preference storage and persistence module.
//!
//! Handles loading and saving user preferences to/from prefs.json.
//! Includes built-in display profile defaults and the preference store.

pub mod defaults;
pub mod store;
pub mod types;

// Re-export commonly used items
pub use defaults::{DEFAULT_DISPLAY_TAG, DEFAULT_WORKING_RESOLUTION, PREFS_FILE, builtin_displays};
pub use store::Preferences;
pub use types::*;
