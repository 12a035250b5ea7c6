//! uHDR Preferences Library
//!
//! User preference store for the uHDR image editor.
//!
//! # Features
//!
//! - Load preferences from `./prefs.json`, or fall back to built-in defaults
//! - Typed HDR display profiles (shape, scaling, export postfix)
//! - Write-through persistence: every setter saves the full state to disk
//!
//! # Example
//!
//! ```no_run
//! use uhdr_preferences::Preferences;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load prefs.json from the working directory, or the defaults
//!     let mut prefs = Preferences::open();
//!     println!("Target display: {}", prefs.current_display_tag());
//!
//!     // Select a display; the change is persisted immediately
//!     if prefs.set_current_display("vesaDisplayHDR400") {
//!         let scaling = prefs.display_scaling()?;
//!         let (height, width) = prefs.display_shape()?;
//!         println!("Tone-map to {}x{} with scaling {}", width, height, scaling);
//!     }
//!
//!     // Remember where the user last browsed for images
//!     prefs.set_image_path("/home/user/photos");
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod preferences;

// Re-exports for convenience
pub use error::{PrefError, Result};
pub use preferences::{ComputationBackend, DisplayProfile, Preferences, StoredPreferences};
