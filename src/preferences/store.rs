//! Preference storage and persistence.
//!
//! Holds the preference set in memory, initializes it from prefs.json or
//! built-in defaults, and writes the full persisted state back on every
//! mutation through the setters.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PrefError, Result};
use crate::preferences::defaults::{
    DEFAULT_DISPLAY_TAG, DEFAULT_IMAGE_DIR, DEFAULT_WORKING_RESOLUTION, PREFS_FILE,
    builtin_displays,
};
use crate::preferences::types::{ComputationBackend, DisplayProfile, StoredPreferences};

// =============================================================================
// Preference Store
// =============================================================================

/// Process-wide user preferences for the editor.
///
/// Create one instance at startup with [`Preferences::open`] and pass it to
/// the collaborators that need it. All operations are synchronous and
/// single-threaded; the store assumes exclusive access to its file (one
/// process instance at a time, no file locking).
#[derive(Debug)]
pub struct Preferences {
    /// File this store persists to.
    path: PathBuf,
    /// Known HDR displays by tag. Replaced wholesale on load, never
    /// partially updated.
    displays: HashMap<String, DisplayProfile>,
    /// Tag of the selected display. Always a key of `displays`.
    current_display: String,
    /// Last-used image directory, stored verbatim.
    image_path: String,
    /// Maximum image dimension during interactive editing.
    pub working_resolution_cap: u32,
    /// Keep all metadata when exporting.
    pub keep_all_metadata: bool,
    /// Execution strategy for downstream image processing.
    pub computation: ComputationBackend,
    /// Print setter traces to stdout. Mutate the field directly; there is
    /// deliberately no setter.
    pub verbose: bool,
}

impl Preferences {
    /// Open the preference store backed by `./prefs.json` in the process
    /// working directory.
    pub fn open() -> Self {
        Self::open_at(PREFS_FILE)
    }

    /// Open a preference store backed by an explicit file path.
    ///
    /// A missing file is the expected first-run path and populates the
    /// built-in defaults. A malformed or unreadable file does the same after
    /// reporting the cause on stderr; startup is never aborted by a bad
    /// preferences file.
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = match Self::load_stored(&path) {
            Some(stored) => Self::from_stored(path, stored),
            None => Self::with_defaults(path),
        };

        println!("uHDR: target display: {}", prefs.current_display);
        println!("uHDR: image path: {}", prefs.image_path);
        prefs
    }

    /// Read the stored preferences document, if any.
    fn load_stored(path: &Path) -> Option<StoredPreferences> {
        if !path.exists() {
            println!("Preferences file not found: {}", path.display());
            return None;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Warning: failed to read {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(stored) => Some(stored),
            Err(e) => {
                eprintln!(
                    "Warning: malformed preferences file {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                None
            }
        }
    }

    /// Build a store from a loaded document, re-validating the invariant
    /// that the current tag resolves to a known display.
    fn from_stored(path: PathBuf, stored: StoredPreferences) -> Self {
        let StoredPreferences {
            displays,
            mut current_display,
            image_path,
        } = stored;

        if displays.is_empty() {
            eprintln!("Warning: preferences file lists no displays. Using defaults.");
            return Self::with_defaults(path);
        }

        if !displays.contains_key(&current_display) {
            let fallback = if displays.contains_key(DEFAULT_DISPLAY_TAG) {
                DEFAULT_DISPLAY_TAG.to_string()
            } else {
                // Arbitrary but stable enough: any known display beats a
                // dangling tag.
                displays.keys().next().cloned().unwrap_or_default()
            };
            eprintln!(
                "Warning: stored display '{}' is unknown, falling back to '{}'",
                current_display, fallback
            );
            current_display = fallback;
        }

        Self {
            path,
            displays,
            current_display,
            image_path,
            working_resolution_cap: DEFAULT_WORKING_RESOLUTION,
            keep_all_metadata: false,
            computation: ComputationBackend::default(),
            verbose: false,
        }
    }

    fn with_defaults(path: PathBuf) -> Self {
        Self {
            path,
            displays: builtin_displays(),
            current_display: DEFAULT_DISPLAY_TAG.to_string(),
            image_path: DEFAULT_IMAGE_DIR.to_string(),
            working_resolution_cap: DEFAULT_WORKING_RESOLUTION,
            keep_all_metadata: false,
            computation: ComputationBackend::default(),
            verbose: false,
        }
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save preferences to disk.
    ///
    /// Serializes the three persisted fields (displays, current display,
    /// image path) and overwrites the file in place. There is no
    /// write-then-rename step, so a crash mid-write can leave a truncated
    /// file; accepted for this non-critical store.
    pub fn save(&self) -> Result<()> {
        let stored = StoredPreferences {
            displays: self.displays.clone(),
            current_display: self.current_display.clone(),
            image_path: self.image_path.clone(),
        };

        if self.verbose {
            println!(" [PREF] >> save({})", self.path.display());
        }

        let content = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, content)?;

        Ok(())
    }

    /// Write-through used by the setters. A failed preferences write must
    /// not abort an editing session, so the error is reported on stderr and
    /// swallowed.
    fn persist(&self) {
        if let Err(e) = self.save() {
            eprintln!(
                "Warning: failed to save preferences to {}: {}",
                self.path.display(),
                e
            );
        }
    }

    // =========================================================================
    // HDR displays
    // =========================================================================

    /// Get the full display profile mapping, keyed by tag.
    pub fn display_profiles(&self) -> &HashMap<String, DisplayProfile> {
        &self.displays
    }

    /// Tag of the currently selected display.
    pub fn current_display_tag(&self) -> &str {
        &self.current_display
    }

    /// Get the profile of the currently selected display.
    pub fn current_display_profile(&self) -> Result<&DisplayProfile> {
        self.displays
            .get(&self.current_display)
            .ok_or_else(|| PrefError::UnknownDisplayTag {
                tag: self.current_display.clone(),
            })
    }

    /// Select the target HDR display.
    ///
    /// An unknown tag is rejected and the previous selection kept; the
    /// return value says whether the tag was applied. The store persists in
    /// both cases (a no-op save is harmless, and keeping the write
    /// unconditional mirrors the original uHDR behavior).
    pub fn set_current_display(&mut self, tag: &str) -> bool {
        let applied = self.displays.contains_key(tag);
        if applied {
            self.current_display = tag.to_string();
        }

        if self.verbose {
            println!(
                " [PREF] >> set_current_display({}): {}",
                tag, self.current_display
            );
        }

        self.persist();
        applied
    }

    /// Color space scaling of the current display.
    pub fn display_scaling(&self) -> Result<f64> {
        Ok(self.current_display_profile()?.scaling)
    }

    /// Shape of the current display as (height, width).
    pub fn display_shape(&self) -> Result<(u32, u32)> {
        Ok(self.current_display_profile()?.shape)
    }

    // =========================================================================
    // Image path
    // =========================================================================

    /// Last-used image directory.
    ///
    /// Falls back to `"."` when the stored path no longer denotes a
    /// directory. The stored value itself is left untouched.
    pub fn image_path(&self) -> &str {
        if Path::new(&self.image_path).is_dir() {
            &self.image_path
        } else {
            DEFAULT_IMAGE_DIR
        }
    }

    /// Remember the last-used image directory and persist.
    ///
    /// No existence check here; validation happens on read in
    /// [`Preferences::image_path`].
    pub fn set_image_path(&mut self, path: &str) {
        self.image_path = path.to_string();

        if self.verbose {
            println!(" [PREF] >> set_image_path({}): {}", path, self.image_path);
        }

        self.persist();
    }

    // =========================================================================
    // Computation
    // =========================================================================

    /// Selected computation backend for downstream processing.
    pub fn computation_mode(&self) -> ComputationBackend {
        self.computation
    }
}
