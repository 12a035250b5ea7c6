//! Built-in defaults used when no preferences file exists.
//!
//! Acts as the local "database" of display profile definitions, matching the
//! displays uHDR ships with out of the box.

use crate::preferences::types::DisplayProfile;
use std::collections::HashMap;

/// Preferences file name, resolved relative to the process working directory.
pub const PREFS_FILE: &str = "prefs.json";

/// Display selected on first run.
pub const DEFAULT_DISPLAY_TAG: &str = "vesaDisplayHDR1000";

/// Fallback image directory when none is stored or the stored one is gone.
pub const DEFAULT_IMAGE_DIR: &str = ".";

/// Maximum image dimension while editing. Small size keeps computation quick
/// and avoids memory issues.
pub const DEFAULT_WORKING_RESOLUTION: u32 = 1200;

/// 4K shape shared by every built-in profile, as (height, width).
const SHAPE_4K: (u32, u32) = (2160, 3840);

/// Build the built-in display profile set.
///
/// Four canned profiles: a pass-through "none", the two VESA DisplayHDR
/// tiers, and HLG.
pub fn builtin_displays() -> HashMap<String, DisplayProfile> {
    let profiles = [
        DisplayProfile::new("none", SHAPE_4K, 1.0, ""),
        DisplayProfile::new("vesaDisplayHDR1000", SHAPE_4K, 12.0, "_vesa_DISPLAY_HDR_1000"),
        DisplayProfile::new("vesaDisplayHDR400", SHAPE_4K, 4.8, "_vesa_DISPLAY_HDR_400"),
        DisplayProfile::new("HLG1", SHAPE_4K, 1.0, "_HLG_1"),
    ];

    profiles
        .into_iter()
        .map(|p| (p.tag.clone(), p))
        .collect()
}
