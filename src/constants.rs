// Devprof Constants
// Changing any digest offset changes which profile an identifier receives.

use std::ops::Range;

// Digest layout (128-bit digest rendered as 32 lowercase hex chars)
pub const DIGEST_HEX_LEN: usize = 32;
pub const DIGEST_BYTES: usize = 16;

/// Hex digits used to pick the device category.
pub const CATEGORY_SLICE: Range<usize> = 0..8;
/// Hex digits used to pick the template inside the category.
pub const TEMPLATE_SLICE: Range<usize> = 8..12;

// Perturbation chunks (the digest split into 4-char slices)
pub const PERTURB_CHUNK_WIDTH: usize = 4;
pub const ANDROID_PATCH_CHUNK: usize = 0;
pub const IOS_PATCH_CHUNK: usize = 1;
pub const APP_PATCH_CHUNK: usize = 2;
pub const PATCH_MODULUS: u16 = 10;

// Category weighting (percent of the bucket space)
pub const WEIGHT_BUCKETS: u32 = 100;
pub const DEFAULT_WEIGHT_DESKTOP: u32 = 90;
pub const DEFAULT_WEIGHT_ANDROID: u32 = 5;
pub const DEFAULT_WEIGHT_IOS: u32 = 5;

// Model-name classification keywords (matched lowercase, as substrings)
/// Names whose system version gets the Android patch suffix. Narrower than
/// `ANDROID_KEYWORDS`: OPPO, vivo, Huawei, OnePlus and Pixel keep the bare version.
pub const ANDROID_PATCH_KEYWORDS: [&str; 3] = ["android", "samsung", "xiaomi"];
/// Names counted as Android in summaries and listings
pub const ANDROID_KEYWORDS: [&str; 8] = [
    "android", "samsung", "xiaomi", "oppo", "vivo", "huawei", "oneplus", "pixel",
];
pub const IOS_KEYWORDS: [&str; 2] = ["iphone", "ipad"];
pub const DESKTOP_KEYWORDS: [&str; 1] = ["desktop"];

// Paths
pub const APP_FOLDER: &str = ".devprof";
pub const APP_HOME_ENV: &str = "DEVPROF_HOME";
pub const SETTINGS_FILENAME: &str = "settings.json";
pub const ASSIGNMENTS_FILENAME: &str = "device_assignments.json";
pub const TEMPLATES_FILENAME: &str = "device_templates.json";

// Settings
pub const SETTINGS_VERSION: u32 = 1;
