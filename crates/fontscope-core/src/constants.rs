// src/constants.rs

// Font selection defaults
pub const DEFAULT_POINT_SIZE: f32 = 14.0;
pub const DEFAULT_SANS_SERIF_TYPEFACE: &str = "Sans";

/// Sizes offered in the size combo; the entry stays editable.
pub const SIZE_PRESETS: [&str; 16] = [
    "8", "9", "10", "11", "12", "14", "16", "18", "20", "22", "24", "26", "28", "36", "48", "72",
];

// Sample text
pub const SAMPLE_TEXT_FILE: &str = "sampletext.txt";
pub const MAX_SAMPLE_TEXT_BYTES: u64 = 65536;

// Window layout
pub const WINDOW_WIDTH: i32 = 480;
pub const WINDOW_HEIGHT: i32 = 320;
pub const MARGIN: i32 = 8;
pub const SPACING: i32 = 4;
pub const CONTROL_HEIGHT: i32 = 24;
pub const ENGINE_COMBO_WIDTH: i32 = 160;
pub const TYPEFACE_COMBO_WIDTH: i32 = 160;
pub const STYLE_COMBO_WIDTH: i32 = 120;
pub const SIZE_COMBO_WIDTH: i32 = 80;

/// Tolerance used when comparing a resolved point height with the request
pub const POINT_HEIGHT_TOLERANCE: f32 = 1e-3;
