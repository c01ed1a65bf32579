pub const APP_NAME: &str = "VFEx";
pub const APP_FULL_NAME: &str = "Video Frame Extractor";

pub const ERROR_LOG_FILE: &str = "error.log";
pub const DEBUG_LOG_FILE: &str = "debug.log";

/// Default chars number for left margins.
pub const DEFAULT_MARGIN_H: i32 = 2;
/// Default lines number for top/bottom margins.
pub const DEFAULT_MARGIN_V: i32 = 1;

/// Erase from the cursor to the end of the current line.
pub const ERASE_LINE: &str = "\x1b[K";
/// Move up one line, erase it entirely and return to column one.
pub const ERASE_PREV_LINE: &str = "\x1b[1A\x1b[2K\x1b[G";

/// Suffix appended to the video file stem when no output folder is given.
pub const OUTPUT_DIR_SUFFIX: &str = "_images";

pub const LOGO: &[&str] = &[
    r"__     _______ _____      ",
    r"\ \   / /  ___| ____|_  __",
    r" \ \ / /| |_  |  _| \ \/ /",
    r"  \ V / |  _| | |___ >  < ",
    r"   \_/  |_|   |_____/_/\_\",
];

/// Ellipsis animation parameters.
pub const SPINNER_MAX_POINTS: usize = 3;
pub const SPINNER_FREQ_HZ: f64 = 2.0;
