//! Global constants for the Unibound engine

pub mod cursor {
    /// Sentinel returned by boundary navigation when no further boundary
    /// exists in the requested direction.
    pub const DONE: i32 = -1;
}

pub mod status {
    /// Rule-status tag for boundaries with no special classification
    /// (all character boundaries, and position 0 of a line iterator).
    pub const NONE: i32 = 0;

    /// Rule-status tag for a soft (optional) line break.
    pub const SOFT: i32 = 0;

    /// Rule-status tag for a mandatory (hard) line break.
    pub const HARD: i32 = 100;
}

pub mod controls {
    /// RIGHT-TO-LEFT OVERRIDE
    pub const RLO: char = '\u{202E}';

    /// LEFT-TO-RIGHT OVERRIDE
    pub const LRO: char = '\u{202D}';

    /// POP DIRECTIONAL FORMATTING
    pub const PDF: char = '\u{202C}';
}

pub mod limits {
    /// Highest valid Unicode scalar value.
    pub const MAX_CODE_POINT: u32 = 0x10FFFF;

    /// Surrogate code point range (never valid as a scalar value).
    pub const SURROGATE_START: u32 = 0xD800;
    pub const SURROGATE_END: u32 = 0xDFFF;
}
