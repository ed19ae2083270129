//! UI symbols (chevrons, markers, etc.)
//!
//! Icon labels are icon-font identifiers. The terminal has no icon font, so
//! known identifiers are mapped to a single glyph here.

use crate::model::{CHEVRON_LEFT, CHEVRON_RIGHT};

/// Chevron glyphs
pub mod chevrons {
    /// Drawn for `chevron_left` (‹)
    pub const LEFT: &str = "‹";
    /// Drawn for `chevron_right` (›)
    pub const RIGHT: &str = "›";
}

/// Nav entry bullet (•)
pub const NAV_BULLET: char = '•';

/// Glyph for an icon label. Unknown identifiers are drawn as-is.
pub fn glyph_for(label: &str) -> &str {
    match label {
        CHEVRON_LEFT => chevrons::LEFT,
        CHEVRON_RIGHT => chevrons::RIGHT,
        other => other,
    }
}
