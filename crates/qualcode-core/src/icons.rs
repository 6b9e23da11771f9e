//! # Icons
//!
//! The view names icons semantically; a [`Glyphs`] implementation decides how
//! each one is drawn.

use serde::{Deserialize, Serialize};

/// Semantic icon names used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    /// Expanded stage header.
    ChevronDown,
    /// Collapsed stage header.
    ChevronRight,
    /// Worked example heading.
    Lightbulb,
    /// "Key Questions".
    Search,
    /// "The Work".
    Layers,
    /// "What It Is".
    Target,
    /// "Common Pitfall".
    Warning,
}

/// Maps semantic icons to drawable text.
///
/// Implementors must be stateless.
pub trait Glyphs: Send + Sync {
    /// Get the glyph for an icon.
    fn glyph(&self, icon: Icon) -> &'static str;
}

/// Unicode glyphs for terminals with a full font.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeGlyphs;

impl Glyphs for UnicodeGlyphs {
    fn glyph(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::ChevronDown => "▾",
            Icon::ChevronRight => "▸",
            Icon::Lightbulb => "💡",
            Icon::Search => "🔍",
            Icon::Layers => "◫",
            Icon::Target => "◎",
            Icon::Warning => "⚠",
        }
    }
}

/// Seven-bit glyphs for plain terminals and logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiGlyphs;

impl Glyphs for AsciiGlyphs {
    fn glyph(&self, icon: Icon) -> &'static str {
        match icon {
            Icon::ChevronDown => "v",
            Icon::ChevronRight => ">",
            Icon::Lightbulb => "*",
            Icon::Search => "?",
            Icon::Layers => "=",
            Icon::Target => "o",
            Icon::Warning => "!",
        }
    }
}
