//! # Accents
//!
//! Per-stage colour accents and the named tones of the walkthrough sections.
//!
//! Accents only tell stages apart visually; they carry no state. Integer
//! arithmetic only.

use serde::{Deserialize, Serialize};

/// Hue of the first stage, in degrees.
pub const BASE_HUE: u16 = 220;

/// Hue increment per stage, in degrees.
pub const HUE_STEP: u16 = 20;

/// Saturation shared by every stage accent, in percent.
pub const SATURATION: u8 = 70;

/// Lightness of the first stage, in percent.
pub const BASE_LIGHTNESS: u8 = 60;

/// Lightness decrement per stage, in percent.
pub const LIGHTNESS_STEP: u8 = 5;

/// An HSL colour with integer components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accent {
    /// Degrees, wrapped into `0..360`.
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Accent {
    /// Accent of the stage at zero-based display position `index`.
    #[must_use]
    pub fn for_index(index: u8) -> Self {
        let hue = BASE_HUE.saturating_add(u16::from(index).saturating_mul(HUE_STEP)) % 360;
        let lightness = BASE_LIGHTNESS.saturating_sub(index.saturating_mul(LIGHTNESS_STEP));
        Self {
            hue,
            saturation: SATURATION,
            lightness,
        }
    }

    /// CSS notation, e.g. `hsl(220, 70%, 60%)`.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Named tone of a walkthrough section, from concrete (blue) to abstract
/// (fuchsia).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Indigo,
    Purple,
    Violet,
    Fuchsia,
}

impl Tone {
    /// Tones in walkthrough order.
    pub const ALL: [Tone; 5] = [
        Tone::Blue,
        Tone::Indigo,
        Tone::Purple,
        Tone::Violet,
        Tone::Fuchsia,
    ];

    /// Lower-case tone name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Blue => "blue",
            Tone::Indigo => "indigo",
            Tone::Purple => "purple",
            Tone::Violet => "violet",
            Tone::Fuchsia => "fuchsia",
        }
    }
}
