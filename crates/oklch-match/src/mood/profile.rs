use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Chroma and lightness a mood pushes a color towards.
///
/// Values are applied as-is to OKLCH; chroma above the sRGB gamut is fine
/// because the result is snapped to the nearest catalog shade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodTarget {
    pub chroma: f64,
    pub lightness: f64,
}

impl MoodTarget {
    /// Neutral target for mood names outside the archetype set.
    pub const FALLBACK: Self = Self::new(0.20, 0.55);

    pub const fn new(chroma: f64, lightness: f64) -> Self {
        Self { chroma, lightness }
    }

    /// Target for a mood by name (case-insensitive), else [`Self::FALLBACK`].
    pub fn for_name(name: &str) -> Self {
        name.parse::<MoodProfile>()
            .map_or(Self::FALLBACK, MoodProfile::target)
    }
}

/// Brand archetypes, each tied to one fixed [`MoodTarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodProfile {
    Caregiver,
    Creator,
    Ruler,
    Innocent,
    Explorer,
    Sage,
    Hero,
    Outlaw,
    Magician,
    Everyman,
    Lover,
    Jester,
}

impl MoodProfile {
    /// Every archetype, in presentation order.
    pub const ALL: [MoodProfile; 12] = [
        MoodProfile::Caregiver,
        MoodProfile::Creator,
        MoodProfile::Ruler,
        MoodProfile::Innocent,
        MoodProfile::Explorer,
        MoodProfile::Sage,
        MoodProfile::Hero,
        MoodProfile::Outlaw,
        MoodProfile::Magician,
        MoodProfile::Everyman,
        MoodProfile::Lover,
        MoodProfile::Jester,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MoodProfile::Caregiver => "caregiver",
            MoodProfile::Creator => "creator",
            MoodProfile::Ruler => "ruler",
            MoodProfile::Innocent => "innocent",
            MoodProfile::Explorer => "explorer",
            MoodProfile::Sage => "sage",
            MoodProfile::Hero => "hero",
            MoodProfile::Outlaw => "outlaw",
            MoodProfile::Magician => "magician",
            MoodProfile::Everyman => "everyman",
            MoodProfile::Lover => "lover",
            MoodProfile::Jester => "jester",
        }
    }

    pub fn target(self) -> MoodTarget {
        match self {
            // Soft and light
            MoodProfile::Caregiver => MoodTarget::new(0.30, 0.90),
            MoodProfile::Innocent => MoodTarget::new(0.25, 0.97),
            MoodProfile::Sage => MoodTarget::new(0.45, 0.85),
            MoodProfile::Everyman => MoodTarget::new(0.35, 0.92),
            // Saturated mid-tones
            MoodProfile::Creator => MoodTarget::new(0.95, 0.40),
            MoodProfile::Explorer => MoodTarget::new(0.85, 0.60),
            MoodProfile::Hero => MoodTarget::new(1.00, 0.30),
            MoodProfile::Lover => MoodTarget::new(1.05, 0.38),
            MoodProfile::Jester => MoodTarget::new(1.15, 0.80),
            // Deep
            MoodProfile::Ruler => MoodTarget::new(0.80, 0.25),
            MoodProfile::Outlaw => MoodTarget::new(1.10, 0.18),
            MoodProfile::Magician => MoodTarget::new(0.90, 0.22),
        }
    }
}

impl fmt::Display for MoodProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoodProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodProfile::ALL
            .into_iter()
            .find(|mood| mood.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown mood: {s}"))
    }
}
