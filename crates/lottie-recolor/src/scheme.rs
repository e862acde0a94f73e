use crate::color::Rgb;
use crate::error::{RecolorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Abstract palette slot a source color is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Primary,
    Secondary,
    Accent,
    Gradient1,
    Gradient2,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Primary,
        Role::Secondary,
        Role::Accent,
        Role::Gradient1,
        Role::Gradient2,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Accent => "accent",
            Role::Gradient1 => "gradient1",
            Role::Gradient2 => "gradient2",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RecolorError::UnknownRole {
                name: s.to_string(),
            })
    }
}

/// A named palette. Every color is validated when the scheme is built or
/// deserialized, so a scheme in hand always resolves every role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub gradient1: Rgb,
    /// Falls back to `gradient1` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient2: Option<Rgb>,
}

impl ColorScheme {
    pub fn from_hex(
        name: impl Into<String>,
        primary: &str,
        secondary: &str,
        accent: &str,
        gradient1: &str,
        gradient2: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            primary: primary.parse()?,
            secondary: secondary.parse()?,
            accent: accent.parse()?,
            gradient1: gradient1.parse()?,
            gradient2: gradient2.map(Rgb::from_hex).transpose()?,
        })
    }

    pub fn role(&self, role: Role) -> Rgb {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Accent => self.accent,
            Role::Gradient1 => self.gradient1,
            Role::Gradient2 => self.gradient2.unwrap_or(self.gradient1),
        }
    }
}

/// The three built-in wellbeing palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeKind {
    Thriving,
    Moderate,
    Burnout,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 3] = [
        SchemeKind::Thriving,
        SchemeKind::Moderate,
        SchemeKind::Burnout,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchemeKind::Thriving => "thriving",
            SchemeKind::Moderate => "moderate",
            SchemeKind::Burnout => "burnout",
        }
    }

    /// Picks a palette from a burnout percentage. Input is clamped to
    /// `[0, 100]`; NaN reads as no burnout.
    pub fn from_burnout(percent: f64, thresholds: &Thresholds) -> SchemeKind {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        if percent < thresholds.moderate {
            SchemeKind::Thriving
        } else if percent < thresholds.burnout {
            SchemeKind::Moderate
        } else {
            SchemeKind::Burnout
        }
    }

    pub fn scheme(self) -> ColorScheme {
        let (primary, secondary, accent, gradient1, gradient2) = match self {
            SchemeKind::Thriving => (
                Rgb::new(0x34, 0xC7, 0x59),
                Rgb::new(0x32, 0xD7, 0x4B),
                Rgb::new(0xA3, 0xF7, 0xB5),
                Rgb::new(0x30, 0xD1, 0x58),
                Rgb::new(0x66, 0xD4, 0xCF),
            ),
            SchemeKind::Moderate => (
                Rgb::new(0xFF, 0x9F, 0x0A),
                Rgb::new(0xFF, 0xB3, 0x40),
                Rgb::new(0xFF, 0xD6, 0x0A),
                Rgb::new(0xFF, 0x95, 0x00),
                Rgb::new(0xFF, 0xCC, 0x00),
            ),
            SchemeKind::Burnout => (
                Rgb::new(0xFF, 0x45, 0x3A),
                Rgb::new(0xFF, 0x69, 0x61),
                Rgb::new(0xFF, 0x9F, 0x0A),
                Rgb::new(0xFF, 0x3B, 0x30),
                Rgb::new(0xD7, 0x00, 0x15),
            ),
        };
        ColorScheme {
            name: self.name().to_string(),
            primary,
            secondary,
            accent,
            gradient1,
            gradient2: Some(gradient2),
        }
    }
}

impl FromStr for SchemeKind {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self> {
        SchemeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RecolorError::UnknownScheme {
                name: s.to_string(),
            })
    }
}

pub fn builtin_schemes() -> Vec<ColorScheme> {
    SchemeKind::ALL.into_iter().map(SchemeKind::scheme).collect()
}

/// Burnout percentages at which the palette turns moderate, then burnout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub moderate: f64,
    pub burnout: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            moderate: 33.0,
            burnout: 66.0,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<()> {
        if self.moderate.is_nan() || self.burnout.is_nan() || self.moderate > self.burnout {
            return Err(RecolorError::InvalidThresholds {
                moderate: self.moderate,
                burnout: self.burnout,
            });
        }
        Ok(())
    }
}
