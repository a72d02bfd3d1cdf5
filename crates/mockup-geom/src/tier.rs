// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::wire::WireName;

/// Discrete scale bucket applied uniformly to every scalable quantity.
///
/// Parsing is case-insensitive and total: anything that is not one of
/// `xs`, `sm`, `md`, `lg`, `xl` resolves to [`SizeTier::Md`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(from = "WireName", into = "&'static str")]
pub enum SizeTier {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Medium; the identity tier.
    #[default]
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl SizeTier {
    /// Every tier, smallest first.
    pub const ALL: [Self; 5] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl];

    /// Lowercase wire name (`"xs"` .. `"xl"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Multiplier bound to this tier in [`CANONICAL_MULTIPLIERS`].
    pub const fn multiplier(self) -> f64 {
        CANONICAL_MULTIPLIERS.multiplier(self)
    }

    /// Case-insensitive lookup; unknown names fall back to [`SizeTier::Md`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "xs" => Self::Xs,
            "sm" => Self::Sm,
            "lg" => Self::Lg,
            "xl" => Self::Xl,
            _ => Self::Md,
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeTier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<WireName> for SizeTier {
    fn from(value: WireName) -> Self {
        value.as_deref().map_or_else(Self::default, Self::from_name)
    }
}

impl From<String> for SizeTier {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<SizeTier> for &'static str {
    fn from(value: SizeTier) -> Self {
        value.as_str()
    }
}

/// Scalar multiplier for each [`SizeTier`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MultiplierTable {
    /// Multiplier for [`SizeTier::Xs`].
    pub xs: f64,
    /// Multiplier for [`SizeTier::Sm`].
    pub sm: f64,
    /// Multiplier for [`SizeTier::Md`].
    pub md: f64,
    /// Multiplier for [`SizeTier::Lg`].
    pub lg: f64,
    /// Multiplier for [`SizeTier::Xl`].
    pub xl: f64,
}

impl MultiplierTable {
    /// Multiplier bound to `tier`.
    pub const fn multiplier(&self, tier: SizeTier) -> f64 {
        match tier {
            SizeTier::Xs => self.xs,
            SizeTier::Sm => self.sm,
            SizeTier::Md => self.md,
            SizeTier::Lg => self.lg,
            SizeTier::Xl => self.xl,
        }
    }

    /// `(tier, multiplier)` pairs, smallest tier first.
    pub fn entries(&self) -> [(SizeTier, f64); 5] {
        SizeTier::ALL.map(|tier| (tier, self.multiplier(tier)))
    }
}

/// The only multiplier table. Device chrome and every app scale through it.
///
/// An older device variant shipped `lg = 3.25, xl = 5.5`; that table is not
/// supported.
pub const CANONICAL_MULTIPLIERS: MultiplierTable = MultiplierTable {
    xs: 0.5,
    sm: 0.75,
    md: 1.0,
    lg: 1.75,
    xl: 3.0,
};

/// Scales `value` by the canonical multiplier for `tier`.
pub fn scale(value: f64, tier: SizeTier) -> f64 {
    value * tier.multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("XL".parse::<SizeTier>(), Ok(SizeTier::Xl));
        assert_eq!(SizeTier::from_name(" sm "), SizeTier::Sm);
    }

    #[test]
    fn unknown_names_fall_back_to_md() {
        assert_eq!(SizeTier::from_name("xxl"), SizeTier::Md);
        assert_eq!(SizeTier::from_name(""), SizeTier::Md);
    }

    #[test]
    fn md_is_identity() {
        assert_eq!(scale(13.37, SizeTier::Md), 13.37);
    }

    #[test]
    fn canonical_table_values() {
        let got: Vec<f64> = CANONICAL_MULTIPLIERS
            .entries()
            .iter()
            .map(|(_, m)| *m)
            .collect();
        assert_eq!(got, vec![0.5, 0.75, 1.0, 1.75, 3.0]);
    }

    #[test]
    fn serde_uses_lowercase_names_and_falls_back() {
        let json = serde_json::to_string(&SizeTier::Lg).unwrap();
        assert_eq!(json, "\"lg\"");
        let tier: SizeTier = serde_json::from_str("\"LG\"").unwrap();
        assert_eq!(tier, SizeTier::Lg);
        let tier: SizeTier = serde_json::from_str("\"huge\"").unwrap();
        assert_eq!(tier, SizeTier::Md);
    }
}
