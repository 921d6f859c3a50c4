//! Severity-to-color encoding.
//!
//! The darker the color, the more alarming the situation. Hue carries the
//! deaths share: blue (240) for all-confirmed, red (360) for all-deaths.
//! Lightness falls with the log of the deaths-amplified magnitude.

use std::collections::BTreeMap;
use std::fmt;

use epimap_model::{CaseMap, CountryCode};

/// Neutral fill for countries with nothing to show.
pub const DEFAULT_FILL: &str = "#EEEEEE";

/// Hue of a pure-confirmed color.
const CONFIRMED_HUE: u16 = 240;
/// Hue distance between pure-confirmed and pure-deaths.
const HUE_SPAN: f64 = 120.0;
/// Saturation is constant.
const SATURATION: u8 = 100;
/// Log-scale factor for the severity weight.
const WEIGHT_SCALE: f64 = 7.0;
/// One death weighs as much as twenty confirmed cases.
const DEATH_WEIGHT: u64 = 20;
/// Palest lightness; also the weight ceiling, so lightness bottoms out at 0.
const MAX_LIGHTNESS: i64 = 95;

/// An HSL color in the encoder's output space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslColor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}, {})", self.hue, self.saturation, self.lightness)
    }
}

/// Current color per country, always re-derivable from its counts.
pub type ColorAssignment = BTreeMap<CountryCode, HslColor>;

/// Encodes (confirmed, deaths) magnitudes as a perceptual color.
///
/// Hue interpolates linearly with the deaths share of the total, truncated
/// to an integer. Lightness is `95 - weight` where
/// `weight = floor(7 * ln(confirmed + 20 * deaths))` clamped to `[0, 95]`,
/// and 0 when both counts are 0. Growing severity only ever darkens the
/// color, saturating once the weight reaches 95.
pub fn encode(confirmed: u64, deaths: u64) -> HslColor {
    let total = confirmed.saturating_add(deaths).max(1);
    let hue = CONFIRMED_HUE + (HUE_SPAN * deaths as f64 / total as f64) as u16;

    let severity = confirmed.saturating_add(deaths.saturating_mul(DEATH_WEIGHT));
    let weight = if severity == 0 {
        0
    } else {
        ((WEIGHT_SCALE * (severity as f64).ln()).floor() as i64).clamp(0, MAX_LIGHTNESS)
    };

    HslColor {
        hue,
        saturation: SATURATION,
        lightness: (MAX_LIGHTNESS - weight) as u8,
    }
}

/// Derives the static color map for the current-snapshot view.
pub fn assign_colors(cases: &CaseMap) -> ColorAssignment {
    cases
        .iter()
        .map(|(code, record)| (code.clone(), encode(record.confirmed, record.deaths)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_are_palest_blue() {
        let color = encode(0, 0);
        assert_eq!(
            color,
            HslColor {
                hue: 240,
                saturation: 100,
                lightness: 95
            }
        );
    }

    #[test]
    fn all_deaths_is_full_red() {
        assert_eq!(encode(0, 10).hue, 360);
    }

    #[test]
    fn weight_saturates_at_zero_lightness() {
        let color = encode(1_000_000_000, 1_000_000_000);
        assert_eq!(color.lightness, 0);
    }
}
