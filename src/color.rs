//! Temperature Colors
//!
//! Maps a temperature onto a blue-to-red gradient.

use std::fmt;

use serde::Deserialize;

/// Clamp bounds for color derivation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TempScale {
    /// At or below: pure blue
    pub cold: i32,
    /// At or above: pure red
    pub hot: i32,
}

impl Default for TempScale {
    fn default() -> Self {
        Self { cold: 20, hot: 80 }
    }
}

impl TempScale {
    /// Position of `temp` within the scale, clamped to `0.0..=1.0`
    pub fn ratio(&self, temp: i32) -> f64 {
        let clamped = temp.clamp(self.cold, self.hot) as f64;
        (clamped - self.cold as f64) / (self.hot as f64 - self.cold as f64)
    }

    pub fn color_for(&self, temp: i32) -> Rgb {
        let ratio = self.ratio(temp);
        Rgb {
            r: (ratio * 255.0).round() as u8,
            g: 0,
            b: ((1.0 - ratio) * 255.0).round() as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CSS `rgb()` notation
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_is_purple() {
        let scale = TempScale::default();
        assert_eq!(scale.ratio(50), 0.5);
        assert_eq!(scale.color_for(50).to_string(), "rgb(128, 0, 128)");
    }

    #[test]
    fn test_endpoints() {
        let scale = TempScale::default();
        assert_eq!(scale.color_for(20), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(scale.color_for(80), Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_clamps_outside_scale() {
        let scale = TempScale::default();
        assert_eq!(scale.color_for(-40), scale.color_for(20));
        assert_eq!(scale.color_for(0), scale.color_for(20));
        assert_eq!(scale.color_for(99), scale.color_for(80));
        assert_eq!(scale.color_for(1_000), scale.color_for(80));
    }

    #[test]
    fn test_monotonic_between_bounds() {
        let scale = TempScale::default();
        for a in 20..80 {
            let lo = scale.color_for(a);
            let hi = scale.color_for(a + 1);
            assert!(lo.r <= hi.r, "red decreased at {}", a);
            assert!(lo.b >= hi.b, "blue increased at {}", a);
            assert_eq!(lo.g, 0);
        }
    }

    #[test]
    fn test_idempotent() {
        let scale = TempScale::default();
        assert_eq!(scale.color_for(63), scale.color_for(63));
    }

    #[test]
    fn test_extreme_scale_does_not_overflow() {
        let scale = TempScale { cold: -2_000_000_000, hot: 2_000_000_000 };
        assert_eq!(scale.ratio(0), 0.5);
        assert_eq!(scale.ratio(i32::MIN), 0.0);
        assert_eq!(scale.ratio(i32::MAX), 1.0);
        assert_eq!(scale.color_for(0).to_string(), "rgb(128, 0, 128)");
    }

    #[test]
    fn test_custom_scale() {
        let scale = TempScale { cold: 20, hot: 99 };
        assert_eq!(scale.color_for(99).to_string(), "rgb(255, 0, 0)");
        assert_eq!(scale.color_for(20).to_string(), "rgb(0, 0, 255)");
    }
}
