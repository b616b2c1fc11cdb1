//! Breakpoint tables and the linear scaling between them.
//!
//! Floating-point concentrations make poor range keys: a reading like 12.0
//! can come out as 12.000000001 and fall into a hole between two rows.
//! Table bounds are therefore stored as integers, pre-multiplied by
//! `10^places`, and each input is scaled and truncated the same way before
//! it is compared.

/// One row of a conversion table: a concentration range and the AQI range it maps to.
///
/// `lo` and `hi` are inclusive and scaled by the owning [Pollutant]'s `places`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    pub lo: i64,
    pub hi: i64,
    pub aqi_lo: i32,
    pub aqi_hi: i32,
    /// Descriptive category, e.g. "Moderate".
    pub name: &'static str,
}

impl Breakpoint {
    pub const fn new(lo: i64, hi: i64, aqi_lo: i32, aqi_hi: i32, name: &'static str) -> Self {
        Breakpoint {
            lo,
            hi,
            aqi_lo,
            aqi_hi,
            name,
        }
    }

    /// Returns true iff the scaled concentration is within this row, inclusive of both ends.
    pub fn contains(&self, scaled: i64) -> bool {
        (self.lo..=self.hi).contains(&scaled)
    }

    /// Linearly scale a concentration within this row to its AQI value.
    ///
    /// `in_scale` is the table's `10^places`; it is applied to the slope and
    /// divided back out, so only the unscaled ratio remains.
    fn interpolate(&self, scaled: i64, in_scale: f64) -> i32 {
        if self.hi == self.lo {
            return self.aqi_lo;
        }
        // Spans are taken in f64: the bounds may cover the whole i64 range.
        let scale = in_scale * (f64::from(self.aqi_hi) - f64::from(self.aqi_lo))
            / (self.hi as f64 - self.lo as f64);
        let value = scale * (scaled as f64 - self.lo as f64) / in_scale;
        (f64::from(self.aqi_lo) + value).round() as i32
    }
}

/// The breakpoint table for a single pollutant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pollutant {
    /// Rows in ascending order of concentration.
    pub breakpoints: &'static [Breakpoint],
    /// Decimal places represented in the table: bounds are the concentration * 10^places.
    pub places: i32,
}

impl Pollutant {
    /// Factor applied to a concentration before comparing it to the table.
    fn in_scale(&self) -> f64 {
        10f64.powi(self.places)
    }

    /// Convert a concentration, in the pollutant's native units, to an AQI value.
    ///
    /// Returns the value and the name of the category it falls into,
    /// or None if the concentration is outside every row of the table.
    pub fn aqi(&self, concentration: f64) -> Option<(i32, &'static str)> {
        if !concentration.is_finite() {
            return None;
        }
        let in_scale = self.in_scale();
        // Truncates toward zero.
        let scaled = (concentration * in_scale) as i64;
        self.breakpoints
            .iter()
            .find(|bp| bp.contains(scaled))
            .map(|bp| (bp.interpolate(scaled, in_scale), bp.name))
    }

    /// Lowest and highest concentration covered by the table, in native units.
    pub fn range(&self) -> Option<(f64, f64)> {
        let first = self.breakpoints.first()?;
        let last = self.breakpoints.last()?;
        let in_scale = self.in_scale();
        Some((first.lo as f64 / in_scale, last.hi as f64 / in_scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TENTHS: Pollutant = Pollutant {
        breakpoints: &[
            Breakpoint::new(0, 100, 0, 50, "Low"),
            Breakpoint::new(101, 200, 51, 100, "High"),
            Breakpoint::new(250, 250, 150, 150, "Spike"),
        ],
        places: 1,
    };

    #[test]
    fn truncates_before_compare() {
        // 10.05 * 10 = 100.5, which truncates into the first row
        // rather than the gap between 100 and 101.
        assert_eq!(TENTHS.aqi(10.05), Some((50, "Low")));
        assert_eq!(TENTHS.aqi(10.1), Some((51, "High")));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 1.0 -> 10 of 100: 5.0 exactly; 0.1 -> 0.5, rounds up.
        assert_eq!(TENTHS.aqi(1.0), Some((5, "Low")));
        assert_eq!(TENTHS.aqi(0.1), Some((1, "Low")));
    }

    #[test]
    fn degenerate_row() {
        assert_eq!(TENTHS.aqi(25.0), Some((150, "Spike")));
    }

    #[test]
    fn outside_table() {
        assert_eq!(TENTHS.aqi(-1.0), None);
        assert_eq!(TENTHS.aqi(20.1), None);
        assert_eq!(TENTHS.aqi(22.0), None);
        assert_eq!(TENTHS.aqi(f64::NAN), None);
        assert_eq!(TENTHS.aqi(f64::INFINITY), None);
    }

    #[test]
    fn full_width_row() {
        const WIDE: Pollutant = Pollutant {
            breakpoints: &[Breakpoint::new(i64::MIN, i64::MAX, 0, 500, "All")],
            places: 0,
        };
        assert_eq!(WIDE.aqi(1.0), Some((250, "All")));
        assert_eq!(WIDE.aqi(-1e300), Some((0, "All")));
        assert_eq!(WIDE.aqi(1e300), Some((500, "All")));

        const WIDE_INDEX: Pollutant = Pollutant {
            breakpoints: &[Breakpoint::new(0, 10, i32::MIN, i32::MAX, "All")],
            places: 0,
        };
        assert_eq!(WIDE_INDEX.aqi(0.0), Some((i32::MIN, "All")));
        assert_eq!(WIDE_INDEX.aqi(10.0), Some((i32::MAX, "All")));
    }

    #[test]
    fn negative_fraction_truncates_to_zero() {
        assert_eq!(TENTHS.aqi(-0.05), Some((0, "Low")));
    }

    #[test]
    fn range() {
        assert_eq!(TENTHS.range(), Some((0.0, 25.0)));
        let empty = Pollutant {
            breakpoints: &[],
            places: 0,
        };
        assert_eq!(empty.range(), None);
        assert_eq!(empty.aqi(1.0), None);
    }
}
