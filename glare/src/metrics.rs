//! Annual glare metrics

use crate::error::{self, Error};
use optics::Float;
use std::fmt;
use std::str::FromStr;

/// Daylight Glare Probability thresholds for the annual exceedance metrics:
/// above 0.35 glare is perceptible, above 0.40 disturbing, above 0.45
/// intolerable.
pub const DGP_THRESHOLDS: [Float; 3] = [0.35, 0.40, 0.45];

/// Hours of the year represented by one sample of the one-day-per-week,
/// half-year evaluation schedule (1304 samples in total).
const HOURS_PER_SAMPLE: Float = 5.43;

/// Number of samples in the annual evaluation schedule.
const SAMPLES_PER_YEAR: Float = 1304.0;

/// One row of the per-instant glare output: evaluation instant, the DGP the
/// external `evalglare` produced for it, and the vertical illuminance at the
/// eye.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DgpRecord {
    /// Month, 1-12.
    pub month: u32,

    /// Day of month.
    pub day: u32,

    /// Hour of day; fractional hours are allowed.
    pub hour: Float,

    /// Daylight Glare Probability.
    pub dgp: Float,

    /// Vertical illuminance at the eye, in lux.
    pub illuminance: Float,
}

impl fmt::Display for DgpRecord {
    /// Formats the record as the space-separated output row, byte-identical
    /// to the workflow's `dgp_<n>.out` files: floats keep their shortest
    /// round-trip form with a `.0` on whole numbers, and the row ends with a
    /// space before the caller's newline. Downstream file comparisons are
    /// byte-exact, so the quirks are part of the format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:?} {:?} {:?} ",
            self.month, self.day, self.hour, self.dgp, self.illuminance
        )
    }
}

impl FromStr for DgpRecord {
    type Err = Error;

    /// Parses a 5-column output row: month, day, hour, DGP, illuminance.
    ///
    /// * `row` - The input row.
    fn from_str(row: &str) -> Result<Self, Error> {
        let cols = error::columns(row, 5)?;
        Ok(Self {
            month: error::column(cols[0], 1)?,
            day: error::column(cols[1], 2)?,
            hour: error::column(cols[2], 3)?,
            dgp: error::column(cols[3], 4)?,
            illuminance: error::column(cols[4], 5)?,
        })
    }
}

/// Returns the fractions of the sampled year in which DGP exceeds each of
/// `DGP_THRESHOLDS`, with every sample weighted as `5.43 / 1304` of the year.
///
/// * `dgp` - DGP values, one per evaluated instant.
pub fn exceedance_fractions(dgp: &[Float]) -> [Float; 3] {
    let mut counts = [0_u32; 3];
    for &value in dgp {
        for (count, threshold) in counts.iter_mut().zip(DGP_THRESHOLDS) {
            if value > threshold {
                *count += 1;
            }
        }
    }
    counts.map(|count| count as Float * HOURS_PER_SAMPLE / SAMPLES_PER_YEAR)
}

/// Returns the annual exceedance fractions over parsed output records.
///
/// * `records` - Per-instant glare records.
pub fn annual_exceedance(records: &[DgpRecord]) -> [Float; 3] {
    let dgp: Vec<Float> = records.iter().map(|r| r.dgp).collect();
    exceedance_fractions(&dgp)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;

    #[test]
    fn exceedance_counts_each_threshold_independently() {
        let dgp = [0.30, 0.36, 0.41, 0.46];
        let [f35, f40, f45] = exceedance_fractions(&dgp);
        assert!(approx_eq!(Float, f35, 3.0 * 5.43 / 1304.0, ulps = 2));
        assert!(approx_eq!(Float, f40, 2.0 * 5.43 / 1304.0, ulps = 2));
        assert!(approx_eq!(Float, f45, 1.0 * 5.43 / 1304.0, ulps = 2));
    }

    #[test]
    fn exceedance_is_zero_when_all_samples_are_below_the_thresholds() {
        assert_eq!(exceedance_fractions(&[0.1, 0.2, 0.35]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn record_row_round_trips() {
        let record = DgpRecord {
            month: 5,
            day: 10,
            hour: 10.5,
            dgp: 0.42,
            illuminance: 2450.0,
        };
        let row = record.to_string();
        assert_eq!(row, "5 10 10.5 0.42 2450.0 ");
        assert_eq!(row.parse::<DgpRecord>().unwrap(), record);
    }

    #[test]
    fn rejects_malformed_rows() {
        assert_eq!(
            "5 10 10.5 0.42".parse::<DgpRecord>().unwrap_err(),
            Error::ColumnCount {
                expected: 5,
                got: 4
            }
        );
        assert_eq!(
            "5 x 10.5 0.42 2450".parse::<DgpRecord>().unwrap_err(),
            Error::InvalidNumber {
                column: 2,
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn annual_exceedance_uses_the_dgp_column() {
        let records: Vec<DgpRecord> = ["6 1 12 0.50 3000", "6 1 13 0.20 800"]
            .iter()
            .map(|row| row.parse().unwrap())
            .collect();
        let [f35, f40, f45] = annual_exceedance(&records);
        assert!(approx_eq!(Float, f35, 5.43 / 1304.0, ulps = 2));
        assert_eq!(f35, f40);
        assert_eq!(f40, f45);
    }
}
