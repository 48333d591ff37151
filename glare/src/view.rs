//! View points
//!
//! A view point pairs an observer position with a gaze direction. The glare
//! workflow reads them as 6-column rows and hands them to the renderer twice:
//! as a 180° fisheye view definition for luminance maps and as a sensor row
//! for vertical illuminance at the eye.

use crate::error::{self, Error};
use optics::Float;
use std::str::FromStr;

/// Observer position and gaze direction for one glare evaluation point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewPoint {
    /// Eye position.
    pub position: [Float; 3],

    /// Gaze direction.
    pub direction: [Float; 3],
}

impl ViewPoint {
    /// Create a new `ViewPoint`.
    ///
    /// * `position`  - Eye position.
    /// * `direction` - Gaze direction.
    pub fn new(position: [Float; 3], direction: [Float; 3]) -> Self {
        Self {
            position,
            direction,
        }
    }

    /// Returns the `rview` view-file line for this point: a 180° angular
    /// fisheye centered on the gaze direction, up vector +Z.
    pub fn view_line(&self) -> String {
        let [tx, ty, tz] = self.position;
        let [rx, ry, rz] = self.direction;
        format!(
            "rview -vta -vp {tx:.3} {ty:.3} {tz:.3} -vd {rx:.3} {ry:.3} {rz:.3} \
             -vv 180 -vh 180 -vs 0 -vl 0 -vu 0 0 1"
        )
    }

    /// Returns the sensor-point row for this point, as read by `rtrace -I`.
    pub fn sensor_line(&self) -> String {
        let [tx, ty, tz] = self.position;
        let [rx, ry, rz] = self.direction;
        format!("{tx:.3} {ty:.3} {tz:.3} {rx:.3} {ry:.3} {rz:.3}")
    }
}

impl FromStr for ViewPoint {
    type Err = Error;

    /// Parses a 6-column view point row: position then direction.
    ///
    /// * `row` - The input row.
    fn from_str(row: &str) -> Result<Self, Error> {
        let cols = error::columns(row, 6)?;
        let mut v = [0.0; 6];
        for (i, col) in cols.into_iter().enumerate() {
            v[i] = error::column(col, i + 1)?;
        }
        Ok(Self::new([v[0], v[1], v[2]], [v[3], v[4], v[5]]))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
