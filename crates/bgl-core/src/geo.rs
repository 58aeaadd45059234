//! Geographic coordinate type and great-circle projection.
//!
//! `Coordinate` uses `f64` latitude/longitude.  Ring members sit a few
//! hundred metres from their center and are compared for exact equality by
//! the movement gate, so single precision is not an option here.

use crate::{CoreError, CoreResult};

/// Mean Earth radius used by every projection in the engine, in metres.
pub const EARTH_RADIUS_M: f64 = 6_372_797.6;

/// A WGS-84 geographic coordinate in degrees.
///
/// The range invariant (`-90 ≤ lat ≤ 90`, `-180 ≤ lon ≤ 180`) is not enforced
/// on construction; callers that receive coordinates from outside should run
/// [`Coordinate::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check the WGS-84 range invariant and reject NaN/infinite components.
    pub fn validate(self) -> CoreResult<Self> {
        let ok = self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon);
        if ok {
            Ok(self)
        } else {
            Err(CoreError::InvalidCoordinate { lat: self.lat, lon: self.lon })
        }
    }

    /// Project a point `distance_m` metres away along `bearing_rad` (radians,
    /// clockwise from true north) on a sphere of radius [`EARTH_RADIUS_M`].
    ///
    /// Pure and deterministic.  The returned longitude is not wrapped back
    /// into `[-180, 180]`; ring distances are far too small for that to
    /// matter anywhere except on the antimeridian itself.
    pub fn destination(self, bearing_rad: f64, distance_m: f64) -> Coordinate {
        let dist_rad = distance_m / EARTH_RADIUS_M;

        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();

        let lat2 = (lat1.sin() * dist_rad.cos()
            + lat1.cos() * dist_rad.sin() * bearing_rad.cos())
        .asin();
        let lon2 = lon1
            + (bearing_rad.sin() * dist_rad.sin() * lat1.cos())
                .atan2(dist_rad.cos() - lat1.sin() * lat2.sin());

        Coordinate::new(lat2.to_degrees(), lon2.to_degrees())
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial great-circle bearing from `self` to `other`, in radians
    /// normalised to `[0, 2π)`.
    pub fn bearing_to(self, other: Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        y.atan2(x).rem_euclid(std::f64::consts::TAU)
    }

    /// Exact component-wise equality.  This is the "did the user move" test
    /// used when no displacement threshold is configured.
    #[inline]
    pub fn same_position(self, other: Coordinate) -> bool {
        self.lat == other.lat && self.lon == other.lon
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
