//! Unit tests for bgl-core primitives.

#[cfg(test)]
mod geo {
    use crate::Coordinate;

    #[test]
    fn zero_distance_projection_is_identity() {
        let p = Coordinate::new(30.694, -88.043);
        let q = p.destination(1.3, 0.0);
        assert!((p.lat - q.lat).abs() < 1e-12);
        assert!((p.lon - q.lon).abs() < 1e-12);
    }

    #[test]
    fn north_projection_moves_latitude_only() {
        // 636.62 m north of (1.2, 2.10): Δlat = d / R in degrees ≈ 0.005724°.
        let c = Coordinate::new(1.2, 2.10);
        let d = 100.0 * 20.0 / std::f64::consts::PI;
        let p = c.destination(0.0, d);
        let expected_dlat = (d / crate::EARTH_RADIUS_M).to_degrees();
        assert!((p.lat - (1.2 + expected_dlat)).abs() < 1e-9, "got {p}");
        assert!((p.lon - 2.10).abs() < 1e-9, "got {p}");
        assert!((expected_dlat - 0.00573).abs() < 1e-5);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Coordinate::new(30.0, -88.0);
        let b = Coordinate::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_226.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn bearing_to_east() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 0.01);
        let bearing = a.bearing_to(b);
        assert!((bearing - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(Coordinate::new(45.0, 7.0).validate().is_ok());
        assert!(Coordinate::new(90.5, 7.0).validate().is_err());
        assert!(Coordinate::new(10.0, -180.1).validate().is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn same_position_is_exact() {
        let a = Coordinate::new(1.0, 2.0);
        assert!(a.same_position(Coordinate::new(1.0, 2.0)));
        assert!(!a.same_position(Coordinate::new(1.0, 2.0 + 1e-12)));
    }

    #[test]
    fn display() {
        assert_eq!(Coordinate::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod geo_properties {
    use proptest::prelude::*;

    use crate::Coordinate;

    proptest! {
        #[test]
        fn projected_point_is_at_requested_distance(
            lat in -80.0f64..80.0,
            lon in -179.0f64..179.0,
            bearing in 0.0f64..std::f64::consts::TAU,
            distance in 1.0f64..20_000.0,
        ) {
            let origin = Coordinate::new(lat, lon);
            let p = origin.destination(bearing, distance);
            let measured = origin.distance_m(p);
            prop_assert!((measured - distance).abs() < 1e-3, "{measured} vs {distance}");
        }
    }
}

#[cfg(test)]
mod fix {
    use crate::{Coordinate, Fix, Heading, Timestamp};

    fn at(ms: i64, lat: f64) -> Fix {
        Fix::new(Coordinate::new(lat, 0.0), Timestamp(ms))
    }

    #[test]
    fn freshest_picks_latest_timestamp() {
        let batch = [at(10, 1.0), at(30, 3.0), at(20, 2.0)];
        assert_eq!(Fix::freshest(&batch).unwrap().coordinate.lat, 3.0);
    }

    #[test]
    fn freshest_tie_goes_to_last_examined() {
        let batch = [at(30, 1.0), at(30, 2.0), at(10, 3.0)];
        assert_eq!(Fix::freshest(&batch).unwrap().coordinate.lat, 2.0);
    }

    #[test]
    fn freshest_of_empty_is_none() {
        assert!(Fix::freshest(&[]).is_none());
    }

    #[test]
    fn with_heading_keeps_position() {
        let heading = Heading { true_deg: 90.0, accuracy_deg: 5.0, timestamp: Timestamp(1) };
        let fix = at(5, 1.0).with_heading(Some(heading));
        assert_eq!(fix.heading, Some(heading));
        assert_eq!(fix.timestamp, Timestamp(5));
    }
}

#[cfg(test)]
mod region {
    use crate::{Coordinate, GeofenceRegion, RegionConfig, region_identifier};

    #[test]
    fn default_config() {
        let cfg = RegionConfig::default();
        assert_eq!(cfg.region_radius_m, 100.0);
        assert_eq!(cfg.ring_size, 20);
        assert!((cfg.ring_distance_m() - 636.6197723675814).abs() < 1e-9);
    }

    #[test]
    fn member_bearings_are_evenly_spaced() {
        let cfg = RegionConfig::new(50.0, 4);
        assert_eq!(cfg.member_bearing(0), 0.0);
        assert!((cfg.member_bearing(1) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((cfg.member_bearing(2) - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_degenerate_configs() {
        assert!(RegionConfig::new(100.0, 0).validate().is_err());
        assert!(RegionConfig::new(0.0, 20).validate().is_err());
        assert!(RegionConfig::new(f64::INFINITY, 20).validate().is_err());
        assert!(RegionConfig::new(100.0, 20).validate().is_ok());
    }

    #[test]
    fn identifiers_are_indexed() {
        assert_eq!(region_identifier("bgloc", 3), "bgloc.regionIdentifier.3");
    }

    #[test]
    fn contains() {
        let r = GeofenceRegion::new("r", Coordinate::new(0.0, 0.0), 100.0);
        assert!(r.contains(Coordinate::new(0.0005, 0.0)));  // ~56 m
        assert!(!r.contains(Coordinate::new(0.002, 0.0)));  // ~222 m
    }
}

#[cfg(test)]
mod auth {
    use crate::{AuthorizationStatus, AuthorizationTier};

    #[test]
    fn always_satisfies_both_tiers() {
        assert!(AuthorizationStatus::Always.satisfies(AuthorizationTier::Always));
        assert!(AuthorizationStatus::Always.satisfies(AuthorizationTier::WhenInUse));
    }

    #[test]
    fn when_in_use_satisfies_only_itself() {
        assert!(AuthorizationStatus::WhenInUse.satisfies(AuthorizationTier::WhenInUse));
        assert!(!AuthorizationStatus::WhenInUse.satisfies(AuthorizationTier::Always));
    }

    #[test]
    fn unauthorized_statuses_satisfy_nothing() {
        for status in [
            AuthorizationStatus::NotDetermined,
            AuthorizationStatus::Denied,
            AuthorizationStatus::Restricted,
        ] {
            assert!(!status.satisfies(AuthorizationTier::WhenInUse));
        }
        assert!(AuthorizationStatus::Denied.is_refused());
        assert!(!AuthorizationStatus::NotDetermined.is_refused());
    }
}

#[cfg(test)]
mod ids {
    use crate::{RequestId, RequestIds, Timestamp};

    #[test]
    fn request_ids_are_monotonic() {
        let mut ids = RequestIds::new();
        let a = ids.issue();
        let b = ids.issue();
        assert_eq!(a, RequestId(1));
        assert!(b > a);
        assert_eq!(b.to_string(), "#2");
    }

    #[test]
    fn timestamp_arithmetic() {
        let t = Timestamp::from_unix_secs(10);
        assert_eq!(t.unix_millis(), 10_000);
        assert_eq!(t.offset_millis(250).since(t), 250);
        assert_eq!(t.offset_millis(250).to_string(), "10.250");
    }
}
