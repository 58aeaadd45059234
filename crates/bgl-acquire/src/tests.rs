//! Unit tests for bgl-acquire.

use bgl_core::{AuthorizationStatus, Coordinate, Fix, Heading, LocationError, Timestamp};
use bgl_platform::{LocationSource, PlatformCommand, PlatformEvent, RecordingPlatform};

use crate::{AcquisitionMode, LocationAcquirer};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn platform() -> RecordingPlatform {
    RecordingPlatform::new(AuthorizationStatus::Always)
}

fn fix(ms: i64, lat: f64, lon: f64) -> Fix {
    Fix::new(Coordinate::new(lat, lon), Timestamp(ms))
}

fn precise(fixes: Vec<Fix>) -> PlatformEvent {
    PlatformEvent::Locations { source: LocationSource::Precise, fixes }
}

fn coarse(fixes: Vec<Fix>) -> PlatformEvent {
    PlatformEvent::Locations { source: LocationSource::SignificantChange, fixes }
}

fn heading(deg: f64) -> Heading {
    Heading { true_deg: deg, accuracy_deg: 3.0, timestamp: Timestamp(0) }
}

#[cfg(test)]
mod one_shot {
    use super::*;

    #[test]
    fn subscribes_significant_changes_once() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.request_one_shot(&mut p);
        a.request_one_shot(&mut p);
        assert_eq!(p.count(&PlatformCommand::StartSignificantChanges), 1);
        assert_eq!(p.count(&PlatformCommand::RequestOneFix), 2);
        assert_eq!(
            p.commands()[..2],
            [PlatformCommand::StartSignificantChanges, PlatformCommand::RequestOneFix]
        );
    }

    #[test]
    fn forwards_freshest_fix_of_batch() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        let id = a.request_one_shot(&mut p);
        let acq = a
            .handle_event(&mut p, &precise(vec![fix(5, 1.0, 1.0), fix(9, 2.0, 2.0), fix(7, 3.0, 3.0)]))
            .unwrap();
        assert_eq!(acq.request, id);
        assert_eq!(acq.mode, AcquisitionMode::OneShot);
        assert_eq!(acq.result.unwrap().coordinate, Coordinate::new(2.0, 2.0));
    }

    #[test]
    fn coarse_fix_rearms_instead_of_forwarding() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.request_one_shot(&mut p);
        p.take_commands();

        assert!(a.handle_event(&mut p, &coarse(vec![fix(1, 5.0, 5.0)])).is_none());
        assert_eq!(p.take_commands(), vec![PlatformCommand::RequestOneFix]);
    }

    #[test]
    fn empty_batch_is_ignored() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.request_one_shot(&mut p);
        assert!(a.handle_event(&mut p, &precise(vec![])).is_none());
    }

    #[test]
    fn precise_failure_is_forwarded() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.request_one_shot(&mut p);
        let acq = a
            .handle_event(
                &mut p,
                &PlatformEvent::LocationFailed { source: LocationSource::Precise, reason: "denied".into() },
            )
            .unwrap();
        assert_eq!(acq.result, Err(LocationError::LocationUnavailable("denied".into())));
    }

    #[test]
    fn coarse_failure_is_swallowed() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.request_one_shot(&mut p);
        let ev = PlatformEvent::LocationFailed {
            source: LocationSource::SignificantChange,
            reason: "x".into(),
        };
        assert!(a.handle_event(&mut p, &ev).is_none());
    }

    #[test]
    fn latest_subscriber_gets_the_fix() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        let first = a.request_one_shot(&mut p);
        let second = a.request_one_shot(&mut p);
        let acq = a.handle_event(&mut p, &precise(vec![fix(1, 1.0, 1.0)])).unwrap();
        assert_ne!(acq.request, first);
        assert_eq!(acq.request, second);
    }
}

#[cfg(test)]
mod continuous {
    use super::*;

    #[test]
    fn starts_updates_with_heading() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.start_continuous(&mut p, true);
        assert_eq!(p.commands(), [PlatformCommand::StartUpdates { heading: true }]);
        assert!(!a.significant_changes_started());
    }

    #[test]
    fn every_batch_is_forwarded() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.start_continuous(&mut p, false);
        assert!(a.handle_event(&mut p, &precise(vec![fix(1, 1.0, 1.0)])).is_some());
        assert!(a.handle_event(&mut p, &precise(vec![fix(2, 1.0, 1.0)])).is_some());
    }

    #[test]
    fn heading_update_reforwards_last_fix() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.start_continuous(&mut p, true);
        assert!(a.handle_event(&mut p, &PlatformEvent::Heading(heading(10.0))).is_none(), "no fix yet");

        a.handle_event(&mut p, &precise(vec![fix(1, 1.0, 1.0)])).unwrap();
        let acq = a.handle_event(&mut p, &PlatformEvent::Heading(heading(45.0))).unwrap();
        let f = acq.result.unwrap();
        assert_eq!(f.coordinate, Coordinate::new(1.0, 1.0));
        assert_eq!(f.heading.unwrap().true_deg, 45.0);
    }

    #[test]
    fn forwarded_fix_carries_latest_heading() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.start_continuous(&mut p, false);
        assert!(a.handle_event(&mut p, &PlatformEvent::Heading(heading(90.0))).is_none());
        let f = a.handle_event(&mut p, &precise(vec![fix(1, 1.0, 1.0)])).unwrap().result.unwrap();
        assert_eq!(f.heading.unwrap().true_deg, 90.0);
    }

    #[test]
    fn coarse_fix_does_not_rearm_continuous() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.start_continuous(&mut p, false);
        p.take_commands();
        assert!(a.handle_event(&mut p, &coarse(vec![fix(1, 1.0, 1.0)])).is_none());
        assert!(p.commands().is_empty());
    }
}

#[cfg(test)]
mod stop {
    use super::*;

    #[test]
    fn stop_keeps_significant_changes_running() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.request_one_shot(&mut p);
        a.start_continuous(&mut p, true);
        a.stop(&mut p);
        assert!(!p.is_updating());
        assert!(!p.is_heading_enabled());
        assert!(p.significant_changes_active());
        assert_eq!(a.active_request(), None);
    }

    #[test]
    fn fixes_after_stop_are_dropped() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.start_continuous(&mut p, false);
        a.stop(&mut p);
        assert!(a.handle_event(&mut p, &precise(vec![fix(1, 1.0, 1.0)])).is_none());
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let mut p = platform();
        let mut a = LocationAcquirer::new();
        a.request_one_shot(&mut p);
        let ev = PlatformEvent::RegionEntered { identifier: "r".into() };
        assert!(a.handle_event(&mut p, &ev).is_none());
    }
}
