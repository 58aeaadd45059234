//! `commute` — a pedestrian walking east through downtown Atlanta, tracked
//! by a `BackgroundTracker` over a simulated platform.
//!
//! The `RecordingPlatform` plays the OS: every step the demo drains the
//! commands the tracker issued, answers authorization prompts with a grant
//! and one-shot fix requests with the walker's position, then moves the
//! walker and reports any ring member it has just walked into.  Delivered
//! fixes and ring placements are printed to stdout as JSON lines; logs go to
//! stderr.
//!
//! Run with:
//!   cargo run -p commute
//!   cargo run -p commute -- tracker.json          # TrackerConfig as JSON
//!   RUST_LOG=debug cargo run -p commute

use std::collections::BTreeSet;
use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use bgl_cache::{JsonFileStore, KeyValueRegionCache};
use bgl_core::{AuthorizationStatus, Coordinate, Fix, LocationResult};
use bgl_platform::{LocationPlatform, LocationSource, PlatformCommand, PlatformEvent, RecordingPlatform};
use bgl_tracker::{BackgroundTracker, EventReceiver, EventSender, Ring, TrackerConfig, event_channel};

// ── Constants ─────────────────────────────────────────────────────────────────

const STEPS:        usize = 160;
const STEP_M:       f64   = 25.0;
/// Simulated time per step (a brisk 1.25 m/s walk).
const STEP_MILLIS:  i64   = 20_000;
/// Emit a significant-change wake every N steps.
const COARSE_EVERY: usize = 40;
const BEARING_RAD:  f64   = FRAC_PI_2;

type Tracker = BackgroundTracker<RecordingPlatform, KeyValueRegionCache<JsonFileStore>>;

// ── Listeners ─────────────────────────────────────────────────────────────────

fn print_update(update: LocationResult<Fix>) {
    let line = match update {
        Ok(fix) => json!({
            "event":        "fix",
            "lat":          fix.coordinate.lat,
            "lon":          fix.coordinate.lon,
            "timestamp_ms": fix.timestamp.unix_millis(),
        }),
        Err(e) => json!({ "event": "error", "error": e.to_string() }),
    };
    println!("{line}");
}

fn print_ring(ring: &Ring) {
    println!(
        "{}",
        json!({
            "event":   "ring",
            "center":  [ring.center.lat, ring.center.lon],
            "members": ring.len(),
        })
    );
}

// ── Simulated OS ──────────────────────────────────────────────────────────────

struct Walker {
    position: Coordinate,
    /// Monitored regions the walker is currently inside.
    inside:   BTreeSet<String>,
}

impl Walker {
    fn new(position: Coordinate) -> Self {
        Self { position, inside: BTreeSet::new() }
    }

    /// Move one step and report newly entered regions.
    fn step(&mut self, platform: &mut RecordingPlatform, tx: &EventSender) {
        platform.advance_millis(STEP_MILLIS);
        self.position = self.position.destination(BEARING_RAD, STEP_M);

        let now_inside: BTreeSet<String> = platform
            .monitored()
            .values()
            .filter(|r| r.contains(self.position))
            .map(|r| r.identifier.clone())
            .collect();
        for identifier in now_inside.difference(&self.inside) {
            tx.send(PlatformEvent::RegionEntered { identifier: identifier.clone() });
        }
        self.inside = now_inside;
    }
}

/// Answer pending commands and apply the resulting events until the tracker
/// stops issuing new ones.
fn settle(tracker: &mut Tracker, tx: &EventSender, rx: &EventReceiver, position: Coordinate) {
    loop {
        let commands = tracker.platform_mut().take_commands();
        if commands.is_empty() {
            return;
        }
        for command in commands {
            match command {
                PlatformCommand::RequestAuthorization(tier) => {
                    let status = AuthorizationStatus::from(tier);
                    tracker.platform_mut().set_status(status);
                    tx.send(PlatformEvent::AuthorizationChanged(status));
                }
                PlatformCommand::RequestOneFix => {
                    let now = tracker.platform().now();
                    tx.send(PlatformEvent::Locations {
                        source: LocationSource::Precise,
                        fixes:  vec![Fix::new(position, now)],
                    });
                }
                _ => {}
            }
        }
        rx.pump(tracker);
    }
}

fn load_config(path: Option<PathBuf>) -> Result<TrackerConfig> {
    let Some(path) = path else {
        return Ok(TrackerConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(std::env::args().nth(1).map(PathBuf::from))?;
    let cache_path = std::env::temp_dir().join(format!("{}-regions.json", config.namespace));
    let mut tracker = Tracker::with_json_cache(RecordingPlatform::default(), &cache_path, config)
        .with_context(|| format!("opening region cache {}", cache_path.display()))?;
    tracker.on_ring_changed(print_ring);
    tracing::info!(cache = %cache_path.display(), steps = STEPS, "commute starting");

    tracker.start_background(print_update);

    let (tx, rx) = event_channel();
    let mut walker = Walker::new(Coordinate::new(33.7490, -84.3880));

    for step in 1..=STEPS {
        settle(&mut tracker, &tx, &rx, walker.position);
        walker.step(tracker.platform_mut(), &tx);
        if step % COARSE_EVERY == 0 {
            let coarse = Fix::new(walker.position, tracker.platform().now());
            tx.send(PlatformEvent::Locations {
                source: LocationSource::SignificantChange,
                fixes:  vec![coarse],
            });
        }
        rx.pump(&mut tracker);
    }
    settle(&mut tracker, &tx, &rx, walker.position);

    let ring_center = tracker.ring().map(|r| r.center);
    tracker.stop();
    tracing::info!(
        end = %walker.position,
        ring_center = ?ring_center,
        "commute finished"
    );
    Ok(())
}
