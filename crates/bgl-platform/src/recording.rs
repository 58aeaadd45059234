//! An in-memory [`LocationPlatform`] that records every command.
//!
//! Used by the test suites of every engine crate and by the commute demo,
//! which plays the OS role by reading the recorded commands and answering
//! them with events.

use std::collections::{BTreeMap, BTreeSet};

use bgl_core::{AuthorizationStatus, AuthorizationTier, GeofenceRegion, Timestamp};

use crate::{BackgroundToken, LocationPlatform};

/// One command issued to the platform, in call order.
#[derive(Clone, Debug, PartialEq)]
pub enum PlatformCommand {
    RequestAuthorization(AuthorizationTier),
    StartUpdates { heading: bool },
    StopUpdates,
    RequestOneFix,
    StartSignificantChanges,
    MonitorRegion(GeofenceRegion),
    StopMonitoringRegion(String),
    BeginBackground { name: String, token: BackgroundToken },
    EndBackground(BackgroundToken),
}

/// Fake platform state.
///
/// Authorization prompts are recorded but never answered; the driver
/// decides the answer by delivering `PlatformEvent::AuthorizationChanged`
/// (and usually calling [`set_status`](Self::set_status) to match).
#[derive(Debug)]
pub struct RecordingPlatform {
    status:         AuthorizationStatus,
    now:            Timestamp,
    commands:       Vec<PlatformCommand>,
    monitored:      BTreeMap<String, GeofenceRegion>,
    peak_monitored: usize,
    updating:       bool,
    heading:        bool,
    significant:    bool,
    next_token:     u64,
    open_tokens:    BTreeSet<BackgroundToken>,
}

impl Default for RecordingPlatform {
    fn default() -> Self {
        Self::new(AuthorizationStatus::NotDetermined)
    }
}

impl RecordingPlatform {
    pub fn new(status: AuthorizationStatus) -> Self {
        Self {
            status,
            now:            Timestamp::EPOCH,
            commands:       Vec::new(),
            monitored:      BTreeMap::new(),
            peak_monitored: 0,
            updating:       false,
            heading:        false,
            significant:    false,
            next_token:     0,
            open_tokens:    BTreeSet::new(),
        }
    }

    // ── Driver controls ───────────────────────────────────────────────────

    pub fn set_status(&mut self, status: AuthorizationStatus) {
        self.status = status;
    }

    pub fn set_now(&mut self, now: Timestamp) {
        self.now = now;
    }

    pub fn advance_millis(&mut self, millis: i64) {
        self.now = self.now.offset_millis(millis);
    }

    /// Drain the recorded commands.
    pub fn take_commands(&mut self) -> Vec<PlatformCommand> {
        std::mem::take(&mut self.commands)
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn commands(&self) -> &[PlatformCommand] {
        &self.commands
    }

    /// Number of recorded commands equal to `command`.
    pub fn count(&self, command: &PlatformCommand) -> usize {
        self.commands.iter().filter(|c| *c == command).count()
    }

    pub fn monitored(&self) -> &BTreeMap<String, GeofenceRegion> {
        &self.monitored
    }

    /// The largest number of simultaneously monitored regions ever observed.
    pub fn peak_monitored(&self) -> usize {
        self.peak_monitored
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    pub fn is_heading_enabled(&self) -> bool {
        self.heading
    }

    pub fn significant_changes_active(&self) -> bool {
        self.significant
    }

    pub fn open_tokens(&self) -> &BTreeSet<BackgroundToken> {
        &self.open_tokens
    }
}

impl LocationPlatform for RecordingPlatform {
    fn authorization_status(&self) -> AuthorizationStatus {
        self.status
    }

    fn request_authorization(&mut self, tier: AuthorizationTier) {
        self.commands.push(PlatformCommand::RequestAuthorization(tier));
    }

    fn start_updates(&mut self, heading: bool) {
        self.updating = true;
        self.heading = heading;
        self.commands.push(PlatformCommand::StartUpdates { heading });
    }

    fn stop_updates(&mut self) {
        self.updating = false;
        self.heading = false;
        self.commands.push(PlatformCommand::StopUpdates);
    }

    fn request_one_fix(&mut self) {
        self.commands.push(PlatformCommand::RequestOneFix);
    }

    fn start_significant_changes(&mut self) {
        self.significant = true;
        self.commands.push(PlatformCommand::StartSignificantChanges);
    }

    fn monitor_region(&mut self, region: &GeofenceRegion) {
        self.monitored.insert(region.identifier.clone(), region.clone());
        self.peak_monitored = self.peak_monitored.max(self.monitored.len());
        self.commands.push(PlatformCommand::MonitorRegion(region.clone()));
    }

    fn stop_monitoring_region(&mut self, identifier: &str) {
        self.monitored.remove(identifier);
        self.commands.push(PlatformCommand::StopMonitoringRegion(identifier.to_owned()));
    }

    fn monitored_regions(&self) -> Vec<String> {
        self.monitored.keys().cloned().collect()
    }

    fn begin_background_execution(&mut self, name: &str) -> BackgroundToken {
        self.next_token += 1;
        let token = BackgroundToken(self.next_token);
        self.open_tokens.insert(token);
        self.commands.push(PlatformCommand::BeginBackground { name: name.to_owned(), token });
        token
    }

    fn end_background_execution(&mut self, token: BackgroundToken) {
        self.open_tokens.remove(&token);
        self.commands.push(PlatformCommand::EndBackground(token));
    }

    fn now(&self) -> Timestamp {
        self.now
    }
}
