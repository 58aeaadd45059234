//! The `AuthorizationNegotiator` state machine.

use bgl_core::{
    AuthorizationStatus, AuthorizationTier, LocationError, LocationResult, RequestId, RequestIds,
};
use bgl_platform::LocationPlatform;

/// Observable negotiator state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NegotiationState {
    Unrequested,
    /// Waiting for the answer to a when-in-use prompt.
    PendingWhenInUse,
    /// Waiting for the answer to an always prompt.
    PendingAlways,
    Granted(AuthorizationTier),
    Denied(LocationError),
}

/// The completion of one `request`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationOutcome {
    /// The request this outcome completes.
    pub request: RequestId,
    /// The tier that was asked for.
    pub tier:    AuthorizationTier,
    pub result:  LocationResult<AuthorizationTier>,
}

/// What `request` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestProgress {
    /// The current status already answered the request.
    Completed(AuthorizationOutcome),
    /// A prompt was issued; the outcome will come from
    /// [`AuthorizationNegotiator::on_authorization_changed`].
    Pending(RequestId),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Stage {
    AwaitingWhenInUse,
    AwaitingAlways,
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    id:     RequestId,
    target: AuthorizationTier,
    stage:  Stage,
}

/// Requests and confirms a target [`AuthorizationTier`].
#[derive(Debug)]
pub struct AuthorizationNegotiator {
    ids:     RequestIds,
    pending: Option<Pending>,
    state:   NegotiationState,
}

impl Default for AuthorizationNegotiator {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthorizationNegotiator {
    pub fn new() -> Self {
        Self {
            ids:     RequestIds::new(),
            pending: None,
            state:   NegotiationState::Unrequested,
        }
    }

    pub fn state(&self) -> &NegotiationState {
        &self.state
    }

    /// Id of the request still waiting for an answer, if any.
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending.map(|p| p.id)
    }

    /// Ask for `tier`.
    ///
    /// Replaces any pending request; the replaced request is never completed.
    pub fn request<P: LocationPlatform + ?Sized>(
        &mut self,
        platform: &mut P,
        tier:     AuthorizationTier,
    ) -> RequestProgress {
        let id = self.ids.issue();
        if let Some(prev) = self.pending.take() {
            tracing::debug!(superseded = %prev.id, request = %id, "authorization request replaced");
        }

        let status = platform.authorization_status();
        if status.satisfies(tier) {
            return RequestProgress::Completed(self.finish(id, tier, Ok(tier)));
        }
        if status.is_refused() {
            // The platform never prompts again once refused.
            return RequestProgress::Completed(
                self.finish(id, tier, Err(LocationError::AuthorizationDenied)),
            );
        }

        let stage = match (tier, status) {
            (AuthorizationTier::Always, AuthorizationStatus::WhenInUse) => {
                platform.request_authorization(AuthorizationTier::Always);
                self.state = NegotiationState::PendingAlways;
                Stage::AwaitingAlways
            }
            _ => {
                platform.request_authorization(AuthorizationTier::WhenInUse);
                self.state = NegotiationState::PendingWhenInUse;
                Stage::AwaitingWhenInUse
            }
        };
        tracing::debug!(request = %id, %tier, ?status, "authorization prompt issued");
        self.pending = Some(Pending { id, target: tier, stage });
        RequestProgress::Pending(id)
    }

    /// Feed an authorization-change callback.
    ///
    /// Returns the outcome of the pending request when this status settles
    /// it, or `None` when there is no pending request or the negotiation is
    /// still in progress (an escalation prompt was just issued, or the
    /// platform re-announced `NotDetermined`).
    pub fn on_authorization_changed<P: LocationPlatform + ?Sized>(
        &mut self,
        platform: &mut P,
        status:   AuthorizationStatus,
    ) -> Option<AuthorizationOutcome> {
        let Some(mut pending) = self.pending else {
            tracing::debug!(?status, "authorization change with no pending request");
            return None;
        };

        if status.satisfies(pending.target) {
            return Some(self.finish(pending.id, pending.target, Ok(pending.target)));
        }

        match (status, pending.target, pending.stage) {
            // Announced when the delegate attaches; the prompt is still up.
            (AuthorizationStatus::NotDetermined, _, _) => None,

            (AuthorizationStatus::WhenInUse, AuthorizationTier::Always, Stage::AwaitingWhenInUse) => {
                platform.request_authorization(AuthorizationTier::Always);
                pending.stage = Stage::AwaitingAlways;
                self.pending = Some(pending);
                self.state = NegotiationState::PendingAlways;
                tracing::debug!(request = %pending.id, "escalating to always");
                None
            }

            (_, AuthorizationTier::Always, _) => Some(self.finish(
                pending.id,
                pending.target,
                Err(LocationError::AuthorizationEscalationRefused),
            )),

            (_, AuthorizationTier::WhenInUse, _) => Some(self.finish(
                pending.id,
                pending.target,
                Err(LocationError::AuthorizationDenied),
            )),
        }
    }

    fn finish(
        &mut self,
        id:     RequestId,
        tier:   AuthorizationTier,
        result: LocationResult<AuthorizationTier>,
    ) -> AuthorizationOutcome {
        self.pending = None;
        self.state = match &result {
            Ok(granted) => NegotiationState::Granted(*granted),
            Err(e)      => NegotiationState::Denied(e.clone()),
        };
        match &result {
            Ok(_)  => tracing::info!(request = %id, %tier, "authorization granted"),
            Err(e) => tracing::info!(request = %id, %tier, error = %e, "authorization not granted"),
        }
        AuthorizationOutcome { request: id, tier, result }
    }
}
