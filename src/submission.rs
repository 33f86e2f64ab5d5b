//! Submission Workflow
//!
//! Single-attempt update of a maintenance record: an in-flight flag gates
//! re-submission, and every outcome folds into a banner message or a save.

use crate::commands::MaintenanceService;
use crate::form_state::MaintenancePayload;

/// Outcome of one update attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    Failed(String),
}

/// In-flight flag and error banner of one form instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitState {
    pub submitting: bool,
    pub error: Option<String>,
}

impl SubmitState {
    /// Enter the submitting state and clear the banner.
    ///
    /// Returns `false` (and changes nothing) while a request is in flight.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    /// Leave the submitting state according to `outcome`.
    ///
    /// A saved form stays disabled; the page navigates away.
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Saved => {
                self.error = None;
            }
            SubmitOutcome::Failed(message) => {
                self.error = Some(message.clone());
                self.submitting = false;
            }
        }
    }
}

/// Record `outcome` in `state`; a save then marks the listing stale and
/// returns to it.
pub fn apply_outcome(
    outcome: &SubmitOutcome,
    state: &mut SubmitState,
    listing_path: &str,
    reload: impl FnOnce(),
    navigate: impl FnOnce(&str),
) {
    state.finish(outcome);
    if *outcome == SubmitOutcome::Saved {
        reload();
        navigate(listing_path);
    }
}

/// Leave the form without saving. Refused while a save is in flight, so a
/// late success cannot navigate a second time.
pub fn cancel(state: &SubmitState, listing_path: &str, navigate: impl FnOnce(&str)) -> bool {
    if state.submitting {
        return false;
    }
    navigate(listing_path);
    true
}

/// Send `payload` to the update collaborator and classify the reply.
pub async fn submit_update<S>(service: &S, payload: &MaintenancePayload, fallback: &str) -> SubmitOutcome
where
    S: MaintenanceService + ?Sized,
{
    match service.update_record(payload).await {
        Ok(result) if result.success => {
            log::info!("[EDIT] Updated maintenance record {}", payload.id);
            SubmitOutcome::Saved
        }
        Ok(result) => {
            let message = result
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string());
            log::warn!("[EDIT] Update of record {} rejected: {}", payload.id, message);
            SubmitOutcome::Failed(message)
        }
        Err(e) => {
            log::error!("[EDIT] Update of record {} failed: {}", payload.id, e);
            SubmitOutcome::Failed(fallback.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use crate::form_state::FormState;
    use crate::models::{MaintenanceRecord, UpdateResult};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    const FALLBACK: &str = "Failed to update maintenance record";

    /// Replays a canned reply and records what it was sent
    struct FakeService {
        reply: Result<UpdateResult, CommandError>,
        calls: RefCell<Vec<MaintenancePayload>>,
    }

    impl FakeService {
        fn new(reply: Result<UpdateResult, CommandError>) -> Self {
            Self { reply, calls: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl MaintenanceService for FakeService {
        async fn update_record(&self, payload: &MaintenancePayload) -> Result<UpdateResult, CommandError> {
            self.calls.borrow_mut().push(payload.clone());
            self.reply.clone()
        }
    }

    fn payload() -> MaintenancePayload {
        let record = MaintenanceRecord {
            id: 7,
            vehicle_id: Some(3),
            service_type: Some("Oil Change".to_string()),
            description: None,
            date_performed: None,
            next_due_date: Some("2024-05-01".to_string()),
            cost: Some("45.5".to_string()),
            status: Some("completed".to_string()),
            service_provider: None,
            notes: None,
        };
        FormState::from_record(&record).to_payload()
    }

    /// Counts reloads and remembers navigation targets
    #[derive(Default)]
    struct Effects {
        reloads: Cell<u32>,
        visited: RefCell<Vec<String>>,
    }

    impl Effects {
        fn apply(&self, outcome: &SubmitOutcome, state: &mut SubmitState) {
            apply_outcome(
                outcome,
                state,
                "/maintenance",
                || self.reloads.set(self.reloads.get() + 1),
                |path| self.visited.borrow_mut().push(path.to_string()),
            );
        }
    }

    fn rejected(message: Option<&str>) -> Result<UpdateResult, CommandError> {
        Ok(UpdateResult { success: false, message: message.map(str::to_string) })
    }

    #[test]
    fn test_success_saves_once() {
        let service = FakeService::new(Ok(UpdateResult { success: true, message: None }));
        let mut state = SubmitState::default();

        assert!(state.begin());
        let outcome = block_on(submit_update(&service, &payload(), FALLBACK));
        state.finish(&outcome);

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(state.error, None);
        assert_eq!(service.calls.borrow().len(), 1);
        assert_eq!(service.calls.borrow()[0].next_due_date, "2024-05-01");
    }

    #[test]
    fn test_rejection_message_shown_verbatim() {
        let service = FakeService::new(rejected(Some("Vehicle not found")));
        let mut state = SubmitState::default();

        assert!(state.begin());
        let outcome = block_on(submit_update(&service, &payload(), FALLBACK));
        state.finish(&outcome);

        assert_eq!(state.error.as_deref(), Some("Vehicle not found"));
        assert!(!state.submitting);
    }

    #[test]
    fn test_rejection_without_message_uses_fallback() {
        for reply in [rejected(None), rejected(Some(""))] {
            let service = FakeService::new(reply);
            let outcome = block_on(submit_update(&service, &payload(), FALLBACK));
            assert_eq!(outcome, SubmitOutcome::Failed(FALLBACK.to_string()));
        }
    }

    #[test]
    fn test_transport_error_uses_fallback_and_reenables() {
        let service = FakeService::new(Err(CommandError::Invoke {
            command: "update_maintenance_record",
            message: "IPC channel closed".to_string(),
        }));
        let mut state = SubmitState::default();

        assert!(state.begin());
        let outcome = block_on(submit_update(&service, &payload(), FALLBACK));
        state.finish(&outcome);

        assert_eq!(state.error.as_deref(), Some(FALLBACK));
        assert!(!state.submitting);
    }

    #[test]
    fn test_second_begin_is_noop_while_in_flight() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        let snapshot = state.clone();
        assert!(!state.begin());
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = SubmitState::default();
        state.begin();
        state.finish(&SubmitOutcome::Failed("Vehicle not found".to_string()));

        assert!(state.begin());
        assert_eq!(state.error, None);
        assert!(state.submitting);
    }

    #[test]
    fn test_saved_outcome_reloads_and_navigates_once() {
        let service = FakeService::new(Ok(UpdateResult { success: true, message: None }));
        let effects = Effects::default();
        let mut state = SubmitState::default();

        assert!(state.begin());
        let outcome = block_on(submit_update(&service, &payload(), FALLBACK));
        effects.apply(&outcome, &mut state);

        assert_eq!(effects.reloads.get(), 1);
        assert_eq!(*effects.visited.borrow(), vec!["/maintenance".to_string()]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failed_outcome_stays_on_form() {
        let service = FakeService::new(rejected(Some("Vehicle not found")));
        let effects = Effects::default();
        let mut state = SubmitState::default();

        assert!(state.begin());
        let outcome = block_on(submit_update(&service, &payload(), FALLBACK));
        effects.apply(&outcome, &mut state);

        assert_eq!(effects.reloads.get(), 0);
        assert!(effects.visited.borrow().is_empty());
        assert_eq!(state.error.as_deref(), Some("Vehicle not found"));
        assert!(!state.submitting);
    }

    #[test]
    fn test_cancel_only_navigates() {
        let effects = Effects::default();
        let state = SubmitState::default();

        assert!(cancel(&state, "/maintenance", |path| effects.visited.borrow_mut().push(path.to_string())));
        assert_eq!(effects.reloads.get(), 0);
        assert_eq!(*effects.visited.borrow(), vec!["/maintenance".to_string()]);
        assert_eq!(state, SubmitState::default());
    }

    #[test]
    fn test_cancel_refused_while_saving() {
        let effects = Effects::default();
        let mut state = SubmitState::default();
        state.begin();

        assert!(!cancel(&state, "/maintenance", |path| effects.visited.borrow_mut().push(path.to_string())));
        assert!(effects.visited.borrow().is_empty());

        // The save still lands and navigates exactly once
        effects.apply(&SubmitOutcome::Saved, &mut state);
        assert_eq!(effects.visited.borrow().len(), 1);
    }
}
