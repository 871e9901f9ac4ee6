//! Form lifecycle: `Idle -> Loading -> Idle`, with an error banner and a results panel on the
//! side.
//!
//! Every accepted submission gets a new generation. Only the completion carrying the latest
//! generation is applied, older ones are dropped without touching the form, so overlapping
//! requests can't overwrite a newer answer.

use log::{debug, info, warn};

use crate::config::{SUBMIT_LABEL, SUBMIT_LOADING_LABEL};
use crate::error::RouteError;
use crate::queries::RouteResult;
use crate::view::RouteView;

pub type Generation = u64;
pub type NoticeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// A submission that passed validation and should be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub generation: Generation,
    pub query: String,
}

/// The backend's answer for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub generation: Generation,
    pub outcome: Result<RouteResult, RouteError>,
}

/// Message currently in the error banner. The id ties it to its own hide timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub id: NoticeId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started(Submission),
    /// Input was empty, an error notice was shown and nothing should be sent.
    Rejected(NoticeId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Rendered,
    Failed(NoticeId),
    /// A newer submission was started after this one, nothing changed.
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    phase: Phase,
    generation: Generation,
    next_notice: NoticeId,
    error: Option<ErrorNotice>,
    results: Option<RouteView>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        FormState {
            phase: Phase::Idle,
            generation: 0,
            next_notice: 0,
            error: None,
            results: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn error(&self) -> Option<&ErrorNotice> {
        self.error.as_ref()
    }

    pub fn results(&self) -> Option<&RouteView> {
        self.results.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => SUBMIT_LABEL,
            Phase::Loading => SUBMIT_LOADING_LABEL,
        }
    }

    /// Validates the raw input and, if it isn't blank, moves to `Loading`.
    pub fn submit(&mut self, raw_input: &str) -> SubmitOutcome {
        let query = raw_input.trim();
        if query.is_empty() {
            return SubmitOutcome::Rejected(self.show_error(&RouteError::Validation));
        }

        self.generation += 1;
        self.error = None;
        self.results = None;
        self.phase = Phase::Loading;

        info!(
            "Starting route request #{} ({} chars)",
            self.generation,
            query.len()
        );

        SubmitOutcome::Started(Submission {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// Applies a completion. The latest one always returns the form to `Idle`.
    pub fn complete(&mut self, completion: Completion) -> CompletionOutcome {
        if completion.generation != self.generation {
            debug!(
                "Dropping route response #{}, latest is #{}",
                completion.generation, self.generation
            );
            return CompletionOutcome::Superseded;
        }

        self.phase = Phase::Idle;

        match completion.outcome {
            Ok(result) => {
                info!(
                    "Route request #{} returned {} stops",
                    completion.generation,
                    result.optimized_order.len()
                );
                self.results = Some(RouteView::from(result));
                CompletionOutcome::Rendered
            }
            Err(err) => CompletionOutcome::Failed(self.show_error(&err)),
        }
    }

    /// Replaces whatever is in the banner. The caller schedules [`FormState::hide_error`] for
    /// the returned id.
    pub fn show_error(&mut self, err: &RouteError) -> NoticeId {
        warn!("{}", err);

        self.next_notice += 1;
        self.error = Some(ErrorNotice {
            id: self.next_notice,
            message: err.user_message(),
        });
        self.next_notice
    }

    /// Hides the banner if it still shows notice `id`. Returns whether anything was hidden.
    pub fn hide_error(&mut self, id: NoticeId) -> bool {
        match &self.error {
            Some(notice) if notice.id == id => {
                self.error = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CONNECTIVITY_FALLBACK_MESSAGE, VALIDATION_MESSAGE};

    fn result(stops: &[&str]) -> RouteResult {
        RouteResult {
            origin: stops[0].to_string(),
            optimized_order: stops.iter().map(|s| s.to_string()).collect(),
            total_distance_km: 10.0,
            estimated_time_min: 30,
            steps: vec![],
            google_maps_url: None,
        }
    }

    fn started(outcome: SubmitOutcome) -> Submission {
        match outcome {
            SubmitOutcome::Started(submission) => submission,
            other => panic!("expected a started submission, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let mut form = FormState::new();

        for input in ["", "   ", "\n\t"] {
            assert!(matches!(form.submit(input), SubmitOutcome::Rejected(_)));
        }

        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.generation(), 0);
        assert_eq!(form.error().unwrap().message, VALIDATION_MESSAGE);
    }

    #[test]
    fn test_submit_trims_and_enters_loading() {
        let mut form = FormState::new();
        form.show_error(&RouteError::Validation);

        let submission = started(form.submit("  Ruta desde Surco: Ate  "));

        assert_eq!(submission.query, "Ruta desde Surco: Ate");
        assert_eq!(submission.generation, 1);
        assert!(form.is_loading());
        assert_eq!(form.submit_label(), SUBMIT_LOADING_LABEL);
        assert!(form.error().is_none());
        assert!(form.results().is_none());
    }

    #[test]
    fn test_success_renders_and_restores_button() {
        let mut form = FormState::new();
        let submission = started(form.submit("Lima a Miraflores"));

        let outcome = form.complete(Completion {
            generation: submission.generation,
            outcome: Ok(result(&["Lima", "Miraflores"])),
        });

        assert_eq!(outcome, CompletionOutcome::Rendered);
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
        assert_eq!(form.results().unwrap().destination_count, 1);
    }

    #[test]
    fn test_failure_shows_error_and_restores_button() {
        let mut form = FormState::new();
        let submission = started(form.submit("Lima a Miraflores"));

        let outcome = form.complete(Completion {
            generation: submission.generation,
            outcome: Err(RouteError::transport("")),
        });

        assert!(matches!(outcome, CompletionOutcome::Failed(_)));
        assert!(!form.is_loading());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
        assert_eq!(form.error().unwrap().message, CONNECTIVITY_FALLBACK_MESSAGE);
        assert!(form.results().is_none());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut form = FormState::new();
        let first = started(form.submit("primera"));
        let second = started(form.submit("segunda"));

        let stale = form.complete(Completion {
            generation: first.generation,
            outcome: Ok(result(&["A", "B", "C"])),
        });
        assert_eq!(stale, CompletionOutcome::Superseded);
        assert!(form.is_loading());
        assert!(form.results().is_none());

        form.complete(Completion {
            generation: second.generation,
            outcome: Ok(result(&["X", "Y"])),
        });
        assert!(!form.is_loading());
        assert_eq!(form.results().unwrap().origin, "X");

        // A late reply from the first request still can't overwrite the second.
        let late = form.complete(Completion {
            generation: first.generation,
            outcome: Err(RouteError::backend(500, None)),
        });
        assert_eq!(late, CompletionOutcome::Superseded);
        assert!(form.error().is_none());
        assert_eq!(form.results().unwrap().origin, "X");
    }

    #[test]
    fn test_each_notice_hides_only_itself() {
        let mut form = FormState::new();
        let first = form.show_error(&RouteError::Validation);
        let second = form.show_error(&RouteError::Unexpected);

        // The first timer fires while the second error is on screen.
        assert!(!form.hide_error(first));
        assert_eq!(form.error().unwrap().id, second);

        assert!(form.hide_error(second));
        assert!(form.error().is_none());
    }

    #[test]
    fn test_dismiss_error() {
        let mut form = FormState::new();
        let id = form.show_error(&RouteError::backend(404, Some("No encontrado".to_string())));

        form.dismiss_error();

        assert!(form.error().is_none());
        assert!(!form.hide_error(id));
    }
}
