use log::info;
use route_agent_shared::submission::{Completion, Submission};

use crate::route_api::RouteApi;

/// Sends one started submission and wraps the answer with its generation. Exactly one request is
/// made, with no retry.
pub async fn run_submission<A: RouteApi + ?Sized>(api: &A, submission: Submission) -> Completion {
    let outcome = api.compute_route(&submission.query).await;

    if let Err(err) = &outcome {
        info!("Route request #{} failed: {}", submission.generation, err);
    }

    Completion {
        generation: submission.generation,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use route_agent_shared::queries::{HealthStatus, RouteResult};
    use route_agent_shared::submission::{CompletionOutcome, FormState, SubmitOutcome};
    use route_agent_shared::RouteError;

    use super::run_submission;
    use crate::route_api::RouteApi;

    /// Records every query and answers with a canned outcome.
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        answer: Result<RouteResult, RouteError>,
    }

    impl FakeApi {
        fn new(answer: Result<RouteResult, RouteError>) -> Self {
            FakeApi {
                calls: RefCell::new(Vec::new()),
                answer,
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl RouteApi for FakeApi {
        async fn compute_route(&self, query: &str) -> Result<RouteResult, RouteError> {
            self.calls.borrow_mut().push(query.to_string());
            self.answer.clone()
        }

        async fn health(&self) -> Result<HealthStatus, RouteError> {
            Err(RouteError::Unexpected)
        }
    }

    fn lima_route() -> RouteResult {
        RouteResult {
            origin: "Lima Centro".to_string(),
            optimized_order: vec![
                "Lima Centro".to_string(),
                "San Isidro".to_string(),
                "Miraflores".to_string(),
                "Barranco".to_string(),
            ],
            total_distance_km: 12.34,
            estimated_time_min: 120,
            steps: vec![],
            google_maps_url: Some("https://maps.example/route".to_string()),
        }
    }

    #[tokio::test]
    async fn test_one_request_per_submission() {
        let api = FakeApi::new(Ok(lima_route()));
        let mut form = FormState::new();

        let SubmitOutcome::Started(submission) = form.submit("  Lima Centro a Barranco ") else {
            panic!("submission should start");
        };
        let completion = run_submission(&api, submission).await;

        assert_eq!(*api.calls.borrow(), vec!["Lima Centro a Barranco".to_string()]);
        assert_eq!(form.complete(completion), CompletionOutcome::Rendered);

        let view = form.results().unwrap();
        assert_eq!(view.total_distance, "12.3");
        assert_eq!(view.total_time, "2h");
        assert_eq!(view.destination_count, 3);
        assert_eq!(view.map_url.as_deref(), Some("https://maps.example/route"));
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_blank_input_never_calls_backend() {
        let api = FakeApi::new(Ok(lima_route()));
        let mut form = FormState::new();

        if let SubmitOutcome::Started(submission) = form.submit("   ") {
            run_submission(&api, submission).await;
        }

        assert!(api.calls.borrow().is_empty());
        assert!(form.error().is_some());
    }

    #[tokio::test]
    async fn test_backend_failure_reaches_banner() {
        let api = FakeApi::new(Err(RouteError::backend(
            400,
            Some("No se encontró la dirección".to_string()),
        )));
        let mut form = FormState::new();

        let SubmitOutcome::Started(submission) = form.submit("Calle inexistente 999") else {
            panic!("submission should start");
        };
        let completion = run_submission(&api, submission).await;

        assert!(matches!(form.complete(completion), CompletionOutcome::Failed(_)));
        assert_eq!(form.error().unwrap().message, "No se encontró la dirección");
        assert!(form.results().is_none());
        assert!(!form.is_loading());
    }
}
