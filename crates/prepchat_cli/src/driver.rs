//! Session driver: owns the history and the one-in-flight call policy.

use prepchat_core::Session;
use prepchat_llms::{
    build_request, interpret, Error, GuardrailConfig, ModelOutcome, Provider, STUDY_COACH_SYSTEM,
};
use tracing::{debug, warn};

/// Submit one user turn: append it, build the request, call the model (with
/// one transparent fallback to the direct path if the guardrail configuration
/// is rejected), interpret, and append the assistant reply.
///
/// Every path yields a displayable outcome; the session is back to idle when
/// this returns. The await on the provider call is the only suspension point,
/// so a session never has two calls in flight.
pub async fn submit_turn(
    session: &mut Session,
    provider: &dyn Provider,
    guardrail: Option<&GuardrailConfig>,
    text: &str,
) -> ModelOutcome {
    session.push_user(text);

    let request = build_request(
        STUDY_COACH_SYSTEM,
        &session.history,
        session.attachment.as_ref(),
        text,
    );
    debug!(turns = request.turns.len(), "submitting user turn");

    let result = match provider.generate(&request, guardrail).await {
        Err(Error::GuardrailUnavailable(msg)) if guardrail.is_some() => {
            warn!(reason = %msg, "guardrail unavailable, retrying without it");
            provider.generate(&request, None).await
        }
        other => other,
    };

    let outcome = interpret(result);
    session.push_assistant(outcome.display_text());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use prepchat_core::Role;
    use prepchat_llms::{
        ApiTurn, ModelRequest, ProviderResponse, ResponseContent, Result as LlmResult,
        GUARDRAIL_REDIRECT,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn text_response(text: &str) -> ProviderResponse {
        ProviderResponse {
            stop_reason: Some("end_turn".to_string()),
            content: vec![ResponseContent::Text {
                text: text.to_string(),
            }],
        }
    }

    /// Replies with a fixed answer; rejects the guardrail path when told to.
    struct ScriptedProvider {
        reply: &'static str,
        reject_guardrail: bool,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                reject_guardrail: false,
                calls: AtomicUsize::new(0),
            }
        }

        fn rejecting_guardrail(reply: &'static str) -> Self {
            Self {
                reject_guardrail: true,
                ..Self::new(reply)
            }
        }
    }

    #[async_trait]
    impl Provider for ScriptedProvider {
        fn provider_id(&self) -> &str {
            "scripted"
        }

        async fn generate(
            &self,
            _request: &ModelRequest,
            guardrail: Option<&GuardrailConfig>,
        ) -> LlmResult<ProviderResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.reject_guardrail && guardrail.is_some() {
                return Err(Error::GuardrailUnavailable("not configured".to_string()));
            }
            Ok(text_response(self.reply))
        }
    }

    /// Captures the request so tests can assert on the normalized turns.
    struct CapturingProvider {
        seen: std::sync::Mutex<Vec<ModelRequest>>,
    }

    #[async_trait]
    impl Provider for CapturingProvider {
        fn provider_id(&self) -> &str {
            "capturing"
        }

        async fn generate(
            &self,
            request: &ModelRequest,
            _guardrail: Option<&GuardrailConfig>,
        ) -> LlmResult<ProviderResponse> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(text_response("ok"))
        }
    }

    #[tokio::test]
    async fn test_turn_appends_user_and_assistant() {
        let provider = ScriptedProvider::new("EC2 is compute.");
        let mut session = Session::new();

        let outcome = submit_turn(&mut session, &provider, None, "what is EC2?").await;

        assert_eq!(outcome.display_text(), "EC2 is compute.");
        assert_eq!(session.history.len(), 2);
        assert_eq!(session.history[0].role, Role::User);
        assert_eq!(session.history[1].role, Role::Assistant);
        assert_eq!(session.history[1].content, "EC2 is compute.");
    }

    #[tokio::test]
    async fn test_guardrail_fallback_retries_once() {
        let provider = ScriptedProvider::rejecting_guardrail("answer");
        let guardrail = GuardrailConfig::new("gr-123", "DRAFT");
        let mut session = Session::new();

        let outcome = submit_turn(&mut session, &provider, Some(&guardrail), "q").await;

        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
        assert_eq!(outcome.display_text(), "answer");
    }

    #[tokio::test]
    async fn test_no_fallback_on_direct_path() {
        let provider = ScriptedProvider::rejecting_guardrail("answer");
        let mut session = Session::new();

        submit_turn(&mut session, &provider, None, "q").await;
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transport_error_becomes_assistant_reply() {
        struct FailingProvider;

        #[async_trait]
        impl Provider for FailingProvider {
            fn provider_id(&self) -> &str {
                "failing"
            }

            async fn generate(
                &self,
                _request: &ModelRequest,
                _guardrail: Option<&GuardrailConfig>,
            ) -> LlmResult<ProviderResponse> {
                Err(Error::Api {
                    status: 503,
                    message: "throttled".to_string(),
                })
            }
        }

        let mut session = Session::new();
        let outcome = submit_turn(&mut session, &FailingProvider, None, "q").await;

        assert!(matches!(outcome, ModelOutcome::TransportError { .. }));
        // Session keeps going: the error text is the assistant's turn.
        assert_eq!(session.history.len(), 2);
        assert!(session.history[1].content.contains("throttled"));
    }

    #[tokio::test]
    async fn test_filtered_outcome_recorded_as_redirect() {
        struct FilteringProvider;

        #[async_trait]
        impl Provider for FilteringProvider {
            fn provider_id(&self) -> &str {
                "filtering"
            }

            async fn generate(
                &self,
                _request: &ModelRequest,
                _guardrail: Option<&GuardrailConfig>,
            ) -> LlmResult<ProviderResponse> {
                Ok(ProviderResponse {
                    stop_reason: Some("guardrail_intervened".to_string()),
                    content: vec![],
                })
            }
        }

        let mut session = Session::new();
        submit_turn(&mut session, &FilteringProvider, None, "off topic").await;
        assert_eq!(session.history[1].content, GUARDRAIL_REDIRECT);
    }

    #[tokio::test]
    async fn test_requests_stay_alternating_across_turns() {
        let provider = CapturingProvider {
            seen: std::sync::Mutex::new(Vec::new()),
        };
        let mut session = Session::new();

        submit_turn(&mut session, &provider, None, "q1").await;
        submit_turn(&mut session, &provider, None, "q2").await;
        submit_turn(&mut session, &provider, None, "q3").await;

        let seen = provider.seen.lock().unwrap();
        for request in seen.iter() {
            let turns: &[ApiTurn] = &request.turns;
            for pair in turns.windows(2) {
                assert_ne!(pair[0].role, pair[1].role);
            }
            assert_eq!(turns.last().unwrap().role, Role::User);
        }
        assert_eq!(seen.last().unwrap().turns.len(), 5);
    }
}
