//! Assistant Service Tests
//!
//! Runs the service against a scripted in-memory provider.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::assistant::{AssistantService, INVALID_API_KEY, MISSING_API_KEY, PROMPT_REQUIRED};
    use crate::domain::{AssistantError, AssistantMode, AssistantRequest, AssistantResponse};
    use crate::provider::{CompletionProvider, CompletionRequest, ProviderError, ProviderResult, TEXT_INSTRUCTION};

    struct FakeProvider {
        reply: ProviderResult<String>,
        calls: AtomicUsize,
        last_request: Mutex<Option<CompletionRequest>>,
    }

    impl FakeProvider {
        fn answering(content: &str) -> Arc<Self> {
            Self::with(Ok(content.to_string()))
        }

        fn with(reply: ProviderResult<String>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionProvider for FakeProvider {
        async fn complete(&self, request: &CompletionRequest) -> ProviderResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            self.reply.clone()
        }
    }

    fn service(provider: &Arc<FakeProvider>, mode: AssistantMode) -> AssistantService {
        AssistantService::new(provider.clone(), mode)
    }

    #[tokio::test]
    async fn test_groceries_become_a_note() {
        let provider = FakeProvider::answering(r#"{"title":"Groceries","todos":["milk","eggs"]}"#);
        let reply = service(&provider, AssistantMode::Structured)
            .ask(&AssistantRequest::message("buy milk and eggs"))
            .await
            .expect("ask failed");

        let AssistantResponse::Structured(reply) = reply else {
            panic!("expected structured reply");
        };
        assert!(reply.is_note);
        assert_eq!(reply.message, "Created a note \"Groceries\" with 2 task(s).");
        let note = reply.note.unwrap();
        assert_eq!(note.title, "Groceries");
        let texts: Vec<_> = note.todos.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["milk", "eggs"]);
        assert!(note.todos.iter().all(|t| !t.completed));

        let sent = provider.last_request.lock().unwrap().clone().unwrap();
        assert!(sent.json_output);
        assert_eq!(sent.messages.last().unwrap().content, "buy milk and eggs");
    }

    #[tokio::test]
    async fn test_chatter_is_passed_through() {
        let provider = FakeProvider::answering("just chatting");
        let reply = service(&provider, AssistantMode::Structured)
            .ask(&AssistantRequest::message("hello"))
            .await
            .unwrap();

        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json, serde_json::json!({"message": "just chatting", "isNote": false, "note": null}));
    }

    #[tokio::test]
    async fn test_missing_prompt_skips_provider() {
        let provider = FakeProvider::answering("unused");
        let svc = service(&provider, AssistantMode::Structured);

        for request in [
            AssistantRequest::default(),
            AssistantRequest::message("   "),
            AssistantRequest { message: None, prompt: Some(String::new()) },
        ] {
            let err = svc.ask(&request).await.unwrap_err();
            assert_eq!(err, AssistantError::BadRequest(PROMPT_REQUIRED.to_string()));
            assert_eq!(err.status(), 400);
        }
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_prompt_field_is_accepted() {
        let provider = FakeProvider::answering("Title\n- a");
        let request = AssistantRequest { message: None, prompt: Some("make a list".to_string()) };
        let reply = service(&provider, AssistantMode::Text).ask(&request).await.unwrap();
        assert_eq!(reply, AssistantResponse::Text { content: "Title\n- a".to_string() });
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_text_mode_request_shape() {
        let provider = FakeProvider::answering("Packing\n- socks");
        service(&provider, AssistantMode::Text)
            .ask(&AssistantRequest::message("trip"))
            .await
            .unwrap();

        let sent = provider.last_request.lock().unwrap().clone().unwrap();
        assert!(!sent.json_output);
        assert_eq!(sent.temperature, 0.7);
        assert_eq!(sent.max_tokens, 200);
        assert_eq!(sent.messages[0].content, TEXT_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_invalid_key_maps_to_401() {
        let provider = FakeProvider::with(Err(ProviderError::Unauthorized("Incorrect API key".to_string())));
        let err = service(&provider, AssistantMode::Structured)
            .ask(&AssistantRequest::message("hi"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), 401);
        assert_eq!(err.message(), INVALID_API_KEY);
    }

    #[tokio::test]
    async fn test_missing_key_maps_to_401() {
        let provider = FakeProvider::with(Err(ProviderError::MissingApiKey));
        let err = service(&provider, AssistantMode::Text)
            .ask(&AssistantRequest::message("hi"))
            .await
            .unwrap_err();
        assert_eq!(err, AssistantError::Unauthorized(MISSING_API_KEY.to_string()));
    }

    #[tokio::test]
    async fn test_other_failures_map_to_500() {
        let cases = [
            ProviderError::Status { status: 429, message: "Rate limit reached".to_string() },
            ProviderError::Transport("connection refused".to_string()),
            ProviderError::EmptyResponse,
        ];
        for case in cases {
            let provider = FakeProvider::with(Err(case));
            let err = service(&provider, AssistantMode::Structured)
                .ask(&AssistantRequest::message("hi"))
                .await
                .unwrap_err();
            assert_eq!(err.status(), 500);
            assert!(err.message().starts_with("Failed to generate note content: "));
        }
    }
}
