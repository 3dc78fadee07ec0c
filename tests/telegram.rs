#[cfg(test)]
mod tests {
    use serde_json::json;
    use todobell::api::{Notifier, NotifyError, TelegramNotifier};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_send_posts_chat_id_and_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/bot123:ABC/sendMessage"))
            .and(body_json(json!({ "chat_id": "42", "text": "⏰ Buy milk" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = TelegramNotifier::with_base_url(&server.uri(), "123:ABC").unwrap();
        notifier.send("42", "⏰ Buy milk").await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_request_reports_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/botbad-token/sendMessage"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "ok": false, "description": "Unauthorized" })),
            )
            .mount(&server)
            .await;

        let notifier = TelegramNotifier::with_base_url(&format!("{}/", server.uri()), "bad-token").unwrap();
        let err = notifier.send("42", "hello").await.unwrap_err();

        match err {
            NotifyError::Rejected { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Unauthorized"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        // Nothing listens on the discard port
        let notifier = TelegramNotifier::with_base_url("http://127.0.0.1:9", "123456:SECRET-TOKEN").unwrap();
        let err = notifier.send("42", "hello").await.unwrap_err();
        assert!(matches!(err, NotifyError::Transport(_)));

        // The bot token is part of the request URL and must not end up in logs
        let text = err.to_string();
        assert!(!text.contains("SECRET-TOKEN"), "token leaked: {text}");
    }
}
