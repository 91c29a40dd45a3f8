//! Tests for `DiscordNotifier`.

use super::embed::field;
use super::{DeploymentInfo, DiscordNotifier, NotifyError};
use crate::github::{FailureReporter, GithubContext};
use crate::time::FixedClock;
use crate::webhook::{HttpClient, HttpError, HttpRequest, HttpResponse, WebhookError};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

const WEBHOOK_URL: &str = "https://discord.com/api/webhooks/123456/very-secret-token";

/// Mock HTTP client that returns a configurable response.
#[derive(Debug)]
struct MockClient {
    response: Mutex<Option<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(response: Result<HttpResponse, HttpError>) -> Self {
        Self {
            response: Mutex::new(Some(response)),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn success() -> Self {
        Self::new(Ok(HttpResponse::with_text(http::StatusCode::NO_CONTENT, "")))
    }

    fn status(status: http::StatusCode, body: &str) -> Self {
        Self::new(Ok(HttpResponse::with_text(status, body)))
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.response
            .lock()
            .unwrap()
            .take()
            .expect("MockClient called more than once")
    }
}

/// Reporter that records every failure message.
#[derive(Debug, Default)]
struct RecordingReporter {
    failures: Mutex<Vec<String>>,
}

impl RecordingReporter {
    fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl FailureReporter for RecordingReporter {
    fn set_failed(&self, message: &str) {
        self.failures.lock().unwrap().push(message.to_string());
    }
}

fn pr_context() -> GithubContext {
    GithubContext::parse(
        r#"{"pull_request": {
            "number": 42,
            "title": "Fix bug",
            "html_url": "https://github.com/x/y/pull/42",
            "user": {"login": "alice", "avatar_url": "https://avatars.example/alice"},
            "head": {"ref": "fix-1"}
        }}"#,
    )
    .unwrap()
}

fn deployment() -> DeploymentInfo {
    DeploymentInfo::new("https://preview.example/abc")
}

fn notifier(client: MockClient) -> DiscordNotifier<MockClient, FixedClock> {
    DiscordNotifier::new(client).with_clock(FixedClock::at_secs(1_714_564_800))
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn missing_pull_request_reports_and_sends_nothing() {
        let notifier = notifier(MockClient::success());
        let reporter = RecordingReporter::default();

        notifier
            .notify(&reporter, &GithubContext::default(), &deployment(), Some(WEBHOOK_URL))
            .await;

        let failures = reporter.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("No PR found"));
        assert_eq!(notifier.client().calls(), 0);
    }

    #[tokio::test]
    async fn missing_webhook_url_reports_and_sends_nothing() {
        let notifier = notifier(MockClient::success());
        let reporter = RecordingReporter::default();

        notifier
            .notify(&reporter, &pr_context(), &deployment(), None)
            .await;

        assert_eq!(reporter.failures(), vec!["Discord webhook URL is not provided"]);
        assert_eq!(notifier.client().calls(), 0);
    }

    #[tokio::test]
    async fn blank_webhook_url_is_missing() {
        let notifier = notifier(MockClient::success());

        let result = notifier
            .try_notify(&pr_context(), &deployment(), Some("  "))
            .await;

        assert!(matches!(result, Err(NotifyError::MissingWebhookUrl)));
        assert_eq!(notifier.client().calls(), 0);
    }

    #[tokio::test]
    async fn missing_pull_request_is_checked_before_webhook_url() {
        let notifier = notifier(MockClient::success());

        let result = notifier
            .try_notify(&GithubContext::default(), &deployment(), None)
            .await;

        assert!(matches!(result, Err(NotifyError::MissingPullRequest)));
    }

    #[tokio::test]
    async fn unparsable_webhook_url_is_reported_without_the_url() {
        let notifier = notifier(MockClient::success());
        let reporter = RecordingReporter::default();
        let bad_url = "not a url/very-secret-token";

        notifier
            .notify(&reporter, &pr_context(), &deployment(), Some(bad_url))
            .await;

        let failures = reporter.failures();
        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("Failed to send Discord notification: Invalid webhook URL"));
        assert!(!failures[0].contains("very-secret-token"));
        assert_eq!(notifier.client().calls(), 0);
    }
}

mod delivery {
    use super::*;

    #[tokio::test]
    async fn success_sends_exactly_one_post_and_reports_nothing() {
        let notifier = notifier(MockClient::success());
        let reporter = RecordingReporter::default();

        notifier
            .notify(&reporter, &pr_context(), &deployment(), Some(WEBHOOK_URL))
            .await;

        assert!(reporter.failures().is_empty());
        assert_eq!(notifier.client().calls(), 1);
    }

    #[tokio::test]
    async fn request_is_json_post_to_webhook() {
        let notifier = notifier(MockClient::success());

        notifier
            .try_notify(&pr_context(), &deployment(), Some(WEBHOOK_URL))
            .await
            .unwrap();

        let requests = notifier.client().captured_requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.url.as_str(), WEBHOOK_URL);
        assert_eq!(
            request.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn body_wraps_single_embed() {
        let notifier = notifier(MockClient::success());
        let deployment =
            DeploymentInfo::new("https://preview.example/abc").with_commit("abc123", "Fix typo");

        notifier
            .try_notify(&pr_context(), &deployment, Some(WEBHOOK_URL))
            .await
            .unwrap();

        let body = notifier.client().captured_requests()[0].body.clone().unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let embeds = json["embeds"].as_array().unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(embeds.len(), 1);

        let embed = &embeds[0];
        assert_eq!(embed["description"], "**Fix bug**");
        assert_eq!(embed["timestamp"], "2024-05-01T12:00:00.000Z");
        assert_eq!(embed["fields"].as_array().unwrap().len(), 5);
        assert_eq!(embed["fields"][3]["name"], field::COMMIT);
        assert_eq!(embed["fields"][4]["name"], field::PREVIEW_LINK);
    }

    #[tokio::test]
    async fn server_error_reports_without_url_or_body() {
        let notifier = notifier(MockClient::status(
            http::StatusCode::INTERNAL_SERVER_ERROR,
            "internal failure details",
        ));
        let reporter = RecordingReporter::default();

        notifier
            .notify(&reporter, &pr_context(), &deployment(), Some(WEBHOOK_URL))
            .await;

        let failures = reporter.failures();
        assert_eq!(
            failures,
            vec!["Failed to send Discord notification: Discord webhook failed (500)"]
        );
        assert!(!failures[0].contains(WEBHOOK_URL));
        assert!(!failures[0].contains("very-secret-token"));
        assert!(!failures[0].contains("internal failure details"));
        assert_eq!(notifier.client().calls(), 1);
    }

    #[tokio::test]
    async fn rejection_keeps_status_and_body_internally() {
        let notifier = notifier(MockClient::status(
            http::StatusCode::BAD_REQUEST,
            r#"{"embeds": ["0"]}"#,
        ));

        let result = notifier
            .try_notify(&pr_context(), &deployment(), Some(WEBHOOK_URL))
            .await;

        match result {
            Err(NotifyError::Webhook(WebhookError::Rejected { status, body })) => {
                assert_eq!(status, http::StatusCode::BAD_REQUEST);
                assert_eq!(body, r#"{"embeds": ["0"]}"#);
            }
            other => panic!("Expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_error_is_reported() {
        let notifier = notifier(MockClient::new(Err(HttpError::Connection(Box::new(
            std::io::Error::other("connection refused"),
        )))));
        let reporter = RecordingReporter::default();

        notifier
            .notify(&reporter, &pr_context(), &deployment(), Some(WEBHOOK_URL))
            .await;

        assert_eq!(
            reporter.failures(),
            vec!["Failed to send Discord notification: Connection error: connection refused"]
        );
    }

    #[tokio::test]
    async fn timeout_is_reported() {
        let notifier = notifier(MockClient::new(Err(HttpError::Timeout)));
        let reporter = RecordingReporter::default();

        notifier
            .notify(&reporter, &pr_context(), &deployment(), Some(WEBHOOK_URL))
            .await;

        assert_eq!(
            reporter.failures(),
            vec!["Failed to send Discord notification: Request timed out"]
        );
    }
}

mod dry_run {
    use super::*;

    #[tokio::test]
    async fn dry_run_sends_nothing() {
        let notifier = notifier(MockClient::success()).with_dry_run(true);
        let reporter = RecordingReporter::default();

        notifier
            .notify(&reporter, &pr_context(), &deployment(), Some(WEBHOOK_URL))
            .await;

        assert!(reporter.failures().is_empty());
        assert_eq!(notifier.client().calls(), 0);
    }

    #[tokio::test]
    async fn dry_run_still_validates() {
        let notifier = notifier(MockClient::success()).with_dry_run(true);

        let result = notifier
            .try_notify(&pr_context(), &deployment(), Some(""))
            .await;

        assert!(matches!(result, Err(NotifyError::MissingWebhookUrl)));
    }
}

mod report_message {
    use super::*;

    #[test]
    fn validation_errors_are_verbatim() {
        assert_eq!(
            NotifyError::MissingPullRequest.report_message(),
            "No PR found in context"
        );
        assert_eq!(
            NotifyError::MissingWebhookUrl.report_message(),
            "Discord webhook URL is not provided"
        );
    }

    #[test]
    fn send_errors_are_prefixed() {
        let error = NotifyError::from(WebhookError::from(HttpError::Timeout));

        assert_eq!(
            error.report_message(),
            "Failed to send Discord notification: Request timed out"
        );
    }
}
