//! End-to-end client tests against a mock Campaign Standard server.

use std::sync::{Arc, Mutex};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use campaign_standard::models::workflow::WorkflowCommand;
use campaign_standard::{CampaignClient, CampaignConfig, CampaignError, DebugSink, ReducedError, reduce_error};

fn client_for(server: &MockServer) -> CampaignClient {
    let mut config = CampaignConfig::new("T".into(), "key-k".into(), "token-a".into());
    config.base_url_template = format!("{}/{{ORGANIZATION}}/campaign/", server.uri());
    CampaignClient::new(config).unwrap()
}

#[derive(Default)]
struct CapturingSink {
    lines: Mutex<Vec<String>>,
}

impl DebugSink for CapturingSink {
    fn debug(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

#[tokio::test]
async fn get_all_profiles_sends_both_security_schemes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/T/campaign/profileAndServices/profile"))
        .and(header("Authorization", "Bearer token-a"))
        .and(header("X-Api-Key", "key-k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {"PKey": "@p1", "email": "a@example.com", "firstName": "Ada"},
                {"PKey": "@p2", "email": "b@example.com"}
            ],
            "serverSidePagination": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profiles = client_for(&server).get_all_profiles().await.unwrap();
    assert_eq!(profiles.content.len(), 2);
    assert_eq!(profiles.content[0].first_name, "Ada");
}

#[tokio::test]
async fn create_profile_posts_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/T/campaign/profileAndServices/profile"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"email": "new@example.com", "firstName": "Grace"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PKey": "@p-new",
            "email": "new@example.com",
            "firstName": "Grace"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let profile = campaign_standard::models::profile::Profile {
        email: "new@example.com".to_string(),
        first_name: "Grace".to_string(),
        ..Default::default()
    };

    let created = client_for(&server).create_profile(&profile).await.unwrap();
    assert_eq!(created.pkey, "@p-new");
}

#[tokio::test]
async fn control_workflow_posts_command_method() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/T/campaign/workflow/execution/WKF42/commands"))
        .and(body_json(json!({"method": "pause"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .control_workflow("WKF42", WorkflowCommand::Pause)
        .await
        .unwrap();
}

#[tokio::test]
async fn send_transactional_event_hits_event_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/T/campaign/mc/EVTorder"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PKey": "@evt-1",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let event = campaign_standard::models::transactional::TransactionalEvent {
        email: Some("a@example.com".to_string()),
        ctx: json!({"orderId": "A-42"}),
        ..Default::default()
    };

    let status = client_for(&server)
        .send_transactional_event("EVTorder", &event)
        .await
        .unwrap();
    assert_eq!(status.pkey, "@evt-1");
    assert_eq!(status.status, "pending");
}

#[tokio::test]
async fn http_error_carries_full_response_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/T/campaign/profileAndServices/profile/@missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"code": "RST-360011"})),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .get_profile("@missing")
        .await
        .unwrap_err();

    match &error {
        CampaignError::Response { response } => {
            assert_eq!(response.status, 404);
            assert_eq!(response.status_text, "Not Found");
            assert_eq!(response.body, json!({"code": "RST-360011"}));
        }
        other => panic!("expected response error, got {other:?}"),
    }

    match reduce_error(error) {
        ReducedError::Summary(summary) => {
            assert_eq!(summary, r#"404 - Not Found ({"code":"RST-360011"})"#);
        }
        other => panic!("expected summary, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_kept_as_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/T/campaign/profileAndServices/service"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway from LB"))
        .mount(&server)
        .await;

    let error = client_for(&server).get_all_services().await.unwrap_err();
    match error {
        CampaignError::Response { response } => {
            assert_eq!(response.status, 502);
            assert_eq!(response.body, json!("Bad Gateway from LB"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn interceptors_log_request_and_parsed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/T/campaign/profileAndServices/resourceType/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PKey": "@meta",
            "name": "profile",
            "content": {}
        })))
        .mount(&server)
        .await;

    let sink = Arc::new(CapturingSink::default());
    let client = client_for(&server).with_debug_sink(sink.clone());

    client.get_resource_metadata("profile").await.unwrap();

    let lines = sink.lines.lock().unwrap().clone();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("REQUEST:\n"));
    assert!(lines[1].starts_with("RESPONSE:\n"));
    assert!(lines[2].starts_with("DATA:\n"));
    assert!(lines[2].contains(r#""name":"profile""#));
}

#[tokio::test]
async fn failed_response_logs_no_body_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/T/campaign/privacy/privacyTool/@req"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"code": "FORBIDDEN"})))
        .mount(&server)
        .await;

    let sink = Arc::new(CapturingSink::default());
    let client = client_for(&server).with_debug_sink(sink.clone());

    let error = client.get_privacy_request("@req").await.unwrap_err();
    assert!(matches!(error, CampaignError::Response { .. }));

    let lines = sink.lines.lock().unwrap().clone();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("REQUEST:\n"));
    assert!(lines[1].starts_with("RESPONSE:\n"));
}
