//! Integration tests for the projection client against a mock service:
//! exact wire body, success parsing, error statuses, and malformed bodies.

use std::time::Duration;

use glidepath_client::{ClientError, ProjectionClient};
use glidepath_types::{Allocations, ResponseShapeError, SimulationRequest};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> SimulationRequest {
    SimulationRequest {
        income: 120_000.0,
        expenses: 60_000.0,
        cashflows: 5_000.0,
        liabilities: 10_000.0,
        current_value: 250_000.0,
        allocations: Allocations {
            equity: 0.6,
            fixed_income: 0.3,
            alternatives: 0.1,
        },
        goal_amount: 1_000_000.0,
        goal_years: 10,
    }
}

fn client_for(server: &MockServer) -> ProjectionClient {
    let endpoint = Url::parse(&format!("{}/submit-form", server.uri())).unwrap();
    ProjectionClient::new(endpoint, Duration::from_secs(5)).unwrap()
}

fn success_body() -> serde_json::Value {
    json!({
        "data": { "simulation": {
            "probability": 0.5,
            "avg_yearly_networth": [100.0, 200.0, 300.0],
        }},
    })
}

#[tokio::test]
async fn posts_exact_wire_body_and_parses_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit-form"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "income": 120_000.0,
            "expenses": 60_000.0,
            "liabilities": 10_000.0,
            "cashflows": 5_000.0,
            "current_value": 250_000.0,
            "portfolio": {
                "equity": 0.6,
                "fixed_income": 0.3,
                "alternatives": 0.1,
            },
            "goal": 1_000_000.0,
            "year": 10,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).simulate(&request()).await.unwrap();
    assert!((response.probability - 0.5).abs() < f64::EPSILON);
    assert_eq!(response.yearly_net_worth, [100.0, 200.0, 300.0]);
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit-form"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "simulation blew up"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = client_for(&server).simulate(&request()).await.unwrap_err();
    match error {
        ClientError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("simulation blew up"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_body_is_not_trusted_for_data() {
    // Even a perfectly shaped body rides a 503 into failure.
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit-form"))
        .respond_with(ResponseTemplate::new(503).set_body_json(success_body()))
        .mount(&server)
        .await;

    let error = client_for(&server).simulate(&request()).await.unwrap_err();
    assert!(matches!(error, ClientError::Status { .. }));
}

#[tokio::test]
async fn missing_probability_is_a_shape_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit-form"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "simulation": { "avg_yearly_networth": [1.0] } },
        })))
        .mount(&server)
        .await;

    let error = client_for(&server).simulate(&request()).await.unwrap_err();
    assert!(matches!(
        error,
        ClientError::Shape(ResponseShapeError::Missing {
            path: "data.simulation.probability",
        })
    ));
}

#[tokio::test]
async fn unparseable_body_is_a_shape_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/submit-form"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let error = client_for(&server).simulate(&request()).await.unwrap_err();
    assert!(matches!(
        error,
        ClientError::Shape(ResponseShapeError::InvalidJson { .. })
    ));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Nothing listens on this port; reserved for documentation.
    let endpoint = Url::parse("http://127.0.0.1:9/submit-form").unwrap();
    let client = ProjectionClient::new(endpoint, Duration::from_secs(1)).unwrap();

    let error = client.simulate(&request()).await.unwrap_err();
    assert!(matches!(error, ClientError::Transport(_)));
}
