mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch};

use praxis::error::Error;
use praxis::remote::RemoteClient;

use common::spawn_service;

const TOKEN: &str = "sekrit";

#[derive(Clone, Default)]
struct ServiceState {
    patches: Arc<AtomicUsize>,
}

fn service(state: ServiceState) -> Router {
    Router::new()
        .route(
            "/tracks",
            get(|| async {
                axum::Json(serde_json::json!({
                    "tracks": [{"slug": "python"}, {"slug": "rust"}]
                }))
            }),
        )
        .route(
            "/tracks/:track/exercises",
            get(|| async {
                axum::Json(serde_json::json!({
                    "exercises": [
                        {"slug": "hello-world", "difficulty": "easy", "blurb": "Say hi."},
                        {"slug": "two-fer", "difficulty": "medium", "blurb": "Share with two."},
                        {"slug": "bob", "difficulty": "hard", "blurb": "Answer as Bob."}
                    ]
                }))
            }),
        )
        .route(
            "/solutions/:id/publish",
            patch(
                |State(state): State<ServiceState>, headers: HeaderMap| async move {
                    state.patches.fetch_add(1, Ordering::SeqCst);
                    let authorized = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .is_some_and(|v| v == format!("Bearer {TOKEN}"));
                    if authorized {
                        StatusCode::OK
                    } else {
                        StatusCode::UNAUTHORIZED
                    }
                },
            ),
        )
        .route(
            "/solutions/:id/complete",
            patch(|State(state): State<ServiceState>| async move {
                state.patches.fetch_add(1, Ordering::SeqCst);
                (StatusCode::INTERNAL_SERVER_ERROR, "solution store offline")
            }),
        )
        .with_state(state)
}

fn client(base_url: &str, token: Option<&str>) -> RemoteClient {
    RemoteClient::new(base_url, token.map(str::to_string)).unwrap()
}

#[test]
fn tracks_come_back_in_server_order() {
    let base = spawn_service(service(ServiceState::default()));
    let tracks = client(&base, None).list_tracks().unwrap();
    assert_eq!(tracks, ["python", "rust"]);
}

#[test]
fn exercise_labels_share_the_longest_slug_width() {
    let base = spawn_service(service(ServiceState::default()));
    let exercises = client(&base, None).list_exercises("rust").unwrap();

    let width = "hello-world".len();
    assert_eq!(exercises.len(), 3);
    assert!(exercises.iter().all(|(label, _)| label.len() == width));
    assert_eq!(exercises[0].0, "hello-world");
    assert_eq!(exercises[1].0, "    two-fer");
    assert_eq!(exercises[2].0, "        bob");
    assert_eq!(exercises[1].1.blurb, "Share with two.");
}

#[test]
fn publish_sends_the_bearer_token() {
    let state = ServiceState::default();
    let base = spawn_service(service(state.clone()));

    client(&base, Some(TOKEN))
        .set_solution_status("42", praxis::actions::SolutionAction::Publish)
        .unwrap();
    assert_eq!(state.patches.load(Ordering::SeqCst), 1);
}

#[test]
fn server_error_payload_travels_in_the_transport_error() {
    let state = ServiceState::default();
    let base = spawn_service(service(state.clone()));

    let err = client(&base, Some(TOKEN))
        .set_solution_status("42", praxis::actions::SolutionAction::Complete)
        .unwrap_err();
    match err {
        Error::Transport(payload) => {
            assert!(payload.contains("500"));
            assert!(payload.contains("solution store offline"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
    // Mutations are not retried.
    assert_eq!(state.patches.load(Ordering::SeqCst), 1);
}

#[test]
fn missing_token_fails_before_any_request() {
    let state = ServiceState::default();
    let base = spawn_service(service(state.clone()));

    let err = client(&base, None)
        .set_solution_status("42", praxis::actions::SolutionAction::Publish)
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert_eq!(state.patches.load(Ordering::SeqCst), 0);
}

#[test]
fn unreachable_service_is_a_transport_error() {
    // Nothing listens on this port.
    let err = client("http://127.0.0.1:1", None).list_tracks().unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
