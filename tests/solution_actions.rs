mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::patch;

use praxis::actions::{self, SolutionAction};
use praxis::error::Error;
use praxis::model::{ExerciseManifest, ExerciseMetadata};
use praxis::remote::RemoteClient;
use praxis::session::Session;
use praxis::store::ClientStore;

use common::spawn_service;

#[derive(Clone, Default)]
struct Hits(Arc<AtomicUsize>);

fn service(hits: Hits, respond_ok: bool) -> Router {
    Router::new().route(
        "/solutions/:id/:action",
        patch(move || {
            hits.0.fetch_add(1, Ordering::SeqCst);
            async move {
                if respond_ok {
                    (StatusCode::OK, "")
                } else {
                    (StatusCode::BAD_GATEWAY, "upstream gone")
                }
            }
        }),
    )
}

fn session_with_exercise(tmp: &tempfile::TempDir) -> Session {
    let store = ClientStore::open(tmp.path().join("config"));
    let mut session = Session::load(store, tmp.path().join("ws")).unwrap();
    session.set_track("rust").unwrap();
    session.set_exercise(
        ExerciseMetadata {
            track: "rust".to_string(),
            exercise: "two-fer".to_string(),
            id: "42".to_string(),
            url: "https://exercises.praxis.dev/rust/two-fer".to_string(),
        },
        serde_json::from_str::<ExerciseManifest>(
            r#"{"files":{"solution":["two_fer.rs"],"test":["two_fer_test.rs"]}}"#,
        )
        .unwrap(),
    );
    session
}

fn client(base: &str) -> RemoteClient {
    RemoteClient::new(base, Some("sekrit".to_string())).unwrap()
}

#[test]
fn publish_reports_the_track_and_exercise() {
    let hits = Hits::default();
    let base = spawn_service(service(hits.clone(), true));
    let tmp = tempfile::tempdir().unwrap();
    let session = session_with_exercise(&tmp);

    let message = actions::dispatch(&session, &client(&base), SolutionAction::Publish).unwrap();
    assert_eq!(message, "Published rust/two-fer solution");
    assert_eq!(hits.0.load(Ordering::SeqCst), 1);
}

#[test]
fn unset_exercise_blocks_dispatch_before_the_network() {
    let hits = Hits::default();
    let base = spawn_service(service(hits.clone(), true));
    let tmp = tempfile::tempdir().unwrap();
    let store = ClientStore::open(tmp.path().join("config"));
    let session = Session::load(store, tmp.path().join("ws")).unwrap();

    let err = actions::dispatch(&session, &client(&base), SolutionAction::Complete).unwrap_err();
    assert!(err.is_precondition());
    assert_eq!(err.to_string(), "exercise not set");
    assert_eq!(hits.0.load(Ordering::SeqCst), 0);
}

#[test]
fn failure_message_carries_the_server_payload() {
    let hits = Hits::default();
    let base = spawn_service(service(hits.clone(), false));
    let tmp = tempfile::tempdir().unwrap();
    let session = session_with_exercise(&tmp);

    let err = actions::dispatch(&session, &client(&base), SolutionAction::Unpublish).unwrap_err();
    match err {
        Error::Transport(message) => {
            assert!(message.starts_with("Failed to unpublish rust/two-fer solution:"));
            assert!(message.contains("upstream gone"));
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}
