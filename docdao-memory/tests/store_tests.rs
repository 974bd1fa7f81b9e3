use bson::{Bson, doc};
use docdao_core::{
    backend::DocumentBackend,
    error::StatusCode,
    query::{Filter, UNSUPPORTED_OPERATOR},
    update::FieldUpdate,
};
use docdao_memory::InMemoryBackend;

fn player(name: &str, score: i64) -> Bson {
    Bson::Document(doc! { "name": name, "score": score })
}

fn filter(path: &str, op: &'static str, value: impl Into<Bson>) -> Filter {
    Filter {
        path: path.to_string(),
        op,
        value: value.into(),
    }
}

// ── Create ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_rejects_existing_key() {
    let backend = InMemoryBackend::new();

    backend
        .create_document("players", "p1", player("alice", 10))
        .await
        .unwrap();

    let err = backend
        .create_document("players", "p1", player("bob", 3))
        .await
        .unwrap_err();
    assert_eq!(err.code(), StatusCode::AlreadyExists);
}

// ── Point reads ──────────────────────────────────────────────────

#[tokio::test]
async fn get_of_missing_key_returns_bare_snapshot() {
    let backend = InMemoryBackend::new();

    let snapshot = backend.get_document("players", "ghost").await.unwrap();

    assert_eq!(snapshot.id, "ghost");
    assert!(!snapshot.exists());
}

#[tokio::test]
async fn get_returns_stored_payload() {
    let backend = InMemoryBackend::new();
    backend
        .create_document("players", "p1", player("alice", 10))
        .await
        .unwrap();

    let snapshot = backend.get_document("players", "p1").await.unwrap();

    assert!(snapshot.exists());
    assert_eq!(snapshot.data, Some(player("alice", 10)));
}

// ── Updates ──────────────────────────────────────────────────────

#[tokio::test]
async fn update_of_missing_document_is_not_found() {
    let backend = InMemoryBackend::new();

    let err = backend
        .update_document("players", "ghost", vec![FieldUpdate::new("score", 1)])
        .await
        .unwrap_err();
    assert_eq!(err.code(), StatusCode::NotFound);
}

#[tokio::test]
async fn dotted_path_update_sets_nested_fields() {
    let backend = InMemoryBackend::new();
    backend
        .create_document(
            "players",
            "p1",
            Bson::Document(doc! { "name": "alice", "profile": { "level": 1 } }),
        )
        .await
        .unwrap();

    backend
        .update_document(
            "players",
            "p1",
            vec![
                FieldUpdate::new("profile.level", 2),
                FieldUpdate::new("stats.wins", 1),
            ],
        )
        .await
        .unwrap();

    let snapshot = backend.get_document("players", "p1").await.unwrap();
    let expected = doc! {
        "name": "alice",
        "profile": { "level": 2 },
        "stats": { "wins": 1 },
    };
    assert_eq!(snapshot.data, Some(Bson::Document(expected)));
}

// ── Deletes ──────────────────────────────────────────────────────

#[tokio::test]
async fn delete_of_missing_key_succeeds() {
    let backend = InMemoryBackend::new();

    backend
        .delete_document("players", "ghost")
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_removes_the_document() {
    let backend = InMemoryBackend::new();
    backend
        .create_document("players", "p1", player("alice", 10))
        .await
        .unwrap();

    backend.delete_document("players", "p1").await.unwrap();

    let snapshot = backend.get_document("players", "p1").await.unwrap();
    assert!(!snapshot.exists());
}

// ── Queries ──────────────────────────────────────────────────────

#[tokio::test]
async fn unfiltered_query_returns_whole_collection() {
    let backend = InMemoryBackend::new();
    backend
        .create_document("players", "p1", player("alice", 10))
        .await
        .unwrap();
    backend
        .create_document("players", "p2", player("bob", 20))
        .await
        .unwrap();

    let snapshots = backend
        .query_documents("players", vec![])
        .await
        .unwrap();
    assert_eq!(snapshots.len(), 2);
}

#[tokio::test]
async fn query_of_unknown_collection_is_empty() {
    let backend = InMemoryBackend::new();

    let snapshots = backend
        .query_documents("ghosts", vec![])
        .await
        .unwrap();
    assert!(snapshots.is_empty());
}

#[tokio::test]
async fn filters_chain_conjunctively() {
    let backend = InMemoryBackend::new();
    backend
        .create_document("players", "p1", player("alice", 10))
        .await
        .unwrap();
    backend
        .create_document("players", "p2", player("bob", 20))
        .await
        .unwrap();
    backend
        .create_document("players", "p3", player("carol", 30))
        .await
        .unwrap();

    let snapshots = backend
        .query_documents(
            "players",
            vec![filter("score", ">", 10), filter("score", "<", 30)],
        )
        .await
        .unwrap();

    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].id, "p2");
}

#[tokio::test]
async fn mismatched_types_never_match_ordering_filters() {
    let backend = InMemoryBackend::new();
    backend
        .create_document("players", "p1", player("alice", 10))
        .await
        .unwrap();

    let snapshots = backend
        .query_documents("players", vec![filter("name", ">", 5)])
        .await
        .unwrap();
    assert!(snapshots.is_empty());
}

#[tokio::test]
async fn equality_mixed_with_range_is_rejected() {
    let backend = InMemoryBackend::new();
    backend
        .create_document("players", "p1", player("alice", 10))
        .await
        .unwrap();

    let err = backend
        .query_documents(
            "players",
            vec![filter("name", "==", "alice"), filter("score", ">", 5)],
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), StatusCode::FailedPrecondition);
}

#[tokio::test]
async fn unknown_operator_is_rejected() {
    let backend = InMemoryBackend::new();

    let err = backend
        .query_documents(
            "players",
            vec![filter("name", UNSUPPORTED_OPERATOR, "alice")],
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), StatusCode::InvalidArgument);
}
