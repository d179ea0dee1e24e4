//! Profile loading from files and HTTP, and the retry path in the app.

mod common;

use bizcard::profile::{ProfileError, ProfileSource, ProfileState, ProfileStore};
use bizcard::ui::app::UiCommand;
use bizcard::ui::input::handle_key;
use common::stub_server::{StubReply, StubServer};
use common::*;
use crossterm::event::KeyCode;
use std::path::PathBuf;

#[test]
fn source_is_http_only_for_http_urls() {
    assert!(matches!(
        ProfileSource::parse("https://cards.example/data.json"),
        ProfileSource::Http(_)
    ));
    assert_eq!(
        ProfileSource::parse("./data.json"),
        ProfileSource::File(PathBuf::from("./data.json"))
    );
}

#[tokio::test]
async fn loads_profile_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, SAMPLE_JSON).unwrap();

    let store = ProfileStore::with_source(ProfileSource::File(path), 5).unwrap();
    assert_eq!(store.load().await.unwrap(), sample_profile());
}

#[tokio::test]
async fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let store =
        ProfileStore::with_source(ProfileSource::File(dir.path().join("absent.json")), 5).unwrap();
    assert!(matches!(store.load().await, Err(ProfileError::Read { .. })));
}

#[tokio::test]
async fn malformed_document_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"{"name": "Alex"}"#).unwrap();

    let store = ProfileStore::with_source(ProfileSource::File(path), 5).unwrap();
    assert!(matches!(store.load().await, Err(ProfileError::Parse(_))));
}

#[tokio::test]
async fn loads_profile_over_http() {
    let server = StubServer::start(StubReply::ok(SAMPLE_JSON)).await;
    let store = ProfileStore::with_source(ProfileSource::parse(&server.url("/data.json")), 5)
        .unwrap();

    assert_eq!(store.load().await.unwrap(), sample_profile());
    assert_eq!(server.requests(), vec!["/data.json"]);
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let server = StubServer::start(StubReply::error(404, "not found")).await;
    let store = ProfileStore::with_source(ProfileSource::parse(&server.url("/data.json")), 5)
        .unwrap();

    assert!(matches!(
        store.load().await,
        Err(ProfileError::Status { status, .. }) if status == 404
    ));
}

#[tokio::test]
async fn failed_load_renders_inline_and_retry_requeues() {
    let dir = tempfile::tempdir().unwrap();
    let store =
        ProfileStore::with_source(ProfileSource::File(dir.path().join("absent.json")), 5).unwrap();

    let mut h = harness().build();
    h.app.load_profile();
    assert!(h.app.profile_state().is_loading());
    assert!(matches!(h.drain_commands().as_slice(), [UiCommand::LoadProfile]));

    h.app.on_profile_loaded(store.load().await);
    let ProfileState::Failed { message } = h.app.profile_state() else {
        panic!("expected a failed profile state");
    };
    assert!(!message.is_empty());
    assert!(h.app.content().is_none());

    handle_key(&mut h.app, press_key(KeyCode::Char('r')));
    assert!(h.app.profile_state().is_loading());
    assert!(matches!(h.drain_commands().as_slice(), [UiCommand::LoadProfile]));

    h.app.on_profile_loaded(Ok(sample_profile()));
    assert!(h.app.profile_state().profile().is_some());
    assert!(h.app.content().is_some());
}

#[test]
fn loaded_profile_is_never_replaced() {
    let mut h = harness().loaded();
    let mut other = sample_profile();
    other.name = "Someone Else".to_string();

    h.app.on_profile_loaded(Ok(other));
    let profile = h.app.profile_state().profile().expect("still loaded");
    assert_eq!(profile.name, "Alex Chen");

    handle_key(&mut h.app, press_key(KeyCode::Char('r')));
    assert!(h.drain_commands().is_empty());
}
