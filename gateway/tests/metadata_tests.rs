//! `/api/metadata` behavior against real files on disk

mod fixtures;

use axum::http::StatusCode;
use tempfile::TempDir;
use tower::util::ServiceExt;

use fixtures::*;

fn app_with_metadata(contents: Option<&str>) -> (axum::Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deepgram.toml");
    if let Some(contents) = contents {
        std::fs::write(&path, contents).unwrap();
    }

    let mut config = test_config("http://127.0.0.1:9");
    config.metadata_path = path;
    let (router, _) = app(config);
    (router, dir)
}

#[tokio::test]
async fn test_metadata_returns_meta_table() {
    let (app, _dir) = app_with_metadata(Some(
        r#"
[meta]
title = "Transcription Starter"
description = "Pre-recorded transcription"
tags = ["stt", "rust"]

[build]
command = "cargo build"
"#,
    ));

    let (status, json) = json_response(app.oneshot(get("/api/metadata")).await.unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Transcription Starter");
    assert_eq!(json["tags"][1], "rust");
    assert!(json.get("build").is_none());
    assert!(json.get("command").is_none());
}

#[tokio::test]
async fn test_metadata_needs_no_session() {
    let (app, _dir) = app_with_metadata(Some("[meta]\nname = \"x\"\n"));
    let response = app.oneshot(get("/api/metadata")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_file_is_internal_error() {
    let (app, _dir) = app_with_metadata(None);

    let (status, json) = json_response(app.oneshot(get("/api/metadata")).await.unwrap()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = assert_error(&json, "InternalServerError", "INTERNAL_SERVER_ERROR");
    assert_eq!(message, "deepgram.toml file not found");
}

#[tokio::test]
async fn test_missing_meta_section_is_internal_error() {
    let (app, _dir) = app_with_metadata(Some("[build]\ncommand = \"make\"\n"));

    let (status, json) = json_response(app.oneshot(get("/api/metadata")).await.unwrap()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = assert_error(&json, "InternalServerError", "INTERNAL_SERVER_ERROR");
    assert_eq!(message, "Missing [meta] section in deepgram.toml");
}

#[tokio::test]
async fn test_malformed_toml_is_internal_error() {
    let (app, _dir) = app_with_metadata(Some("[meta\ntitle = "));

    let (status, json) = json_response(app.oneshot(get("/api/metadata")).await.unwrap()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = assert_error(&json, "InternalServerError", "INTERNAL_SERVER_ERROR");
    assert_eq!(message, "Failed to read metadata from deepgram.toml");
}
