//! Stub Deepgram server built on wiremock

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LISTEN_PATH: &str = "/v1/listen";

/// A `/v1/listen` success payload
pub fn listen_response(transcript: &str, words: &[(&str, f64, f64)], duration: f64) -> Value {
    let words: Vec<Value> = words
        .iter()
        .map(|(word, start, end)| {
            json!({
                "word": word,
                "start": start,
                "end": end,
                "confidence": 0.99,
                "punctuated_word": word
            })
        })
        .collect();

    json!({
        "metadata": {
            "transaction_key": "deprecated",
            "request_id": "stub-request-id",
            "sha256": "0000",
            "created": "2024-01-01T00:00:00.000Z",
            "duration": duration,
            "channels": 1,
            "models": ["stub-model-uuid"],
            "model_info": {
                "stub-model-uuid": {"name": "general-nova-3", "version": "2024-01-01", "arch": "nova-3"}
            }
        },
        "results": {
            "channels": [{
                "alternatives": [{
                    "transcript": transcript,
                    "confidence": 0.99,
                    "words": words
                }]
            }]
        }
    })
}

pub fn hello_world() -> Value {
    listen_response("hello world", &[("hello", 0.0, 0.5), ("world", 0.6, 1.1)], 1.2)
}

/// Mount a catch-all `/v1/listen` mock with the given response and call expectation
pub async fn mount_listen(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(LISTEN_PATH))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}
