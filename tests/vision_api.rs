// HTTP-level tests for the Vision provider against a mock server.
//
// The endpoint override exists exactly for this: point VisionProvider at
// httpmock and script the oracle's responses, including its failure modes.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use palisade::annotation::traits::SafeSearchProvider;
use palisade::annotation::vision::VisionProvider;
use palisade::credentials::VisionCredentials;
use palisade::error::ModerationError;
use palisade::moderation::likelihood::Likelihood;

fn provider_for(server: &MockServer) -> VisionProvider {
    VisionProvider::new(
        &server.base_url(),
        VisionCredentials {
            api_key: "test-key".to_string(),
        },
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn successful_annotation_parses_into_scores() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/images:annotate")
            .query_param("key", "test-key")
            .body_contains("SAFE_SEARCH_DETECTION")
            .body_contains("https://storage.example/cat.jpg");
        then.status(200).json_body(json!({
            "responses": [{
                "safeSearchAnnotation": {
                    "adult": "VERY_UNLIKELY",
                    "spoof": "UNLIKELY",
                    "medical": "UNLIKELY",
                    "violence": "POSSIBLE",
                    "racy": "LIKELY"
                }
            }]
        }));
    });

    let provider = provider_for(&server);
    let scores = provider
        .safe_search("https://storage.example/cat.jpg")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(scores.adult, Likelihood::VeryUnlikely);
    assert_eq!(scores.violence, Likelihood::Possible);
    assert_eq!(scores.racy, Likelihood::Likely);
}

#[tokio::test]
async fn oracle_error_object_surfaces_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(200).json_body(json!({
            "responses": [{
                "error": { "code": 7, "message": "image-annotator::Bad image data." }
            }]
        }));
    });

    let provider = provider_for(&server);
    let err = provider.safe_search("bad-uri").await.unwrap_err();

    match err {
        ModerationError::Annotation { message } => {
            assert_eq!(message, "image-annotator::Bad image data.");
        }
        other => panic!("expected Annotation, got {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(403).body("API key invalid");
    });

    let provider = provider_for(&server);
    let err = provider.safe_search("img").await.unwrap_err();

    match err {
        ModerationError::Api { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert!(body.contains("API key invalid"));
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[tokio::test]
async fn unrecognized_likelihood_is_rejected_not_clamped() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(200).json_body(json!({
            "responses": [{
                "safeSearchAnnotation": {
                    "adult": "ABSOLUTELY_CERTAIN",
                    "violence": "UNLIKELY",
                    "racy": "UNLIKELY"
                }
            }]
        }));
    });

    let provider = provider_for(&server);
    let err = provider.safe_search("img").await.unwrap_err();

    match err {
        ModerationError::InvalidScore { field, value } => {
            assert_eq!(field, "adult");
            assert_eq!(value, "ABSOLUTELY_CERTAIN");
        }
        other => panic!("expected InvalidScore, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_annotation_is_rejected() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/images:annotate");
        then.status(200).json_body(json!({ "responses": [{}] }));
    });

    let provider = provider_for(&server);
    let err = provider.safe_search("img").await.unwrap_err();

    assert!(matches!(err, ModerationError::InvalidScore { .. }));
}

#[tokio::test]
async fn transport_failure_propagates_as_transport_error() {
    // Nothing listens on this port — the connect itself fails.
    let provider = VisionProvider::new(
        "http://127.0.0.1:9",
        VisionCredentials {
            api_key: "test-key".to_string(),
        },
        Duration::from_secs(1),
    )
    .unwrap();

    let err = provider.safe_search("img").await.unwrap_err();
    assert!(matches!(err, ModerationError::Transport(_)));
}
