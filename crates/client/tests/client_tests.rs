//! Integration tests for the critterfacts HTTP clients

use critterfacts_client::{ClientError, FactsClient, IdentityClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn builder_requires_base_url() {
    let result = FactsClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn builder_trims_trailing_slash() {
    let client = FactsClient::new("http://localhost:8080/").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn random_fact_targets_the_fact_path() {
    let mock_server = MockServer::start().await;

    let response_body = json!({
        "Id": "1",
        "Text": "Cats sleep 70% of their lives",
        "Category": "cats",
        "Source": "http://example.com"
    });

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FactsClient::new(mock_server.uri()).unwrap();
    let fact = client.get_fact(None).await.unwrap();

    assert_eq!(fact.id, "1");
    assert_eq!(fact.text, "Cats sleep 70% of their lives");
    assert_eq!(fact.category.as_deref(), Some("cats"));
    assert_eq!(fact.source, "http://example.com");
}

#[tokio::test]
async fn fact_by_id_targets_the_id_path() {
    let mock_server = MockServer::start().await;

    let response_body = json!({
        "Id": "42",
        "Text": "Octopuses have three hearts",
        "Source": "http://example.com/octopus"
    });

    Mock::given(method("GET"))
        .and(path("/fact/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FactsClient::new(mock_server.uri()).unwrap();
    let fact = client.get_fact(Some("42")).await.unwrap();

    assert_eq!(fact.id, "42");
    assert!(fact.category.is_none());
}

#[tokio::test]
async fn missing_fact_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such fact"))
        .mount(&mock_server)
        .await;

    let client = FactsClient::new(mock_server.uri()).unwrap();
    let result = client.get_fact(Some("999")).await;

    match result {
        Err(ClientError::NotFound(message)) => assert_eq!(message, "no such fact"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn backend_failure_maps_to_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = FactsClient::new(mock_server.uri()).unwrap();
    let result = client.get_fact(None).await;

    assert!(matches!(
        result,
        Err(ClientError::Server { status: 500, .. })
    ));
}

#[tokio::test]
async fn sign_in_posts_credentials_and_returns_the_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .and(body_json(json!({
            "email": "keeper@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Uid": "u-1",
            "Email": "keeper@example.com"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(mock_server.uri()).unwrap();
    let session = client.sign_in("keeper@example.com", "hunter2").await.unwrap();

    assert_eq!(session.uid, "u-1");
    assert_eq!(session.email, "keeper@example.com");
    assert!(session.display_name.is_none());
}

#[tokio::test]
async fn sign_in_rejection_carries_the_provider_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(401).set_body_string("wrong password"))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(mock_server.uri()).unwrap();
    let result = client.sign_in("keeper@example.com", "nope").await;

    match result {
        Err(ClientError::AuthenticationFailed(message)) => {
            assert_eq!(message, "wrong password");
        }
        other => panic!("expected AuthenticationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn sign_out_deletes_the_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(mock_server.uri()).unwrap();
    client.sign_out().await.unwrap();
}

#[tokio::test]
async fn identity_client_requires_base_url() {
    let result = IdentityClient::new("");
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}
