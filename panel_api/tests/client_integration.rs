use panel_api::{Client, Error, Filter, ListQuery, PageRequest, Query};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_raw_sends_query_string() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("agents_offset.json");

    Mock::given(method("GET"))
        .and(path("/agents/"))
        .and(query_param("limit", "24"))
        .and(query_param("offset", "24"))
        .and(query_param("agency", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let query = ListQuery::new(
        &Filter::new().with("agency", 2_i64),
        &[],
        PageRequest::new(2, 24),
    );
    let value = client
        .get_raw("/agents/", &query.to_query_string())
        .await
        .unwrap();
    assert_eq!(value["count"], 100);
}

#[tokio::test]
async fn bearer_token_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/roles/"))
        .and(header("authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [], "count": 0})))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap().with_token("s3cret");
    let result = client.get_raw("/roles/", "").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn server_error_carries_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/99/"))
        .respond_with(ResponseTemplate::new(404).set_body_string(load_fixture("error_404.json")))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let err = client.get_raw("/media/99/", "").await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.api_message(), Some("Media not found"));
}

#[tokio::test]
async fn plain_text_error_has_no_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tickets/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let err = client.get_raw("/tickets/", "").await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, message: None, .. }));
}

#[tokio::test]
async fn malformed_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blogs/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let err = client.get_raw("/blogs/", "").await.unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn unreachable_server_is_request_failed() {
    let client = Client::new("http://127.0.0.1:9").unwrap();
    let err = client.get_raw("/media/", "").await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed));
}

#[tokio::test]
async fn typed_get_with_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/media/"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("media_canonical.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let query = ListQuery::new(&Filter::new(), &[], PageRequest::new(1, 12));
    let resp: panel_api::types::Envelope<Vec<panel_api::types::MediaItem>> =
        client.get("/media/", Some(&query)).await.unwrap();
    assert_eq!(resp.data[0].id, 7);
}

#[tokio::test]
async fn patch_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/tickets/5/"))
        .and(body_json(json!({"status": "closed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 5,
            "subject": "Leak",
            "status": "closed"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let value = client
        .patch("/tickets/5/", &json!({"status": "closed"}))
        .await
        .unwrap();
    assert_eq!(value["status"], "closed");
}

#[tokio::test]
async fn delete_with_empty_body_is_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/blogs/3/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let value = client.delete("/blogs/3/").await.unwrap();
    assert!(value.is_null());
}
