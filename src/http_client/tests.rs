use httpmock::MockServer;

use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::{HttpClient, Request};
use crate::Error;

fn request(method: &str, url: String) -> Request {
    Request {
        method: method.to_string(),
        url,
        headers: vec![],
        body: vec![],
    }
}

#[test]
fn execute_sends_headers_and_body() {
    let body = r#"{"result": "content"}"#;

    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/defaults")
            .header("content-type", "application/json")
            .header("x-custom-header", "test_validate_verify")
            .body(body);
        then.status(200).body(body);
    });

    let client = ReqwestHttpClient::default();
    let response = client
        .execute(Request {
            method: "POST".to_string(),
            url: server.url("/defaults"),
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                (
                    "x-custom-header".to_string(),
                    "test_validate_verify".to_string(),
                ),
            ],
            body: body.as_bytes().to_vec(),
        })
        .unwrap();

    mock.assert();
    assert_eq!(200, response.status_code);
    assert_eq!(body.as_bytes(), response.body.as_slice());
}

#[test]
fn non_success_status_is_still_a_transport_success() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/teapot");
        then.status(418).body("short and stout");
    });

    let client = ReqwestHttpClient::default();
    let response = client.execute(request("GET", server.url("/teapot"))).unwrap();

    assert_eq!(418, response.status_code);
    assert_eq!(b"short and stout".to_vec(), response.body);
}

#[test]
fn invalid_method_fails_to_build() {
    let client = ReqwestHttpClient::default();
    let err = client
        .execute(request("NOT A METHOD", "http://localhost/ok".to_string()))
        .unwrap_err();

    match err {
        Error::RequestBuild { method, .. } => assert_eq!("NOT A METHOD", method),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn malformed_url_fails_to_build() {
    let client = ReqwestHttpClient::default();
    let err = client
        .execute(request("GET", "not a url".to_string()))
        .unwrap_err();

    assert!(matches!(err, Error::RequestBuild { .. }));
}

#[test]
fn invalid_header_name_fails_to_build() {
    let client = ReqwestHttpClient::default();
    let mut bad = request("GET", "http://localhost/ok".to_string());
    bad.headers = vec![("not a header".to_string(), "value".to_string())];

    let err = client.execute(bad).unwrap_err();
    assert!(matches!(err, Error::RequestBuild { .. }));
}

#[test]
fn connection_refused_is_a_transport_error() {
    let client = ReqwestHttpClient::default();
    let err = client
        .execute(request("GET", "http://127.0.0.1:1/refused".to_string()))
        .unwrap_err();

    match err {
        Error::Transport { path, .. } => assert_eq!("/refused", path),
        other => panic!("unexpected error: {:?}", other),
    }
}
