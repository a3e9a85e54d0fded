use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};

use crate::http_client::{HttpClient, Request, Response, REQUEST_TIMEOUT};
use crate::{ClientConfig, Error, Result};

pub struct ReqwestHttpClient {
    client: Client,
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::create(ClientConfig::default())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn create(config: ClientConfig) -> ReqwestHttpClient
    where
        Self: Sized,
    {
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.ssl_check)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();

        ReqwestHttpClient { client }
    }

    fn execute(&self, request: Request) -> Result<Response> {
        let Request {
            method,
            url,
            headers,
            body,
        } = request;

        let parsed_method = Method::from_bytes(method.as_bytes())
            .map_err(|e| build_error(&method, e.to_string()))?;
        let parsed_url = Url::parse(&url).map_err(|e| build_error(&method, e.to_string()))?;
        let path = parsed_url.path().to_string();

        let mut header_map = HeaderMap::new();
        for (name, value) in &headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| build_error(&method, e.to_string()))?;
            let value =
                HeaderValue::from_str(value).map_err(|e| build_error(&method, e.to_string()))?;
            header_map.insert(name, value);
        }

        let response = self
            .client
            .request(parsed_method, parsed_url)
            .headers(header_map)
            .body(body)
            .send()
            .map_err(|e| Error::Transport { path, source: e })?;

        let status_code = response.status().as_u16();
        let body = response.bytes().map_err(Error::BodyRead)?.to_vec();

        Ok(Response { status_code, body })
    }
}

fn build_error(method: &str, reason: String) -> Error {
    Error::RequestBuild {
        method: method.to_string(),
        reason,
    }
}
