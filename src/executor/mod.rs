use crate::http_client::reqwest::ReqwestHttpClient;
use crate::http_client::{HttpClient, Request};
use crate::options::{RequestOption, RequestOptions};
use crate::{ClientConfig, Error, Result};


const CONTENT_TYPE: &str = "content-type";
const JSON_MIME: &str = "application/json";

/// Executes assembled requests through a shared transport. The transport is
/// built once and reused; each call still carries the fixed 5-second
/// timeout.
pub struct RestClient {
    transport: Box<dyn HttpClient>,
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RestClient {
    pub fn new() -> RestClient {
        RestClient::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> RestClient {
        RestClient {
            transport: Box::new(ReqwestHttpClient::create(config)),
        }
    }

    pub fn with_transport(transport: Box<dyn HttpClient>) -> RestClient {
        RestClient { transport }
    }

    /// Assembles a request by applying `options` in order onto a fresh
    /// configuration. The returned [`PreparedRequest`] is good for exactly
    /// one [`execute`](PreparedRequest::execute).
    pub fn build_request<'a>(
        &'a self,
        url: impl Into<String>,
        method: impl Into<String>,
        options: Vec<RequestOption<'a>>,
    ) -> PreparedRequest<'a> {
        let mut config = RequestOptions::default();
        for option in options {
            option.apply(&mut config);
        }

        PreparedRequest {
            transport: self.transport.as_ref(),
            url: url.into(),
            method: method.into(),
            config,
        }
    }
}

/// A single outbound call, assembled and ready to dispatch.
pub struct PreparedRequest<'a> {
    transport: &'a dyn HttpClient,
    url: String,
    method: String,
    config: RequestOptions<'a>,
}

impl PreparedRequest<'_> {
    /// Runs the full pipeline: encode the body, apply headers, dispatch,
    /// classify the status, and decode the payload into the configured
    /// target. Returns the raw response bytes on success.
    pub fn execute(self) -> Result<Vec<u8>> {
        let PreparedRequest {
            transport,
            url,
            method,
            config,
        } = self;
        let RequestOptions {
            headers,
            body,
            decode,
        } = config;

        let payload = match &body {
            Some(encode) => encode().map_err(Error::Encoding)?,
            None => Vec::new(),
        };

        // The default goes first so a caller-supplied content-type wins.
        let mut wire_headers = vec![(CONTENT_TYPE.to_string(), JSON_MIME.to_string())];
        wire_headers.extend(headers);

        tracing::debug!("executing {} {}", method, url);
        let response = transport.execute(Request {
            method,
            url,
            headers: wire_headers,
            body: payload,
        })?;

        if response.status_code != 200 && response.status_code != 201 {
            tracing::debug!("request rejected with status {}", response.status_code);
            return Err(Error::Server {
                status: response.status_code,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        if let Some(decode) = decode {
            decode(&response.body).map_err(Error::Decoding)?;
        }

        Ok(response.body)
    }
}
