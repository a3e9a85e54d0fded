/// Failure classes surfaced by [`execute`](crate::PreparedRequest::execute).
///
/// Every variant is terminal for the call that produced it: the client
/// performs no retries and no fallback.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured request body could not be encoded as JSON. No network
    /// call was made.
    #[error("failed to encode the request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The method, URL, or a header could not form a valid request.
    #[error("failed to build a {method} request: {reason}")]
    RequestBuild { method: String, reason: String },

    /// The request never produced a response: DNS, connection, TLS, or
    /// timeout failure.
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but its body could not be read.
    #[error("failed to read the response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The server answered with a status other than 200 or 201. The display
    /// text is the verbatim response payload.
    #[error("{body}")]
    Server { status: u16, body: String },

    /// The response body is not valid JSON for the configured decode target.
    #[error("failed to decode the response body: {0}")]
    Decoding(#[source] serde_json::Error),
}
