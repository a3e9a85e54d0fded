use std::time::Duration;

use crate::{ClientConfig, Result};

#[cfg(test)]
mod tests;

pub mod reqwest;

/// Fixed per-call timeout, measured from dispatch. A call that has not
/// completed within this window fails with a transport error.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A fully assembled outbound request. Header order is application order;
/// duplicate keys resolve last-wins when converted to a real header map.
pub struct Request {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Status code plus the fully buffered response body.
#[derive(Debug)]
pub struct Response {
    pub status_code: u16,
    pub body: Vec<u8>,
}

pub trait HttpClient {
    fn create(config: ClientConfig) -> Self
    where
        Self: Sized;

    fn execute(&self, request: Request) -> Result<Response>;
}
