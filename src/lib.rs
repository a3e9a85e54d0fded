//! # corvo
//!
//! corvo is a minimal REST client core for the Correios JSON APIs. A request
//! is assembled fluently from a URL, a method, and a list of options (extra
//! headers, a JSON body, a decode target), then executed as a single
//! synchronous call with a fixed 5-second timeout.
//!
//! Every request is sent with `content-type: application/json`; an explicit
//! [`with_header`] for the same key overrides the default. Status codes 200
//! and 201 are the only successes. Any other status surfaces the server's
//! response payload verbatim as an [`Error::Server`].
//!
//! ```no_run
//! use corvo::{with_body, with_decode, RestClient, BASE_PROD_URL};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize)]
//! struct PrePostagem {
//!     codigo_servico: String,
//! }
//!
//! #[derive(Deserialize, Default)]
//! struct Recibo {
//!     id: String,
//! }
//!
//! fn main() -> corvo::Result<()> {
//!     let client = RestClient::new();
//!     let pedido = PrePostagem {
//!         codigo_servico: "03220".to_string(),
//!     };
//!     let mut recibo = Recibo::default();
//!
//!     client
//!         .build_request(
//!             format!("{}/prepostagem/v1/prepostagens", BASE_PROD_URL),
//!             "POST",
//!             vec![with_body(&pedido), with_decode(&mut recibo)],
//!         )
//!         .execute()?;
//!
//!     println!("registrado: {}", recibo.id);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod executor;
pub mod http_client;
pub mod options;

pub use crate::error::Error;
pub use crate::executor::{PreparedRequest, RestClient};
pub use crate::options::{with_body, with_decode, with_header, RequestOption, RequestOptions};

pub type Result<T> = std::result::Result<T, Error>;

/// Production entry point for the Correios APIs. Callers compose full
/// request URLs against it; the client does not enforce its use.
pub const BASE_PROD_URL: &str = "https://api.correios.com.br";

pub struct ClientConfig {
    pub ssl_check: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { ssl_check: true }
    }
}

impl ClientConfig {
    pub fn new(ssl_check: bool) -> Self {
        Self { ssl_check }
    }
}
