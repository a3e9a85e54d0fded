use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;


type EncodeBody<'a> = Box<dyn Fn() -> serde_json::Result<Vec<u8>> + 'a>;
type DecodeInto<'a> = Box<dyn FnOnce(&[u8]) -> serde_json::Result<()> + 'a>;

/// Per-request configuration accumulated by applying [`RequestOption`]s in
/// order. Later options targeting the same field overwrite earlier ones.
#[derive(Default)]
pub struct RequestOptions<'a> {
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<EncodeBody<'a>>,
    pub(crate) decode: Option<DecodeInto<'a>>,
}

/// A single deferred mutation of [`RequestOptions`]. Options carry no
/// validation of their own; everything is checked at execution time.
pub struct RequestOption<'a>(Box<dyn FnOnce(&mut RequestOptions<'a>) + 'a>);

impl<'a> RequestOption<'a> {
    pub(crate) fn apply(self, options: &mut RequestOptions<'a>) {
        (self.0)(options)
    }
}

/// Sets a request header. Per key, the last value given wins.
pub fn with_header<'a>(name: impl Into<String>, value: impl Into<String>) -> RequestOption<'a> {
    let (name, value) = (name.into(), value.into());
    RequestOption(Box::new(move |options| {
        options.headers.insert(name, value);
    }))
}

/// Sets the request body. The value is borrowed and only encoded as JSON
/// once the request executes.
pub fn with_body<'a, B>(body: &'a B) -> RequestOption<'a>
where
    B: Serialize + ?Sized,
{
    RequestOption(Box::new(move |options| {
        options.body = Some(Box::new(move || serde_json::to_vec(body)));
    }))
}

/// Sets the decode target. On a successful response the body is decoded as
/// JSON into `target`; without this option the payload is ignored.
pub fn with_decode<'a, T>(target: &'a mut T) -> RequestOption<'a>
where
    T: DeserializeOwned,
{
    RequestOption(Box::new(move |options| {
        options.decode = Some(Box::new(move |bytes| {
            *target = serde_json::from_slice(bytes)?;
            Ok(())
        }));
    }))
}
