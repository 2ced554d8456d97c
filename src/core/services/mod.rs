pub mod client;
pub mod endpoints;
pub mod error;
pub mod fetch;
pub mod generation;
pub mod http;

#[cfg(test)]
pub mod testing;

pub use client::*;
pub use error::*;
pub use fetch::*;
pub use generation::*;
pub use http::*;

/// The client the running app talks to; provided through context by `App`.
pub type Api = ApiClient<FetchTransport>;
