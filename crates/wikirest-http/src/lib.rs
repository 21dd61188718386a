//! # wikirest-http
//!
//! Resource client for the wiki REST API.
//!
//! This crate provides:
//! - [`Session`] configuration (server, credentials, workspace, list
//!   modifiers)
//! - The [`Transport`] capability and a blocking reqwest implementation
//! - [`WikiClient`] with one method per resource operation
//!
//! Every operation performs exactly one synchronous round trip: resolve
//! the route, send the request with Basic authentication, classify the
//! status code into a typed outcome. There is no retry, caching, or
//! timeout policy in this layer — those belong to the injected transport.
//!
//! One client instance is one logical session. The session configuration
//! is plain mutable state; do not share a client across concurrent
//! callers without external serialization.
//!
//! ## Example
//!
//! ```ignore
//! use wikirest_http::{Session, WikiClient};
//!
//! let mut session = Session::new("https://wiki.example.com");
//! session.set_credentials("alice", "secret");
//! session.set_workspace("devnull");
//!
//! let client = WikiClient::new(session)?;
//! let body = client.get_page("start here")?;
//! let pages = client.get_pages()?;
//! ```

mod client;
mod error;
mod session;
mod transport;

pub use client::{WikiClient, PLAIN_TEXT, WIKI_MARKUP};
pub use error::ClientError;
pub use session::Session;
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError};
