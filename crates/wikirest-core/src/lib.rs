//! # wikirest-core
//!
//! Resource addressing for the wiki REST API.
//!
//! This crate provides:
//! - [`ResourceKind`] definitions for every addressable resource
//! - Route resolution from kind + parameters to a concrete URI path
//! - Parsing of newline-delimited list response bodies
//!
//! Everything here is pure: no I/O, no state beyond the static route
//! table. The HTTP layer lives in `wikirest-http`.
//!
//! ## Example
//!
//! ```rust
//! use wikirest_core::{resolve, ResourceKind};
//!
//! let path = resolve(ResourceKind::Page, &[("ws", "admin"), ("pname", "start here")]).unwrap();
//! assert_eq!(path, "/data/workspaces/admin/pages/start%20here");
//! ```

mod error;
mod kind;
mod list;
mod routes;

pub use error::RouteError;
pub use kind::{ResourceKind, USERS_PREFIX, WORKSPACES_PREFIX};
pub use list::parse_list;
pub use routes::{resolve, resolve_partial};
