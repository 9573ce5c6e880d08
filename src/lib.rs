//! Minimal HTTP path router.
//!
//! Patterns such as `/posts/:id` or `/:namespace/:hash.:ext` are compiled once
//! at registration time. Requests are resolved by scanning the rules in
//! registration order; the first rule whose pattern matches the path decides
//! between a matched handler, an `OPTIONS` preflight answer (204) or a
//! `405 Method Not Allowed`.
//!
//! # Example usage
//!
//! ```
//! use http::{header, Method, StatusCode};
//! use router::{Dispatch, RouterBuilder};
//!
//! let router = RouterBuilder::new()
//!     .get("/posts/:id", "show")
//!     .delete("/posts/:id", "destroy")
//!     .build();
//!
//! match router.dispatch(&Method::GET, "/posts/1") {
//!     Dispatch::Matched { params, metadata } => {
//!         assert_eq!(params["id"], "1");
//!         assert_eq!(*metadata, "show");
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//!
//! let response = router
//!     .dispatch(&Method::PUT, "/posts/1")
//!     .into_response::<()>()
//!     .unwrap();
//! assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
//! assert_eq!(response.headers()[header::ALLOW], "OPTIONS,GET,DELETE");
//! ```
pub mod error;
pub mod router;

pub use error::{Error, Result};
pub use router::{
    parse_method, tokenize, Dispatch, Params, PathMatcher, Pattern, Router, RouterBuilder, Rule,
    Segment,
};
