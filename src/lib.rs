//! Ordered pre-request guard pipeline with short-circuit semantics.
//!
//! This crate provides the security layer that runs before a protected
//! request handler:
//! - **Guards**: pure checks over the current request that either allow it
//!   to proceed or terminate it with a response
//! - **Pipeline**: an ordered, short-circuiting sequence of guards shared
//!   read-only across concurrent requests
//! - **Built-in hooks**: authentication, claim checks, claim validation,
//!   and HTTPS enforcement
//!
//! # Core Types
//!
//! - [`RequestContext`]: per-request snapshot (identity, URL, method)
//! - [`Identity`]: authenticated principal carrying a claim set
//! - [`Guard`]: a single check producing a [`GuardOutcome`]
//! - [`Pipeline`]: ordered guard sequence with append/prepend/evaluate
//! - [`Response`]: terminal outcome (status code, optional redirect)
//!
//! # Examples
//!
//! ```
//! use guard_core::{secure, GuardOutcome, Identity, Pipeline, RequestContext};
//! use url::Url;
//!
//! // Registration happens once, during route/module setup.
//! let mut pipeline = Pipeline::new();
//! secure::require_claims(&mut pipeline, ["admin"]);
//!
//! // Evaluation happens per request, before the handler.
//! let ctx = RequestContext::new(
//!     Some(Identity::new("alice", ["admin", "user"])),
//!     Url::parse("https://example.com/admin").unwrap(),
//!     "GET",
//! );
//!
//! assert!(matches!(pipeline.evaluate(&ctx), Ok(GuardOutcome::Continue)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod guard;
pub mod hooks;
mod identity;
mod outcome;
mod pipeline;
mod request;
mod response;
pub mod secure;

pub use error::EvaluationError;
pub use guard::Guard;
pub use identity::Identity;
pub use outcome::GuardOutcome;
pub use pipeline::Pipeline;
pub use request::RequestContext;
pub use response::{Response, StatusCode};
pub use secure::SecuredModule;
