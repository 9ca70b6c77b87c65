//! # forcewrap-soap
//!
//! The transport-binding contract for the Salesforce Partner (SOAP) API.
//!
//! This crate performs no I/O. It defines the boundary a wire-level SOAP
//! binding must satisfy so the session layer (`forcewrap-partner`) can stay
//! transport-agnostic:
//!
//! - [`SoapBinding`] - constructor-from-endpoint, login, and a generic call
//!   operation
//! - [`CallParams`] - the parameter structure passed to a remote operation
//! - [`SoapReply`] - the raw string-keyed reply mapping a binding returns
//! - [`Fault`] - the fault element a reply carries when the server reports
//!   an error instead of result data
//!
//! ## Example
//!
//! ```rust,ignore
//! use forcewrap_soap::{CallParams, SoapBinding, SoapReply};
//!
//! struct MyBinding { /* wire-level state */ }
//!
//! #[async_trait::async_trait]
//! impl SoapBinding for MyBinding {
//!     fn bind(endpoint: &str) -> forcewrap_soap::Result<Self> {
//!         /* open wire-level resources against `endpoint` */
//!         # todo!()
//!     }
//!
//!     async fn login(&mut self, username: &str, password: &str)
//!         -> forcewrap_soap::Result<SoapReply> {
//!         # todo!()
//!     }
//!
//!     async fn call(&mut self, operation: &str, params: &CallParams)
//!         -> forcewrap_soap::Result<SoapReply> {
//!         # todo!()
//!     }
//! }
//! ```

mod binding;
mod error;
mod params;
mod reply;

pub use binding::SoapBinding;
pub use error::{Error, ErrorKind, Result};
pub use params::CallParams;
pub use reply::{Fault, SoapReply};
