//! # forcewrap-partner
//!
//! Session wrapper for the Salesforce Partner (SOAP) Web Services API.
//!
//! The Partner API collapses "one result" and "many results" into different
//! wire shapes, because XML-to-native mapping is ambiguous at cardinality
//! one. This crate gives callers a single predictable contract instead:
//! every call goes through one dispatcher ([`Session::invoke`]) that detects
//! server faults, locates the payload under the operation's response field,
//! and (by default) wraps a bare payload into a one-element array.
//!
//! The wire level is behind the [`SoapBinding`] trait from `forcewrap-soap`;
//! this crate never performs I/O of its own.
//!
//! ## Example
//!
//! ```rust,ignore
//! use forcewrap_partner::{Environment, Session, SessionConfig};
//!
//! let config = SessionConfig::builder()
//!     .with_environment(Environment::Test)
//!     .with_version("21.0")
//!     .build();
//!
//! let mut session =
//!     Session::<MyBinding>::connect("user@example.com", "passwordtoken", config).await?;
//!
//! if let Some(records) = session.query("SELECT Id, Name FROM Account").await? {
//!     for record in records.as_array().unwrap() {
//!         println!("{}", record["Name"]);
//!     }
//! }
//! ```

pub use forcewrap_soap::{CallParams, SoapBinding};

mod config;
mod endpoint;
mod error;
mod session;
mod types;

pub use config::{SessionConfig, SessionConfigBuilder};
pub use endpoint::{endpoint_url, Environment};
pub use error::{Error, ErrorKind, Result};
pub use session::Session;
pub use types::{DEFAULT_API_VERSION, SUPPORTED_API_VERSIONS};
