//! # forcewrap
//!
//! A session wrapper for the Salesforce Partner (SOAP) Web Services API.
//!
//! The heavy lifting lives in two member crates:
//!
//! - **forcewrap-soap** - the transport-binding contract: the [`SoapBinding`]
//!   trait a wire-level SOAP implementation satisfies, plus the call
//!   parameter and reply shapes
//! - **forcewrap-partner** - sessions on top of a binding: endpoint
//!   resolution for live/test environments, login, and a call dispatcher
//!   that surfaces server faults as typed errors and normalizes result
//!   shapes
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use forcewrap::{Environment, Session, SessionConfig};
//!
//! let config = SessionConfig::builder()
//!     .with_environment(Environment::Test)
//!     .build();
//!
//! let mut session =
//!     Session::<MyBinding>::connect("user@example.com", "passwordtoken", config).await?;
//!
//! let accounts = session.query("SELECT Id, Name FROM Account LIMIT 10").await?;
//! ```

// Re-export the member crates for convenient access
pub use forcewrap_partner as partner;
pub use forcewrap_soap as soap;

// Re-export commonly used types at the top level
pub use forcewrap_partner::{endpoint_url, Environment, Session, SessionConfig};
pub use forcewrap_soap::{CallParams, Fault, SoapBinding, SoapReply};
