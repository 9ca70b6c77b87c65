//! The transport-binding contract.

use async_trait::async_trait;

use crate::error::Result;
use crate::params::CallParams;
use crate::reply::SoapReply;

/// A wire-level SOAP binding.
///
/// The binding owns the whole transport concern: serializing a
/// [`CallParams`] tree into a request envelope, the network round trip, and
/// deserializing the response into a [`SoapReply`] field mapping. The
/// session layer never looks below this trait.
///
/// A binding is driven one call at a time; implementations are free to keep
/// per-call mutable state (session ids, sequence counters) behind
/// `&mut self`.
#[async_trait]
pub trait SoapBinding: Send {
    /// Construct a binding against a fully qualified service endpoint URL.
    fn bind(endpoint: &str) -> Result<Self>
    where
        Self: Sized;

    /// Authenticate against the service. Returns the raw login reply.
    ///
    /// A rejected login is reported through the binding's own error type;
    /// callers see it unchanged.
    async fn login(&mut self, username: &str, password: &str) -> Result<SoapReply>;

    /// Invoke a remote operation and return the raw reply mapping.
    async fn call(&mut self, operation: &str, params: &CallParams) -> Result<SoapReply>;
}
