//! Partner API sessions: establishment and call dispatch.

use forcewrap_soap::{CallParams, Fault, SoapBinding};
use serde_json::Value;
use tracing::instrument;

use crate::config::SessionConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::types::SUPPORTED_API_VERSIONS;

mod core;
mod utility;

/// An authenticated Partner API session.
///
/// Holds the transport binding (exclusively owned) and the result-wrapping
/// flag, both fixed when the session is established. A session is reusable
/// for sequential calls; whether concurrent use is safe is up to the
/// binding implementation.
///
/// # Example
///
/// ```rust,ignore
/// use forcewrap_partner::{Environment, Session, SessionConfig};
///
/// let config = SessionConfig::builder()
///     .with_environment(Environment::Test)
///     .build();
/// let mut session = Session::<MyBinding>::connect("user@example.com", "hunter2token", config).await?;
///
/// // Results always come back as an array (or None when the reply is empty).
/// let records = session.query("SELECT Id, Name FROM Account").await?;
/// ```
#[derive(Debug)]
pub struct Session<B> {
    binding: B,
    wrap_results: bool,
}

impl<B: SoapBinding> Session<B> {
    /// Establish a session.
    ///
    /// Resolves the endpoint URL for the configured environment and version,
    /// constructs the binding against it, and logs in with the given
    /// credentials. Binding and login failures propagate unchanged.
    ///
    /// A version outside [`SUPPORTED_API_VERSIONS`] is accepted with a
    /// warning; it is advisory, not a validation gate.
    #[instrument(skip(username, password, config), fields(environment = %config.environment, version = %config.version))]
    pub async fn connect(username: &str, password: &str, config: SessionConfig) -> Result<Self> {
        if !SUPPORTED_API_VERSIONS.contains(&config.version.as_str()) {
            tracing::warn!(
                version = %config.version,
                "Partner API version is not on the supported list; continuing anyway"
            );
        }

        let endpoint = config.environment.endpoint_url(&config.version);
        let mut binding = B::bind(&endpoint)?;
        binding.login(username, password).await?;

        Ok(Self {
            binding,
            wrap_results: config.wrap_results,
        })
    }

    /// Assemble a session from an already logged-in binding.
    pub fn from_parts(binding: B, wrap_results: bool) -> Self {
        Self {
            binding,
            wrap_results,
        }
    }

    /// The underlying transport binding.
    pub fn binding(&self) -> &B {
        &self.binding
    }

    /// Mutable access to the underlying transport binding.
    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    /// Whether single-element results are wrapped into a one-element array.
    pub fn wrap_results(&self) -> bool {
        self.wrap_results
    }

    /// Invoke a remote operation and normalize the reply.
    ///
    /// The reply is inspected in order:
    ///
    /// 1. A reply carrying a `Fault` field fails with [`ErrorKind::Fault`],
    ///    no matter what else the reply contains.
    /// 2. The payload is looked up under `"<operation>Response"` → `result`.
    ///    A reply without that path is `Ok(None)` - no data, not an error.
    /// 3. With result wrapping on, a bare payload value is coerced into a
    ///    one-element array so callers always see a uniform container shape;
    ///    an array payload passes through as-is. With wrapping off, the
    ///    payload is returned exactly as extracted.
    #[instrument(skip(self, params))]
    pub async fn invoke(&mut self, operation: &str, params: CallParams) -> Result<Option<Value>> {
        let reply = self.binding.call(operation, &params).await?;

        // A fault-shaped reply wins over anything else in it.
        if let Some(fault) = Fault::from_reply(&reply) {
            return Err(Error::new(ErrorKind::Fault {
                fault_code: fault.faultcode,
                fault_string: fault.faultstring,
            }));
        }

        let response_field = format!("{operation}Response");
        let data = match reply
            .get(&response_field)
            .and_then(|response| response.get("result"))
        {
            Some(Value::Null) | None => None,
            Some(value) => Some(value.clone()),
        };

        Ok(if self.wrap_results {
            data.map(ensure_array)
        } else {
            data
        })
    }
}

/// Coerce a bare value into a one-element array; arrays pass through.
fn ensure_array(value: Value) -> Value {
    match value {
        Value::Array(_) => value,
        other => Value::Array(vec![other]),
    }
}
