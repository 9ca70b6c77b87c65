//! Reply shapes returned by a transport binding.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

/// A raw reply: a mapping from field name to value.
///
/// The response-field names are only known at call time (the payload for an
/// operation lives under `"<operation>Response"`), so replies stay a generic
/// string-keyed mapping rather than a set of static fields.
pub type SoapReply = Map<String, Value>;

/// The fault element the server returns in place of result data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Fault {
    /// The server's fault code, verbatim.
    #[serde(default)]
    pub faultcode: String,
    /// The server's fault message, verbatim.
    #[serde(default)]
    pub faultstring: String,
}

impl Fault {
    /// Extract the `Fault` element from a raw reply, if one is present.
    ///
    /// A malformed fault element still counts as a fault; missing sub-fields
    /// come back empty rather than masking the fault itself.
    pub fn from_reply(reply: &SoapReply) -> Option<Fault> {
        reply
            .get("Fault")
            .map(|value| serde_json::from_value(value.clone()).unwrap_or_default())
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.faultcode, self.faultstring)
    }
}
