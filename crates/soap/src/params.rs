//! Call parameter structures.

use serde_json::{Map, Value};

/// Parameters for a remote operation.
///
/// A remote call takes either no parameters, an ordered sequence of values,
/// or a mapping from field name to value. The binding owns turning any of
/// these into the wire format; the session layer passes them through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CallParams {
    /// The operation takes no parameters.
    #[default]
    None,
    /// An ordered sequence of values.
    Positional(Vec<Value>),
    /// A mapping from field name to value.
    Named(Map<String, Value>),
}

impl CallParams {
    /// Build named parameters from `(field, value)` pairs.
    pub fn named<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Named(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build positional parameters from a sequence of values.
    pub fn positional<V, I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Returns true if no parameters will be sent.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Positional(values) => values.is_empty(),
            Self::Named(fields) => fields.is_empty(),
        }
    }
}

impl From<Vec<Value>> for CallParams {
    fn from(values: Vec<Value>) -> Self {
        Self::Positional(values)
    }
}

impl From<Map<String, Value>> for CallParams {
    fn from(fields: Map<String, Value>) -> Self {
        Self::Named(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_none() {
        assert_eq!(CallParams::default(), CallParams::None);
        assert!(CallParams::default().is_empty());
    }

    #[test]
    fn test_named_from_pairs() {
        let params = CallParams::named([("queryString", "SELECT Id FROM Account")]);

        let CallParams::Named(fields) = params else {
            panic!("expected named params");
        };
        assert_eq!(fields["queryString"], json!("SELECT Id FROM Account"));
    }

    #[test]
    fn test_positional_from_values() {
        let params = CallParams::positional([json!("001x0"), json!("001x1")]);

        let CallParams::Positional(values) = params else {
            panic!("expected positional params");
        };
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_is_empty() {
        assert!(CallParams::None.is_empty());
        assert!(CallParams::Positional(vec![]).is_empty());
        assert!(CallParams::Named(Map::new()).is_empty());

        assert!(!CallParams::positional([json!(1)]).is_empty());
        assert!(!CallParams::named([("userId", "005x0")]).is_empty());
    }

    #[test]
    fn test_from_impls() {
        let positional: CallParams = vec![json!(1), json!(2)].into();
        assert!(matches!(positional, CallParams::Positional(_)));

        let mut fields = Map::new();
        fields.insert("ids".to_string(), json!(["001x0"]));
        let named: CallParams = fields.into();
        assert!(matches!(named, CallParams::Named(_)));
    }
}
