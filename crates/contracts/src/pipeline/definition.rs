use serde::{Deserialize, Serialize};

/// Source location and highlighted body of a registered function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSource {
    /// File the function was defined in
    pub filename: String,
    /// First line of the definition
    pub lineno: u32,
    /// Highlighted markup produced by the server, injected verbatim
    pub html: String,
    /// Raw source text (absent on older servers)
    #[serde(default)]
    pub text: Option<String>,
}

/// Definition of a table, column or injectable, discriminated by `type`.
///
/// The set of tags a given endpoint returns depends on the entity kind:
/// tables use `dataframe`/`function`, columns `series`/`local`/`function`,
/// injectables `variable`/`function`. Any other tag decodes to
/// [`DefinitionPayload::Unknown`] instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DefinitionPayload {
    /// Table registered as a literal DataFrame
    Dataframe,
    /// Column registered as a literal Series
    Series,
    /// Column stored directly on its table
    Local,
    /// Injectable registered as a plain value
    Variable,
    /// Anything computed by a registered function
    Function(FunctionSource),
    #[serde(other)]
    Unknown,
}

impl DefinitionPayload {
    /// Short name of the discriminator, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Dataframe => "dataframe",
            Self::Series => "series",
            Self::Local => "local",
            Self::Variable => "variable",
            Self::Function(_) => "function",
            Self::Unknown => "unknown",
        }
    }
}

impl From<FunctionSource> for DefinitionPayload {
    fn from(source: FunctionSource) -> Self {
        Self::Function(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_tags() {
        let cases = [
            ("dataframe", DefinitionPayload::Dataframe),
            ("series", DefinitionPayload::Series),
            ("local", DefinitionPayload::Local),
            ("variable", DefinitionPayload::Variable),
        ];
        for (tag, expected) in cases {
            let payload: DefinitionPayload = serde_json::from_value(json!({ "type": tag })).unwrap();
            assert_eq!(payload, expected);
            assert_eq!(payload.kind(), tag);
        }
    }

    #[test]
    fn test_function_tag_carries_source() {
        let payload: DefinitionPayload = serde_json::from_value(json!({
            "type": "function",
            "filename": "models.py",
            "lineno": 42,
            "text": "def households():\n    pass\n",
            "html": "<div class=\"highlight\"></div>"
        }))
        .unwrap();

        match payload {
            DefinitionPayload::Function(source) => {
                assert_eq!(source.filename, "models.py");
                assert_eq!(source.lineno, 42);
                assert_eq!(source.html, "<div class=\"highlight\"></div>");
                assert!(source.text.unwrap().starts_with("def households"));
            }
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_tag_is_unknown() {
        let payload: DefinitionPayload =
            serde_json::from_value(json!({ "type": "lambda", "extra": 1 })).unwrap();
        assert_eq!(payload, DefinitionPayload::Unknown);
    }

    #[test]
    fn test_untagged_step_body_decodes_as_source() {
        // steps answer with the bare function body, no `type` key
        let source: FunctionSource = serde_json::from_value(json!({
            "filename": "steps.py",
            "lineno": 7,
            "html": "<pre>run</pre>"
        }))
        .unwrap();
        assert_eq!(source.text, None);
        assert_eq!(DefinitionPayload::from(source).kind(), "function");
    }
}
