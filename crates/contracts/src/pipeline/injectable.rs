use serde::{Deserialize, Serialize};

/// Runtime type and `repr()` of an injectable value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectableRepr {
    #[serde(rename = "type")]
    pub type_name: String,
    pub repr: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_key_is_renamed() {
        let repr: InjectableRepr = serde_json::from_value(json!({
            "type": "<class 'float'>",
            "repr": "0.5"
        }))
        .unwrap();
        assert_eq!(repr.type_name, "<class 'float'>");
        assert_eq!(repr.repr, "0.5");
    }
}
