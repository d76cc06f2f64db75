use serde::{Deserialize, Serialize};

/// A single displayable animal fact.
///
/// The wire shape is the flat PascalCase schema: `Id`, `Text`, `Source`,
/// plus optional `Category` and `Image`. Earlier API revisions wrapped the
/// record in a response envelope; this crate supports only the flat shape.
/// A fact is immutable once fetched and replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Fact {
    pub id: String,
    pub text: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let json = r#"{
            "Id": "1",
            "Text": "Cats sleep 70% of their lives",
            "Category": "cats",
            "Source": "http://example.com"
        }"#;
        let fact: Fact = serde_json::from_str(json).unwrap();
        assert_eq!(fact.id, "1");
        assert_eq!(fact.text, "Cats sleep 70% of their lives");
        assert_eq!(fact.source, "http://example.com");
        assert_eq!(fact.category.as_deref(), Some("cats"));
        assert!(fact.image.is_none());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let json = r#"{"Id":"7","Text":"Bees dance","Source":"http://example.com/bees"}"#;
        let fact: Fact = serde_json::from_str(json).unwrap();
        assert!(fact.category.is_none());
        assert!(fact.image.is_none());
    }

    #[test]
    fn serializes_with_pascal_case_keys() {
        let fact = Fact {
            id: "9".into(),
            text: "Owls cannot move their eyes".into(),
            source: "http://example.com/owls".into(),
            category: None,
            image: None,
        };
        let value: serde_json::Value = serde_json::to_value(&fact).unwrap();
        assert_eq!(value["Id"], "9");
        assert!(value.get("Category").is_none());
    }
}
