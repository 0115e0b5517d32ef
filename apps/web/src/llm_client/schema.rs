//! Response schema declarations sent alongside a prompt.
//!
//! Serializes to the OpenAPI subset Gemini accepts in
//! `generationConfig.responseSchema`.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
}

/// A required output shape. Build with [`ResponseSchema::object`] and friends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ResponseSchema>,
    /// Declaration order of `properties`; the map itself is sorted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl ResponseSchema {
    fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            items: None,
            properties: BTreeMap::new(),
            property_ordering: Vec::new(),
            required: Vec::new(),
        }
    }

    pub fn object() -> Self {
        Self::of(SchemaType::Object)
    }

    pub fn string() -> Self {
        Self::of(SchemaType::String)
    }

    pub fn array_of(items: ResponseSchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of(SchemaType::Array)
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a required property to an object schema.
    pub fn required_property(mut self, name: &str, schema: ResponseSchema) -> Self {
        self.properties.insert(name.to_string(), schema);
        self.property_ordering.push(name.to_string());
        self.required.push(name.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_with_string_array_serializes_to_gemini_shape() {
        let schema = ResponseSchema::object().required_property(
            "tags",
            ResponseSchema::array_of(ResponseSchema::string()).describe("Short tags."),
        );

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "OBJECT",
                "properties": {
                    "tags": {
                        "type": "ARRAY",
                        "description": "Short tags.",
                        "items": { "type": "STRING" }
                    }
                },
                "propertyOrdering": ["tags"],
                "required": ["tags"]
            })
        );
    }

    #[test]
    fn test_property_ordering_keeps_declaration_order() {
        let schema = ResponseSchema::object()
            .required_property("zeta", ResponseSchema::string())
            .required_property("alpha", ResponseSchema::string());

        assert_eq!(schema.property_ordering, vec!["zeta", "alpha"]);
        assert_eq!(schema.required, vec!["zeta", "alpha"]);
    }
}
