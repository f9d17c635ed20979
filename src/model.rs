//! Documentation model produced by the mapper, independent of output format.

use serde::Serialize;

/// A module declared with `@ngdoc module`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Deprecation reason; present means deprecated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    pub entities: Vec<Entity>,
}

/// A component, service, directive, or any other author-chosen kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    /// Open-ended kind from the `@ngdoc` tag.
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: Vec<Attribute>,
    /// `@requires` names in declaration order.
    pub requires: Vec<String>,
    pub methods: Vec<Method>,
}

/// A parameter or (for components) a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub optional: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Binding operator (`@`, `&`, `<`, `=`, ...) of a component attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<ReturnType>,
}

/// `@returns {type} description`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReturnType {
    /// The return tag's description text.
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
}

/// Fields shared by modules, entities and methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseEntity {
    pub name: String,
    pub description: Option<String>,
    pub deprecated: Option<String>,
}

impl From<BaseEntity> for Module {
    fn from(base: BaseEntity) -> Self {
        Module {
            name: base.name,
            description: base.description,
            deprecated: base.deprecated,
            entities: Vec::new(),
        }
    }
}

impl From<BaseEntity> for Method {
    fn from(base: BaseEntity) -> Self {
        Method {
            name: base.name,
            description: base.description,
            deprecated: base.deprecated,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_omits_absent_fields() {
        let method = Method {
            name: "sayWhat".to_string(),
            returns: Some(ReturnType {
                name: "message".to_string(),
                ty: Some("object".to_string()),
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "sayWhat", "returns": {"name": "message", "type": "object"}})
        );
    }

    #[test]
    fn serialize_attribute_camel_case() {
        let attr = Attribute {
            name: "parameter".to_string(),
            optional: true,
            ty: Some("boolean".to_string()),
            default_value: Some("true".to_string()),
            binding: Some("@".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(json["defaultValue"], "true");
        assert_eq!(json["type"], "boolean");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn serialize_entity_kind_as_type() {
        let entity = Entity {
            name: "myDirective".to_string(),
            kind: "directive".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["type"], "directive");
        assert_eq!(json["requires"], serde_json::json!([]));
    }
}
