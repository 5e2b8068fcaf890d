//! Component descriptor types produced by metadata extraction.

use std::fmt;

use camino::Utf8PathBuf;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A UI component as described by the extraction step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Kebab-case custom element tag, unique within a registry.
    pub tag_name: String,
    /// Name of the implementing class.
    pub class_name: String,
    /// Members in declaration order.
    #[serde(default)]
    pub members: IndexMap<String, MemberDescriptor>,
    /// Canonical path of the owning source file.
    pub source_path: Utf8PathBuf,
}

impl ComponentDescriptor {
    /// Members whose kind is reflected to a markup attribute.
    pub fn observable_members(&self) -> impl Iterator<Item = (&str, &MemberDescriptor)> {
        self.members
            .iter()
            .filter(|(_, member)| member.member_kind.is_observable_attribute())
            .map(|(name, member)| (name.as_str(), member))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDescriptor {
    pub member_kind: MemberKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<AttributeType>,
}

/// Kind of a component member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
    Prop,
    PropMutable,
    PropContext,
    PropConnect,
    State,
    Element,
    Method,
}

impl MemberKind {
    /// Whether members of this kind need a typed attribute declaration.
    pub fn is_observable_attribute(self) -> bool {
        matches!(self, Self::Prop | Self::PropMutable)
    }
}

/// Literal type text of an attribute plus the symbols it mentions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeType {
    pub text: String,
    #[serde(default)]
    pub type_references: Vec<TypeReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypeReference {
    pub name: String,
    pub location: LocationKind,
    /// Declared source location, present for imported references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Where a referenced type is declared.
///
/// Unrecognised kinds are kept verbatim instead of failing deserialization
/// so generation can report the member and component at fault.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum LocationKind {
    /// Ambient type, always visible.
    Global,
    /// Declared in the component's own source file.
    Local,
    /// Imported from another module.
    Import,
    Unknown(String),
}

impl From<String> for LocationKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "global" => Self::Global,
            "local" => Self::Local,
            "import" | "imported" => Self::Import,
            _ => Self::Unknown(s),
        }
    }
}

impl From<LocationKind> for String {
    fn from(kind: LocationKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Local => f.write_str("local"),
            Self::Import => f.write_str("import"),
            Self::Unknown(kind) => f.write_str(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_kind_parsing() {
        assert_eq!(LocationKind::from("global".to_string()), LocationKind::Global);
        assert_eq!(LocationKind::from("imported".to_string()), LocationKind::Import);
        assert_eq!(
            LocationKind::from("ambient".to_string()),
            LocationKind::Unknown("ambient".to_string())
        );
    }

    #[test]
    fn test_descriptor_deserialize() {
        let json = r#"{
            "tagName": "user-card",
            "className": "UserCard",
            "sourcePath": "/app/src/user-card.tsx",
            "members": {
                "user": {
                    "memberKind": "prop",
                    "attributeType": {
                        "text": "User",
                        "typeReferences": [
                            { "name": "User", "location": "import", "path": "./types" }
                        ]
                    }
                },
                "open": { "memberKind": "state" }
            }
        }"#;

        let cmp: ComponentDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(cmp.tag_name, "user-card");
        assert_eq!(cmp.members.len(), 2);
        let observable: Vec<_> = cmp.observable_members().map(|(n, _)| n).collect();
        assert_eq!(observable, vec!["user"]);

        let ty = cmp.members["user"].attribute_type.as_ref().unwrap();
        assert_eq!(ty.type_references[0].location, LocationKind::Import);
        assert_eq!(ty.type_references[0].path.as_deref(), Some("./types"));
    }

    #[test]
    fn test_members_keep_declaration_order() {
        let json = r#"{
            "tagName": "x-el",
            "className": "XEl",
            "sourcePath": "/x.tsx",
            "members": {
                "zeta": { "memberKind": "prop", "attributeType": { "text": "string" } },
                "alpha": { "memberKind": "propMutable", "attributeType": { "text": "number" } }
            }
        }"#;

        let cmp: ComponentDescriptor = serde_json::from_str(json).unwrap();
        let names: Vec<_> = cmp.members.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }
}
