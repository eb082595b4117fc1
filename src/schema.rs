//! Registry of react-native-svg components and the props they accept.
//!
//! The table itself lives in `schema/react-native-svg.json` and is embedded at
//! compile time. Regenerating that file from the react-native-svg prop types
//! is all it takes to follow a new release.

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::checker::{AttrType, CheckError, Checker};
use crate::error::RnsvgError;

/// The embedded react-native-svg schema description.
pub const BUILTIN_SCHEMA: &str = include_str!("../schema/react-native-svg.json");

static BUILTIN: LazyLock<SchemaRegistry> = LazyLock::new(|| {
    SchemaRegistry::from_json(BUILTIN_SCHEMA).expect("embedded react-native-svg schema is valid")
});

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaFile {
    #[serde(default)]
    groups: IndexMap<String, IndexMap<String, AttrType>>,
    elements: IndexMap<String, ElementDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementDef {
    #[serde(default)]
    extends: Vec<String>,
    #[serde(default)]
    props: IndexMap<String, AttrType>,
}

/// One accepted attribute of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    pub name: String,
    pub ty: AttrType,
}

/// Accepted attributes and their checkers for one component.
#[derive(Debug)]
pub struct SchemaEntry {
    name: String,
    props: Vec<AttributeDescriptor>,
    checkers: HashMap<String, Box<dyn Checker>>,
}

impl SchemaEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepted attributes, in declaration order.
    pub fn props(&self) -> &[AttributeDescriptor] {
        &self.props
    }

    /// Get the checker for a prop.
    pub fn get_prop(&self, name: &str) -> Option<&dyn Checker> {
        self.checkers.get(name).map(|c| c.as_ref())
    }

    /// Check a value against the named prop.
    pub fn check(&self, name: &str, value: &str) -> Result<(), CheckError> {
        self.get_prop(name)
            .ok_or_else(|| CheckError::UnknownProp(name.to_string()))?
            .check(value)
    }
}

/// Immutable table of supported components.
#[derive(Debug)]
pub struct SchemaRegistry {
    entries: IndexMap<String, SchemaEntry>,
}

impl SchemaRegistry {
    /// The registry built from the embedded react-native-svg schema.
    pub fn builtin() -> &'static SchemaRegistry {
        &BUILTIN
    }

    /// Build a registry from a JSON schema description.
    ///
    /// Element entries list shared `groups` in `extends`; their own `props`
    /// come last and override group props of the same name.
    pub fn from_json(json: &str) -> Result<Self, RnsvgError> {
        let file: SchemaFile = serde_json::from_str(json)?;
        let mut entries = IndexMap::with_capacity(file.elements.len());

        for (name, def) in file.elements {
            let mut merged: IndexMap<String, AttrType> = IndexMap::new();
            for group in &def.extends {
                let props = file.groups.get(group).ok_or_else(|| {
                    RnsvgError::InvalidSchema(format!("{name} extends unknown group {group}"))
                })?;
                merged.extend(props.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            merged.extend(def.props);

            let mut checkers = HashMap::with_capacity(merged.len());
            let mut props = Vec::with_capacity(merged.len());
            for (prop, ty) in merged {
                checkers.insert(prop.clone(), ty.checker()?);
                props.push(AttributeDescriptor { name: prop, ty });
            }

            entries.insert(
                name.clone(),
                SchemaEntry {
                    name,
                    props,
                    checkers,
                },
            );
        }

        Ok(Self { entries })
    }

    /// Look up a component by its exact (case-sensitive) name.
    pub fn get(&self, tag: &str) -> Option<&SchemaEntry> {
        self.entries.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Names of all supported components, in schema order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_components() {
        let registry = SchemaRegistry::builtin();
        let tags: Vec<_> = registry.tags().collect();
        assert_eq!(
            tags,
            [
                "Svg",
                "Circle",
                "ClipPath",
                "Ellipse",
                "G",
                "Image",
                "LinearGradient",
                "RadialGradient",
                "Line",
                "Path",
                "Pattern",
                "Polygon",
                "Polyline",
                "Rect",
                "Symbol",
                "Text",
                "TextPath",
                "TSpan",
                "Use",
                "Mask",
                "Defs",
                "Stop",
            ]
        );
        assert!(!registry.contains("svg"));
        assert!(!registry.contains("Foo"));
    }

    #[test]
    fn test_builtin_rect() {
        let rect = SchemaRegistry::builtin().get("Rect").unwrap();
        assert_eq!(rect.name(), "Rect");
        assert!(rect.check("width", "10").is_ok());
        assert!(rect.check("strokeLinecap", "round").is_ok());
        assert!(rect.check("strokeLinecap", "pointy").is_err());
        assert_eq!(
            rect.check("stroke-width", "1"),
            Err(CheckError::UnknownProp("stroke-width".into()))
        );
    }

    #[test]
    fn test_builtin_stop_offset() {
        let stop = SchemaRegistry::builtin().get("Stop").unwrap();
        assert!(stop.check("offset", "0.5").is_ok());
        assert!(stop.check("offset", "50%").is_ok());
        assert!(stop.check("offset", "half").is_err());
    }

    #[test]
    fn test_group_merge_order() {
        let registry = SchemaRegistry::from_json(
            r#"{
                "groups": {"Paint": {"fill": "string", "x": "string"}},
                "elements": {"Rect": {"extends": ["Paint"], "props": {"x": "number"}}}
            }"#,
        )
        .unwrap();
        let rect = registry.get("Rect").unwrap();
        let names: Vec<_> = rect.props().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["fill", "x"]);
        assert_eq!(rect.props()[1].ty, AttrType::Number);
        assert!(rect.check("x", "ten").is_err());
    }

    #[test]
    fn test_unknown_group() {
        let err = SchemaRegistry::from_json(
            r#"{"elements": {"Rect": {"extends": ["Missing"]}}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RnsvgError::InvalidSchema(_)));
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchemaRegistry>();
    }
}
