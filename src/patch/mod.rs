//! Patch-document model and field-key parsing.
//!
//! A patch document declares deletions (`del-providers`) and two ordered
//! sections of per-provider patch objects (`add-providers`,
//! `modify-providers`). Field keys inside a patch object carry an optional
//! `rst-`/`del-` prefix; [`FieldKey::parse`] splits that into an explicit
//! mode up front so the engine dispatches on an enum instead of scattering
//! prefix checks. Values are a small union of the shapes a hand-written
//! document can contain; anything else degrades to [`PatchValue::Unsupported`]
//! rather than failing the parse.
//!
//! Deserialization is implemented by hand against generic serde visitors:
//! the model is format-agnostic, mapping order survives (field application
//! order is part of the document's meaning), and a null section or patch
//! object reads as empty.

pub mod array_op;
pub mod engine;
pub mod normalize;
pub mod upsert;

use serde::Deserialize;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// Operation mode carried by a patch-object field key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMode {
    Append,
    Reset,
    Delete,
}

/// A field key split into its operation mode and base field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldKey<'a> {
    pub mode: FieldMode,
    pub base: &'a str,
}

impl<'a> FieldKey<'a> {
    pub fn parse(raw: &'a str) -> Self {
        if let Some(base) = raw.strip_prefix("rst-") {
            Self {
                mode: FieldMode::Reset,
                base,
            }
        } else if let Some(base) = raw.strip_prefix("del-") {
            Self {
                mode: FieldMode::Delete,
                base,
            }
        } else {
            Self {
                mode: FieldMode::Append,
                base: raw,
            }
        }
    }
}

/// A raw patch value as authored in the document.
#[derive(Clone, Debug, PartialEq)]
pub enum PatchValue {
    Text(String),
    Bool(bool),
    List(Vec<PatchValue>),
    /// Nulls, numbers, and nested mappings: tolerated, normalize to nothing.
    Unsupported,
}

impl Default for PatchValue {
    fn default() -> Self {
        PatchValue::Unsupported
    }
}

impl<'de> Deserialize<'de> for PatchValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = PatchValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, boolean, or sequence of patch values")
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<PatchValue, E> {
                Ok(PatchValue::Bool(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<PatchValue, E> {
                Ok(PatchValue::Text(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<PatchValue, E> {
                Ok(PatchValue::Text(value))
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<PatchValue, E> {
                Ok(PatchValue::Unsupported)
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<PatchValue, E> {
                Ok(PatchValue::Unsupported)
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<PatchValue, E> {
                Ok(PatchValue::Unsupported)
            }

            fn visit_unit<E: de::Error>(self) -> Result<PatchValue, E> {
                Ok(PatchValue::Unsupported)
            }

            fn visit_none<E: de::Error>(self) -> Result<PatchValue, E> {
                Ok(PatchValue::Unsupported)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<PatchValue, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element::<PatchValue>()? {
                    items.push(item);
                }
                Ok(PatchValue::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<PatchValue, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(PatchValue::Unsupported)
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Mapping that preserves document order, unlike `BTreeMap`.
///
/// A null value where a mapping is expected reads as the empty map, so a
/// bare `add-providers:` key or an entry with no fields is a no-op instead
/// of a parse error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, V)> {
        self.0.iter()
    }
}

impl<'de, V> Deserialize<'de> for OrderedMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MapVisitor<V>(PhantomData<V>);

        impl<'de, V> Visitor<'de> for MapVisitor<V>
        where
            V: Deserialize<'de>,
        {
            type Value = OrderedMap<V>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping or null")
            }

            fn visit_unit<E: de::Error>(self) -> Result<OrderedMap<V>, E> {
                Ok(OrderedMap(Vec::new()))
            }

            fn visit_none<E: de::Error>(self) -> Result<OrderedMap<V>, E> {
                Ok(OrderedMap(Vec::new()))
            }

            fn visit_map<A>(self, mut map: A) -> Result<OrderedMap<V>, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_any(MapVisitor(PhantomData))
    }
}

/// One provider's declared field changes, in document order.
pub type PatchObject = OrderedMap<PatchValue>;

/// The whole user-authored patch document. Missing sections read as empty.
#[derive(Debug, Default, Deserialize)]
pub struct PatchDocument {
    #[serde(rename = "del-providers", default)]
    pub del_providers: PatchValue,
    #[serde(rename = "add-providers", default)]
    pub add_providers: OrderedMap<PatchObject>,
    #[serde(rename = "modify-providers", default)]
    pub modify_providers: OrderedMap<PatchObject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_key_parses_prefixes() {
        let key = FieldKey::parse("rst-rules");
        assert_eq!(key.mode, FieldMode::Reset);
        assert_eq!(key.base, "rules");

        let key = FieldKey::parse("del-exceptions");
        assert_eq!(key.mode, FieldMode::Delete);
        assert_eq!(key.base, "exceptions");

        let key = FieldKey::parse("urlPattern");
        assert_eq!(key.mode, FieldMode::Append);
        assert_eq!(key.base, "urlPattern");
    }

    #[test]
    fn patch_values_deserialize_from_yaml_shapes() {
        let value: PatchValue = serde_yaml_ng::from_str("\"a b\"").unwrap();
        assert_eq!(value, PatchValue::Text("a b".to_string()));

        let value: PatchValue = serde_yaml_ng::from_str("true").unwrap();
        assert_eq!(value, PatchValue::Bool(true));

        let value: PatchValue = serde_yaml_ng::from_str("[x, [y, z]]").unwrap();
        let PatchValue::List(items) = value else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 2);

        // Numbers and nulls are tolerated, not fatal.
        let value: PatchValue = serde_yaml_ng::from_str("42").unwrap();
        assert_eq!(value, PatchValue::Unsupported);
        let value: PatchValue = serde_yaml_ng::from_str("~").unwrap();
        assert_eq!(value, PatchValue::Unsupported);
    }

    #[test]
    fn sections_preserve_document_order() {
        let yaml = "add-providers:\n  zeta:\n    urlPattern: \"^z\"\n  alpha:\n    urlPattern: \"^a\"\n";
        let document: PatchDocument = serde_yaml_ng::from_str(yaml).unwrap();
        let names: Vec<&str> = document
            .add_providers
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn null_sections_and_objects_read_as_empty() {
        let yaml = "del-providers:\nadd-providers:\nmodify-providers:\n  example.com:\n";
        let document: PatchDocument = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(document.del_providers, PatchValue::Unsupported);
        assert!(document.add_providers.is_empty());
        let (name, patch) = &document.modify_providers.0[0];
        assert_eq!(name, "example.com");
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_object_fields_keep_author_order() {
        let yaml = "rst-rules: \"b a\"\ndel-rules: a\nrules: c\n";
        let patch: PatchObject = serde_yaml_ng::from_str(yaml).unwrap();
        let keys: Vec<&str> = patch.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["rst-rules", "del-rules", "rules"]);
    }
}
