use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;
use std::fmt;

const NAME_FIELD: &str = "name";
const CATEGORY_FIELD: &str = "category";
const PROPER_NOUN_FIELD: &str = "proper_noun";

/// A field value. Values read from disk stay as their source text until the
/// curation passes replace them; nested objects and arrays are parsed so the
/// pretty printer can re-indent them.
#[derive(Debug, Clone)]
enum FieldValue {
    Raw(Box<RawValue>),
    Parsed(Value),
}

impl FieldValue {
    fn from_raw(raw: Box<RawValue>) -> Result<Self, String> {
        match raw.get().as_bytes().first() {
            Some(b'{') | Some(b'[') => serde_json::from_str(raw.get())
                .map(FieldValue::Parsed)
                .map_err(|e| e.to_string()),
            _ => Ok(FieldValue::Raw(raw)),
        }
    }

    fn as_string(&self) -> Option<String> {
        match self {
            FieldValue::Raw(raw) if raw.get().starts_with('"') => {
                serde_json::from_str(raw.get()).ok()
            }
            FieldValue::Parsed(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn is_true(&self) -> bool {
        match self {
            FieldValue::Raw(raw) => raw.get() == "true",
            FieldValue::Parsed(value) => *value == Value::Bool(true),
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Raw(a), FieldValue::Raw(b)) => a.get() == b.get(),
            (FieldValue::Parsed(a), FieldValue::Parsed(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Raw(raw) => raw.serialize(serializer),
            FieldValue::Parsed(value) => value.serialize(serializer),
        }
    }
}

/// One named, categorized entry of a catalog.
///
/// The record keeps every field it was loaded with, in file order and with
/// its source text. Only `name` and `proper_noun` are ever rewritten;
/// measurement and duration fields are carried along without being
/// interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    category: Option<String>,
    fields: Vec<(String, FieldValue)>,
}

impl Item {
    /// Build an item from the source text of one catalog record.
    pub fn from_raw(raw: &RawValue) -> Result<Self, String> {
        let text = raw.get();
        if !text.starts_with('{') {
            return Err(format!("expected an object, found {}", json_kind(text)));
        }

        let RawFields(raw_fields) = serde_json::from_str(text).map_err(|e| e.to_string())?;

        let mut fields: Vec<(String, FieldValue)> = Vec::with_capacity(raw_fields.len());
        for (key, raw) in raw_fields {
            let value = FieldValue::from_raw(raw)?;
            match fields.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => fields.push((key, value)),
            }
        }

        let name = match fields.iter().find(|(key, _)| key == NAME_FIELD) {
            Some((_, value)) => value.as_string().ok_or_else(|| {
                format!(
                    "field `{NAME_FIELD}` must be a string, found {}",
                    value_kind(value)
                )
            })?,
            None => return Err(format!("missing required field `{NAME_FIELD}`")),
        };
        let category = fields
            .iter()
            .find(|(key, _)| key == CATEGORY_FIELD)
            .and_then(|(_, value)| value.as_string());

        Ok(Item {
            name,
            category,
            fields,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Field names in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Replaces the name in place, keeping its position among the fields.
    pub fn rename(&mut self, new_name: &str) {
        self.name = new_name.to_string();
        self.set(NAME_FIELD, Value::String(new_name.to_string()));
    }

    pub fn is_proper_noun(&self) -> bool {
        self.get(PROPER_NOUN_FIELD).is_some_and(FieldValue::is_true)
    }

    /// Sets `proper_noun: true`. A new marker is appended after the existing
    /// fields; an existing one keeps its position.
    pub fn mark_proper_noun(&mut self) {
        if !self.is_proper_noun() {
            self.set(PROPER_NOUN_FIELD, Value::Bool(true));
        }
    }

    /// Drops the marker entirely, whatever its previous value was.
    pub fn clear_proper_noun(&mut self) -> bool {
        let before = self.fields.len();
        self.fields.retain(|(key, _)| key != PROPER_NOUN_FIELD);
        self.fields.len() != before
    }

    fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    fn set(&mut self, key: &str, value: Value) {
        match self.fields.iter_mut().find(|(existing, _)| existing == key) {
            Some(slot) => slot.1 = FieldValue::Parsed(value),
            None => self
                .fields
                .push((key.to_string(), FieldValue::Parsed(value))),
        }
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl TryFrom<Value> for Item {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let raw = serde_json::value::to_raw_value(&value).map_err(|e| e.to_string())?;
        Item::from_raw(&raw)
    }
}

/// Object entries in source order, values kept as raw text.
struct RawFields(Vec<(String, Box<RawValue>)>);

impl<'de> Deserialize<'de> for RawFields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawFieldsVisitor;

        impl<'de> Visitor<'de> for RawFieldsVisitor {
            type Value = RawFields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawFields, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Box<RawValue>>()? {
                    entries.push(entry);
                }
                Ok(RawFields(entries))
            }
        }

        deserializer.deserialize_map(RawFieldsVisitor)
    }
}

fn json_kind(text: &str) -> &'static str {
    match text.as_bytes().first() {
        Some(b'{') => "an object",
        Some(b'[') => "an array",
        Some(b'"') => "a string",
        Some(b't') | Some(b'f') => "a boolean",
        Some(b'n') => "null",
        _ => "a number",
    }
}

fn value_kind(value: &FieldValue) -> &'static str {
    match value {
        FieldValue::Raw(raw) => json_kind(raw.get()),
        FieldValue::Parsed(Value::Object(_)) => "an object",
        FieldValue::Parsed(Value::Array(_)) => "an array",
        FieldValue::Parsed(_) => "a scalar",
    }
}
