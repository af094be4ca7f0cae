//=========================================================================
// Attributes
//=========================================================================
//
// Named, typed values used to persist component settings as part of a
// serialized scene.
//
// Components write their tunables with `add_*` and read them back with
// `*_or(name, current)`, so missing attributes leave the current value
// untouched. The container serializes to JSON through serde.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

//=== Attribute ===========================================================

/// A single typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Attribute {
    Float(f32),
    Int(i32),
    Bool(bool),
    String(String),
}

//=== Attributes ==========================================================

/// Ordered name → value map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    values: BTreeMap<String, Attribute>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Writing ----------------------------------------------------------

    /// Adds or replaces a float attribute.
    pub fn add_float(&mut self, name: &str, value: f32) {
        self.values.insert(name.to_owned(), Attribute::Float(value));
    }

    pub fn add_int(&mut self, name: &str, value: i32) {
        self.values.insert(name.to_owned(), Attribute::Int(value));
    }

    pub fn add_bool(&mut self, name: &str, value: bool) {
        self.values.insert(name.to_owned(), Attribute::Bool(value));
    }

    pub fn add_string(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_owned(), Attribute::String(value.into()));
    }

    //--- Reading ----------------------------------------------------------

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.values.get(name)
    }

    /// Numeric attribute as `f32`. Ints are widened; other types are `None`.
    pub fn get_float(&self, name: &str) -> Option<f32> {
        match self.values.get(name)? {
            Attribute::Float(v) => Some(*v),
            Attribute::Int(v) => Some(*v as f32),
            _ => None,
        }
    }

    /// Float attribute, or `default` when missing or not numeric.
    pub fn float_or(&self, name: &str, default: f32) -> f32 {
        self.get_float(name).unwrap_or(default)
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        match self.values.get(name)? {
            Attribute::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name)? {
            Attribute::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        match self.values.get(name)? {
            Attribute::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    //--- Serialization ----------------------------------------------------

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
