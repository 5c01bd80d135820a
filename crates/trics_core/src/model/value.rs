//! Closed set of field value kinds.
//!
//! # Responsibility
//! - Define the four value kinds a field may hold.
//! - Classify dynamic (JSON) input into one of those kinds.
//!
//! # Invariants
//! - Classification is total over `TypedValue`; anything outside the four
//!   kinds is rejected at the dynamic boundary with `InvalidType`.
//! - Decimal equality compares bit patterns, so `NaN == NaN` and
//!   `0.0 != -0.0`.

use crate::model::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Kind tag of a [`TypedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    Integer,
    Decimal,
    Boolean,
    String,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }

    /// Classifies a dynamic value without taking ownership.
    ///
    /// # Errors
    /// - `ModelError::InvalidType` for `null`, arrays, objects and integers
    ///   outside the signed 64-bit range.
    pub fn classify(value: &serde_json::Value) -> ModelResult<Self> {
        match value {
            serde_json::Value::Bool(_) => Ok(Self::Boolean),
            serde_json::Value::String(_) => Ok(Self::String),
            serde_json::Value::Number(number) if number.is_i64() => Ok(Self::Integer),
            serde_json::Value::Number(number) if number.is_f64() => Ok(Self::Decimal),
            other => Err(ModelError::InvalidType {
                found: dynamic_kind_name(other),
            }),
        }
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn dynamic_kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(number) if number.is_u64() => "unsigned_integer",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Value held by a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    String(String),
}

impl TypedValue {
    pub fn kind(&self) -> TypeTag {
        match self {
            Self::Integer(_) => TypeTag::Integer,
            Self::Decimal(_) => TypeTag::Decimal,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::String(_) => TypeTag::String,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }
}

impl PartialEq for TypedValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a.to_bits() == b.to_bits(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for TypedValue {}

impl Display for TypedValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
        }
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for TypedValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl TryFrom<serde_json::Value> for TypedValue {
    type Error = ModelError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let kind = TypeTag::classify(&value)?;
        match (kind, value) {
            (TypeTag::Boolean, serde_json::Value::Bool(flag)) => Ok(Self::Boolean(flag)),
            (TypeTag::String, serde_json::Value::String(text)) => Ok(Self::String(text)),
            (TypeTag::Integer, serde_json::Value::Number(number)) => number
                .as_i64()
                .map(Self::Integer)
                .ok_or(ModelError::InvalidType { found: "number" }),
            (TypeTag::Decimal, serde_json::Value::Number(number)) => number
                .as_f64()
                .map(Self::Decimal)
                .ok_or(ModelError::InvalidType { found: "number" }),
            (_, other) => Err(ModelError::InvalidType {
                found: dynamic_kind_name(&other),
            }),
        }
    }
}
