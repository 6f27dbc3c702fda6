//! Shape descriptors and per-field coercion.
//!
//! A `Shape` lists the keys a structured result requires and how each value is
//! coerced. Coercion produces a clean `serde_json::Value` that deserializes into
//! the target type without further checks.

use serde_json::{Map, Value};

use crate::models::ConfidenceLevel;

pub const SCORE_MIN: i64 = 0;
pub const SCORE_MAX: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Object,
    Array,
}

impl Container {
    pub fn delimiters(self) -> (char, char) {
        match self {
            Container::Object => ('{', '}'),
            Container::Array => ('[', ']'),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// String; scalar numbers/bools are stringified.
    Text,
    /// Integer in `SCORE_MIN..=SCORE_MAX`; floats are rounded, numeric strings parsed.
    Score,
    /// List of strings; a lone string becomes a one-element list.
    TextList,
    /// `High` / `Medium` / `Low`, case-insensitive; unknown literals become `Medium`.
    Confidence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Expected shape of a completion payload.
///
/// For `Container::Array` the fields describe each element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub container: Container,
    pub fields: &'static [FieldSpec],
}

#[cfg(test)]
impl Shape {
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

/// Why a parsed payload did not fit its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatch {
    WrongContainer,
    MissingField(&'static str),
    InvalidField(&'static str),
}

/// Coerces a parsed payload into `shape`.
///
/// Objects fail as a whole on the first bad field. Array elements that fail are
/// dropped individually; the array itself never fails for element errors.
pub fn coerce(value: Value, shape: &Shape) -> Result<Value, ShapeMismatch> {
    match (shape.container, value) {
        (Container::Object, Value::Object(map)) => {
            coerce_object(map, shape.fields).map(Value::Object)
        }
        (Container::Array, Value::Array(items)) => Ok(Value::Array(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(map) => coerce_object(map, shape.fields).ok(),
                    _ => None,
                })
                .map(Value::Object)
                .collect(),
        )),
        _ => Err(ShapeMismatch::WrongContainer),
    }
}

fn coerce_object(
    mut map: Map<String, Value>,
    fields: &[FieldSpec],
) -> Result<Map<String, Value>, ShapeMismatch> {
    let mut out = Map::with_capacity(fields.len());
    for field in fields {
        let raw = map
            .remove(field.name)
            .filter(|v| !v.is_null())
            .ok_or(ShapeMismatch::MissingField(field.name))?;
        let coerced =
            coerce_field(raw, field.kind).ok_or(ShapeMismatch::InvalidField(field.name))?;
        out.insert(field.name.to_string(), coerced);
    }
    Ok(out)
}

fn coerce_field(value: Value, kind: FieldKind) -> Option<Value> {
    match kind {
        FieldKind::Text => scalar_text(&value).map(Value::String),
        FieldKind::Score => score(&value).map(Value::from),
        FieldKind::TextList => text_list(value).map(|items| {
            Value::Array(items.into_iter().map(Value::String).collect())
        }),
        FieldKind::Confidence => {
            let label = scalar_text(&value).unwrap_or_default();
            Some(Value::String(ConfidenceLevel::coerce(&label).as_str().to_string()))
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn score(value: &Value) -> Option<i64> {
    let raw = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    Some((raw.round() as i64).clamp(SCORE_MIN, SCORE_MAX))
}

fn text_list(value: Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(scalar_text)
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        Value::String(s) if !s.trim().is_empty() => Some(vec![s.trim().to_string()]),
        _ => None,
    }
}
