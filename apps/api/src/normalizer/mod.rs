//! Response Normalizer: turns an untrusted completion into a well-typed record.
//!
//! Pipeline:
//! 1. locate a fenced ```json block for the expected container (lazy match)
//! 2. else scan for the first balanced `{...}` / `[...]` span
//! 3. else use the whole completion (objects) or `[]` (arrays)
//! 4. strict JSON parse
//! 5. coerce against the type's `Shape` (array elements that fail are dropped)
//! 6. on any failure, substitute the type's fallback record
//!
//! `normalize` never fails: callers always get a value.

pub mod locate;
pub mod shape;

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::normalizer::locate::{locate, Candidate};
use crate::normalizer::shape::{coerce, Container, Shape, ShapeMismatch};

/// A structured result the normalizer can produce from a completion.
pub trait Structured: DeserializeOwned {
    /// Keys and coercion rules the payload must satisfy.
    const SHAPE: Shape;

    /// Record returned when the completion cannot be parsed into `SHAPE`.
    /// `raw` is the untouched completion text.
    fn fallback(raw: &str) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    Parse(String),
    Shape(ShapeMismatch),
    Decode(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::Parse(e) => write!(f, "invalid JSON: {e}"),
            FallbackReason::Shape(ShapeMismatch::WrongContainer) => {
                write!(f, "unexpected JSON container")
            }
            FallbackReason::Shape(ShapeMismatch::MissingField(name)) => {
                write!(f, "missing field '{name}'")
            }
            FallbackReason::Shape(ShapeMismatch::InvalidField(name)) => {
                write!(f, "invalid value for '{name}'")
            }
            FallbackReason::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    pub value: T,
    /// Set when `value` is the fallback record.
    pub fallback: Option<FallbackReason>,
}

#[cfg(test)]
impl<T> Normalized<T> {
    pub fn fell_back(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Normalizes `raw` into `T`, substituting `T::fallback(raw)` on failure.
pub fn normalize<T: Structured>(raw: &str) -> Normalized<T> {
    match try_normalize::<T>(raw) {
        Ok(value) => Normalized {
            value,
            fallback: None,
        },
        Err(reason) => Normalized {
            value: T::fallback(raw),
            fallback: Some(reason),
        },
    }
}

fn try_normalize<T: Structured>(raw: &str) -> Result<T, FallbackReason> {
    let shape = T::SHAPE;
    let candidate = match locate(raw, shape.container) {
        Candidate::Fenced(span) | Candidate::Scanned(span) => span,
        Candidate::Missing => match shape.container {
            Container::Object => raw,
            Container::Array => "[]",
        },
    };

    let parsed: Value =
        serde_json::from_str(candidate).map_err(|e| FallbackReason::Parse(e.to_string()))?;
    let coerced = coerce(parsed, &shape).map_err(FallbackReason::Shape)?;
    serde_json::from_value(coerced).map_err(|e| FallbackReason::Decode(e.to_string()))
}
