//! Domain value objects: Value, CookingTime, Difficulty.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. `CookingTime`
//! is the only one that carries an invariant, and it enforces it in its
//! constructor. `Difficulty` is never stored; it is derived from a
//! `CookingTime` on demand.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::domain::error::DomainError;

// ── Value ────────────────────────────────────────────────────────────────────

/// A loosely-typed value, as found in recipe mappings and ingredient slots.
///
/// Deserializes from any self-describing format (JSON, TOML). Variant order
/// matters for `#[serde(untagged)]`: integers and floats both land in
/// `Number`.
///
/// # Precision
///
/// `Number` is an `f64`, so integers are exact only up to 2^53. A document
/// integer beyond that (e.g. `9007199254740993`) is rounded to the nearest
/// representable `f64` when it is read. Whole numbers inside that range are
/// written back as integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(#[serde(serialize_with = "serialize_number")] f64),
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the variant, used in log fields and error text.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

/// Largest whole `f64` up to which every integer is representable (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole numbers go out as integers (`12`, not `12.0`) while they are exact.
fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

// ── CookingTime ──────────────────────────────────────────────────────────────

/// Cooking duration in minutes. Never negative.
///
/// The only way in is [`CookingTime::new`] (or `TryFrom<f64>`, which serde
/// goes through), so a value of this type always satisfies the invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct CookingTime(f64);

impl CookingTime {
    pub const ZERO: Self = Self(0.0);

    /// Validate and wrap a number of minutes.
    ///
    /// `NaN` and infinities are rejected before the sign check, so the stored
    /// value is always a finite number `>= 0`.
    pub fn new(minutes: f64) -> Result<Self, DomainError> {
        if !minutes.is_finite() {
            return Err(DomainError::NonFiniteCookingTime { minutes });
        }
        if minutes < 0.0 {
            return Err(DomainError::NegativeCookingTime { minutes });
        }
        Ok(Self(minutes))
    }

    pub const fn minutes(self) -> f64 {
        self.0
    }

    pub fn difficulty(self) -> Difficulty {
        Difficulty::from_minutes(self.0)
    }
}

impl TryFrom<f64> for CookingTime {
    type Error = DomainError;

    fn try_from(minutes: f64) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<CookingTime> for f64 {
    fn from(time: CookingTime) -> Self {
        time.0
    }
}

impl Serialize for CookingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(&self.0, serializer)
    }
}

impl fmt::Display for CookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins", self.0)
    }
}

// ── Difficulty ───────────────────────────────────────────────────────────────

/// Upper bound (inclusive) of the `Easy` band, in minutes.
pub const EASY_MAX_MINUTES: f64 = 30.0;
/// Upper bound (inclusive) of the `Medium` band, in minutes.
pub const MEDIUM_MAX_MINUTES: f64 = 60.0;

/// Three-level classification derived from cooking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// `<= 30` is Easy, `<= 60` is Medium, anything else is Hard.
    pub fn from_minutes(minutes: f64) -> Self {
        if minutes <= EASY_MAX_MINUTES {
            Self::Easy
        } else if minutes <= MEDIUM_MAX_MINUTES {
            Self::Medium
        } else {
            Self::Hard
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
