use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Slider bounds for the declared linear order length.
pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 6;

/// Which of the two textual input encodings the user is editing.
/// Wire names are the exact strings the computation service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    #[serde(rename = "Linear Orders")]
    LinearOrders,
    Poset,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinearOrders => write!(f, "Linear Orders"),
            Self::Poset => write!(f, "Poset"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown input mode '{0}'")]
pub struct UnknownInputMode(pub String);

impl FromStr for InputMode {
    type Err = UnknownInputMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear orders" | "linear-orders" => Ok(Self::LinearOrders),
            "poset" => Ok(Self::Poset),
            _ => Err(UnknownInputMode(s.to_string())),
        }
    }
}

/// Layout algorithm selector, passed opaquely to the computation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawingMethod {
    #[default]
    Default,
    Supercover,
    SuperHex,
    Permutahedron,
}

impl fmt::Display for DrawingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Supercover => write!(f, "Supercover"),
            Self::SuperHex => write!(f, "SuperHex"),
            Self::Permutahedron => write!(f, "Permutahedron"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown drawing method '{0}'")]
pub struct UnknownDrawingMethod(pub String);

impl FromStr for DrawingMethod {
    type Err = UnknownDrawingMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "supercover" => Ok(Self::Supercover),
            "superhex" => Ok(Self::SuperHex),
            "permutahedron" => Ok(Self::Permutahedron),
            _ => Err(UnknownDrawingMethod(s.to_string())),
        }
    }
}

/// A cover relation: `a` directly precedes `b` in the partial order.
/// Serializes as the two-element array the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation(pub i64, pub i64);

impl Relation {
    /// The largest element index the relation refers to.
    pub fn max_index(&self) -> i64 {
        self.0.max(self.1)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}
