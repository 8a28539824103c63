//! Primitive (non-element) child values.

use serde::{Deserialize, Serialize};

/// A leaf value that can appear in a child list.
///
/// `Null` stands for both an explicit null and an absent value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Primitive {
    pub fn is_null(&self) -> bool {
        matches!(self, Primitive::Null)
    }

    /// Truthiness as a script runtime sees it: null, `false`, `0`, NaN and
    /// the empty string are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Primitive::Null => false,
            Primitive::Bool(b) => *b,
            Primitive::Number(n) => *n != 0.0 && !n.is_nan(),
            Primitive::String(s) => !s.is_empty(),
        }
    }

    /// Stringify the value the way a script runtime would.
    ///
    /// Numbers at or above `1e21` or below `1e-6` in magnitude use exponent
    /// notation (`1e+21`, `1e-7`).
    pub fn to_text(&self) -> String {
        match self {
            Primitive::Null => "null".to_string(),
            Primitive::Bool(b) => b.to_string(),
            Primitive::Number(n) => number_to_text(*n),
            Primitive::String(s) => s.clone(),
        }
    }

    /// Convert to a `String` primitive. Strings are returned unchanged.
    pub fn into_string_primitive(self) -> Primitive {
        match self {
            Primitive::String(_) => self,
            other => Primitive::String(other.to_text()),
        }
    }
}

fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // covers -0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        exponent_text(n)
    } else {
        n.to_string()
    }
}

fn exponent_text(n: f64) -> String {
    let text = format!("{:e}", n);
    if text.contains("e-") {
        text
    } else {
        text.replacen('e', "e+", 1)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_string())
    }
}

impl From<String> for Primitive {
    fn from(value: String) -> Self {
        Primitive::String(value)
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Primitive::Number(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Primitive::Number(f64::from(value))
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Primitive::Bool(value)
    }
}

impl<T: Into<Primitive>> From<Option<T>> for Primitive {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Primitive::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_text() {
        assert_eq!(Primitive::from(42).to_text(), "42");
        assert_eq!(Primitive::from(305.12).to_text(), "305.12");
        assert_eq!(Primitive::from(-0.0).to_text(), "0");
        assert_eq!(Primitive::from(f64::INFINITY).to_text(), "Infinity");
        assert_eq!(Primitive::from(f64::NEG_INFINITY).to_text(), "-Infinity");
        assert_eq!(Primitive::from(f64::NAN).to_text(), "NaN");
    }

    #[test]
    fn test_number_exponent_text() {
        assert_eq!(Primitive::from(1e21).to_text(), "1e+21");
        assert_eq!(Primitive::from(1.5e21).to_text(), "1.5e+21");
        assert_eq!(Primitive::from(-2e22).to_text(), "-2e+22");
        assert_eq!(Primitive::from(1e-7).to_text(), "1e-7");
        assert_eq!(Primitive::from(1e20).to_text(), "100000000000000000000");
        assert_eq!(Primitive::from(0.000001).to_text(), "0.000001");
    }

    #[test]
    fn test_truthiness() {
        assert!(Primitive::from(true).is_truthy());
        assert!(Primitive::from(1).is_truthy());
        assert!(Primitive::from("yes").is_truthy());
        assert!(!Primitive::Null.is_truthy());
        assert!(!Primitive::from(false).is_truthy());
        assert!(!Primitive::from(0).is_truthy());
        assert!(!Primitive::from(f64::NAN).is_truthy());
        assert!(!Primitive::from("").is_truthy());
    }

    #[test]
    fn test_other_text() {
        assert_eq!(Primitive::from(true).to_text(), "true");
        assert_eq!(Primitive::Null.to_text(), "null");
        assert_eq!(Primitive::from("Hello ").to_text(), "Hello ");
    }

    #[test]
    fn test_into_string_primitive() {
        assert_eq!(
            Primitive::from(21).into_string_primitive(),
            Primitive::String("21".to_string())
        );
        assert_eq!(
            Primitive::from("x").into_string_primitive(),
            Primitive::from("x")
        );
    }

    #[test]
    fn test_option_is_null() {
        assert!(Primitive::from(None::<i32>).is_null());
        assert!(!Primitive::from(Some(1)).is_null());
    }
}
