//! Attribute value checkers.
//!
//! Every attribute declared in the schema gets one [`Checker`]. Values coming
//! from SVG markup are always strings, so checkers validate the textual form.

use std::fmt;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::error::RnsvgError;

/// Why a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("no prop named {0:?}")]
    UnknownProp(String),

    #[error("expected a number, got {0:?}")]
    NotANumber(String),

    #[error("expected true or false, got {0:?}")]
    NotABoolean(String),

    #[error("{value:?} is not one of {allowed:?}")]
    NotInEnum { value: String, allowed: Vec<String> },

    #[error("{value:?} does not match /{pattern}/")]
    PatternMismatch { value: String, pattern: String },
}

/// A value acceptance predicate for one attribute.
pub trait Checker: fmt::Debug + Send + Sync {
    fn check(&self, value: &str) -> Result<(), CheckError>;
}

/// Declared type of an attribute, as written in the schema description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttrType {
    /// Any string.
    String,
    /// A finite number.
    Number,
    /// A number or a string (react-native-svg `NumberProp`).
    NumberProp,
    /// `true` or `false`.
    Boolean,
    /// One of a fixed set of strings.
    Enum(Vec<String>),
    /// A string matching an anchored regular expression.
    Pattern(String),
}

impl AttrType {
    /// Build the checker for this type.
    pub fn checker(&self) -> Result<Box<dyn Checker>, RnsvgError> {
        let checker: Box<dyn Checker> = match self {
            AttrType::String | AttrType::NumberProp => Box::new(StringChecker),
            AttrType::Number => Box::new(NumberChecker),
            AttrType::Boolean => Box::new(BooleanChecker),
            AttrType::Enum(values) => Box::new(EnumChecker {
                values: values.clone(),
            }),
            AttrType::Pattern(pattern) => Box::new(PatternChecker::new(pattern)?),
        };
        Ok(checker)
    }
}

#[derive(Debug)]
pub struct StringChecker;

impl Checker for StringChecker {
    fn check(&self, _value: &str) -> Result<(), CheckError> {
        Ok(())
    }
}

#[derive(Debug)]
pub struct NumberChecker;

impl Checker for NumberChecker {
    fn check(&self, value: &str) -> Result<(), CheckError> {
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(()),
            _ => Err(CheckError::NotANumber(value.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct BooleanChecker;

impl Checker for BooleanChecker {
    fn check(&self, value: &str) -> Result<(), CheckError> {
        match value {
            "true" | "false" => Ok(()),
            _ => Err(CheckError::NotABoolean(value.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct EnumChecker {
    values: Vec<String>,
}

impl Checker for EnumChecker {
    fn check(&self, value: &str) -> Result<(), CheckError> {
        if self.values.iter().any(|v| v == value) {
            Ok(())
        } else {
            Err(CheckError::NotInEnum {
                value: value.to_string(),
                allowed: self.values.clone(),
            })
        }
    }
}

#[derive(Debug)]
pub struct PatternChecker {
    source: String,
    regex: Regex,
}

impl PatternChecker {
    pub fn new(pattern: &str) -> Result<Self, RnsvgError> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|e| RnsvgError::InvalidSchema(format!("bad pattern {pattern:?}: {e}")))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }
}

impl Checker for PatternChecker {
    fn check(&self, value: &str) -> Result<(), CheckError> {
        if self.regex.is_match(value) {
            Ok(())
        } else {
            Err(CheckError::PatternMismatch {
                value: value.to_string(),
                pattern: self.source.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_checker() {
        let checker = AttrType::Number.checker().unwrap();
        assert!(checker.check("10").is_ok());
        assert!(checker.check("-0.5").is_ok());
        assert!(checker.check("1e3").is_ok());
        assert_eq!(
            checker.check("10px"),
            Err(CheckError::NotANumber("10px".into()))
        );
        assert!(checker.check("NaN").is_err());
        assert!(checker.check("inf").is_err());
    }

    #[test]
    fn test_number_prop_accepts_strings() {
        let checker = AttrType::NumberProp.checker().unwrap();
        assert!(checker.check("50%").is_ok());
        assert!(checker.check("12").is_ok());
    }

    #[test]
    fn test_enum_checker() {
        let checker = AttrType::Enum(vec!["butt".into(), "round".into()])
            .checker()
            .unwrap();
        assert!(checker.check("round").is_ok());
        let err = checker.check("square").unwrap_err();
        assert_eq!(err.to_string(), r#""square" is not one of ["butt", "round"]"#);
    }

    #[test]
    fn test_pattern_checker_is_anchored() {
        let checker = AttrType::Pattern(r"\d+%?".into()).checker().unwrap();
        assert!(checker.check("40%").is_ok());
        assert!(checker.check("x40%").is_err());
        assert!(checker.check("40%x").is_err());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(AttrType::Pattern("(".into()).checker().is_err());
    }

    #[test]
    fn test_deserialize_types() {
        let types: Vec<AttrType> = serde_json::from_str(
            r#"["string", "numberProp", {"enum": ["a"]}, {"pattern": "x"}]"#,
        )
        .unwrap();
        assert_eq!(
            types,
            vec![
                AttrType::String,
                AttrType::NumberProp,
                AttrType::Enum(vec!["a".into()]),
                AttrType::Pattern("x".into()),
            ]
        );
    }
}
