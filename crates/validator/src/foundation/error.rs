//! Error types for validation failures
//!
//! [`ValidationError`] is the structured error every [`Validate`](super::Validate)
//! implementation returns. [`ConfigError`] is returned when a validator is
//! built from a rule set that can never be satisfied or cannot be parsed.
//!
//! All string fields of `ValidationError` use `Cow<'static, str>` so static
//! codes and messages never allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Key/value parameters attached to an error (typically 0-3 entries).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 3]>;

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use identity_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("length_range", "Length must be between 6 and 64")
///     .with_field("username")
///     .with_param("min", "6")
///     .with_param("max", "64");
///
/// assert_eq!(error.param("min"), Some("6"));
/// assert_eq!(error.field.as_deref(), Some("username"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "invalid_length", "missing_digit", "invalid_format"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional name of the field that failed, e.g. "password".
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template, in insertion order.
    pub params: ErrorParams,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value, e.g. for an HTTP error body.
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "length_range" error.
    pub fn length_range(min: usize, max: usize, actual: usize) -> Self {
        Self::new(
            "length_range",
            format!("Length must be between {min} and {max}"),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Error returned when a validator cannot be built from its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `min_length` is greater than `max_length`, so no input could pass.
    #[error("invalid length bounds for `{field}`: min {min} > max {max}")]
    InvertedLength {
        /// Which rule set the bounds belong to ("username", "password").
        field: &'static str,
        /// Configured minimum.
        min: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The character-class pattern derived from the config failed to compile.
    #[error("failed to compile character pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The policy document is not valid JSON or has unknown options.
    #[error("failed to parse validation policy: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvertedLength { .. } => "CONFIG_INVERTED_LENGTH",
            Self::Pattern(_) => "CONFIG_PATTERN",
            Self::Parse(_) => "CONFIG_PARSE",
        }
    }
}

/// Checks that `min <= max`, naming the rule set in the error.
pub(crate) fn check_length_bounds(
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedLength { field, min, max });
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
