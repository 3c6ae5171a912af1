//! Password rule validator.
//!
//! Validates a candidate password against configurable length bounds and
//! character-class requirements. Checks run in a fixed order and stop at the
//! first failure:
//!
//! 1. encoding (byte input only)
//! 2. length in chars
//! 3. digit, upper, lower, special, each only if required
//!
//! Character classes follow Unicode general categories: digit is `Nd`,
//! upper is `Lu`, lower is `Ll`, special is any symbol (`S*`) or
//! punctuation (`P*`). The input is classified in a single pass regardless
//! of which requirements are enabled.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::foundation::{ConfigError, Validate, ValidationError, check_length_bounds};
use crate::validators::length::{LengthMode, LengthRange};

static CHAR_CLASS: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"(?P<digit>\p{Nd})|(?P<upper>\p{Lu})|(?P<lower>\p{Ll})|(?P<special>[\p{S}\p{P}])",
    )
    .expect("character class pattern is valid")
});

// ============================================================================
// PASSWORD ERROR
// ============================================================================

/// Why a password was rejected. Only the first failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum PasswordError {
    /// The input is not well-formed UTF-8.
    #[error("password consists of invalid UTF-8")]
    InvalidEncoding,
    /// The char count is outside the configured bounds.
    #[error("invalid password length")]
    InvalidLength,
    /// No decimal digit although one is required.
    #[error("password should have at least one number")]
    MissingDigit,
    /// No uppercase letter although one is required.
    #[error("password should have at least one upper-case letter")]
    MissingUpper,
    /// No lowercase letter although one is required.
    #[error("password should have at least one lower-case letter")]
    MissingLower,
    /// No symbol or punctuation although one is required.
    #[error("password should have at least one special character")]
    MissingSpecial,
}

impl PasswordError {
    /// Machine-readable error code, also used as the `ValidationError` code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEncoding => "invalid_encoding",
            Self::InvalidLength => "invalid_length",
            Self::MissingDigit => "missing_digit",
            Self::MissingUpper => "missing_upper",
            Self::MissingLower => "missing_lower",
            Self::MissingSpecial => "missing_special",
        }
    }
}

// ============================================================================
// PASSWORD CONFIG
// ============================================================================

/// Rules for password validation.
///
/// | Option | Default |
/// |---|---|
/// | `min_length` | 8 |
/// | `max_length` | 64 |
/// | `require_digit` | `false` |
/// | `require_upper` | `false` |
/// | `require_lower` | `false` |
/// | `require_special` | `false` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordConfig {
    /// Minimum length in chars (inclusive).
    pub min_length: usize,
    /// Maximum length in chars (inclusive).
    pub max_length: usize,
    /// Require at least one decimal digit.
    pub require_digit: bool,
    /// Require at least one uppercase letter.
    pub require_upper: bool,
    /// Require at least one lowercase letter.
    pub require_lower: bool,
    /// Require at least one symbol or punctuation character.
    pub require_special: bool,
}

impl PasswordConfig {
    /// Default minimum length.
    pub const DEFAULT_MIN_LENGTH: usize = 8;
    /// Default maximum length.
    pub const DEFAULT_MAX_LENGTH: usize = 64;

    /// Rules with all four character classes required.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
            .require_digit(true)
            .require_upper(true)
            .require_lower(true)
            .require_special(true)
    }

    /// Sets the minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    /// Sets the maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = len;
        self
    }

    /// Requires (or stops requiring) a decimal digit.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_digit(mut self, required: bool) -> Self {
        self.require_digit = required;
        self
    }

    /// Requires (or stops requiring) an uppercase letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_upper(mut self, required: bool) -> Self {
        self.require_upper = required;
        self
    }

    /// Requires (or stops requiring) a lowercase letter.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_lower(mut self, required: bool) -> Self {
        self.require_lower = required;
        self
    }

    /// Requires (or stops requiring) a symbol or punctuation character.
    #[must_use = "builder methods must be chained or built"]
    pub fn require_special(mut self, required: bool) -> Self {
        self.require_special = required;
        self
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
            require_digit: false,
            require_upper: false,
            require_lower: false,
            require_special: false,
        }
    }
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

/// Which character classes occur in a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClasses {
    /// Contains a decimal digit (`Nd`).
    pub digit: bool,
    /// Contains an uppercase letter (`Lu`).
    pub upper: bool,
    /// Contains a lowercase letter (`Ll`).
    pub lower: bool,
    /// Contains a symbol or punctuation character (`S*`, `P*`).
    pub special: bool,
}

impl CharClasses {
    /// Classifies every char of `input` once, accumulating all four flags.
    ///
    /// ```
    /// use identity_validator::validators::CharClasses;
    ///
    /// let classes = CharClasses::scan("Copy&Paste中文密码123");
    /// assert!(classes.digit && classes.upper && classes.lower && classes.special);
    /// ```
    #[must_use]
    pub fn scan(input: &str) -> Self {
        let mut classes = Self::default();
        for caps in CHAR_CLASS.captures_iter(input) {
            if caps.name("digit").is_some() {
                classes.digit = true;
            } else if caps.name("upper").is_some() {
                classes.upper = true;
            } else if caps.name("lower").is_some() {
                classes.lower = true;
            } else {
                classes.special = true;
            }
        }
        classes
    }
}

// ============================================================================
// PASSWORD VALIDATOR
// ============================================================================

/// Validates passwords against a [`PasswordConfig`].
///
/// # Examples
///
/// ```
/// use identity_validator::validators::{Password, PasswordConfig, PasswordError};
///
/// let policy = Password::new(PasswordConfig::strict().min_length(9)).unwrap();
/// assert_eq!(policy.check("Password2@"), Ok(()));
/// assert_eq!(policy.check("Password12"), Err(PasswordError::MissingSpecial));
/// assert_eq!(policy.check("aaaabbbb"), Err(PasswordError::InvalidLength));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Password {
    config: PasswordConfig,
    length: LengthRange,
}

impl Password {
    /// Creates a password validator.
    ///
    /// Fails with [`ConfigError::InvertedLength`] if `min_length > max_length`.
    pub fn new(config: PasswordConfig) -> Result<Self, ConfigError> {
        check_length_bounds("password", config.min_length, config.max_length)?;
        Ok(Self {
            config,
            length: LengthRange {
                min: config.min_length,
                max: config.max_length,
                mode: LengthMode::Chars,
            },
        })
    }

    /// Returns the rules this validator enforces.
    #[must_use]
    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    /// Checks a password, reporting the first rule it breaks.
    pub fn check(&self, input: &str) -> Result<(), PasswordError> {
        let result = self.check_rules(input);
        if let Err(err) = result {
            tracing::debug!(reason = err.code(), "password rejected");
        }
        result
    }

    /// Checks a password supplied as raw bytes.
    ///
    /// Bytes that are not well-formed UTF-8 fail with
    /// [`PasswordError::InvalidEncoding`] before any other rule runs.
    pub fn check_bytes(&self, input: &[u8]) -> Result<(), PasswordError> {
        match std::str::from_utf8(input) {
            Ok(text) => self.check(text),
            Err(_) => {
                tracing::debug!(
                    reason = PasswordError::InvalidEncoding.code(),
                    "password rejected"
                );
                Err(PasswordError::InvalidEncoding)
            }
        }
    }

    /// Returns `true` if the password satisfies every rule.
    #[must_use]
    pub fn is_valid(&self, input: &str) -> bool {
        self.check(input).is_ok()
    }

    fn check_rules(&self, input: &str) -> Result<(), PasswordError> {
        self.length
            .check(input)
            .map_err(|_| PasswordError::InvalidLength)?;

        let found = CharClasses::scan(input);
        let rules = [
            (self.config.require_digit, found.digit, PasswordError::MissingDigit),
            (self.config.require_upper, found.upper, PasswordError::MissingUpper),
            (self.config.require_lower, found.lower, PasswordError::MissingLower),
            (self.config.require_special, found.special, PasswordError::MissingSpecial),
        ];
        match rules
            .into_iter()
            .find(|&(required, present, _)| required && !present)
        {
            Some((_, _, err)) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Password {
    fn default() -> Self {
        Self::new(PasswordConfig::default()).expect("default password config is valid")
    }
}

impl Validate for Password {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.check(input).map_err(|err| {
            let error = ValidationError::new(err.code(), err.to_string()).with_field("password");
            if err == PasswordError::InvalidLength {
                error
                    .with_param("min", self.config.min_length.to_string())
                    .with_param("max", self.config.max_length.to_string())
                    .with_param("actual", input.chars().count().to_string())
            } else {
                error
            }
        })
    }
}

/// Checks `input` against the default password rules.
pub fn check_password(input: &str) -> Result<(), PasswordError> {
    Password::default().check(input)
}

// ============================================================================
// TESTS
// ============================================================================
