//! Username validator.
//!
//! A username is a non-empty run of Unicode letters from any script, ASCII
//! digits, and optionally `.`, `-` and `_`, whose length falls within a
//! configured range. Length is counted in chars unless
//! [`LengthMode::DisplayWidth`] is selected.

use serde::{Deserialize, Serialize};

use crate::foundation::{ConfigError, Validate, ValidationError, check_length_bounds};
use crate::validators::length::{LengthMode, LengthRange};

// ============================================================================
// USERNAME CONFIG
// ============================================================================

/// Rules for username validation.
///
/// Every field has a default, so a config can be written as a struct literal
/// with `..Default::default()`, through the fluent setters, or deserialized
/// from a partial document.
///
/// | Option | Default |
/// |---|---|
/// | `min_length` | 6 |
/// | `max_length` | 64 |
/// | `allow_digits` | `true` |
/// | `allow_dot` | `true` |
/// | `allow_hyphen` | `true` |
/// | `allow_underscore` | `true` |
/// | `length_mode` | `chars` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsernameConfig {
    /// Minimum effective length (inclusive).
    pub min_length: usize,
    /// Maximum effective length (inclusive).
    pub max_length: usize,
    /// Whether ASCII digits are allowed.
    pub allow_digits: bool,
    /// Whether `.` is allowed.
    pub allow_dot: bool,
    /// Whether `-` is allowed.
    pub allow_hyphen: bool,
    /// Whether `_` is allowed.
    pub allow_underscore: bool,
    /// How effective length is counted.
    pub length_mode: LengthMode,
}

impl UsernameConfig {
    /// Default minimum length.
    pub const DEFAULT_MIN_LENGTH: usize = 6;
    /// Default maximum length.
    pub const DEFAULT_MAX_LENGTH: usize = 64;

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

    /// Allows or forbids ASCII digits.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_digits(mut self, allow: bool) -> Self {
        self.allow_digits = allow;
        self
    }

    /// Allows or forbids `.`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_dot(mut self, allow: bool) -> Self {
        self.allow_dot = allow;
        self
    }

    /// Allows or forbids `-`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_hyphen(mut self, allow: bool) -> Self {
        self.allow_hyphen = allow;
        self
    }

    /// Allows or forbids `_`.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_underscore(mut self, allow: bool) -> Self {
        self.allow_underscore = allow;
        self
    }

    /// Sets how effective length is counted.
    #[must_use = "builder methods must be chained or built"]
    pub fn length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Builds the anchored character-class pattern for these rules.
    fn charset_pattern(&self) -> String {
        let mut class = String::from(r"\p{L}");
        if self.allow_digits {
            class.push_str("0-9");
        }
        if self.allow_dot {
            class.push_str(r"\.");
        }
        if self.allow_hyphen {
            class.push_str(r"\-");
        }
        if self.allow_underscore {
            class.push('_');
        }
        format!("^[{class}]+$")
    }
}

impl Default for UsernameConfig {
    fn default() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
            allow_digits: true,
            allow_dot: true,
            allow_hyphen: true,
            allow_underscore: true,
            length_mode: LengthMode::Chars,
        }
    }
}

// ============================================================================
// USERNAME VALIDATOR
// ============================================================================

/// Validates usernames against a [`UsernameConfig`].
///
/// The allowed character set is compiled once, when the validator is built.
///
/// # Examples
///
/// ```
/// use identity_validator::validators::{Username, UsernameConfig};
///
/// let default = Username::default();
/// assert!(default.is_valid("mio-cat"));
/// assert!(default.is_valid("Beyond喜欢你"));
/// assert!(!default.is_valid("#small!!!!!"));
///
/// let strict = Username::new(
///     UsernameConfig::default()
///         .min_length(8)
///         .allow_dot(false)
///         .allow_hyphen(false)
///         .allow_underscore(false),
/// )
/// .unwrap();
/// assert!(!strict.is_valid("Michael.Learns.To.Rock"));
/// ```
#[derive(Debug, Clone)]
pub struct Username {
    config: UsernameConfig,
    length: LengthRange,
    charset: regex::Regex,
}

impl Username {
    /// Creates a username validator.
    ///
    /// Fails with [`ConfigError::InvertedLength`] if `min_length > max_length`.
    pub fn new(config: UsernameConfig) -> Result<Self, ConfigError> {
        check_length_bounds("username", config.min_length, config.max_length)?;
        let charset = regex::Regex::new(&config.charset_pattern())?;
        Ok(Self {
            config,
            length: LengthRange {
                min: config.min_length,
                max: config.max_length,
                mode: config.length_mode,
            },
            charset,
        })
    }

    /// Returns the rules this validator enforces.
    #[must_use]
    pub fn config(&self) -> &UsernameConfig {
        &self.config
    }

    /// Returns `true` if `input` satisfies every rule.
    #[must_use]
    pub fn is_valid(&self, input: &str) -> bool {
        Validate::is_valid(self, input)
    }
}

impl Default for Username {
    fn default() -> Self {
        Self::new(UsernameConfig::default()).expect("default username config is valid")
    }
}

impl Validate for Username {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if !self.charset.is_match(input) {
            tracing::trace!(len = input.len(), "username rejected: invalid characters");
            return Err(ValidationError::new(
                "invalid_characters",
                "Username may only contain letters, digits and the enabled separators",
            )
            .with_field("username"));
        }

        if let Err(len) = self.length.check(input) {
            tracing::trace!(
                len,
                min = self.config.min_length,
                max = self.config.max_length,
                "username rejected: length out of range"
            );
            return Err(ValidationError::length_range(
                self.config.min_length,
                self.config.max_length,
                len,
            )
            .with_field("username"));
        }

        Ok(())
    }
}

/// Returns `true` if `input` is valid under the default username rules.
#[must_use]
pub fn is_username(input: &str) -> bool {
    static DEFAULT: std::sync::LazyLock<Username> = std::sync::LazyLock::new(Username::default);
    DEFAULT.is_valid(input)
}

// ============================================================================
// TESTS
// ============================================================================
