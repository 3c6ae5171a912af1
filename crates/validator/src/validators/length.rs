//! String length measurement
//!
//! By default length is measured in Unicode scalar values (chars), never in
//! bytes. [`LengthMode::DisplayWidth`] approximates on-screen width instead:
//! every Han ideograph counts as 2 and everything else as 1, since CJK glyphs
//! render roughly twice as wide as Latin letters and digits in most fonts.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::foundation::{ConfigError, Validate, ValidationError, check_length_bounds};

static HAN: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\p{Han}").expect("Han script class is valid"));

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count Unicode scalar values.
    #[default]
    Chars,
    /// Count Han ideographs as 2 and every other char as 1.
    DisplayWidth,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    ///
    /// ```
    /// use identity_validator::validators::LengthMode;
    ///
    /// assert_eq!(LengthMode::Chars.measure("中文汉字"), 4);
    /// assert_eq!(LengthMode::DisplayWidth.measure("中文汉字"), 8);
    /// assert_eq!(LengthMode::DisplayWidth.measure("abcd1234"), 8);
    /// ```
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        let chars = input.chars().count();
        match self {
            LengthMode::Chars => chars,
            LengthMode::DisplayWidth => chars + HAN.find_iter(input).count(),
        }
    }
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates that a string length is within an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    /// Minimum length (inclusive).
    pub min: usize,
    /// Maximum length (inclusive).
    pub max: usize,
    /// How to count length.
    pub mode: LengthMode,
}

impl LengthRange {
    /// Creates a new length range validator that counts Unicode chars.
    ///
    /// Returns an error if `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        Self::with_mode(min, max, LengthMode::Chars)
    }

    /// Creates a length range validator with an explicit counting mode.
    ///
    /// Returns an error if `min > max`.
    pub fn with_mode(min: usize, max: usize, mode: LengthMode) -> Result<Self, ConfigError> {
        check_length_bounds("length", min, max)?;
        Ok(Self { min, max, mode })
    }

    /// Returns the measured length if it lies within the range.
    #[inline]
    pub(crate) fn check(&self, input: &str) -> Result<usize, usize> {
        let len = self.mode.measure(input);
        if (self.min..=self.max).contains(&len) {
            Ok(len)
        } else {
            Err(len)
        }
    }
}

impl Validate for LengthRange {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.check(input)
            .map(|_| ())
            .map_err(|len| ValidationError::length_range(self.min, self.max, len))
    }
}

/// Creates a length range validator.
pub fn length_range(min: usize, max: usize) -> Result<LengthRange, ConfigError> {
    LengthRange::new(min, max)
}

// ============================================================================
// TESTS
// ============================================================================
