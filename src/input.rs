//! # Numeric entry: text and range controls
//!
//! Pixel width, focal length and f-number can each be edited two ways:
//!
//! 1. a **range control**, which always carries a valid number, and
//! 2. a **free-text field**, which passes through every intermediate keystroke
//!    (`""`, `"1"`, `"1."`, `"abc"` ...).
//!
//! Both are carried by [`Entry`]. A [`TextField`] keeps the canonical value next to
//! the raw text last typed by the user. Text that does not parse is kept verbatim for
//! redisplay but never touches the canonical value, so a half-typed number cannot
//! disturb the derived exposure time.
//!
//! ## Parsing rules
//!
//! - Surrounding whitespace is ignored when parsing (the stored text keeps it).
//! - Integers ([`parse_integer`]) must be a complete base-10 `u32`: `"50"` and `"+50"`
//!   parse, `"-5"`, `"5.0"`, `"50mm"` do not.
//! - F-numbers ([`parse_f_number`]) must be a finite decimal that is still positive
//!   once rounded to the nearest tenth, so `"1.37"` becomes `1.4` while `"0"`,
//!   `"0.04"`, `"NaN"` and `"inf"` are rejected.
//! - Range values go through the same check; an f-number slider sending `NaN` is
//!   ignored like unparsable text.
//!
//! ## See also
//!
//! * [`crate::store::ParameterStore::dispatch`] – Where entries are applied.
//! * [`InputRange`] – Bounds advertised to range controls.
use std::fmt;

use crate::action::DispatchOutcome;

/// Raw payload of a numeric setter.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<T> {
    /// Unparsed text from a free-text field.
    Text(String),
    /// Value from a range control.
    Range(T),
}

impl<T> Entry<T> {
    pub fn text(raw: impl Into<String>) -> Self {
        Entry::Text(raw.into())
    }
}

impl<T> From<&str> for Entry<T> {
    fn from(raw: &str) -> Self {
        Entry::Text(raw.to_string())
    }
}

impl<T> From<String> for Entry<T> {
    fn from(raw: String) -> Self {
        Entry::Text(raw)
    }
}

impl From<u32> for Entry<u32> {
    fn from(value: u32) -> Self {
        Entry::Range(value)
    }
}

impl From<f64> for Entry<f64> {
    fn from(value: f64) -> Self {
        Entry::Range(value)
    }
}

/// Round to the nearest tenth, the granularity of f-numbers.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Parse a complete base-10 integer, ignoring surrounding whitespace.
pub fn parse_integer(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok()
}

/// Parse an f-number and quantize it to a tenth.
///
/// Return
/// ----------
/// * `Some(value)` for a finite decimal, rounded to one decimal digit, that is `> 0`.
/// * `None` for empty, partial, non-numeric, non-finite text, or text rounding to `<= 0`.
pub fn parse_f_number(text: &str) -> Option<f64> {
    let value = round_to_tenth(text.trim().parse::<f64>().ok()?);
    is_valid_f_number(value).then_some(value)
}

/// A quantized f-number is usable when finite and strictly positive.
pub fn is_valid_f_number(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// A numeric value that can be typed as text.
pub trait NumericValue: Copy + PartialEq + fmt::Display {
    /// Parse user text into a canonical value.
    fn parse_text(text: &str) -> Option<Self>;

    /// Bring a range control value onto the canonical grid.
    fn quantize(self) -> Self {
        self
    }

    /// Whether a quantized value may become canonical.
    fn is_valid(self) -> bool {
        true
    }
}

impl NumericValue for u32 {
    fn parse_text(text: &str) -> Option<Self> {
        parse_integer(text)
    }
}

/// `f64` fields hold f-numbers, quantized to a tenth.
impl NumericValue for f64 {
    fn parse_text(text: &str) -> Option<Self> {
        parse_f_number(text)
    }

    fn quantize(self) -> Self {
        round_to_tenth(self)
    }

    fn is_valid(self) -> bool {
        is_valid_f_number(self)
    }
}

/// Canonical value paired with the raw text shown in its text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField<T> {
    value: T,
    text: String,
}

impl<T: NumericValue> TextField<T> {
    pub fn new(value: T) -> Self {
        TextField {
            value,
            text: value.to_string(),
        }
    }

    /// Last valid value.
    pub fn value(&self) -> T {
        self.value
    }

    /// Text to echo back into the text box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply an entry from either control.
    ///
    /// Text is always stored verbatim. The canonical value only moves when the text
    /// parses. A valid range value rewrites the text so the text box follows the
    /// slider; an invalid one (`NaN` f-number) is dropped and both stay as they were.
    pub fn apply(&mut self, entry: Entry<T>) -> DispatchOutcome {
        match entry {
            Entry::Text(raw) => {
                self.text = raw;
                match T::parse_text(&self.text) {
                    Some(parsed) => self.set_value(parsed),
                    None => DispatchOutcome::TextRetained,
                }
            }
            Entry::Range(value) => {
                let value = value.quantize();
                if !value.is_valid() {
                    return DispatchOutcome::Rejected;
                }
                self.text = value.to_string();
                self.set_value(value)
            }
        }
    }

    fn set_value(&mut self, value: T) -> DispatchOutcome {
        if self.value == value {
            DispatchOutcome::Unchanged
        } else {
            self.value = value;
            DispatchOutcome::Updated
        }
    }
}

/// Bounds and step of a range control.
///
/// The store never clamps; this is what a range control advertises and what a
/// presentation layer may clamp to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange<T> {
    pub min: T,
    pub max: T,
    pub step: T,
}

impl<T: Copy + PartialOrd> InputRange<T> {
    pub const fn new(min: T, max: T, step: T) -> Self {
        InputRange { min, max, step }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}
