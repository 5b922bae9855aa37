//! Domain Value Objects
//!
//! Validated ad fields. Lengths count characters, matching the `varchar(n)`
//! limits of the `ads` table.

use std::fmt;

use thiserror::Error;

pub const TITLE_MIN_LENGTH: usize = 3;
pub const TITLE_MAX_LENGTH: usize = 100;
pub const CONTENT_MIN_LENGTH: usize = 10;
pub const CONTENT_MAX_LENGTH: usize = 1000;
pub const IMAGE_URL_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdValidationError {
    #[error("Title must be 3 to 100 characters (got {0})")]
    TitleLength(usize),

    #[error("Content must be 10 to 1000 characters (got {0})")]
    ContentLength(usize),

    #[error("Image URL must be at most 255 characters (got {0})")]
    ImageUrlTooLong(usize),

    #[error("Price must be a non-negative number (got {0})")]
    InvalidPrice(f64),
}

fn char_count(raw: &str) -> usize {
    raw.chars().count()
}

/// Ad title, 3 to 100 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdTitle(String);

impl AdTitle {
    pub fn new(raw: impl Into<String>) -> Result<Self, AdValidationError> {
        let raw = raw.into();
        let len = char_count(&raw);
        if !(TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&len) {
            return Err(AdValidationError::TitleLength(len));
        }
        Ok(Self(raw))
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ad body, 10 to 1000 characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdContent(String);

impl AdContent {
    pub fn new(raw: impl Into<String>) -> Result<Self, AdValidationError> {
        let raw = raw.into();
        let len = char_count(&raw);
        if !(CONTENT_MIN_LENGTH..=CONTENT_MAX_LENGTH).contains(&len) {
            return Err(AdValidationError::ContentLength(len));
        }
        Ok(Self(raw))
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Image link; may be empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(raw: impl Into<String>) -> Result<Self, AdValidationError> {
        let raw = raw.into();
        let len = char_count(&raw);
        if len > IMAGE_URL_MAX_LENGTH {
            return Err(AdValidationError::ImageUrlTooLong(len));
        }
        Ok(Self(raw))
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Finite, non-negative price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, AdValidationError> {
        // NaN fails both comparisons
        if !(value.is_finite() && value >= 0.0) {
            return Err(AdValidationError::InvalidPrice(value));
        }
        Ok(Self(value))
    }

    pub fn from_db(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bounds() {
        assert!(AdTitle::new("abc").is_ok());
        assert!(AdTitle::new("a".repeat(100)).is_ok());
        assert_eq!(AdTitle::new("ab"), Err(AdValidationError::TitleLength(2)));
        assert_eq!(
            AdTitle::new("a".repeat(101)),
            Err(AdValidationError::TitleLength(101))
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        // 3 characters, 6 bytes
        assert!(AdTitle::new("äöü").is_ok());
        // 100 characters, 200 bytes
        assert!(AdTitle::new("ж".repeat(100)).is_ok());
        assert!(ImageUrl::new("é".repeat(255)).is_ok());
    }

    #[test]
    fn test_content_bounds() {
        assert!(AdContent::new("0123456789").is_ok());
        assert!(AdContent::new("x".repeat(1000)).is_ok());
        assert_eq!(
            AdContent::new("too short"),
            Err(AdValidationError::ContentLength(9))
        );
        assert_eq!(
            AdContent::new("x".repeat(1001)),
            Err(AdValidationError::ContentLength(1001))
        );
    }

    #[test]
    fn test_image_url_may_be_empty() {
        assert!(ImageUrl::new("").is_ok());
        assert_eq!(
            ImageUrl::new("u".repeat(256)),
            Err(AdValidationError::ImageUrlTooLong(256))
        );
    }

    #[test]
    fn test_price() {
        assert_eq!(Price::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Price::new(19.99).unwrap().to_string(), "19.99");
        assert!(Price::new(-0.01).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(Price::new(f64::INFINITY).is_err());
    }
}
