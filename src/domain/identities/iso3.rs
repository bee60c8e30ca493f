use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;

/// A validated ISO 3166-1 alpha-3 country code.
///
/// Guarantees:
/// - Exactly three ASCII letters
/// - Stored lowercase, so `BGD` and `bgd` are the same country
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iso3(String);

impl Iso3 {
    /// Validate and create a new instance. Surrounding whitespace is ignored.
    pub fn new(code: &str) -> Result<Self, AppError> {
        let trimmed = code.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_lowercase()))
        } else {
            Err(AppError::InvalidIso3(code.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for Iso3 {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Iso3 {
    fn as_ref(&self) -> &str {
        self
    }
}

impl std::fmt::Display for Iso3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Iso3 {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Iso3::new(s)
    }
}

impl From<Iso3> for String {
    fn from(val: Iso3) -> Self {
        val.0
    }
}

impl Serialize for Iso3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Iso3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Iso3::new(&s).map_err(serde::de::Error::custom)
    }
}
