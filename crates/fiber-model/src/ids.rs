#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::ModelError;

const PREFIX: &str = "FO";

/// Project identifier of the form `FO-<CITY_CODE>-<NUMBER>`.
///
/// The city code (2-4 uppercase ASCII letters) doubles as the area code used
/// to filter map locations. The numeric part keeps its leading zeros.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if !is_valid(trimmed) {
            return Err(ModelError::InvalidProjectId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// City code segment, e.g. `JKT` for `FO-JKT-001`.
    pub fn area_code(&self) -> &str {
        self.0.split('-').nth(1).unwrap_or_default()
    }

    /// Numeric segment as written, e.g. `001`.
    pub fn number(&self) -> &str {
        self.0.rsplit('-').next().unwrap_or_default()
    }
}

fn is_valid(value: &str) -> bool {
    let mut parts = value.split('-');
    let (Some(prefix), Some(city), Some(number), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    prefix == PREFIX
        && (2..=4).contains(&city.len())
        && city.bytes().all(|b| b.is_ascii_uppercase())
        && !number.is_empty()
        && number.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProjectId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_exposes_segments() {
        let id = ProjectId::new("FO-JKT-001").unwrap();
        assert_eq!(id.area_code(), "JKT");
        assert_eq!(id.number(), "001");
        assert_eq!(id.to_string(), "FO-JKT-001");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let id: ProjectId = " FO-BDG-12 ".parse().unwrap();
        assert_eq!(id.as_str(), "FO-BDG-12");
    }

    #[test]
    fn rejects_malformed_ids() {
        for bad in [
            "",
            "FO-JKT",
            "FO-JKT-",
            "FO-jkt-001",
            "FX-JKT-001",
            "FO-J-001",
            "FO-JAKAR-001",
            "FO-JKT-00A",
            "FO-JKT-001-2",
        ] {
            assert!(ProjectId::new(bad).is_err(), "{bad} should be rejected");
        }
    }
}
