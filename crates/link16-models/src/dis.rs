//! DIS entity identifiers carried through track reports.
//!
//! The codec does not interpret the triple; it stores it in the family's DIS
//! extension word so a simulation can correlate a Link-16 track with its
//! DIS entity.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CodecError;

/// Site, application and entity numbers of a DIS entity.
///
/// # Examples
///
/// ```
/// use link16_models::DisEntityId;
///
/// let id: DisEntityId = "1:2:300".parse().unwrap();
/// assert_eq!(id, DisEntityId::new(1, 2, 300));
/// assert_eq!(id.to_string(), "1:2:300");
/// assert!("1:2".parse::<DisEntityId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct DisEntityId {
    /// Site number.
    pub site: u16,
    /// Application number.
    pub application: u16,
    /// Entity number.
    pub entity: u16,
}

impl DisEntityId {
    /// Build from the three numbers.
    pub fn new(site: u16, application: u16, entity: u16) -> Self {
        Self {
            site,
            application,
            entity,
        }
    }
}

impl fmt::Display for DisEntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.site, self.application, self.entity)
    }
}

impl FromStr for DisEntityId {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CodecError::InvalidEntityId {
            value: s.to_string(),
        };
        let mut parts = s.split(':').map(|part| part.trim().parse::<u16>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(site)), Some(Ok(application)), Some(Ok(entity)), None) => {
                Ok(Self::new(site, application, entity))
            }
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let id: DisEntityId = " 7 : 0 : 65535".parse().unwrap();
        assert_eq!(id, DisEntityId::new(7, 0, 65535));
        assert_eq!(id.to_string(), "7:0:65535");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["", "1:2", "1:2:3:4", "1:x:3", "1:2:70000"] {
            assert_eq!(
                bad.parse::<DisEntityId>(),
                Err(CodecError::InvalidEntityId {
                    value: bad.to_string()
                }),
                "{bad}"
            );
        }
    }

    #[test]
    fn serializes_as_object() {
        let json = serde_json::to_value(DisEntityId::new(1, 2, 3)).unwrap();
        assert_eq!(json, serde_json::json!({"site": 1, "application": 2, "entity": 3}));
    }
}
