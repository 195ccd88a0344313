use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Roles a principal can hold.
///
/// Adding a role is a compile-time decision: every `match` on this enum
/// must be updated before the crate builds again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Librarian,
    Student,
}

impl UserType {
    /// Wire representation carried in token claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Librarian => "LIBRARIAN",
            UserType::Student => "STUDENT",
        }
    }

    /// Human-readable name used in access-denied messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserType::Librarian => "Librarian",
            UserType::Student => "Student",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIBRARIAN" => Ok(UserType::Librarian),
            "STUDENT" => Ok(UserType::Student),
            other => Err(anyhow::anyhow!("Invalid user type: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_type() {
        assert_eq!("LIBRARIAN".parse::<UserType>().unwrap(), UserType::Librarian);
        assert_eq!("STUDENT".parse::<UserType>().unwrap(), UserType::Student);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "librarian".parse::<UserType>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid user type: librarian");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&UserType::Librarian).unwrap();
        assert_eq!(json, r#""LIBRARIAN""#);
        let parsed: UserType = serde_json::from_str(r#""STUDENT""#).unwrap();
        assert_eq!(parsed, UserType::Student);
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for user_type in [UserType::Librarian, UserType::Student] {
            assert_eq!(user_type.to_string().parse::<UserType>().unwrap(), user_type);
        }
    }
}
