use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }
    };
}

record_id!(
    /// Server id of a database connection
    ConnectionId
);
record_id!(
    /// Server id of an AI model configuration
    LlmConfigId
);
record_id!(
    /// Server id of a SQL statement
    SqlId
);
record_id!(
    /// Server id of a review report
    ReportId
);
record_id!(
    /// Server id of a statement version snapshot
    VersionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_transparent_in_json() {
        let id = SqlId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: SqlId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_parse_from_cli_text() {
        assert_eq!(" 7 ".parse::<ConnectionId>().unwrap(), ConnectionId::new(7));
        assert!("seven".parse::<ConnectionId>().is_err());
    }
}
