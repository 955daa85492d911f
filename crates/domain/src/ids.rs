use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| DomainError::invalid_id(s.to_string()))
            }
        }
    };
}

// Catalog entries
define_id!(SongId);
define_id!(FilmId);

// Groupings
define_id!(CategoryId);
define_id!(GenreId);

// Feedback
define_id!(CommentId);
define_id!(ReviewId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&SongId::new(42)).unwrap();
        assert_eq!(json, "42");

        let id: CategoryId = serde_json::from_str("7").unwrap();
        assert_eq!(id.get(), 7);
    }

    #[test]
    fn ids_parse_from_select_values() {
        assert_eq!(" 12 ".parse::<GenreId>().unwrap(), GenreId::new(12));
        assert!("".parse::<GenreId>().is_err());
        assert!("twelve".parse::<FilmId>().is_err());
    }
}
