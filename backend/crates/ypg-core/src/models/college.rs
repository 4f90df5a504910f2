use serde::{Deserialize, Deserializer, Serialize, Serializer};

const OTHER_ID: &str = "other";

/// College affiliation of a student.
///
/// Known institutions serialize as their catalog id. Anything else, including
/// the literal `"other"` id, is carried verbatim in [`College::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum College {
    Harlow,
    Westminster,
    Southend,
    Colchester,
    Other(String),
}

impl College {
    /// Catalog entries offered at registration.
    pub const KNOWN: [College; 4] = [
        College::Harlow,
        College::Westminster,
        College::Southend,
        College::Colchester,
    ];

    pub fn from_id(id: &str) -> Self {
        match id {
            "harlow" => Self::Harlow,
            "westminster" => Self::Westminster,
            "southend" => Self::Southend,
            "colchester" => Self::Colchester,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Harlow => "harlow",
            Self::Westminster => "westminster",
            Self::Southend => "southend",
            Self::Colchester => "colchester",
            Self::Other(text) => text,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Harlow => "Harlow College",
            Self::Westminster => "Westminster Kingsway College",
            Self::Southend => "South Essex College",
            Self::Colchester => "Colchester Institute",
            Self::Other(text) if text.is_empty() || text == OTHER_ID => "Other Institution",
            Self::Other(text) => text,
        }
    }
}

impl From<&str> for College {
    fn from(id: &str) -> Self {
        Self::from_id(id)
    }
}

impl std::fmt::Display for College {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Serialize for College {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for College {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Self::from_id(&id))
    }
}
