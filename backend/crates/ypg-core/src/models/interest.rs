use serde::{Deserialize, Deserializer, Serialize, Serializer};

const OTHER_ID: &str = "other";

/// Interest area a student picked at registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Interest {
    Chef,
    Hotel,
    Baker,
    Events,
    Hospitality,
    Other(String),
}

impl Interest {
    pub const KNOWN: [Interest; 5] = [
        Interest::Chef,
        Interest::Hotel,
        Interest::Baker,
        Interest::Events,
        Interest::Hospitality,
    ];

    pub fn from_id(id: &str) -> Self {
        match id {
            "chef" => Self::Chef,
            "hotel" => Self::Hotel,
            "baker" => Self::Baker,
            "events" => Self::Events,
            "hospitality" => Self::Hospitality,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Chef => "chef",
            Self::Hotel => "hotel",
            Self::Baker => "baker",
            Self::Events => "events",
            Self::Hospitality => "hospitality",
            Self::Other(text) => text,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Chef => "Chef / Cooking",
            Self::Hotel => "Hotel Management",
            Self::Baker => "Bakery / Pastry",
            Self::Events => "Events & Catering",
            Self::Hospitality => "General Hospitality",
            Self::Other(text) if text.is_empty() || text == OTHER_ID => "Other Culinary Interest",
            Self::Other(text) => text,
        }
    }
}

impl From<&str> for Interest {
    fn from(id: &str) -> Self {
        Self::from_id(id)
    }
}

impl std::fmt::Display for Interest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Serialize for Interest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Interest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(Self::from_id(&id))
    }
}
