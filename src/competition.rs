use serde::{Deserialize, Deserializer};
use std::fmt;

/// The competitions the client knows how to display.
///
/// Each variant maps 1:1 to a football-data.org competition id and a
/// human-readable league name. Note the Europa League is served under the
/// `EC` id upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Competition {
    Eredivisie,
    ChampionsLeague,
    EuropaLeague,
}

impl Competition {
    /// Short code used in config files and CLI arguments
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eredivisie => "DED",
            Self::ChampionsLeague => "CL",
            Self::EuropaLeague => "EL",
        }
    }

    /// Competition id in API request paths
    pub fn remote_id(&self) -> &'static str {
        match self {
            Self::Eredivisie => "DED",
            Self::ChampionsLeague => "CL",
            Self::EuropaLeague => "EC",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Eredivisie => "Eredivisie",
            Self::ChampionsLeague => "Champions League",
            Self::EuropaLeague => "Europa League",
        }
    }

    pub fn all() -> [Self; 3] {
        [Self::Eredivisie, Self::ChampionsLeague, Self::EuropaLeague]
    }

    /// Get the next competition in the cycle (DED → CL → EL → DED)
    pub fn next(&self) -> Self {
        match self {
            Self::Eredivisie => Self::ChampionsLeague,
            Self::ChampionsLeague => Self::EuropaLeague,
            Self::EuropaLeague => Self::Eredivisie,
        }
    }

    /// Get the previous competition in the cycle (DED → EL → CL → DED)
    pub fn prev(&self) -> Self {
        match self {
            Self::Eredivisie => Self::EuropaLeague,
            Self::ChampionsLeague => Self::Eredivisie,
            Self::EuropaLeague => Self::ChampionsLeague,
        }
    }

    /// Parse a short code, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "DED" => Some(Self::Eredivisie),
            "CL" => Some(Self::ChampionsLeague),
            "EL" => Some(Self::EuropaLeague),
            _ => None,
        }
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Competition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Competition::from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("Unknown competition code: {}", code)))
    }
}
