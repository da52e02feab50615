// Status tokens and their presentation category
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusToken {
    Online,
    Offline,
    Maintenance,
    Active,
    Standby,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    Positive,
    Negative,
    Warning,
    Info,
    Neutral,
}

impl StatusToken {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "online" => Some(Self::Online),
            "offline" => Some(Self::Offline),
            "maintenance" => Some(Self::Maintenance),
            "active" => Some(Self::Active),
            "standby" => Some(Self::Standby),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Maintenance => "maintenance",
            Self::Active => "active",
            Self::Standby => "standby",
            Self::Error => "error",
        }
    }

    /// Badge text, e.g. "Standby"
    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Maintenance => "Maintenance",
            Self::Active => "Active",
            Self::Standby => "Standby",
            Self::Error => "Error",
        }
    }

    pub fn category(self) -> StatusCategory {
        match self {
            Self::Online | Self::Active => StatusCategory::Positive,
            Self::Offline | Self::Error => StatusCategory::Negative,
            Self::Maintenance => StatusCategory::Warning,
            Self::Standby => StatusCategory::Info,
        }
    }
}

/// Classify a raw status string; anything unknown is neutral.
pub fn classify_status(token: &str) -> StatusCategory {
    StatusToken::parse(token)
        .map(StatusToken::category)
        .unwrap_or(StatusCategory::Neutral)
}
