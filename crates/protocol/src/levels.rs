use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a diagnostic finding.
///
/// Upstream sends free-form strings; [`Priority::parse`] maps them onto this
/// closed set and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Immediate,
    Critical,
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Low
    }
}

impl Priority {
    /// Case-insensitive parse. Returns `None` for values outside the known set
    /// so callers can decide whether to log before falling back to [`Priority::Low`].
    pub fn try_parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "IMMEDIATE" => Some(Self::Immediate),
            "CRITICAL" => Some(Self::Critical),
            "HIGH" => Some(Self::High),
            "MEDIUM" => Some(Self::Medium),
            "LOW" => Some(Self::Low),
            _ => None,
        }
    }

    /// Fail-soft parse: unknown values land in the lowest bucket.
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or_default()
    }

    /// Priorities that belong in the 30-day window.
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Immediate | Self::Critical | Self::High)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "IMMEDIATE",
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk attached to a finding and carried onto its roadmap item.
///
/// Unrecognized upstream values are kept verbatim in [`RiskLevel::Other`] and
/// rank below `Low`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    Other(String),
}

impl Default for RiskLevel {
    fn default() -> Self {
        Self::Medium
    }
}

impl RiskLevel {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "HIGH" => Self::High,
            "MEDIUM" => Self::Medium,
            "LOW" => Self::Low,
            _ => Self::Other(normalized),
        }
    }

    /// Sort weight; higher sorts first.
    pub const fn weight(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Other(_) => 0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time bucket of a roadmap item, serialized as its day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Horizon {
    Days30,
    Days90,
    Days180,
}

impl Horizon {
    pub const fn days(self) -> u16 {
        match self {
            Self::Days30 => 30,
            Self::Days90 => 90,
            Self::Days180 => 180,
        }
    }
}

impl TryFrom<u16> for Horizon {
    type Error = String;

    fn try_from(days: u16) -> Result<Self, Self::Error> {
        match days {
            30 => Ok(Self::Days30),
            90 => Ok(Self::Days90),
            180 => Ok(Self::Days180),
            other => Err(format!("unsupported horizon {other} (expected 30, 90 or 180)")),
        }
    }
}

impl From<Horizon> for u16 {
    fn from(horizon: Horizon) -> Self {
        horizon.days()
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn priority_parse_is_case_insensitive_and_fail_soft() {
        assert_eq!(Priority::parse("high"), Priority::High);
        assert_eq!(Priority::parse("  Critical "), Priority::Critical);
        assert_eq!(Priority::parse("IMMEDIATE"), Priority::Immediate);
        assert_eq!(Priority::parse("medium"), Priority::Medium);
        assert_eq!(Priority::parse("someday"), Priority::Low);
        assert_eq!(Priority::parse(""), Priority::Low);
        assert_eq!(Priority::try_parse("someday"), None);
    }

    #[test]
    fn urgent_priorities() {
        assert!(Priority::Immediate.is_urgent());
        assert!(Priority::Critical.is_urgent());
        assert!(Priority::High.is_urgent());
        assert!(!Priority::Medium.is_urgent());
        assert!(!Priority::Low.is_urgent());
    }

    #[test]
    fn risk_level_keeps_unknown_values_and_ranks_them_last() {
        let odd = RiskLevel::parse("severe");
        assert_eq!(odd, RiskLevel::Other("SEVERE".to_string()));
        assert!(odd.weight() < RiskLevel::Low.weight());
        assert!(RiskLevel::High.weight() > RiskLevel::Medium.weight());
        assert_eq!(RiskLevel::parse("low"), RiskLevel::Low);
    }

    #[test]
    fn risk_level_serializes_as_upper_case_string() {
        let json = serde_json::to_string(&RiskLevel::High).unwrap();
        assert_eq!(json, "\"HIGH\"");
        let parsed: RiskLevel = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, RiskLevel::Medium);
    }

    #[test]
    fn horizon_serializes_as_days_and_rejects_unknown_values() {
        assert_eq!(serde_json::to_string(&Horizon::Days90).unwrap(), "90");
        let parsed: Horizon = serde_json::from_str("180").unwrap();
        assert_eq!(parsed, Horizon::Days180);
        assert!(serde_json::from_str::<Horizon>("45").is_err());
    }
}
