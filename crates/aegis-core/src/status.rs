//! System mode and threat level enumerations.
//!
//! Both types are parsed leniently: values published by the status service
//! that this build does not recognize degrade to [`SystemMode::Unknown`] and
//! [`ThreatLevel::None`] instead of failing deserialization.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Operating mode reported by the system-status service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SystemMode {
    /// Normal monitoring.
    Conscious,
    /// Forecasting likely incidents.
    Predictive,
    /// Automated remediation in progress.
    SelfHealing,
    /// An active attack has been detected.
    UnderAttack,
    /// Absent or unrecognized mode.
    #[default]
    Unknown,
}

impl SystemMode {
    /// All modes with a dedicated presentation.
    pub const KNOWN: [SystemMode; 4] = [
        SystemMode::Conscious,
        SystemMode::Predictive,
        SystemMode::SelfHealing,
        SystemMode::UnderAttack,
    ];

    /// Parse a wire value, falling back to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "conscious" => SystemMode::Conscious,
            "predictive" => SystemMode::Predictive,
            "self_healing" => SystemMode::SelfHealing,
            "under_attack" => SystemMode::UnderAttack,
            _ => SystemMode::Unknown,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemMode::Conscious => "conscious",
            SystemMode::Predictive => "predictive",
            SystemMode::SelfHealing => "self_healing",
            SystemMode::UnderAttack => "under_attack",
            SystemMode::Unknown => "unknown",
        }
    }
}

/// Severity override published alongside the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ThreatLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    /// Parse a wire value, falling back to `None`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "critical" => ThreatLevel::Critical,
            "high" => ThreatLevel::High,
            "medium" => ThreatLevel::Medium,
            "low" => ThreatLevel::Low,
            _ => ThreatLevel::None,
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Critical => "critical",
            ThreatLevel::High => "high",
            ThreatLevel::Medium => "medium",
            ThreatLevel::Low => "low",
            ThreatLevel::None => "none",
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(self, ThreatLevel::Critical)
    }
}

macro_rules! lenient_wire_enum {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                // Non-string values (numbers, null) degrade like unknown strings.
                let value = serde_json::Value::deserialize(deserializer)?;
                Ok(value.as_str().map(Self::parse).unwrap_or_default())
            }
        }
    };
}

lenient_wire_enum!(SystemMode);
lenient_wire_enum!(ThreatLevel);

/// The pair published by the system-status service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default)]
    pub mode: SystemMode,
    #[serde(default)]
    pub threat_level: ThreatLevel,
}

impl StatusSnapshot {
    pub fn new(mode: SystemMode, threat_level: ThreatLevel) -> Self {
        Self { mode, threat_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_known_values() {
        for mode in SystemMode::KNOWN {
            assert_eq!(SystemMode::parse(mode.as_str()), mode);
        }
    }

    #[test]
    fn test_mode_parse_unknown_falls_back() {
        assert_eq!(SystemMode::parse("dormant"), SystemMode::Unknown);
        assert_eq!(SystemMode::parse(""), SystemMode::Unknown);
        assert_eq!(SystemMode::parse("Conscious"), SystemMode::Unknown);
    }

    #[test]
    fn test_threat_level_defaults_to_none() {
        assert_eq!(ThreatLevel::default(), ThreatLevel::None);
        assert_eq!(ThreatLevel::parse("apocalyptic"), ThreatLevel::None);
        assert!(ThreatLevel::parse("critical").is_critical());
    }

    #[test]
    fn test_snapshot_deserialize_lenient() {
        let snapshot: StatusSnapshot =
            serde_json::from_str(r#"{"mode": "under_attack", "threat_level": "high"}"#).unwrap();
        assert_eq!(snapshot.mode, SystemMode::UnderAttack);
        assert_eq!(snapshot.threat_level, ThreatLevel::High);

        let snapshot: StatusSnapshot =
            serde_json::from_str(r#"{"mode": 42, "threat_level": null}"#).unwrap();
        assert_eq!(snapshot, StatusSnapshot::default());

        let snapshot: StatusSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.mode, SystemMode::Unknown);
        assert_eq!(snapshot.threat_level, ThreatLevel::None);
    }

    #[test]
    fn test_snapshot_serializes_wire_names() {
        let snapshot = StatusSnapshot::new(SystemMode::SelfHealing, ThreatLevel::Low);
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(json["mode"], "self_healing");
        assert_eq!(json["threat_level"], "low");
    }
}
