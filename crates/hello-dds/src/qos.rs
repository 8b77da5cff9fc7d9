// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Endpoint QoS selection.
//!
//! A [`QosProfile`] picks the reliability / durability / history triple.
//! [`EndpointQos`] layers an optional profile file and a history depth
//! override on top and resolves everything into an [`hdds::QoS`].

use std::fmt;
use std::path::PathBuf;

use hdds::dds::qos::loaders::ProfileLoader;
use hdds::QoS;

use crate::error::{Error, Result};

/// History depth of the best-effort profile.
pub const BEST_EFFORT_DEPTH: u32 = 10;

/// Built-in QoS profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QosProfile {
    /// RELIABLE + TRANSIENT_LOCAL + KEEP_ALL.
    #[default]
    Reliable,
    /// BEST_EFFORT + VOLATILE + KEEP_LAST(10).
    BestEffort,
}

impl QosProfile {
    pub fn to_qos(self) -> QoS {
        match self {
            QosProfile::Reliable => QoS::reliable().transient_local().keep_all(),
            QosProfile::BestEffort => QoS::best_effort().volatile().keep_last(BEST_EFFORT_DEPTH),
        }
    }
}

impl std::str::FromStr for QosProfile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reliable" | "rel" | "r" => Ok(QosProfile::Reliable),
            "best-effort" | "besteffort" | "be" => Ok(QosProfile::BestEffort),
            _ => Err(format!("Unknown QoS: {}", s)),
        }
    }
}

impl fmt::Display for QosProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QosProfile::Reliable => write!(f, "reliable"),
            QosProfile::BestEffort => write!(f, "best-effort"),
        }
    }
}

/// QoS profile file (vendor XML or HDDS YAML).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QosFile {
    pub path: PathBuf,
    /// Profile inside the file (YAML only, `None` = default profile).
    pub profile_name: Option<String>,
}

/// QoS applied to the HelloWorld writer or reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointQos {
    pub profile: QosProfile,
    /// Replace the history policy with KEEP_LAST(depth).
    pub history_depth: Option<u32>,
    /// Replaces `profile` when set.
    pub file: Option<QosFile>,
}

impl EndpointQos {
    pub fn new(profile: QosProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn history_depth(mut self, depth: u32) -> Self {
        self.history_depth = Some(depth);
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>, profile_name: Option<String>) -> Self {
        self.file = Some(QosFile {
            path: path.into(),
            profile_name,
        });
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_depth == Some(0) {
            return Err(Error::InvalidConfig(
                "history depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve into middleware QoS.
    pub fn resolve(&self) -> Result<QoS> {
        self.validate()?;

        let qos = match &self.file {
            Some(file) => ProfileLoader::load(&file.path, file.profile_name.as_deref()).map_err(
                |reason| Error::QosFile {
                    path: file.path.display().to_string(),
                    reason,
                },
            )?,
            None => self.profile.to_qos(),
        };

        let qos = match self.history_depth {
            Some(depth) => qos.keep_last(depth),
            None => qos,
        };

        tracing::debug!(
            "Resolved QoS: reliability={:?} durability={:?} history={:?}",
            qos.reliability,
            qos.durability,
            qos.history
        );

        Ok(qos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdds::dds::{Durability, History, Reliability};
    use std::io::Write;

    #[test]
    fn test_parse_profile_aliases() {
        assert_eq!("reliable".parse::<QosProfile>(), Ok(QosProfile::Reliable));
        assert_eq!("REL".parse::<QosProfile>(), Ok(QosProfile::Reliable));
        assert_eq!("best-effort".parse::<QosProfile>(), Ok(QosProfile::BestEffort));
        assert_eq!("be".parse::<QosProfile>(), Ok(QosProfile::BestEffort));
        assert!("lossy".parse::<QosProfile>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for profile in [QosProfile::Reliable, QosProfile::BestEffort] {
            assert_eq!(profile.to_string().parse::<QosProfile>(), Ok(profile));
        }
    }

    #[test]
    fn test_reliable_profile_policies() {
        let qos = EndpointQos::default().resolve().expect("resolve");
        assert_eq!(qos.reliability, Reliability::Reliable);
        assert_eq!(qos.durability, Durability::TransientLocal);
        assert_eq!(qos.history, History::KeepAll);
    }

    #[test]
    fn test_best_effort_profile_policies() {
        let qos = EndpointQos::new(QosProfile::BestEffort)
            .resolve()
            .expect("resolve");
        assert_eq!(qos.reliability, Reliability::BestEffort);
        assert_eq!(qos.durability, Durability::Volatile);
        assert_eq!(qos.history, History::KeepLast(BEST_EFFORT_DEPTH));
    }

    #[test]
    fn test_history_depth_override() {
        let qos = EndpointQos::default()
            .history_depth(3)
            .resolve()
            .expect("resolve");
        assert_eq!(qos.reliability, Reliability::Reliable);
        assert_eq!(qos.history, History::KeepLast(3));
    }

    #[test]
    fn test_zero_history_depth_rejected() {
        let err = EndpointQos::default().history_depth(0).resolve().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_yaml_profile_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("tempfile");
        writeln!(
            file,
            "profiles:\n  lossy:\n    reliability: BEST_EFFORT\n    durability: VOLATILE\n  durable:\n    reliability: RELIABLE\n    durability: TRANSIENT_LOCAL\n"
        )
        .expect("write yaml");

        let qos = EndpointQos::default()
            .file(file.path(), Some("lossy".to_string()))
            .resolve()
            .expect("resolve");
        assert_eq!(qos.reliability, Reliability::BestEffort);
        assert_eq!(qos.durability, Durability::Volatile);

        let qos = EndpointQos::default()
            .file(file.path(), Some("durable".to_string()))
            .history_depth(5)
            .resolve()
            .expect("resolve");
        assert_eq!(qos.durability, Durability::TransientLocal);
        assert_eq!(qos.history, History::KeepLast(5));
    }

    #[test]
    fn test_missing_profile_file() {
        let err = EndpointQos::default()
            .file("/nonexistent/qos_profiles.yaml", None)
            .resolve()
            .unwrap_err();
        assert!(matches!(err, Error::QosFile { .. }));
    }
}
