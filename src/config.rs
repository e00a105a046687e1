//! Import configuration
//!
//! The only setting is the time zone every Day/Time pair is read in. It is
//! passed explicitly into each parse call.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ImportError, ImportResult};

/// Environment variable naming the import time zone
pub const ZONE_ENV_VAR: &str = "UHM_IMPORT_TZ";

/// Options for one import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    #[serde(default = "default_zone")]
    pub zone: Tz,
}

fn default_zone() -> Tz {
    Tz::UTC
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            zone: default_zone(),
        }
    }
}

impl ImportOptions {
    /// Options using the named IANA zone, e.g. "America/Chicago"
    pub fn with_zone(name: &str) -> ImportResult<Self> {
        let zone = name.parse::<Tz>().map_err(|e| ImportError::Zone {
            value: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { zone })
    }

    /// Read options from the environment, falling back to UTC
    pub fn from_env() -> ImportResult<Self> {
        match std::env::var(ZONE_ENV_VAR) {
            Ok(name) if !name.trim().is_empty() => Self::with_zone(name.trim()),
            _ => Ok(Self::default()),
        }
    }
}
