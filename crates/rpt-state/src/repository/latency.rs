//! Artificial latency for the simulated backend.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated round-trip time per repository operation, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub list_ms: u64,
    pub get_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            list_ms: 1000,
            get_ms: 500,
            create_ms: 800,
            update_ms: 600,
            delete_ms: 500,
        }
    }
}

impl LatencyProfile {
    /// No artificial delay at all.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            list_ms: 0,
            get_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
        }
    }

    pub fn list(&self) -> Duration {
        Duration::from_millis(self.list_ms)
    }

    pub fn get(&self) -> Duration {
        Duration::from_millis(self.get_ms)
    }

    pub fn create(&self) -> Duration {
        Duration::from_millis(self.create_ms)
    }

    pub fn update(&self) -> Duration {
        Duration::from_millis(self.update_ms)
    }

    pub fn delete(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }
}
