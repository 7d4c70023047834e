//! Binder configuration.
//!
//! The configuration is plain serde data so a host application can embed it
//! in its own settings file:
//! ```json
//! {"unknown_field": "ignore"}
//! {"unknown_field": "warn"}
//! {"unknown_field": "reject"}
//! ```

use serde::{Deserialize, Serialize};

/// What an attachment does when its field name is not in the field set.
///
/// Attachments can outlive the field set they were created for (a stale
/// closure kept by a control after the form changed shape). Writes through
/// them never touch the registry; the policy only decides how loudly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    /// Drop the write silently.
    #[default]
    Ignore,
    /// Drop the write and log a warning.
    Warn,
    /// Drop the write and return [`Error::UnknownField`](crate::Error::UnknownField).
    Reject,
}

/// Configuration for a registry's binder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
    pub unknown_field: UnknownFieldPolicy,
}

impl BinderConfig {
    /// Config that surfaces stale attachments as warnings in debug builds
    /// and stays silent in release builds.
    pub fn for_build() -> Self {
        let unknown_field = if cfg!(debug_assertions) {
            UnknownFieldPolicy::Warn
        } else {
            UnknownFieldPolicy::Ignore
        };
        Self { unknown_field }
    }

    pub fn with_unknown_field(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_field = policy;
        self
    }
}
