use serde::{Deserialize, Serialize};

/// The persisted version record for one module.
///
/// `major`, `minor` and `pre_release` are user-declared; `patch`, `build` and
/// `code` are bookkeeping counters managed by the store. `code` is the
/// monotonic release counter used by platforms that require a strictly
/// increasing build identifier.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: String,
    pub build: u64,
    pub code: u64,
}

impl VersionRecord {
    /// Apply the user-declared version fields to a loaded record.
    ///
    /// `patch` is a bugfix counter scoped to one major/minor pair, so it resets
    /// to 0 whenever the declared pair differs from the stored one. The store
    /// itself cannot detect a declaration change; the caller supplies the
    /// declared values here.
    #[must_use]
    pub fn with_declared(&self, major: u64, minor: u64, pre_release: &str) -> Self {
        let patch = if self.major == major && self.minor == minor {
            self.patch
        } else {
            0
        };
        Self {
            major,
            minor,
            patch,
            pre_release: pre_release.to_string(),
            build: self.build,
            code: self.code,
        }
    }
}
