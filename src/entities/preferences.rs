use serde::{Deserialize, Serialize};

/// Per-install flags persisted between runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub onboarding_complete: bool,
    pub profile_complete: bool,
    pub location_permission_granted: bool,
}
