use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::{entities::Preferences, error::Error};

/// JSON-file backed store for [`Preferences`].
#[derive(Debug)]
pub struct PreferencesStore {
    path: PathBuf,
    // serializes writers so a save never interleaves with another
    write_lock: Mutex<()>,
}

impl PreferencesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read preferences; a missing file reads as the defaults.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<Preferences, Error> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Preferences::default()),
            Err(err) => Err(err.into()),
        }
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn save(&self, preferences: &Preferences) -> Result<(), Error> {
        let _guard = self.write_lock.lock().await;

        let bytes = serde_json::to_vec_pretty(preferences)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::new(dir.path().join("preferences.json"));

        assert_eq!(block_on(store.load()).unwrap(), Preferences::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferencesStore::new(dir.path().join("preferences.json"));

        let preferences = Preferences {
            onboarding_complete: true,
            profile_complete: false,
            location_permission_granted: true,
        };
        block_on(store.save(&preferences)).unwrap();

        let reopened = PreferencesStore::new(store.path());
        assert_eq!(block_on(reopened.load()).unwrap(), preferences);
    }

    #[test]
    fn unknown_fields_and_missing_flags_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"onboarding_complete": true, "theme": "dark"}"#).unwrap();

        let loaded = block_on(PreferencesStore::new(&path).load()).unwrap();
        assert!(loaded.onboarding_complete);
        assert!(!loaded.profile_complete);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let err = block_on(PreferencesStore::new(&path).load()).unwrap_err();
        assert_eq!(err.code, 7);
    }
}
