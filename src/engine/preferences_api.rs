use super::Engine;

use async_trait::async_trait;

use crate::{api::PreferencesAPI, entities::Preferences, error::Error};

#[async_trait]
impl PreferencesAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_preferences(&self) -> Result<Preferences, Error> {
        self.preferences.load().await
    }

    #[tracing::instrument(skip(self))]
    async fn update_preferences(&self, preferences: Preferences) -> Result<Preferences, Error> {
        self.preferences.save(&preferences).await?;

        Ok(preferences)
    }
}
