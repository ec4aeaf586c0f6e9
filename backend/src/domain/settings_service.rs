//! Profile settings: display names for the two fixed household members.

use anyhow::Result;
use log::info;
use shared::{ProfileSettings, UpdateProfileSettingsRequest};
use std::sync::Arc;

use crate::storage::csv::{CsvConnection, SettingsRepository};
use crate::storage::SettingsStorage;

const MAX_DISPLAY_NAME_LENGTH: usize = 100;

#[derive(Clone)]
pub struct SettingsService {
    settings_repository: SettingsRepository,
}

impl SettingsService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        let settings_repository = SettingsRepository::new((*connection).clone());
        Self {
            settings_repository,
        }
    }

    /// Current settings, defaults when nothing has been stored yet
    pub async fn get_settings(&self) -> Result<ProfileSettings> {
        self.settings_repository.get_profile_settings().await
    }

    /// Apply a partial settings update
    pub async fn update_settings(
        &self,
        request: UpdateProfileSettingsRequest,
    ) -> Result<ProfileSettings> {
        info!("Updating profile settings: {:?}", request);

        let mut settings = self.settings_repository.get_profile_settings().await?;

        if let Some(name) = request.hasnaa_display_name {
            settings.hasnaa_display_name = Self::validate_display_name(&name)?;
        }
        if let Some(name) = request.achraf_display_name {
            settings.achraf_display_name = Self::validate_display_name(&name)?;
        }

        self.settings_repository
            .update_profile_settings(&settings)
            .await?;

        Ok(settings)
    }

    fn validate_display_name(name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(anyhow::anyhow!("Display name cannot be empty"));
        }
        if trimmed.len() > MAX_DISPLAY_NAME_LENGTH {
            return Err(anyhow::anyhow!(
                "Display name cannot exceed {} characters",
                MAX_DISPLAY_NAME_LENGTH
            ));
        }
        Ok(trimmed.to_string())
    }
}
