//! # Profile Settings Repository
//!
//! YAML-backed storage for the two profiles' display names. Missing file
//! means defaults.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use shared::ProfileSettings;
use std::fs;

use super::connection::CsvConnection;
use crate::storage::traits::SettingsStorage;

#[derive(Clone)]
pub struct SettingsRepository {
    connection: CsvConnection,
}

impl SettingsRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl SettingsStorage for SettingsRepository {
    async fn get_profile_settings(&self) -> Result<ProfileSettings> {
        let file_path = self.connection.settings_file_path();

        if !file_path.exists() {
            debug!("No settings file found, using defaults");
            return Ok(ProfileSettings::default());
        }

        let contents = fs::read_to_string(&file_path)?;
        let settings = serde_yaml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings file: {}", e))?;

        Ok(settings)
    }

    async fn update_profile_settings(&self, settings: &ProfileSettings) -> Result<()> {
        let file_path = self.connection.settings_file_path();
        let temp_file_path = file_path.with_extension("yaml.tmp");

        let contents = serde_yaml::to_string(settings)?;
        fs::write(&temp_file_path, contents)?;
        fs::rename(&temp_file_path, &file_path)?;

        info!("Updated profile settings");
        Ok(())
    }
}
