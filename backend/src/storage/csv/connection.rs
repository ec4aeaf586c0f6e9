use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory location.
const DATA_DIR_ENV: &str = "FINANCE_TRACKER_DATA_DIR";

/// CsvConnection manages the data directory and the file paths inside it.
///
/// The directory is fixed at startup; repositories clone the connection and
/// derive their file paths from it.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new connection rooted at the given base directory, creating
    /// the directory if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory.
    ///
    /// `FINANCE_TRACKER_DATA_DIR` wins when set; otherwise the platform data
    /// directory is used.
    pub fn new_default() -> Result<Self> {
        let data_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(dir) => {
                info!("Using data directory from {}: {}", DATA_DIR_ENV, dir);
                PathBuf::from(dir)
            }
            Err(_) => {
                let base = dirs::data_dir()
                    .ok_or_else(|| anyhow::anyhow!("Could not determine platform data directory"))?;
                let dir = base.join("finance-tracker");
                info!("Using default data directory: {}", dir.display());
                dir
            }
        };

        Self::new(data_dir)
    }

    /// Path of the expenses CSV file
    pub fn expenses_file_path(&self) -> PathBuf {
        self.base_directory.join("expenses.csv")
    }

    /// Path of the goals CSV file
    pub fn goals_file_path(&self) -> PathBuf {
        self.base_directory.join("goals.csv")
    }

    /// Path of the profile settings YAML file
    pub fn settings_file_path(&self) -> PathBuf {
        self.base_directory.join("settings.yaml")
    }

    /// The data directory this connection is rooted at
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");

        let connection = CsvConnection::new(&nested).unwrap();

        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested.as_path());
    }

    #[test]
    fn test_file_paths_are_rooted_in_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();

        assert_eq!(
            connection.expenses_file_path(),
            temp_dir.path().join("expenses.csv")
        );
        assert_eq!(
            connection.goals_file_path(),
            temp_dir.path().join("goals.csv")
        );
        assert_eq!(
            connection.settings_file_path(),
            temp_dir.path().join("settings.yaml")
        );
    }
}
