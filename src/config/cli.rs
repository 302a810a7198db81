use crate::core::{interchange, Roster, Storage};
use crate::utils::error::{OrderError, Result};
use std::fs;
use std::path::Path;

/// Filesystem persistence for roster state. Paths are resolved against
/// `base_path`. Roster files use the interchange format, and a missing
/// file reads as an empty roster so a first run needs no setup.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    /// Loads the persisted roster, or an empty one when the file does
    /// not exist yet. A file that exists but does not parse is an
    /// error; it never silently becomes an empty roster.
    pub async fn load_roster(&self, path: &str) -> Result<Roster> {
        match self.read_file(path).await {
            Ok(bytes) => interchange::deserialize(&bytes),
            Err(OrderError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No roster file at {}, starting empty", path);
                Ok(Roster::new())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn save_roster(&self, path: &str, roster: &Roster) -> Result<()> {
        let bytes = interchange::serialize(roster)?;
        self.write_file(path, &bytes).await
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Coordinate, Member};
    use tempfile::TempDir;

    fn storage_in(temp_dir: &TempDir) -> LocalStorage {
        LocalStorage::new(temp_dir.path().to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_load_roster_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let roster = storage.load_roster("roster.json").await.unwrap();
        assert!(roster.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips_roster() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let mut roster = Roster::new();
        roster.add(Member {
            name: "Alice".to_string(),
            location: "Dayton, OH".to_string(),
            coordinate: Some(Coordinate {
                latitude: 39.7589478,
                longitude: -84.1916069,
            }),
        });
        roster.add(Member {
            name: "Ghost".to_string(),
            location: "somewhere vague".to_string(),
            coordinate: None,
        });

        storage.save_roster("roster.json", &roster).await.unwrap();
        let restored = storage.load_roster("roster.json").await.unwrap();
        assert_eq!(restored, roster);
    }

    #[tokio::test]
    async fn test_corrupt_roster_file_is_an_error_not_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        storage
            .write_file("roster.json", br#"{"Alice": ["Dayton"]}"#)
            .await
            .unwrap();

        let result = storage.load_roster("roster.json").await;
        assert!(matches!(result, Err(OrderError::Parse { .. })));
    }
}
