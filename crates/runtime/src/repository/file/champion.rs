//! File-based ChampionRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use champion_core::ChampionRecord;

use crate::repository::{ChampionRepository, RepositoryError, Result};

const FILE_SUFFIX: &str = "-data.json";

/// File-based implementation of ChampionRepository.
///
/// Stores each champion as an individual JSON document.
///
/// # File Format
///
/// Records are stored as `{name}-data.json` in `base_dir`. Names that would
/// escape the directory (path separators, `.` or `..`) are rejected with
/// [`RepositoryError::InvalidKey`].
pub struct FileChampionRepository {
    base_dir: PathBuf,
}

impl FileChampionRepository {
    /// Create a new file-based champion repository, creating `base_dir`.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a record file.
    fn record_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\'])
            || name.contains('\0')
        {
            return Err(RepositoryError::InvalidKey(name.to_owned()));
        }
        Ok(self.base_dir.join(format!("{name}{FILE_SUFFIX}")))
    }
}

impl ChampionRepository for FileChampionRepository {
    fn save(&self, record: &ChampionRecord) -> Result<()> {
        let path = self.record_path(&record.name)?;
        let temp_path = path.with_extension("json.tmp");

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved champion '{}' to {}", record.name, path.display());

        Ok(())
    }

    fn load(&self, name: &str) -> Result<Option<ChampionRecord>> {
        let path = self.record_path(name)?;

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        let record: ChampionRecord =
            serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!("Loaded champion '{}' from {}", name, path.display());

        Ok(Some(record))
    }

    fn exists(&self, name: &str) -> bool {
        self.record_path(name)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.record_path(name)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted champion '{}'", name);
        }

        Ok(())
    }

    fn list_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if path.is_file()
                && let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(name) = filename.strip_suffix(FILE_SUFFIX)
                && !name.is_empty()
            {
                names.push(name.to_owned());
            }
        }

        names.sort_unstable();
        Ok(names)
    }
}
