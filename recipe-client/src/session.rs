//! Key/value session storage standing in for browser local storage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RecipeClientError;

/// Key under which the signed-in user is persisted.
pub const USER_DATA_KEY: &str = "userData";

pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, RecipeClientError>;
    fn set_item(&mut self, key: &str, value: String) -> Result<(), RecipeClientError>;
    fn remove_item(&mut self, key: &str) -> Result<(), RecipeClientError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, RecipeClientError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), RecipeClientError> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), RecipeClientError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Storage backed by a single JSON object on disk, rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, RecipeClientError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(HashMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, items: &HashMap<String, String>) -> Result<(), RecipeClientError> {
        fs::write(&self.path, serde_json::to_string_pretty(items)?)?;
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, RecipeClientError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), RecipeClientError> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value);
        self.save(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), RecipeClientError> {
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.save(&items)?;
        }
        Ok(())
    }
}
