// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Session Store.
//!
//! The bearer token is the only client-held state. Pages never reach for
//! storage directly; they are handed a `SessionStore` so the fetch logic can
//! be exercised without a real storage backend.

use fs2::FileExt;
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

use crate::core::constants::session::TOKEN_KEY;
use crate::core::errors::AdminError;
use crate::core::types::SessionToken;

/// Capability to read, write and clear the session token.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Result<Option<SessionToken>, AdminError>;

    fn set(&self, token: &SessionToken) -> Result<(), AdminError>;

    fn clear(&self) -> Result<(), AdminError>;
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<SessionToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(SessionToken::new(token)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<SessionToken>, AdminError> {
        let guard = self
            .token
            .lock()
            .map_err(|_| AdminError::Storage("session lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn set(&self, token: &SessionToken) -> Result<(), AdminError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|_| AdminError::Storage("session lock poisoned".to_string()))?;
        *guard = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AdminError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|_| AdminError::Storage("session lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// JSON key/value file, the on-disk counterpart of browser local storage.
///
/// The token lives under the fixed `token` key; other keys in the file are
/// preserved. Every access takes an advisory lock on the file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_for_update(&self) -> Result<File, AdminError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        file.lock_exclusive()?;
        Ok(file)
    }

    fn read_entries(file: &mut File) -> Result<Map<String, Value>, AdminError> {
        let mut raw = String::new();
        file.read_to_string(&mut raw)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(AdminError::Storage(
                "session file does not contain a JSON object".to_string(),
            )),
            Err(e) => Err(AdminError::Storage(format!("corrupt session file: {}", e))),
        }
    }

    fn write_entries(file: &mut File, entries: &Map<String, Value>) -> Result<(), AdminError> {
        let json = serde_json::to_string_pretty(entries)?;
        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    fn update<F>(&self, mutate: F) -> Result<(), AdminError>
    where
        F: FnOnce(&mut Map<String, Value>),
    {
        let mut file = self.open_for_update()?;
        let result = (|| {
            let mut entries = Self::read_entries(&mut file)?;
            mutate(&mut entries);
            Self::write_entries(&mut file, &entries)
        })();
        if let Err(e) = FileExt::unlock(&file) {
            debug!("Failed to unlock session file: {}", e);
        }
        result
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<SessionToken>, AdminError> {
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        file.lock_shared()?;
        let entries = Self::read_entries(&mut file);
        if let Err(e) = FileExt::unlock(&file) {
            debug!("Failed to unlock session file: {}", e);
        }

        Ok(entries?
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .and_then(SessionToken::new))
    }

    fn set(&self, token: &SessionToken) -> Result<(), AdminError> {
        debug!(path = %self.path.display(), "Storing session token");
        self.update(|entries| {
            entries.insert(
                TOKEN_KEY.to_string(),
                Value::String(token.as_str().to_string()),
            );
        })
    }

    fn clear(&self) -> Result<(), AdminError> {
        if !self.path.exists() {
            return Ok(());
        }
        debug!(path = %self.path.display(), "Clearing session token");
        self.update(|entries| {
            entries.remove(TOKEN_KEY);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(store.get().unwrap().is_none());

        let token = SessionToken::new("abc").unwrap();
        store.set(&token).unwrap();
        assert_eq!(store.get().unwrap(), Some(token));

        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));
        assert!(store.get().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        let store = FileSessionStore::new(&path);
        store.set(&SessionToken::new("t-1").unwrap()).unwrap();
        assert_eq!(store.get().unwrap().unwrap().as_str(), "t-1");

        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert!(raw.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_file_store_empty_token_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"token": ""}"#).unwrap();
        assert!(FileSessionStore::new(&path).get().unwrap().is_none());
    }

    #[test]
    fn test_file_store_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(
            FileSessionStore::new(&path).get(),
            Err(AdminError::Storage(_))
        ));
    }
}
