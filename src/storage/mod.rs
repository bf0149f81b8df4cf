use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{JotterError, Result};

const JOTTER_DIR: &str = ".jotter";

/// Key under which the note collection is stored.
pub const NOTES_KEY: &str = "jotter__notes";
/// Key under which the category list is stored.
pub const CATEGORIES_KEY: &str = "jotter__categories";
/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "jotter__theme";

/// A string-keyed value store. Each key holds one serialized document; writes
/// replace the whole value (last writer wins, no transactions).
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one file per key under a `.jotter/` directory.
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    /// Initialize a new notebook directory
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(JOTTER_DIR);

        if dir.exists() {
            return Err(JotterError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open an existing notebook directory
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(JOTTER_DIR);

        if !dir.is_dir() {
            return Err(JotterError::NotInitialized);
        }

        Ok(Self { dir })
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.dir.join(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.dir.join(key), value)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryKvStore {
    values: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
