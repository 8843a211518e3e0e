/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! In-memory file repository implementation.
//!
//! This module provides a simple in-memory repository suitable for testing
//! and single-process deployments. All data is lost when the process exits.

use crate::traits::FileRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ferrowire_core::StoreError;
use ferrowire_message::WireFile;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// A stored file with its bookkeeping.
#[derive(Debug, Clone)]
struct StoredFile {
    /// The file itself.
    file: WireFile,
    /// When the file was first saved. Survives later saves of the same id.
    created_at: DateTime<Utc>,
}

/// In-memory file repository.
///
/// Files are kept in a `HashMap` keyed by id; listing returns them oldest
/// first by creation time.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    /// Stored files indexed by id.
    files: RwLock<HashMap<String, StoredFile>>,
}

impl MemoryRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.read().len()
    }

    /// Checks if a file with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.files.read().contains_key(id)
    }
}

#[async_trait]
impl FileRepository for MemoryRepository {
    async fn save_file(&self, mut file: WireFile) -> Result<WireFile, StoreError> {
        if file.id.is_empty() {
            file.id = Uuid::new_v4().to_string();
        }
        let mut files = self.files.write();
        let created_at = files
            .get(&file.id)
            .map_or_else(Utc::now, |stored| stored.created_at);
        files.insert(
            file.id.clone(),
            StoredFile {
                file: file.clone(),
                created_at,
            },
        );
        Ok(file)
    }

    async fn get_file(&self, id: &str) -> Result<WireFile, StoreError> {
        self.files
            .read()
            .get(id)
            .map(|stored| stored.file.clone())
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    async fn get_files(&self) -> Result<Vec<WireFile>, StoreError> {
        let files = self.files.read();
        let mut stored: Vec<&StoredFile> = files.values().collect();
        stored.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.file.id.cmp(&b.file.id))
        });
        Ok(stored.into_iter().map(|s| s.file.clone()).collect())
    }

    async fn delete_file(&self, id: &str) -> Result<(), StoreError> {
        self.files.write().remove(id);
        Ok(())
    }
}
