/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 23/8/26
******************************************************************************/

//! File repository trait definition.
//!
//! This module defines the abstract interface for wire file persistence.

use async_trait::async_trait;
use ferrowire_core::StoreError;
use ferrowire_message::WireFile;

/// Abstract interface for wire file storage.
///
/// Implementations persist whole [`WireFile`] aggregates keyed by their
/// identifier. Identifier assignment is the repository's job: saving a file
/// whose id is empty stamps a fresh one.
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Saves a file, inserting or replacing it under its identifier.
    ///
    /// A file arriving with an empty id is assigned a generated one before
    /// it is stored.
    ///
    /// # Returns
    /// The file as stored, id included.
    ///
    /// # Errors
    /// Returns `StoreError` if the file cannot be stored.
    async fn save_file(&self, file: WireFile) -> Result<WireFile, StoreError>;

    /// Retrieves a file by its identifier.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no file has that id.
    async fn get_file(&self, id: &str) -> Result<WireFile, StoreError>;

    /// Retrieves every stored file, oldest first.
    ///
    /// # Errors
    /// Returns `StoreError` if the files cannot be retrieved.
    async fn get_files(&self) -> Result<Vec<WireFile>, StoreError>;

    /// Deletes a file by its identifier.
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Errors
    /// Returns `StoreError` if the deletion fails.
    async fn delete_file(&self, id: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRepository;

    #[async_trait]
    impl FileRepository for MockRepository {
        async fn save_file(&self, file: WireFile) -> Result<WireFile, StoreError> {
            Ok(file)
        }

        async fn get_file(&self, id: &str) -> Result<WireFile, StoreError> {
            Err(StoreError::NotFound { id: id.to_string() })
        }

        async fn get_files(&self) -> Result<Vec<WireFile>, StoreError> {
            Ok(vec![])
        }

        async fn delete_file(&self, _id: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_mock_repository() {
        let repo = MockRepository;
        let saved = repo.save_file(WireFile::new()).await.unwrap();
        assert_eq!(saved, WireFile::new());
        assert!(repo.get_files().await.unwrap().is_empty());
        assert!(repo.get_file("missing").await.is_err());
        assert!(repo.delete_file("missing").await.is_ok());
    }
}
