//! Folder repository implementation.
//!
//! Every query is scoped by `owner_id`; a folder id that exists under a
//! different owner is indistinguishable from a missing one. Membership
//! mutation is done with atomic array operations so concurrent callers
//! cannot lose each other's updates.

use sqlx::PgPool;
use uuid::Uuid;

use newsdesk_core::error::{AppError, ErrorKind};
use newsdesk_core::result::AppResult;
use newsdesk_entity::folder::model::{CreateFolder, Folder, SAVE_FOR_LATER};

/// Repository for owner-scoped folder CRUD and membership-set mutation.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new folder.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (owner_id, name, color, starred, parent_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.color)
        .bind(data.starred)
        .bind(data.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))
    }

    /// Find a folder by ID under the given owner.
    pub async fn find(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1 AND owner_id = $2")
            .bind(folder_id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// List all folders owned by a user, oldest first (tree build input).
    pub async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = $1 ORDER BY created_at ASC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// Find the owner's default "save for later" folder, if any.
    ///
    /// The oldest match wins when several folders carry the name.
    pub async fn find_save_for_later(&self, owner_id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE owner_id = $1 AND LOWER(name) = $2 \
             ORDER BY created_at ASC LIMIT 1",
        )
        .bind(owner_id)
        .bind(SAVE_FOR_LATER)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find default folder", e)
        })
    }

    /// Add an article id to a folder's membership set.
    ///
    /// Atomic: the append only fires when the id is absent, so a double
    /// add leaves exactly one copy. Returns `None` when the folder does
    /// not exist under this owner.
    pub async fn add_article(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
        article_id: &str,
    ) -> AppResult<Option<Folder>> {
        let updated = sqlx::query_as::<_, Folder>(
            "UPDATE folders SET article_ids = array_append(article_ids, $3), updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 AND $3 <> ALL(article_ids) RETURNING *",
        )
        .bind(folder_id)
        .bind(owner_id)
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add article", e))?;

        match updated {
            Some(folder) => Ok(Some(folder)),
            // Already present or missing row; re-read to tell the two apart.
            None => self.find(owner_id, folder_id).await,
        }
    }

    /// Remove an article id from a folder's membership set.
    ///
    /// Removing an absent id is a no-op. Returns `None` when the folder
    /// does not exist under this owner.
    pub async fn remove_article(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
        article_id: &str,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET article_ids = array_remove(article_ids, $3), updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(folder_id)
        .bind(owner_id)
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to remove article", e))
    }

    /// Add a thread id to a folder's membership set.
    pub async fn add_thread(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
        thread_id: &str,
    ) -> AppResult<Option<Folder>> {
        let updated = sqlx::query_as::<_, Folder>(
            "UPDATE folders SET thread_ids = array_append(thread_ids, $3), updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 AND $3 <> ALL(thread_ids) RETURNING *",
        )
        .bind(folder_id)
        .bind(owner_id)
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add thread", e))?;

        match updated {
            Some(folder) => Ok(Some(folder)),
            None => self.find(owner_id, folder_id).await,
        }
    }

    /// Remove a thread id from a folder's membership set.
    pub async fn remove_thread(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
        thread_id: &str,
    ) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET thread_ids = array_remove(thread_ids, $3), updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(folder_id)
        .bind(owner_id)
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to remove thread", e))
    }

    /// Flip a folder's star flag.
    pub async fn toggle_star(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET starred = NOT starred, updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 RETURNING *",
        )
        .bind(folder_id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to toggle star", e))
    }

    /// Delete a folder row. Children are left untouched; they surface as
    /// roots on the next tree build.
    pub async fn delete(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1 AND owner_id = $2")
            .bind(folder_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
