//! Folder service — owner-scoped folder CRUD and membership mutation.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use newsdesk_core::error::AppError;
use newsdesk_core::result::AppResult;
use newsdesk_database::repositories::FolderRepository;
use newsdesk_entity::folder::model::{CreateFolder, Folder};

use crate::context::RequestContext;

/// Parameters for creating a folder.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFolderRequest {
    pub name: String,
    pub color: Option<String>,
    #[serde(default)]
    pub starred: bool,
    pub parent_id: Option<Uuid>,
}

/// Service handling folder operations.
///
/// Every method takes a [`RequestContext`]; a folder belonging to
/// another owner behaves exactly like a missing one.
pub struct FolderService {
    folder_repo: Arc<FolderRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Create a folder, optionally nested under a parent.
    ///
    /// The parent must exist under the same owner; referencing another
    /// owner's folder is rejected as not found.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        request: CreateFolderRequest,
    ) -> AppResult<Folder> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name must not be empty"));
        }

        if let Some(parent_id) = request.parent_id {
            self.folder_repo
                .find(ctx.user_id, parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
        }

        let folder = self
            .folder_repo
            .create(&CreateFolder {
                owner_id: ctx.user_id,
                name: name.to_string(),
                color: request.color,
                starred: request.starred,
                parent_id: request.parent_id,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder.id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Fetch a single folder.
    pub async fn get_folder(&self, ctx: &RequestContext, folder_id: Uuid) -> AppResult<Folder> {
        self.folder_repo
            .find(ctx.user_id, folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// List all of the caller's folders, oldest first.
    pub async fn list_folders(&self, ctx: &RequestContext) -> AppResult<Vec<Folder>> {
        self.folder_repo.list_by_owner(ctx.user_id).await
    }

    /// Fetch the caller's default "save for later" folder.
    ///
    /// The folder is never created implicitly; a missing default is an
    /// error the caller must surface.
    pub async fn save_for_later(&self, ctx: &RequestContext) -> AppResult<Folder> {
        self.folder_repo
            .find_save_for_later(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Save for Later folder not found"))
    }

    /// Save an article into a folder. Saving an already-present id is a
    /// no-op that still returns the folder.
    pub async fn add_article(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        article_id: &str,
    ) -> AppResult<Folder> {
        let folder = self
            .folder_repo
            .add_article(ctx.user_id, folder_id, article_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder.id,
            article_id = %article_id,
            "Article saved to folder"
        );

        Ok(folder)
    }

    /// Remove an article from a folder. Removing an absent id is a no-op.
    pub async fn remove_article(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        article_id: &str,
    ) -> AppResult<Folder> {
        let folder = self
            .folder_repo
            .remove_article(ctx.user_id, folder_id, article_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder.id,
            article_id = %article_id,
            "Article removed from folder"
        );

        Ok(folder)
    }

    /// Save a thread into a folder.
    pub async fn add_thread(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        thread_id: &str,
    ) -> AppResult<Folder> {
        let folder = self
            .folder_repo
            .add_thread(ctx.user_id, folder_id, thread_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder.id,
            thread_id = %thread_id,
            "Thread saved to folder"
        );

        Ok(folder)
    }

    /// Remove a thread from a folder.
    pub async fn remove_thread(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        thread_id: &str,
    ) -> AppResult<Folder> {
        let folder = self
            .folder_repo
            .remove_thread(ctx.user_id, folder_id, thread_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder.id,
            thread_id = %thread_id,
            "Thread removed from folder"
        );

        Ok(folder)
    }

    /// Flip a folder's star flag.
    pub async fn toggle_star(&self, ctx: &RequestContext, folder_id: Uuid) -> AppResult<Folder> {
        let folder = self
            .folder_repo
            .toggle_star(ctx.user_id, folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder.id,
            starred = folder.starred,
            "Folder star toggled"
        );

        Ok(folder)
    }

    /// Delete a folder. Children are not cascaded; they reappear as
    /// roots in the next tree build.
    pub async fn remove_folder(&self, ctx: &RequestContext, folder_id: Uuid) -> AppResult<()> {
        let deleted = self.folder_repo.delete(ctx.user_id, folder_id).await?;
        if !deleted {
            return Err(AppError::not_found("Folder not found"));
        }

        info!(user_id = %ctx.user_id, folder_id = %folder_id, "Folder deleted");
        Ok(())
    }
}
