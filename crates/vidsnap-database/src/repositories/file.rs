//! File repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use vidsnap_core::error::{AppError, ErrorKind};
use vidsnap_core::result::AppResult;
use vidsnap_core::traits::FileStore;
use vidsnap_entity::file::model::{CreateFile, File};

/// Repository for file CRUD and query operations.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for FileRepository {
    async fn find_all(&self) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user files", e))
    }

    async fn insert(&self, data: &CreateFile) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "INSERT INTO files (user_id, video_url, screenshots_time, status) \
             VALUES ($1, $2, $3, 'initialized') RETURNING *",
        )
        .bind(&data.user_id)
        .bind(&data.video_url)
        .bind(data.screenshots_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file", e))
    }

    async fn update(&self, file: &File) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "UPDATE files SET user_id = $2, video_url = $3, images_compressed_url = $4, \
             screenshots_time = $5, status = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(file.id)
        .bind(&file.user_id)
        .bind(&file.video_url)
        .bind(&file.images_compressed_url)
        .bind(file.screenshots_time)
        .bind(file.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update file", e))?
        .ok_or_else(|| AppError::not_found(format!("File {} not found", file.id)))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;
        Ok(result.rows_affected() > 0)
    }
}
