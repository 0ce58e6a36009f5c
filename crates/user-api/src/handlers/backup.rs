use axum::{extract::State, Json};

use crate::dto::BackupResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /backup
pub async fn create_backup(State(state): State<AppState>) -> Result<Json<BackupResponse>, ApiError> {
    let report = state.backups.create_backup(&state.users).await?;

    Ok(Json(BackupResponse {
        message: "Backup created".to_string(),
        backup_file: report.backup_file,
        total_backups: report.total_backups,
        backups: report.backups,
    }))
}
