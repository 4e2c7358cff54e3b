use serde::Serialize;

use super::truncate_for_log;
use crate::domain::SessionContext;

/// Logs an API invocation at INFO and a truncated body dump at DEBUG.
pub fn log_request<R>(api: &str, request: &R)
where
    R: Serialize + SessionContext,
{
    let rag_sys_info = request.rag_sys_info().unwrap_or("N/A");
    let session_id = request.session_id().unwrap_or("N/A");

    tracing::info!(api, rag_sys_info, session_id, "API invoked");

    match serde_json::to_string(request) {
        Ok(body) => {
            tracing::debug!(api, rag_sys_info, session_id, body = %truncate_for_log(&body), "Request data")
        }
        Err(e) => tracing::warn!(api, session_id, error = %e, "Request data not serializable"),
    }
}

pub fn log_completed<R>(api: &str, request: &R, result_cd: i32)
where
    R: SessionContext,
{
    tracing::info!(
        api,
        session_id = request.session_id().unwrap_or("N/A"),
        result_cd,
        "API completed"
    );
}
