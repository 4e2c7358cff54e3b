use std::sync::Arc;

use crate::application::ports::{CallbackNotifier, DownstreamError};
use crate::domain::{
    CallbackRequest, CallbackRequestMeta, CallbackResponse, CallbackResult, ErrorCd,
    ExtractCallbackRequest, ExtractDocRequest, IndexingCallbackRequest, IndexingResponse,
    PageInfo, ProcessingStep, normalize_pages,
};
use crate::infrastructure::observability::truncate_for_log;

/// Builds and delivers the outcome callbacks of the extract/index pipeline.
///
/// Every method is best-effort: delivery failures are logged and returned,
/// never raised past the caller.
pub struct CallbackSender<N>
where
    N: CallbackNotifier,
{
    notifier: Arc<N>,
}

impl<N> Clone for CallbackSender<N>
where
    N: CallbackNotifier,
{
    fn clone(&self) -> Self {
        Self {
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<N> CallbackSender<N>
where
    N: CallbackNotifier,
{
    pub fn new(notifier: Arc<N>) -> Self {
        Self { notifier }
    }

    /// Relays an extractor-reported failure back to the caller.
    pub async fn extract_fail(
        &self,
        request: &ExtractCallbackRequest,
        step: i32,
    ) -> Result<CallbackResponse, DownstreamError> {
        tracing::debug!(
            session_id = request.meta.session_id.as_deref().unwrap_or("N/A"),
            doc_uid = %request.result.doc_uid,
            "Sending extract-fail callback"
        );

        let callback = build_callback(
            request.meta.callback_meta(),
            request.result_cd,
            &request.result_desc,
            &request.result.doc_uid,
            step,
            Vec::new(),
        );

        self.deliver(request.meta.callback_url.as_deref(), &callback)
            .await
    }

    /// Reports an extract request that never completed.
    ///
    /// `failure` carries the backend's own code and description; `None` means the
    /// call itself failed and the generic extract-request code is used.
    pub async fn extract_post_fail(
        &self,
        request: &ExtractDocRequest,
        failure: Option<(i32, &str)>,
        step: ProcessingStep,
    ) -> Result<CallbackResponse, DownstreamError> {
        tracing::debug!(
            session_id = request.meta.session_id.as_deref().unwrap_or("N/A"),
            doc_uid = %request.doc_uid(),
            "Sending extract-post-fail callback"
        );

        let (result_cd, result_desc) = failure.unwrap_or((
            ErrorCd::ExtractReqExcept.code(),
            ErrorCd::ExtractReqExcept.description(),
        ));

        let callback = build_callback(
            request.meta.callback_meta(),
            result_cd,
            result_desc,
            request.doc_uid(),
            step.code(),
            Vec::new(),
        );

        self.deliver(request.meta.callback_url.as_deref(), &callback)
            .await
    }

    /// Forwards extracted pages to the caller, optionally carrying an indexing outcome.
    pub async fn extract(
        &self,
        request: &ExtractCallbackRequest,
        step: ProcessingStep,
        indexing: Option<&IndexingResponse>,
    ) -> Result<CallbackResponse, DownstreamError> {
        tracing::debug!(
            session_id = request.meta.session_id.as_deref().unwrap_or("N/A"),
            doc_uid = %request.result.doc_uid,
            step = step.code(),
            "Sending extract callback"
        );

        let (result_cd, result_desc) = match indexing {
            Some(response) => (response.result_cd, response.result_desc.as_str()),
            None => (request.result_cd, request.result_desc.as_str()),
        };

        let callback = build_callback(
            request.meta.callback_meta(),
            result_cd,
            result_desc,
            &request.result.doc_uid,
            step.code(),
            normalize_pages(request.result.page_info.as_deref()),
        );

        self.deliver(request.meta.callback_url.as_deref(), &callback)
            .await
    }

    /// Reports an indexing outcome. `succeeded == false` substitutes the
    /// indexing-callback failure code for the indexer's own result.
    pub async fn indexing(
        &self,
        request: &IndexingCallbackRequest,
        step: ProcessingStep,
        succeeded: bool,
    ) -> Result<CallbackResponse, DownstreamError> {
        tracing::debug!(
            session_id = request.meta.session_id.as_deref().unwrap_or("N/A"),
            doc_uid = %request.result.doc_uid,
            succeeded,
            "Sending indexing callback"
        );

        let (result_cd, result_desc) = if succeeded {
            (request.result_cd, request.result_desc.as_str())
        } else {
            (
                ErrorCd::IndexingCallbackExcept.code(),
                ErrorCd::IndexingCallbackExcept.description(),
            )
        };

        let callback = build_callback(
            request.meta.callback_meta(),
            result_cd,
            result_desc,
            &request.result.doc_uid,
            step.code(),
            normalize_pages(request.result.page_info.as_deref()),
        );

        self.deliver(request.meta.callback_url.as_deref(), &callback)
            .await
    }

    async fn deliver(
        &self,
        callback_url: Option<&str>,
        callback: &CallbackRequest,
    ) -> Result<CallbackResponse, DownstreamError> {
        let session_id = callback.meta.session_id.as_deref().unwrap_or("N/A");

        let Some(url) = callback_url.filter(|u| !u.is_empty()) else {
            tracing::warn!(
                session_id,
                doc_uid = %callback.result.doc_uid,
                "Callback skipped: no callback url"
            );
            return Err(DownstreamError::MissingCallbackUrl(session_id.to_string()));
        };

        if let Ok(body) = serde_json::to_string(callback) {
            tracing::debug!(session_id, body = %truncate_for_log(&body), "Callback request");
        }

        self.notifier.notify(url, callback).await.inspect_err(|e| {
            tracing::error!(
                session_id,
                doc_uid = %callback.result.doc_uid,
                error = %e,
                "Callback delivery failed"
            );
        })
    }
}

fn build_callback(
    meta: CallbackRequestMeta,
    result_cd: i32,
    result_desc: &str,
    doc_uid: &str,
    step_cd: i32,
    page_info: Vec<PageInfo>,
) -> CallbackRequest {
    CallbackRequest {
        result_cd,
        result_desc: result_desc.to_string(),
        meta,
        result: CallbackResult {
            doc_uid: doc_uid.to_string(),
            step_cd,
            page_info: Some(page_info),
        },
    }
}
