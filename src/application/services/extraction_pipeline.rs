use std::sync::Arc;

use crate::application::ports::{CallbackNotifier, RagBackend};
use crate::application::services::CallbackSender;
use crate::domain::{
    ErrorCd, ExtractCallbackRequest, ExtractCallbackResponse, IndexingCallbackRequest,
    IndexingCallbackResponse, IndexingData, IndexingDocument, IndexingRequest, IndexingResponse,
    ProcessingStep, normalize_pages,
};
use crate::infrastructure::observability::truncate_for_log;

/// Continues a document through `extracted -> indexed` as backend callbacks arrive.
pub struct ExtractionPipeline<B, N>
where
    B: RagBackend,
    N: CallbackNotifier,
{
    backend: Arc<B>,
    callbacks: CallbackSender<N>,
    indexing_callback_url: String,
}

impl<B, N> ExtractionPipeline<B, N>
where
    B: RagBackend,
    N: CallbackNotifier,
{
    pub fn new(backend: Arc<B>, callbacks: CallbackSender<N>, indexing_callback_url: String) -> Self {
        Self {
            backend,
            callbacks,
            indexing_callback_url,
        }
    }

    /// Handles an extractor completion.
    ///
    /// Failure is relayed as-is. On success a modify-mode document is reported
    /// straight back; otherwise indexing is enqueued, and if that enqueue fails the
    /// indexing outcome is reported through the extract channel with the indexing
    /// step code.
    pub async fn on_extract_callback(
        &self,
        request: &ExtractCallbackRequest,
    ) -> ExtractCallbackResponse {
        let doc_uid = request.result.doc_uid.clone();

        if !ErrorCd::is_success_code(request.result_cd) {
            tracing::error!(
                doc_uid = %doc_uid,
                result_cd = request.result_cd,
                result_desc = %request.result_desc,
                "Extraction failed"
            );
            let _ = self
                .callbacks
                .extract_fail(request, request.result.step_cd)
                .await;
            return success_response(doc_uid);
        }

        if !request.result.has_context() {
            tracing::debug!(doc_uid = %doc_uid, "No context found in page_info");
        }

        if request.meta.modify_flag {
            tracing::info!(doc_uid = %doc_uid, "modify_flag set, sending extract callback");
            let _ = self
                .callbacks
                .extract(request, ProcessingStep::Extract, None)
                .await;
        } else {
            tracing::info!(doc_uid = %doc_uid, "modify_flag not set, requesting indexing");
            let indexing_response = self.request_indexing(request).await;
            if !indexing_response.is_success() {
                tracing::error!(
                    doc_uid = %doc_uid,
                    result_cd = indexing_response.result_cd,
                    "Indexing enqueue failed, sending extract callback"
                );
                let _ = self
                    .callbacks
                    .extract(request, ProcessingStep::Indexing, Some(&indexing_response))
                    .await;
            }
        }

        success_response(doc_uid)
    }

    pub async fn request_indexing(&self, request: &ExtractCallbackRequest) -> IndexingResponse {
        let session_id = request.meta.session_id.as_deref().unwrap_or("N/A");
        tracing::debug!(
            session_id,
            doc_uid = %request.result.doc_uid,
            doc_name = %request.result.doc_name,
            "Requesting indexing"
        );

        let indexing_request = IndexingRequest {
            meta: request.meta.indexing_meta(&self.indexing_callback_url),
            data: IndexingData {
                document: IndexingDocument {
                    doc_uid: request.result.doc_uid.clone(),
                    doc_name: request.result.doc_name.clone(),
                    job_class: request.result.job_class.clone(),
                },
                page_info: Some(normalize_pages(request.result.page_info.as_deref())),
            },
        };

        if let Ok(body) = serde_json::to_string(&indexing_request) {
            tracing::debug!(session_id, body = %truncate_for_log(&body), "Indexing request");
        }

        match self.backend.index(&indexing_request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    session_id,
                    doc_uid = %request.result.doc_uid,
                    error = %e,
                    "Indexing request failed"
                );
                IndexingResponse::from_error(ErrorCd::IndexingReqExcept)
            }
        }
    }

    /// Relays an indexer completion to the caller.
    ///
    /// When that relay cannot be delivered, one failure notification is attempted
    /// and the indexing-callback failure code is answered.
    pub async fn on_indexing_callback(
        &self,
        request: &IndexingCallbackRequest,
    ) -> IndexingCallbackResponse {
        let doc_uid = request.result.doc_uid.clone();

        match self
            .callbacks
            .indexing(request, ProcessingStep::Indexing, true)
            .await
        {
            Ok(_) => IndexingCallbackResponse {
                result_cd: ErrorCd::Success.code(),
                result_desc: ErrorCd::Success.description().to_string(),
                doc_uid,
            },
            // A relay failure is not swallowed: it counts as a failed indexing callback.
            Err(e) => {
                tracing::error!(doc_uid = %doc_uid, error = %e, "Indexing callback relay failed");
                let _ = self
                    .callbacks
                    .indexing(request, ProcessingStep::Indexing, false)
                    .await;
                IndexingCallbackResponse {
                    result_cd: ErrorCd::IndexingCallbackExcept.code(),
                    result_desc: ErrorCd::IndexingCallbackExcept.description().to_string(),
                    doc_uid,
                }
            }
        }
    }
}

fn success_response(doc_uid: String) -> ExtractCallbackResponse {
    ExtractCallbackResponse {
        result_cd: ErrorCd::Success.code(),
        result_desc: ErrorCd::Success.description().to_string(),
        doc_uid,
    }
}
