use std::sync::Arc;

use futures::future::join_all;

use crate::application::ports::{CallbackNotifier, RagBackend};
use crate::application::services::CallbackSender;
use crate::domain::{
    DocumentRegisterResponseMeta, ErrorCd, ExtractDocRequest, ProcessingStep, RegisterDocRequest,
    RegisterDocResponse,
};

/// Fans a registration out into one extract call per file.
///
/// All calls run concurrently and are awaited to completion; a failing file
/// never cancels its siblings. Per-file failures are reported through an
/// extract-post-fail callback while the aggregate answer stays SUCCESS, since
/// registration is an enqueue whose real outcome arrives via callbacks.
pub struct ExtractDispatcher<B, N>
where
    B: RagBackend,
    N: CallbackNotifier,
{
    backend: Arc<B>,
    callbacks: CallbackSender<N>,
}

impl<B, N> ExtractDispatcher<B, N>
where
    B: RagBackend,
    N: CallbackNotifier,
{
    pub fn new(backend: Arc<B>, callbacks: CallbackSender<N>) -> Self {
        Self { backend, callbacks }
    }

    pub async fn dispatch(
        &self,
        request: &RegisterDocRequest,
        extract_requests: &[ExtractDocRequest],
        response_meta: DocumentRegisterResponseMeta,
    ) -> RegisterDocResponse {
        tracing::debug!(
            session_id = request.meta.session_id.as_deref().unwrap_or("N/A"),
            files = extract_requests.len(),
            "Dispatching extract requests"
        );

        let outcomes = join_all(
            extract_requests
                .iter()
                .map(|extract_request| self.backend.extract(extract_request)),
        )
        .await;

        for (extract_request, outcome) in extract_requests.iter().zip(outcomes) {
            let rag_sys_info = extract_request.meta.rag_sys_info.as_deref().unwrap_or("N/A");
            let session_id = extract_request.meta.session_id.as_deref().unwrap_or("N/A");

            match outcome {
                Err(e) => {
                    tracing::error!(
                        rag_sys_info,
                        session_id,
                        doc_uid = %extract_request.doc_uid(),
                        error = %e,
                        "Extract request failed"
                    );
                    let _ = self
                        .callbacks
                        .extract_post_fail(extract_request, None, ProcessingStep::Extract)
                        .await;
                }
                Ok(response) if !ErrorCd::is_success_code(response.result_cd) => {
                    tracing::error!(
                        rag_sys_info,
                        session_id,
                        doc_uid = %extract_request.doc_uid(),
                        result_cd = response.result_cd,
                        result_desc = %response.result_desc,
                        "Extract error"
                    );
                    let _ = self
                        .callbacks
                        .extract_post_fail(
                            extract_request,
                            Some((response.result_cd, response.result_desc.as_str())),
                            ProcessingStep::Extract,
                        )
                        .await;
                }
                Ok(_) => {
                    tracing::debug!(
                        session_id,
                        doc_uid = %extract_request.doc_uid(),
                        "Extract request accepted"
                    );
                }
            }
        }

        RegisterDocResponse {
            result_cd: ErrorCd::Success.code(),
            result_desc: ErrorCd::Success.description().to_string(),
            meta: response_meta,
        }
    }
}
