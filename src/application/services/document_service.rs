use std::sync::Arc;

use crate::application::ports::{DownstreamError, RagBackend};
use crate::domain::{
    DeleteDocRequest, DeleteDocResponse, DocDelResDocument, ErrorCd, ExtractDocRequest,
    ExtractDocuments, IndexingData, IndexingDocument, IndexingRequest, ModifyDocRequest,
    ModifyDocResponse, ModifyDocResponseMeta, PageInfo, RegisterDocRequest, SearchDocRequest,
    SearchDocResponse, SearchDocResult, SearchRes,
};
use crate::infrastructure::observability::truncate_for_log;

/// One-shot document operations forwarded to the RAG backend.
pub struct DocumentService<B>
where
    B: RagBackend,
{
    backend: Arc<B>,
    extract_callback_url: String,
    indexing_callback_url: String,
}

impl<B> DocumentService<B>
where
    B: RagBackend,
{
    pub fn new(backend: Arc<B>, extract_callback_url: String, indexing_callback_url: String) -> Self {
        Self {
            backend,
            extract_callback_url,
            indexing_callback_url,
        }
    }

    /// Rejects registrations the extractor could never act on.
    pub fn validate_registration(&self, request: &RegisterDocRequest) -> Result<(), ErrorCd> {
        if request.documents.files.is_empty() {
            return Err(ErrorCd::NoFileInfo);
        }

        if request
            .meta
            .callback_url
            .as_deref()
            .is_none_or(str::is_empty)
        {
            return Err(ErrorCd::NoCallbackUrl);
        }

        if request.documents.fetches_by_url()
            && request
                .documents
                .files
                .iter()
                .any(|f| f.file_url.as_deref().is_none_or(str::is_empty))
        {
            return Err(ErrorCd::NoFileInfo);
        }

        Ok(())
    }

    pub fn build_extract_requests(&self, request: &RegisterDocRequest) -> Vec<ExtractDocRequest> {
        let meta = request.meta.with_extract_callback(&self.extract_callback_url);
        let file_get_type = request.documents.file_get_type.to_lowercase();

        request
            .documents
            .files
            .iter()
            .map(|file| ExtractDocRequest {
                meta: meta.clone(),
                documents: ExtractDocuments {
                    file_get_type: file_get_type.clone(),
                    file_get_info: request.documents.file_get_info.clone(),
                    files: file.clone(),
                },
            })
            .collect()
    }

    pub async fn modify(&self, request: &ModifyDocRequest) -> ModifyDocResponse {
        let session_id = request.meta.session_id.as_deref().unwrap_or("N/A");
        let doc_uid = &request.data.document.doc_uid;
        tracing::info!(session_id, doc_uid = %doc_uid, modify_flag = request.meta.modify_flag, "Modifying document");

        let page_info = request
            .data
            .page_info
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|p| PageInfo {
                page_num: p.page_num,
                context: p.context.clone(),
            })
            .collect();

        let indexing_request = IndexingRequest {
            meta: request.meta.indexing_meta(&self.indexing_callback_url),
            data: IndexingData {
                document: IndexingDocument {
                    doc_uid: doc_uid.clone(),
                    doc_name: request.data.document.doc_name.clone().unwrap_or_default(),
                    job_class: request.data.document.job_class.clone(),
                },
                page_info: Some(page_info),
            },
        };

        if let Ok(body) = serde_json::to_string(&indexing_request) {
            tracing::debug!(session_id, body = %truncate_for_log(&body), "Modify indexing request");
        }

        let fallback_meta = ModifyDocResponseMeta {
            company_id: request.meta.company_id.clone(),
            dept_class: request.meta.dept_class.clone(),
            session_id: request.meta.session_id.clone(),
            doc_uid: Some(doc_uid.clone()),
        };

        match self.backend.index(&indexing_request).await {
            Ok(response) => ModifyDocResponse::from_indexing(response, fallback_meta),
            Err(e) => {
                tracing::error!(session_id, doc_uid = %doc_uid, error = %e, "Modify failed");
                ModifyDocResponse {
                    result_cd: ErrorCd::IndexingReqExcept.code(),
                    result_desc: Some(ErrorCd::IndexingReqExcept.description().to_string()),
                    meta: fallback_meta,
                }
            }
        }
    }

    pub async fn delete(&self, request: &DeleteDocRequest) -> DeleteDocResponse {
        let session_id = request.meta.session_id.as_deref().unwrap_or("N/A");
        tracing::info!(session_id, documents = request.documents.len(), "Deleting documents");

        match self.backend.delete(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(session_id, error = %e, "Delete failed");
                DeleteDocResponse {
                    result_cd: ErrorCd::DeleteDocExcept.code(),
                    result_desc: Some(ErrorCd::DeleteDocExcept.description().to_string()),
                    meta: request.meta.clone(),
                    documents: request
                        .documents
                        .iter()
                        .map(|d| DocDelResDocument {
                            doc_uid: d.doc_uid.clone(),
                            success: false,
                        })
                        .collect(),
                }
            }
        }
    }

    pub async fn search(&self, request: &SearchDocRequest) -> SearchDocResponse {
        let session_id = request.meta.session_id.as_deref().unwrap_or("N/A");
        tracing::info!(session_id, "Searching documents");

        match self.search_page(request).await {
            Ok(response) => {
                if let Ok(body) = serde_json::to_string(&response) {
                    tracing::debug!(session_id, body = %truncate_for_log(&body), "Search response");
                }
                response
            }
            Err(e) => {
                tracing::error!(session_id, error = %e, "Search failed");
                SearchDocResponse {
                    result_cd: ErrorCd::SearchDocExcept.code(),
                    result_desc: Some(ErrorCd::SearchDocExcept.description().to_string()),
                    meta: request.meta.doc_chat_meta(),
                    search: Some(SearchRes {
                        content: request.search.content.clone(),
                        next_ids: Some(String::new()),
                        search_cnt: 0,
                        page_per_cnt: request.search.page_per_cnt,
                        page_num: request.search.page_num,
                        result: Some(Vec::new()),
                    }),
                }
            }
        }
    }

    async fn search_page(
        &self,
        request: &SearchDocRequest,
    ) -> Result<SearchDocResponse, DownstreamError> {
        let response = self.backend.search(request).await?;
        let search = response.search.ok_or_else(|| {
            DownstreamError::InvalidResponse("search response without search body".to_string())
        })?;

        let numbered = number_results(search.result.unwrap_or_default(), search.search_cnt);
        let page = paginate(numbered, request.search.page_num, request.search.page_per_cnt);

        Ok(SearchDocResponse {
            result_cd: response.result_cd,
            result_desc: response.result_desc,
            meta: request.meta.doc_chat_meta(),
            search: Some(SearchRes {
                content: request.search.content.clone(),
                next_ids: search.next_ids,
                search_cnt: search.search_cnt,
                page_per_cnt: request.search.page_per_cnt,
                page_num: request.search.page_num,
                result: Some(page),
            }),
        })
    }
}

/// Assigns descending sequence numbers starting from the total hit count.
pub fn number_results(results: Vec<SearchDocResult>, search_cnt: i32) -> Vec<SearchDocResult> {
    results
        .into_iter()
        .enumerate()
        .map(|(idx, r)| SearchDocResult {
            search_seq: Some(search_cnt - idx as i32),
            ..r
        })
        .collect()
}

/// Slices one 1-based page. Without a positive page size every result is returned.
pub fn paginate<T>(items: Vec<T>, page_num: Option<i32>, page_per_cnt: Option<i32>) -> Vec<T> {
    let Some(per_page) = page_per_cnt.filter(|p| *p > 0) else {
        return items;
    };

    let per_page = per_page as usize;
    let page = page_num.unwrap_or(1).max(1) as usize;
    let start = (page - 1).saturating_mul(per_page);

    items.into_iter().skip(start).take(per_page).collect()
}
