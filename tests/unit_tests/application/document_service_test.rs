use std::sync::Arc;

use bot_controller::application::services::{DocumentService, number_results, paginate};
use bot_controller::domain::{
    DeleteDocRequest, DocDelDocument, ErrorCd, ModifyDocRequest, ModifyReqData,
    ModifyReqDocument, PageInfo, SearchDocRequest, SearchReq,
};

use crate::helpers::{
    EXTRACT_CALLBACK_URL, INDEXING_CALLBACK_URL, MockRagBackend, doc_chat_meta, meta,
    register_request, search_result,
};

fn service(backend: &Arc<MockRagBackend>) -> DocumentService<MockRagBackend> {
    DocumentService::new(
        Arc::clone(backend),
        EXTRACT_CALLBACK_URL.to_string(),
        INDEXING_CALLBACK_URL.to_string(),
    )
}

fn modify_request() -> ModifyDocRequest {
    ModifyDocRequest {
        meta: meta(),
        data: ModifyReqData {
            document: ModifyReqDocument {
                doc_uid: "doc-a".to_string(),
                doc_name: Some("doc-a.pdf".to_string()),
                job_class: None,
            },
            page_info: Some(vec![PageInfo {
                page_num: 1,
                context: Some("edited".to_string()),
            }]),
        },
    }
}

fn search_request(page_num: Option<i32>, page_per_cnt: Option<i32>) -> SearchDocRequest {
    SearchDocRequest {
        meta: meta(),
        search: SearchReq {
            content: "warranty".to_string(),
            max_cnt: 100,
            page_per_cnt,
            page_num,
            next_ids: None,
        },
    }
}

#[test]
fn given_no_files_when_validating_registration_then_rejects_with_no_file_info() {
    let backend = Arc::new(MockRagBackend::new());
    let request = register_request(&[]);

    assert_eq!(
        service(&backend).validate_registration(&request),
        Err(ErrorCd::NoFileInfo)
    );
}

#[test]
fn given_blank_callback_url_when_validating_registration_then_rejects_with_no_callback_url() {
    let backend = Arc::new(MockRagBackend::new());
    let mut request = register_request(&["doc-a"]);
    request.meta.callback_url = Some(String::new());

    assert_eq!(
        service(&backend).validate_registration(&request),
        Err(ErrorCd::NoCallbackUrl)
    );
}

#[test]
fn given_url_fetch_without_file_url_when_validating_registration_then_rejects() {
    let backend = Arc::new(MockRagBackend::new());
    let mut request = register_request(&["doc-a", "doc-b"]);
    request.documents.files[1].file_url = None;

    assert_eq!(
        service(&backend).validate_registration(&request),
        Err(ErrorCd::NoFileInfo)
    );
}

#[test]
fn given_ftp_fetch_without_file_url_when_validating_registration_then_accepts() {
    let backend = Arc::new(MockRagBackend::new());
    let mut request = register_request(&["doc-a"]);
    request.documents.file_get_type = "ftp".to_string();
    request.documents.files[0].file_url = None;

    assert!(service(&backend).validate_registration(&request).is_ok());
}

#[test]
fn given_registration_when_building_extract_requests_then_one_per_file_with_gateway_callback() {
    let backend = Arc::new(MockRagBackend::new());
    let request = register_request(&["doc-a", "doc-b"]);

    let extracts = service(&backend).build_extract_requests(&request);

    assert_eq!(extracts.len(), 2);
    assert_eq!(extracts[0].doc_uid(), "doc-a");
    assert_eq!(extracts[1].doc_uid(), "doc-b");
    for extract in &extracts {
        assert_eq!(extract.documents.file_get_type, "url");
        assert_eq!(extract.meta.extract_callback_url, EXTRACT_CALLBACK_URL);
        assert_eq!(extract.meta.callback_url, request.meta.callback_url);
    }
}

#[tokio::test]
async fn given_indexer_without_meta_when_modify_then_echoes_request_identity() {
    let backend = Arc::new(MockRagBackend::new());

    let response = service(&backend).modify(&modify_request()).await;

    assert_eq!(response.result_cd, 200);
    assert_eq!(response.meta.doc_uid.as_deref(), Some("doc-a"));
    assert_eq!(response.meta.company_id, "acme");

    let index_calls = backend.index_calls.lock().unwrap();
    assert_eq!(
        index_calls[0].meta.indexing_callback_url.as_deref(),
        Some(INDEXING_CALLBACK_URL)
    );
    assert_eq!(index_calls[0].data.document.doc_name, "doc-a.pdf");
}

#[tokio::test]
async fn given_unreachable_indexer_when_modify_then_returns_indexing_request_error() {
    let backend = Arc::new(MockRagBackend::new().with_index_unreachable());

    let response = service(&backend).modify(&modify_request()).await;

    assert_eq!(response.result_cd, ErrorCd::IndexingReqExcept.code());
    assert_eq!(response.meta.doc_uid.as_deref(), Some("doc-a"));
}

#[tokio::test]
async fn given_unreachable_backend_when_delete_then_marks_every_document_failed() {
    let backend = Arc::new(MockRagBackend::new().with_delete_unreachable());
    let request = DeleteDocRequest {
        meta: doc_chat_meta("doc-bot"),
        documents: vec![
            DocDelDocument {
                doc_uid: "doc-a".to_string(),
            },
            DocDelDocument {
                doc_uid: "doc-b".to_string(),
            },
        ],
    };

    let response = service(&backend).delete(&request).await;

    assert_eq!(response.result_cd, 464);
    assert_eq!(response.documents.len(), 2);
    assert!(response.documents.iter().all(|d| !d.success));
    assert_eq!(response.meta, request.meta);
}

#[tokio::test]
async fn given_second_page_when_search_then_returns_numbered_slice() {
    let results = (1..=5).map(|i| search_result(&format!("file-{}", i))).collect();
    let backend = Arc::new(MockRagBackend::new().with_search_results(results, 5));

    let response = service(&backend)
        .search(&search_request(Some(2), Some(2)))
        .await;

    assert_eq!(response.result_cd, 200);
    let search = response.search.unwrap();
    assert_eq!(search.search_cnt, 5);
    assert_eq!(search.content, "warranty");
    assert_eq!(search.next_ids.as_deref(), Some("next-1"));
    let page = search.result.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].file_name.as_deref(), Some("file-3"));
    assert_eq!(page[0].search_seq, Some(3));
    assert_eq!(page[1].search_seq, Some(2));
}

#[tokio::test]
async fn given_unreachable_backend_when_search_then_returns_empty_error_page() {
    let backend = Arc::new(MockRagBackend::new().with_search_unreachable());

    let response = service(&backend)
        .search(&search_request(Some(1), Some(10)))
        .await;

    assert_eq!(response.result_cd, ErrorCd::SearchDocExcept.code());
    assert_eq!(response.meta.session_id.as_deref(), Some("sess-1"));
    let search = response.search.unwrap();
    assert_eq!(search.search_cnt, 0);
    assert_eq!(search.next_ids.as_deref(), Some(""));
    assert_eq!(search.result, Some(Vec::new()));
}

#[test]
fn given_results_when_numbering_then_sequence_counts_down_from_total() {
    let results = vec![search_result("a"), search_result("b"), search_result("c")];

    let numbered = number_results(results, 10);

    let seqs: Vec<Option<i32>> = numbered.iter().map(|r| r.search_seq).collect();
    assert_eq!(seqs, vec![Some(10), Some(9), Some(8)]);
}

#[test]
fn given_no_page_size_when_paginating_then_returns_everything() {
    assert_eq!(paginate(vec![1, 2, 3], Some(2), None), vec![1, 2, 3]);
    assert_eq!(paginate(vec![1, 2, 3], None, Some(0)), vec![1, 2, 3]);
}

#[test]
fn given_page_beyond_results_when_paginating_then_returns_empty() {
    assert!(paginate(vec![1, 2, 3], Some(5), Some(2)).is_empty());
}

#[test]
fn given_missing_or_zero_page_when_paginating_then_starts_at_first_page() {
    assert_eq!(paginate(vec![1, 2, 3], None, Some(2)), vec![1, 2]);
    assert_eq!(paginate(vec![1, 2, 3], Some(0), Some(2)), vec![1, 2]);
}
