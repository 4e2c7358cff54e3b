mod callback;
mod chat;
mod deletion;
mod error_cd;
mod extraction;
mod indexing;
mod meta;
mod modification;
mod page;
mod processing_step;
mod registration;
mod search;

pub use callback::{CallbackRequest, CallbackResponse, CallbackResult};
pub use chat::{
    ChatLlmQuery, ChatLlmRequest, ChatRequest, ChatRequestData, ChatResponse, ChatResponseData,
    ChatRetrieved, ChatRetrieverQuery, ChatRetrieverRequest, ChatRetrieverResponse, DEFAULT_LANG,
};
pub use deletion::{DeleteDocRequest, DeleteDocResponse, DocDelDocument, DocDelResDocument};
pub use error_cd::{ErrorCd, ResultEnvelope};
pub use extraction::{
    ExtractCallbackRequest, ExtractCallbackResponse, ExtractCallbackResult, ExtractDocRequest,
    ExtractDocResponse, ExtractDocuments,
};
pub use indexing::{
    IndexingCallbackRequest, IndexingCallbackResponse, IndexingCallbackResult, IndexingData,
    IndexingDocument, IndexingRequest, IndexingResponse,
};
pub use meta::{
    CallbackRequestMeta, DocChatCommonMeta, DocumentRegisterRequestMeta,
    DocumentRegisterResponseMeta, ExtractDocRequestMeta, ExtractDocResponseMeta,
    IndexingCallbackRequestMeta, IndexingRequestMeta, Meta, ModifyDocResponseMeta, Policy,
    SessionContext,
};
pub use modification::{ModifyDocRequest, ModifyDocResponse, ModifyReqData, ModifyReqDocument};
pub use page::{PageInfo, Payload, normalize_pages};
pub use processing_step::ProcessingStep;
pub use registration::{
    FILE_GET_TYPE_URL, FileGetInfo, FileInfo, RegisterDocRequest, RegisterDocResponse,
    RegisterDocuments,
};
pub use search::{SearchDocRequest, SearchDocResponse, SearchDocResult, SearchReq, SearchRes};
