use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub page_num: i32,
    #[serde(default)]
    pub context: Option<String>,
}

impl PageInfo {
    pub fn has_context(&self) -> bool {
        self.context.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Copies page info for forwarding, normalizing missing context to an empty string.
pub fn normalize_pages(pages: Option<&[PageInfo]>) -> Vec<PageInfo> {
    pages
        .unwrap_or_default()
        .iter()
        .map(|p| PageInfo {
            page_num: p.page_num,
            context: Some(p.context.clone().unwrap_or_default()),
        })
        .collect()
}

/// A retrieved document fragment handed to the chat model as grounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub doc_name: String,
    pub doc_page: String,
    pub content: String,
    #[serde(default)]
    pub doc_path: Option<String>,
}
