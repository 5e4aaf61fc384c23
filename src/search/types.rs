use serde::{Deserialize, Serialize};

/// One flattened search result: a related topic with both fields present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedTopic {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<RelatedTopic>,
    pub pagination: Pagination,
}

/// A `RelatedTopics` node after one-time shape classification. Nodes that
/// match neither shape are dropped during classification, so they never
/// reach the flatten walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicNode {
    Group {
        name: Option<String>,
        children: Vec<TopicNode>,
    },
    Leaf {
        url: Option<String>,
        text: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct DuckDuckGoConfig {
    pub base_url: String,
    pub user_agent: String,
}
