//! Flattening of the upstream `RelatedTopics` tree.
//!
//! The upstream API mixes two node shapes in one array: plain results
//! (`FirstURL`/`Text`) and named groups carrying a `Topics` array of child
//! results. Each node is classified exactly once into [`TopicNode`], then the
//! classified tree is walked depth-first into a flat, ordered result list.

use serde_json::Value;

use super::types::{RelatedTopic, TopicNode};

/// Flattens a raw `RelatedTopics` value into ordered results.
///
/// Total for any JSON input: a value that is not an array yields an empty
/// list (with a warning), malformed nodes are skipped, and a group's children
/// are spliced into the output at the group's position.
pub fn flatten_related_topics(raw: &Value) -> Vec<RelatedTopic> {
    match raw.as_array() {
        Some(items) => items
            .iter()
            .filter_map(classify_topic)
            .flat_map(|node| flatten_node(&node))
            .collect(),
        None => {
            log::warn!("RelatedTopics is not an array, skipping result adaptation");
            Vec::new()
        }
    }
}

/// Classifies one raw node. A non-empty `Topics` array wins over leaf fields;
/// an empty `Topics` array disqualifies the node entirely. Returns `None` for
/// anything that matches neither shape.
pub fn classify_topic(value: &Value) -> Option<TopicNode> {
    let obj = value.as_object()?;

    if let Some(topics) = obj.get("Topics").and_then(Value::as_array) {
        if topics.is_empty() {
            return None;
        }
        return Some(TopicNode::Group {
            name: obj.get("Name").and_then(Value::as_str).map(str::to_string),
            children: topics.iter().filter_map(classify_topic).collect(),
        });
    }

    if obj.contains_key("FirstURL") && obj.contains_key("Text") {
        return Some(TopicNode::Leaf {
            url: non_blank(obj.get("FirstURL")),
            text: non_blank(obj.get("Text")),
        });
    }

    None
}

fn flatten_node(node: &TopicNode) -> Vec<RelatedTopic> {
    match node {
        TopicNode::Group { name, children } => {
            if let Some(name) = name {
                log::debug!(
                    "Flattening topic group '{}' with {} children",
                    name,
                    children.len()
                );
            }
            children.iter().flat_map(flatten_node).collect()
        }
        TopicNode::Leaf {
            url: Some(url),
            text: Some(text),
        } => vec![RelatedTopic {
            url: url.clone(),
            title: text.clone(),
        }],
        // Leaf missing either field after normalization: best-effort skip.
        TopicNode::Leaf { .. } => Vec::new(),
    }
}

/// Missing, null, non-string, or whitespace-only values count as absent.
/// Values that pass the check are kept verbatim, untrimmed.
fn non_blank(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn topic(url: &str, title: &str) -> RelatedTopic {
        RelatedTopic {
            url: url.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_non_array_input_yields_empty() {
        assert!(flatten_related_topics(&Value::Null).is_empty());
        assert!(flatten_related_topics(&json!("not an array")).is_empty());
        assert!(flatten_related_topics(&json!(42)).is_empty());
        assert!(flatten_related_topics(&json!({"Topics": []})).is_empty());
    }

    #[test]
    fn test_empty_array_yields_empty() {
        assert!(flatten_related_topics(&json!([])).is_empty());
    }

    #[test]
    fn test_flat_leaves_preserve_order_and_values() {
        let raw = json!([
            { "FirstURL": "http://example.com/item1", "Text": "Item 1 Description" },
            { "FirstURL": "http://example.com/item2", "Text": "Item 2 Description" }
        ]);

        assert_eq!(
            flatten_related_topics(&raw),
            vec![
                topic("http://example.com/item1", "Item 1 Description"),
                topic("http://example.com/item2", "Item 2 Description"),
            ]
        );
    }

    #[test]
    fn test_group_children_are_flattened() {
        let raw = json!([
            {
                "Name": "Group A",
                "Topics": [
                    { "FirstURL": "http://example.com/nested1", "Text": "Nested Item 1" },
                    { "FirstURL": "http://example.com/nested2", "Text": "Nested Item 2" }
                ]
            }
        ]);

        assert_eq!(
            flatten_related_topics(&raw),
            vec![
                topic("http://example.com/nested1", "Nested Item 1"),
                topic("http://example.com/nested2", "Nested Item 2"),
            ]
        );
    }

    #[test]
    fn test_mixed_leaves_and_groups_keep_document_order() {
        let raw = json!([
            { "FirstURL": "http://example.com/direct1", "Text": "Direct Item 1" },
            {
                "Name": "Group B",
                "Topics": [
                    { "FirstURL": "http://example.com/nested3", "Text": "Nested Item 3" }
                ]
            },
            { "FirstURL": "http://example.com/direct2", "Text": "Direct Item 2" }
        ]);

        assert_eq!(
            flatten_related_topics(&raw),
            vec![
                topic("http://example.com/direct1", "Direct Item 1"),
                topic("http://example.com/nested3", "Nested Item 3"),
                topic("http://example.com/direct2", "Direct Item 2"),
            ]
        );
    }

    #[test]
    fn test_blank_or_missing_fields_are_filtered() {
        let raw = json!([
            { "FirstURL": "http://example.com/valid", "Text": "Valid Item" },
            { "FirstURL": null, "Text": "Null URL" },
            { "FirstURL": "http://example.com/empty-text", "Text": "" },
            { "FirstURL": "http://example.com/blank-text", "Text": "   " },
            { "FirstURL": "http://example.com/missing-text" },
            { "FirstURL": 12345, "Text": "Numeric URL" },
            {}
        ]);

        assert_eq!(
            flatten_related_topics(&raw),
            vec![topic("http://example.com/valid", "Valid Item")]
        );
    }

    #[test]
    fn test_kept_values_are_not_trimmed() {
        let raw = json!([
            { "FirstURL": "  http://example.com/padded ", "Text": " padded title " }
        ]);

        assert_eq!(
            flatten_related_topics(&raw),
            vec![topic("  http://example.com/padded ", " padded title ")]
        );
    }

    #[test]
    fn test_empty_or_invalid_groups_contribute_nothing() {
        let raw = json!([
            { "Name": "Empty Group", "Topics": [] },
            { "Name": "Group with invalid item", "Topics": [{}] },
            { "FirstURL": "http://example.com/standalone", "Text": "Standalone Item" }
        ]);

        assert_eq!(
            flatten_related_topics(&raw),
            vec![topic("http://example.com/standalone", "Standalone Item")]
        );
    }

    #[test]
    fn test_group_fields_win_over_leaf_fields() {
        let raw = json!([
            {
                "FirstURL": "http://example.com/ignored",
                "Text": "Ignored leaf fields",
                "Topics": [
                    { "FirstURL": "http://example.com/child", "Text": "Child" }
                ]
            }
        ]);

        assert_eq!(
            flatten_related_topics(&raw),
            vec![topic("http://example.com/child", "Child")]
        );
    }

    #[test]
    fn test_deeply_nested_groups_flatten_recursively() {
        let raw = json!([
            {
                "Name": "Outer",
                "Topics": [
                    {
                        "Name": "Inner",
                        "Topics": [
                            { "FirstURL": "http://example.com/deep", "Text": "Deep Item" }
                        ]
                    },
                    { "FirstURL": "http://example.com/shallow", "Text": "Shallow Item" }
                ]
            }
        ]);

        assert_eq!(
            flatten_related_topics(&raw),
            vec![
                topic("http://example.com/deep", "Deep Item"),
                topic("http://example.com/shallow", "Shallow Item"),
            ]
        );
    }

    #[test]
    fn test_flattening_flat_input_is_idempotent() {
        let raw = json!([
            { "FirstURL": "http://example.com/a", "Text": "A" },
            { "FirstURL": "http://example.com/b", "Text": "B" }
        ]);

        let once = flatten_related_topics(&raw);
        let as_raw_again = Value::Array(
            once.iter()
                .map(|t| json!({ "FirstURL": t.url, "Text": t.title }))
                .collect(),
        );

        assert_eq!(flatten_related_topics(&as_raw_again), once);
    }

    // The documented upstream sample: two direct results plus one named
    // group of two, expected to flatten to the four leaves in document order.
    #[test]
    fn test_complex_upstream_sample() {
        let raw = json!([
            {
                "FirstURL": "http://duckduckgo.com/X_(2022_film)",
                "Icon": { "Height": "", "URL": "", "Width": "" },
                "Result": "<a href=\"http://duckduckgo.com/X_(2022_film)\">X (2022 film)</a>",
                "Text": "X (2022 film) A 2022 American slasher film written, directed, produced and edited by Ti West."
            },
            {
                "FirstURL": "http://duckduckgo.com/Generation_X",
                "Icon": { "Height": "", "URL": "/i/ffcede07.jpg", "Width": "" },
                "Result": "<a href=\"http://duckduckgo.com/Generation_X\">Generation X</a>",
                "Text": "Generation X The demographic cohort following the Baby Boomers and preceding Millennials."
            },
            {
                "Name": "Art, entertainment, and media",
                "Topics": [
                    {
                        "FirstURL": "http://duckduckgo.com/X_(Dark_Horse_Comics)",
                        "Icon": { "Height": "", "URL": "/i/96b9bbc3.jpg", "Width": "" },
                        "Result": "<a href=\"http://duckduckgo.com/X_(Dark_Horse_Comics)\">X (Dark Horse Comics)</a>",
                        "Text": "X (Dark Horse Comics) A comic book character who starred in his own self-titled series published by Dark Horse Comics."
                    },
                    {
                        "FirstURL": "http://duckduckgo.com/X_(Mega_Man)",
                        "Icon": { "Height": "", "URL": "", "Width": "" },
                        "Result": "<a href=\"http://duckduckgo.com/X_(Mega_Man)\">X (Mega Man)</a>",
                        "Text": "X (Mega Man) A character and protagonist of Capcom's Mega Man X video game series."
                    }
                ]
            }
        ]);

        assert_eq!(
            flatten_related_topics(&raw),
            vec![
                topic(
                    "http://duckduckgo.com/X_(2022_film)",
                    "X (2022 film) A 2022 American slasher film written, directed, produced and edited by Ti West."
                ),
                topic(
                    "http://duckduckgo.com/Generation_X",
                    "Generation X The demographic cohort following the Baby Boomers and preceding Millennials."
                ),
                topic(
                    "http://duckduckgo.com/X_(Dark_Horse_Comics)",
                    "X (Dark Horse Comics) A comic book character who starred in his own self-titled series published by Dark Horse Comics."
                ),
                topic(
                    "http://duckduckgo.com/X_(Mega_Man)",
                    "X (Mega Man) A character and protagonist of Capcom's Mega Man X video game series."
                ),
            ]
        );
    }
}
