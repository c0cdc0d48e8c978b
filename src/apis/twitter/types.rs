/// Twitter search API response types (RapidAPI provider)
///
/// The provider wraps each tweet in a deeply nested timeline entry. Any
/// entry missing a nested field is skipped; one malformed item never
/// fails the batch.
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tweets: Vec<TimelineEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimelineEntry {
    #[serde(default)]
    pub content: Option<EntryContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EntryContent {
    #[serde(default, rename = "itemContent")]
    pub item_content: Option<ItemContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemContent {
    #[serde(default, rename = "itemType")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub tweet_results: Option<TweetResults>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TweetResults {
    #[serde(default)]
    pub result: Option<TweetResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TweetResult {
    #[serde(default)]
    pub legacy: Option<LegacyTweet>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LegacyTweet {
    #[serde(default)]
    pub id_str: Option<String>,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_id_str: Option<String>,
}

/// One post extracted from the timeline, before classification
#[derive(Debug, Clone)]
pub struct TimelinePost {
    pub id: String,
    pub text: String,
    pub created_at: String,
    pub author_id: String,
}

impl SearchResponse {
    /// Extract the usable posts, skipping entries with missing nested fields
    pub fn timeline_posts(&self) -> Vec<TimelinePost> {
        let mut posts = Vec::new();
        for entry in &self.tweets {
            let item = match entry
                .content
                .as_ref()
                .and_then(|c| c.item_content.as_ref())
            {
                Some(item) => item,
                None => continue,
            };

            if item.item_type.as_deref() != Some("TimelineTweet") {
                continue;
            }

            let legacy = match item
                .tweet_results
                .as_ref()
                .and_then(|r| r.result.as_ref())
                .and_then(|r| r.legacy.as_ref())
            {
                Some(legacy) => legacy,
                None => continue,
            };

            posts.push(TimelinePost {
                id: legacy.id_str.clone().unwrap_or_else(|| "unknown".to_string()),
                text: legacy.full_text.clone().unwrap_or_default(),
                created_at: legacy.created_at.clone().unwrap_or_default(),
                author_id: legacy
                    .user_id_str
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
            });
        }
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet_entry(id: &str, text: &str) -> serde_json::Value {
        serde_json::json!({
            "content": {
                "itemContent": {
                    "itemType": "TimelineTweet",
                    "tweet_results": {
                        "result": {
                            "legacy": {
                                "id_str": id,
                                "full_text": text,
                                "created_at": "Wed Oct 10 20:19:24 +0000 2018",
                                "user_id_str": "12345"
                            }
                        }
                    }
                }
            }
        })
    }

    #[test]
    fn test_extracts_timeline_tweets() {
        let json = serde_json::json!({
            "tweets": [
                tweet_entry("1", "going to the moon"),
                // Cursor entries carry no itemContent
                { "content": {} },
                // Non-tweet timeline items are skipped
                { "content": { "itemContent": { "itemType": "TimelineUser" } } },
            ]
        });

        let response: SearchResponse = serde_json::from_value(json).unwrap();
        let posts = response.timeline_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "1");
        assert_eq!(posts[0].text, "going to the moon");
        assert_eq!(posts[0].author_id, "12345");
    }

    #[test]
    fn test_missing_legacy_is_skipped() {
        let json = serde_json::json!({
            "tweets": [{
                "content": {
                    "itemContent": {
                        "itemType": "TimelineTweet",
                        "tweet_results": { "result": {} }
                    }
                }
            }]
        });

        let response: SearchResponse = serde_json::from_value(json).unwrap();
        assert!(response.timeline_posts().is_empty());
    }

    #[test]
    fn test_missing_ids_get_placeholders() {
        let json = serde_json::json!({
            "tweets": [{
                "content": {
                    "itemContent": {
                        "itemType": "TimelineTweet",
                        "tweet_results": {
                            "result": { "legacy": { "full_text": "no ids here" } }
                        }
                    }
                }
            }]
        });

        let response: SearchResponse = serde_json::from_value(json).unwrap();
        let posts = response.timeline_posts();
        assert_eq!(posts[0].id, "unknown");
        assert_eq!(posts[0].author_id, "unknown");
        assert_eq!(posts[0].created_at, "");
    }
}
