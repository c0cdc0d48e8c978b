/// Log tags identify the subsystem a message originates from.
///
/// Each tag maps to a `--debug-<key>` command-line flag so diagnostic
/// output can be enabled per subsystem.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTag {
    System,
    Api,
    Pools,
    Social,
    Sentiment,
    Cache,
    Score,
    Engine,
    Test,
    Other(String),
}

impl LogTag {
    /// Key used for the matching `--debug-<key>` flag
    pub fn to_debug_key(&self) -> String {
        match self {
            LogTag::System => "system".to_string(),
            LogTag::Api => "api".to_string(),
            LogTag::Pools => "pools".to_string(),
            LogTag::Social => "social".to_string(),
            LogTag::Sentiment => "sentiment".to_string(),
            LogTag::Cache => "cache".to_string(),
            LogTag::Score => "score".to_string(),
            LogTag::Engine => "engine".to_string(),
            LogTag::Test => "test".to_string(),
            LogTag::Other(s) => s.to_lowercase(),
        }
    }

    /// Uncolored tag text for file-friendly output
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM".to_string(),
            LogTag::Api => "API".to_string(),
            LogTag::Pools => "POOLS".to_string(),
            LogTag::Social => "SOCIAL".to_string(),
            LogTag::Sentiment => "SENTIMENT".to_string(),
            LogTag::Cache => "CACHE".to_string(),
            LogTag::Score => "SCORE".to_string(),
            LogTag::Engine => "ENGINE".to_string(),
            LogTag::Test => "TEST".to_string(),
            LogTag::Other(s) => s.to_uppercase(),
        }
    }
}
