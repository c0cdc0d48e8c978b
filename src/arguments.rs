/// Centralized argument handling for the belocity CLI
///
/// Consolidates command-line argument parsing and debug flag checking so
/// binaries and tests read flags through one thread-safe storage.
///
/// Features:
/// - Centralized CMD_ARGS storage with thread-safe access
/// - Debug flag checking functions for all modules
/// - Unified argument parsing utilities
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Sets the global command-line arguments
/// Used by tests to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// =============================================================================
// DEBUG FLAG CHECKING FUNCTIONS
// These functions check for specific debug flags in the command-line arguments
// =============================================================================

/// API calls debug mode
pub fn is_debug_api_enabled() -> bool {
    has_arg("--debug-api")
}

/// Social feed debug mode
pub fn is_debug_social_enabled() -> bool {
    has_arg("--debug-social")
}

/// Sentiment classification debug mode
pub fn is_debug_sentiment_enabled() -> bool {
    has_arg("--debug-sentiment")
}

/// Cache operations debug mode
pub fn is_debug_cache_enabled() -> bool {
    has_arg("--debug-cache")
}

/// Score computation debug mode
pub fn is_debug_score_enabled() -> bool {
    has_arg("--debug-score")
}

/// Engine orchestration debug mode
pub fn is_debug_engine_enabled() -> bool {
    has_arg("--debug-engine")
}

/// Verbose output mode (all modules)
pub fn is_verbose_enabled() -> bool {
    has_arg("--verbose")
}

/// Quiet mode - suppress info-level output
pub fn is_quiet_enabled() -> bool {
    has_arg("--quiet")
}

// =============================================================================
// HELP AND USAGE
// =============================================================================

pub mod patterns {
    use super::has_arg;

    /// Check if help was requested via any common pattern
    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h") || has_arg("help")
    }
}

/// Print CLI usage to stdout
pub fn print_help() {
    println!("belocity - token belief score engine");
    println!();
    println!("USAGE:");
    println!("    belocity --address <TOKEN_ADDRESS> [--network <NETWORK>]");
    println!("    belocity --trending [--network <NETWORK>]");
    println!();
    println!("OPTIONS:");
    println!("    --address <ADDRESS>    Token contract address to score (required)");
    println!("    --network <NETWORK>    Network identifier (default: solana)");
    println!("    --limit <N>            Max social posts to analyze (default: 50)");
    println!("    --trending             Print trending pools for the network and exit");
    println!("    --config <PATH>        Path to configs.json (default: configs.json)");
    println!("    --quiet                Suppress info-level logging");
    println!("    --verbose              Enable verbose logging for all modules");
    println!("    -h, --help             Show this help");
    println!();
    println!("DEBUG FLAGS:");
    println!("    --debug-api            Log upstream HTTP request details");
    println!("    --debug-social         Log social feed fetch/cache decisions");
    println!("    --debug-sentiment      Log per-post classification results");
    println!("    --debug-cache          Log cache hits, misses and expirations");
    println!("    --debug-score          Log per-component score math");
    println!("    --debug-engine         Log engine orchestration steps");
}

/// Print active debug modes at startup, if any
pub fn print_debug_info() {
    let mut active = Vec::new();
    if is_debug_api_enabled() {
        active.push("api");
    }
    if is_debug_social_enabled() {
        active.push("social");
    }
    if is_debug_sentiment_enabled() {
        active.push("sentiment");
    }
    if is_debug_cache_enabled() {
        active.push("cache");
    }
    if is_debug_score_enabled() {
        active.push("score");
    }
    if is_debug_engine_enabled() {
        active.push("engine");
    }

    if !active.is_empty() {
        crate::logger::info(
            crate::logger::LogTag::System,
            &format!("Debug modes enabled: {}", active.join(", ")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because CMD_ARGS is process-global state
    #[test]
    fn test_arg_parsing() {
        set_cmd_args(vec![
            "belocity".to_string(),
            "--address".to_string(),
            "So11111111111111111111111111111111111111112".to_string(),
            "--network".to_string(),
            "solana".to_string(),
            "--trending".to_string(),
        ]);

        assert_eq!(
            get_arg_value("--address").as_deref(),
            Some("So11111111111111111111111111111111111111112")
        );
        assert_eq!(get_arg_value("--network").as_deref(), Some("solana"));
        assert_eq!(get_arg_value("--limit"), None);
        assert!(has_arg("--trending"));
        assert_eq!(get_arg_value("--trending"), None);
    }
}
