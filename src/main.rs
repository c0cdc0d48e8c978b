use belocity::{
    apis::geckoterminal::GeckoTerminalClient,
    arguments::{self, patterns},
    config::{self, Config},
    engine,
    errors::EngineError,
    logger::{self, LogTag},
    scoring::BeliefScoreResult,
};
use colored::*;

/// Main entry point for belocity
///
/// Computes the belief score for one token and prints it, or lists the
/// network's trending pools with --trending. The hosting HTTP layer is a
/// separate concern; this binary is the direct CLI consumer of the engine.
#[tokio::main]
async fn main() {
    logger::init();

    if patterns::is_help_requested() {
        arguments::print_help();
        std::process::exit(0);
    }

    arguments::print_debug_info();

    let config_path =
        arguments::get_arg_value("--config").unwrap_or_else(|| "configs.json".to_string());
    let mut loaded = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            logger::error(LogTag::System, &format!("Failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    if let Some(limit) = arguments::get_arg_value("--limit").and_then(|v| v.parse().ok()) {
        loaded.social.post_limit = limit;
    }
    config::set_config(loaded.clone());

    let network = arguments::get_arg_value("--network")
        .unwrap_or_else(|| loaded.general.default_network.clone());

    // Trending mode - print and exit
    if arguments::has_arg("--trending") {
        run_trending(&loaded, &network).await;
        return;
    }

    let address = arguments::get_arg_value("--address").unwrap_or_default();

    let engine = match engine::build_engine(&loaded) {
        Ok(engine) => engine,
        Err(e) => {
            logger::error(LogTag::System, &format!("Failed to initialize engine: {}", e));
            std::process::exit(1);
        }
    };

    match engine.score_token(&network, &address).await {
        Ok(result) => print_result(&result),
        Err(EngineError::MissingAddress) => {
            logger::error(
                LogTag::System,
                "Contract address is required (pass --address <TOKEN_ADDRESS>)",
            );
            std::process::exit(2);
        }
    }
}

/// Fetch and print the top trending pools for a network
async fn run_trending(config: &Config, network: &str) {
    let client = match GeckoTerminalClient::new(
        config.pools.enabled,
        config.pool_rate_limit(),
        config.pool_timeout(),
    ) {
        Ok(client) => client,
        Err(e) => {
            logger::error(LogTag::System, &format!("Failed to initialize client: {}", e));
            std::process::exit(1);
        }
    };

    let pools = match client.fetch_trending_pools(network, Some(1)).await {
        Ok(pools) => pools,
        Err(e) => {
            logger::warning(LogTag::Pools, &format!("Trending fetch failed: {}", e));
            Vec::new()
        }
    };

    println!();
    println!(
        "{} {}",
        "Trending pools on".bright_white().bold(),
        network.bright_cyan().bold()
    );
    println!("{}", "─".repeat(50).dimmed());

    for pool in pools.iter().take(10) {
        let change = pool.price_change_24h;
        let change_str = if change >= 0.0 {
            format!("{:+.2}%", change).green().bold()
        } else {
            format!("{:+.2}%", change).red().bold()
        };
        println!(
            "  {} {} {} {} {}",
            pool.name.bright_white().bold(),
            format!("${:.6}", pool.base_token_price_usd).yellow(),
            change_str,
            format!("vol ${:.0}", pool.volume_24h).dimmed(),
            format!("{} txns", pool.transactions_24h).dimmed(),
        );
    }

    if pools.is_empty() {
        println!("  {}", "no pools available".dimmed());
    }
}

/// Print the belief score result: colored summary, then the JSON payload
fn print_result(result: &BeliefScoreResult) {
    println!();
    println!(
        "{} {} {}",
        "Belief score for".bright_white().bold(),
        result.token_symbol.bright_cyan().bold(),
        format!("({})", result.token_name).dimmed()
    );
    println!("{}", "─".repeat(50).dimmed());
    println!(
        "  {} {}",
        "Overall:".dimmed(),
        format!("{:.2}", result.overall_belief_score).bright_green().bold()
    );

    for component in &result.score_components {
        println!(
            "  {} score {} x weight {} = {}",
            format!("{:<17}", component.name).bright_white(),
            format!("{:6.2}", component.score).yellow(),
            format!("{:.2}", component.weight).dimmed(),
            format!("{:.2}", component.contribution).bright_white().bold(),
        );
    }

    let trajectory: Vec<String> = result
        .predicted_score_trajectory
        .iter()
        .map(|p| format!("{} {:.1}", p.day, p.score))
        .collect();
    println!("  {} {}", "Trajectory:".dimmed(), trajectory.join("  "));
    println!();

    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => logger::error(LogTag::System, &format!("Failed to serialize result: {}", e)),
    }
}
