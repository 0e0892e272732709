//! lcsc-crawler - Fast, stateless LCSC electronics parts search CLI
//!
//! A Rust implementation with TLS fingerprint emulation for reliable
//! scraping.

use anyhow::Result;
use clap::Parser;
use lcsc_crawler::commands::SearchCommand;
use lcsc_crawler::config::Config;
use lcsc_crawler::filter::PathFilter;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lcsc-crawler",
    version,
    about = "Fast, stateless LCSC electronics parts search CLI",
    long_about = "Searches the LCSC parts catalog page by page, keeps records \
                  matching a JSONPath filter, and prints a summary per part."
)]
struct Cli {
    /// Category to search within
    #[arg(long)]
    category: Option<String>,

    /// JSONPath expression a record must match to be printed
    #[arg(long, default_value = "$", value_parser = PathFilter::parse)]
    filter: PathFilter,

    /// Page number to start from
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Maximum number of matching records to print (negative for unlimited)
    #[arg(long, default_value = "10", allow_hyphen_values = true)]
    limit: i64,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long)]
    proxy: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = Config {
        category: cli.category,
        filter: cli.filter,
        start_page: cli.page,
        limit: cli.limit,
        proxy: cli.proxy,
    };

    let cmd = SearchCommand::new(config);
    let output = cmd.execute().await?;

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["lcsc-crawler"]);
        assert!(cli.category.is_none());
        assert_eq!(cli.filter.expression(), "$");
        assert_eq!(cli.page, 1);
        assert_eq!(cli.limit, 10);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_full_invocation() {
        let cli = Cli::parse_from([
            "lcsc-crawler",
            "--category",
            "resistors",
            "--filter",
            "$.attributes.Tolerance",
            "--page",
            "3",
            "--limit",
            "-1",
        ]);

        assert_eq!(cli.category.as_deref(), Some("resistors"));
        assert_eq!(cli.filter.expression(), "$.attributes.Tolerance");
        assert_eq!(cli.page, 3);
        assert_eq!(cli.limit, -1);
    }

    #[test]
    fn test_cli_rejects_bad_filter_before_any_network() {
        let result = Cli::try_parse_from(["lcsc-crawler", "--filter", "$["]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_page_zero() {
        let result = Cli::try_parse_from(["lcsc-crawler", "--page", "0"]);
        assert!(result.is_err());
    }
}
