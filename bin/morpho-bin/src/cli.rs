use clap::Parser;
use morpho_client::MORPHO_GRAPHQL_ENDPOINT;

/// Flags only: nothing here is read from the environment.
#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch Morpho vault data", long_about = None)]
pub struct MorphoCli {
    /// GraphQL endpoint
    #[arg(long, default_value = MORPHO_GRAPHQL_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds, none by default
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Also log one line per vault
    #[arg(long)]
    pub summary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_ignores_environment() {
        // SAFETY: no other test in this binary reads or writes the environment.
        unsafe {
            std::env::set_var("MORPHO_GRAPHQL_ENDPOINT", "http://elsewhere.invalid/graphql");
            std::env::set_var("MORPHO_TIMEOUT_SECS", "3");
        }

        let cli = MorphoCli::parse_from(["morpho"]);

        assert_eq!(cli.endpoint, "https://api.morpho.org/graphql");
        assert_eq!(cli.timeout_secs, None);
        assert!(!cli.summary);
    }

    #[test]
    fn test_explicit_flags() {
        let cli = MorphoCli::parse_from([
            "morpho",
            "--endpoint",
            "http://localhost:4000/graphql",
            "--timeout-secs",
            "10",
            "--summary",
        ]);

        assert_eq!(cli.endpoint, "http://localhost:4000/graphql");
        assert_eq!(cli.timeout_secs, Some(10));
        assert!(cli.summary);
    }
}
