/// Public Morpho GraphQL endpoint.
pub const MORPHO_GRAPHQL_ENDPOINT: &str = "https://api.morpho.org/graphql";

/// `User-Agent` sent unless the caller overrides it.
pub const DEFAULT_USER_AGENT: &str = "morpho-helper/1.0";

/// Top 20 vaults on Ethereum mainnet (chain id 1), ordered by daily APY.
///
/// Whitespace is part of the request body and kept as published: a leading
/// newline, every line indented by eight spaces, and a trailing indent.
pub const DEFAULT_VAULTS_QUERY: &str = "
        query {
          vaults(first: 20, where: { chainId_in: [1] }, orderBy: DailyApy) {
            items {
              name
              symbol
              chain {
                id
                network
              }
              state {
                dailyApy
              }
            }
          }
        }
        ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_layout() {
        assert!(
            DEFAULT_VAULTS_QUERY.starts_with("\n        query {\n          vaults(first: 20,")
        );
        assert!(DEFAULT_VAULTS_QUERY.ends_with("\n        }\n        "));
        assert!(DEFAULT_VAULTS_QUERY.contains(
            "vaults(first: 20, where: { chainId_in: [1] }, orderBy: DailyApy)"
        ));
        assert_eq!(DEFAULT_VAULTS_QUERY.lines().count(), 17);
    }
}
