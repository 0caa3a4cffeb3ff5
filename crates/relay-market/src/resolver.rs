//! Free-text query to ticker resolution

use crate::api::MarketDataSource;
use crate::models::SymbolMatch;
use tracing::{debug, warn};

/// Longest query still taken at face value as a ticker
const MAX_LITERAL_TICKER_LEN: usize = 4;

/// Country preferred when several listings match
const PREFERRED_COUNTRY: &str = "United States";

/// Best-effort ticker for `query`; never fails
///
/// Short purely alphabetic queries are treated as tickers already. Anything
/// else goes through the provider's symbol search, preferring a U.S. listing,
/// and falls back to the uppercased query when the search errors, finds
/// nothing, or hits a listing without a country before any U.S. one.
pub async fn resolve_symbol(source: &dyn MarketDataSource, query: &str) -> String {
    if looks_like_ticker(query) {
        return query.to_uppercase();
    }

    match source.symbol_search(query).await {
        Ok(matches) => {
            if let Some(symbol) = pick_match(&matches) {
                debug!(query, symbol, "resolved via symbol search");
                return symbol.to_string();
            }
            debug!(query, matches = matches.len(), "no usable symbol match");
        }
        Err(e) => warn!(query, error = %e, "symbol search failed, using query as ticker"),
    }

    query.to_uppercase()
}

fn looks_like_ticker(query: &str) -> bool {
    !query.is_empty()
        && query.chars().count() <= MAX_LITERAL_TICKER_LEN
        && query.chars().all(char::is_alphabetic)
}

/// U.S. listing first, else the first match
///
/// Listings are scanned in order; one without a country aborts the scan, so
/// the caller falls back to the raw query.
fn pick_match(matches: &[SymbolMatch]) -> Option<&str> {
    for m in matches {
        match m.country.as_deref() {
            Some(PREFERRED_COUNTRY) => return Some(&m.symbol),
            Some(_) => {}
            None => return None,
        }
    }

    matches.first().map(|m| m.symbol.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMarketDataSource;
    use crate::error::MarketError;
    use mockall::predicate::eq;

    fn listing(symbol: &str, country: Option<&str>) -> SymbolMatch {
        SymbolMatch {
            symbol: symbol.to_string(),
            instrument_name: None,
            exchange: None,
            country: country.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_short_alpha_query_skips_search() {
        let mut source = MockMarketDataSource::new();
        source.expect_symbol_search().never();

        assert_eq!(resolve_symbol(&source, "aapl").await, "AAPL");
        assert_eq!(resolve_symbol(&source, "f").await, "F");
        assert_eq!(resolve_symbol(&source, "MsFt").await, "MSFT");
    }

    #[tokio::test]
    async fn test_prefers_us_listing_over_first_match() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_symbol_search()
            .with(eq("Apple"))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    listing("APC", Some("Germany")),
                    listing("AAPL", Some("United States")),
                    listing("AAPL.MX", Some("Mexico")),
                ])
            });

        assert_eq!(resolve_symbol(&source, "Apple").await, "AAPL");
    }

    #[tokio::test]
    async fn test_first_match_when_no_us_listing() {
        let mut source = MockMarketDataSource::new();
        source.expect_symbol_search().returning(|_| {
            Ok(vec![
                listing("VOW3", Some("Germany")),
                listing("VOW", Some("Austria")),
            ])
        });

        assert_eq!(resolve_symbol(&source, "Volkswagen").await, "VOW3");
    }

    #[tokio::test]
    async fn test_listing_without_country_before_us_falls_back() {
        let mut source = MockMarketDataSource::new();
        source.expect_symbol_search().returning(|_| {
            Ok(vec![
                listing("VOW", None),
                listing("VOW3", Some("United States")),
            ])
        });

        assert_eq!(resolve_symbol(&source, "Volkswagen").await, "VOLKSWAGEN");
    }

    #[tokio::test]
    async fn test_listing_without_country_after_us_is_ignored() {
        let mut source = MockMarketDataSource::new();
        source.expect_symbol_search().returning(|_| {
            Ok(vec![
                listing("AAPL", Some("United States")),
                listing("APC", None),
            ])
        });

        assert_eq!(resolve_symbol(&source, "Apple").await, "AAPL");
    }

    #[tokio::test]
    async fn test_listing_without_country_and_no_us_falls_back() {
        let mut source = MockMarketDataSource::new();
        source.expect_symbol_search().returning(|_| {
            Ok(vec![
                listing("VOW3", Some("Germany")),
                listing("VOW", None),
            ])
        });

        assert_eq!(resolve_symbol(&source, "Volkswagen").await, "VOLKSWAGEN");
    }

    #[tokio::test]
    async fn test_empty_results_fall_back_to_query() {
        let mut source = MockMarketDataSource::new();
        source.expect_symbol_search().returning(|_| Ok(vec![]));

        assert_eq!(resolve_symbol(&source, "nosuchco").await, "NOSUCHCO");
    }

    #[tokio::test]
    async fn test_search_failure_falls_back_to_query() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_symbol_search()
            .returning(|_| Err(MarketError::malformed("symbol search", "not JSON")));

        assert_eq!(resolve_symbol(&source, "brk.b").await, "BRK.B");
    }

    #[tokio::test]
    async fn test_non_alpha_short_query_is_searched() {
        let mut source = MockMarketDataSource::new();
        source
            .expect_symbol_search()
            .with(eq("3M"))
            .times(1)
            .returning(|_| Ok(vec![listing("MMM", Some("United States"))]));

        assert_eq!(resolve_symbol(&source, "3M").await, "MMM");
    }

    #[test]
    fn test_looks_like_ticker() {
        assert!(looks_like_ticker("IBM"));
        assert!(!looks_like_ticker("GOOGL"));
        assert!(!looks_like_ticker("BRK.B"));
        assert!(!looks_like_ticker(""));
    }
}
