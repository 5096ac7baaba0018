//! Filter/sort engine
//!
//! Pure derivation over a token collection: applies the keyword, protocol and
//! market-cap filters, then a stable sort by the configured key, merging the
//! live overlay where it takes precedence over catalog baselines. Never
//! mutates its inputs.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::{Protocol, Token};
use crate::formatters::{parse_age_to_seconds, parse_currency_value};
use crate::market::LivePrice;

/// Sort key for the derived view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[serde(rename = "mc")]
    MarketCap,
    Age,
    Volume,
    Change,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Filter and sort configuration for one dashboard column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSortConfig {
    pub sort_key: SortKey,
    pub direction: SortDirection,
    /// Comma-separated keywords, OR-matched against name and symbol
    pub keywords: String,
    /// Selected protocols, OR-matched; empty set = no protocol filter
    pub protocols: HashSet<Protocol>,
    /// Inclusive market-cap bounds in dollars; None = unbounded
    pub min_market_cap: Option<f64>,
    pub max_market_cap: Option<f64>,
}

impl Default for FilterSortConfig {
    fn default() -> Self {
        Self {
            sort_key: SortKey::MarketCap,
            direction: SortDirection::Descending,
            keywords: String::new(),
            protocols: HashSet::new(),
            min_market_cap: None,
            max_market_cap: None,
        }
    }
}

impl FilterSortConfig {
    /// Select a sort key
    ///
    /// Selecting the current key flips the direction; selecting a new key
    /// resets the direction to descending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Descending;
        }
    }
}

/// Derive an ordered, filtered view of a token collection
///
/// `prices` is the live overlay map from the market store; it supplies the
/// 1-hour change for the Change sort key when present. Returns a new
/// collection; the inputs are untouched.
pub fn derive_view(
    tokens: &[Token],
    prices: &HashMap<String, LivePrice>,
    config: &FilterSortConfig,
) -> Vec<Token> {
    let keywords: Vec<String> = if config.keywords.is_empty() {
        Vec::new()
    } else {
        config
            .keywords
            .to_lowercase()
            .split(',')
            .map(|k| k.trim().to_string())
            .collect()
    };

    let mut filtered: Vec<Token> = tokens
        .iter()
        .filter(|token| {
            if !keywords.is_empty() {
                let name = token.name.to_lowercase();
                let symbol = token.symbol.to_lowercase();
                if !keywords.iter().any(|k| name.contains(k) || symbol.contains(k)) {
                    return false;
                }
            }

            if !config.protocols.is_empty() && !config.protocols.contains(&token.protocol) {
                return false;
            }

            if config.min_market_cap.is_some() || config.max_market_cap.is_some() {
                let mc = parse_currency_value(&token.market_cap);
                let min = config.min_market_cap.unwrap_or(0.0);
                let max = config.max_market_cap.unwrap_or(f64::INFINITY);
                if mc < min || mc > max {
                    return false;
                }
            }

            true
        })
        .cloned()
        .collect();

    // Vec::sort_by is stable, so equal keys keep input order
    filtered.sort_by(|a, b| {
        let a_val = sort_value(a, prices, config.sort_key);
        let b_val = sort_value(b, prices, config.sort_key);
        match config.direction {
            SortDirection::Ascending => a_val.total_cmp(&b_val),
            SortDirection::Descending => b_val.total_cmp(&a_val),
        }
    });

    filtered
}

/// Numeric sort key for a single token
fn sort_value(token: &Token, prices: &HashMap<String, LivePrice>, key: SortKey) -> f64 {
    match key {
        SortKey::MarketCap => parse_currency_value(&token.market_cap),
        SortKey::Volume => parse_currency_value(&token.volume),
        SortKey::Age => parse_age_to_seconds(&token.age),
        SortKey::Change => prices
            .get(&token.id)
            .map(|live| live.change1h)
            .unwrap_or(token.change1h),
    }
}
