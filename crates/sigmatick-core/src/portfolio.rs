//! Cross-portfolio holdings analysis.
//!
//! A portfolio here is just the set of tickers one account holds; all the
//! interesting structure lives in how holdings overlap across accounts.

use std::collections::{HashMap, HashSet};

use crate::Symbol;

/// Tickers held in every one of the given portfolios, sorted ascending.
///
/// With no portfolios there is nothing everyone holds, so the result is
/// empty rather than "everything".
pub fn common_investments(portfolios: &[HashSet<Symbol>]) -> Vec<Symbol> {
    let Some((first, rest)) = portfolios.split_first() else {
        return Vec::new();
    };

    let mut common: Vec<Symbol> = first
        .iter()
        .filter(|ticker| rest.iter().all(|portfolio| portfolio.contains(*ticker)))
        .cloned()
        .collect();
    common.sort();
    common
}

/// Tickers held by at least `threshold` portfolios, ranked by how many
/// hold them; ties rank alphabetically.
///
/// Each portfolio is a set, so one account holding a ticker twice cannot
/// inflate its count.
pub fn popular_investments(
    portfolios: &[HashSet<Symbol>],
    threshold: usize,
) -> Vec<(Symbol, usize)> {
    let mut counts: HashMap<&Symbol, usize> = HashMap::new();
    for portfolio in portfolios {
        for ticker in portfolio {
            *counts.entry(ticker).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(Symbol, usize)> = counts
        .into_iter()
        .filter(|(_, count)| *count >= threshold)
        .map(|(ticker, count)| (ticker.clone(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}
