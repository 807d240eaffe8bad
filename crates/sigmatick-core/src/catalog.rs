//! Product catalogue analytics: CSV ingestion and top-k rankings.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One catalogue entry. Revenue is always derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub sales: u64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, sales: u64) -> Self {
        Self {
            name: name.into(),
            price,
            sales,
        }
    }

    /// Total revenue: unit price times units sold.
    pub fn profit(&self) -> f64 {
        self.price * self.sales as f64
    }
}

/// Errors from the catalogue surface.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalogue: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalogue row: {0}")]
    Malformed(#[from] csv::Error),
    #[error("top-{requested} requested but the catalogue holds {available} products")]
    NotEnoughProducts { requested: usize, available: usize },
}

fn top_by<F>(products: &[Product], k: usize, metric: F) -> Vec<Product>
where
    F: Fn(&Product) -> f64,
{
    let mut ranked: Vec<Product> = products.to_vec();
    ranked.sort_by(|a, b| {
        metric(b)
            .partial_cmp(&metric(a))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(k);
    ranked
}

/// Top `k` products by unit price, ties resolved alphabetically.
pub fn most_expensive(products: &[Product], k: usize) -> Vec<Product> {
    top_by(products, k, |product| product.price)
}

/// Top `k` products by units sold, ties resolved alphabetically.
pub fn bestsellers(products: &[Product], k: usize) -> Vec<Product> {
    top_by(products, k, |product| product.sales as f64)
}

/// Top `k` products by revenue, ties resolved alphabetically.
pub fn most_profitable(products: &[Product], k: usize) -> Vec<Product> {
    top_by(products, k, Product::profit)
}

/// Read a `name,price,sales` catalogue CSV with a header row.
///
/// An absent file is an empty catalogue, not an error. A row that is
/// present but malformed is an error; silently dropping rows would skew
/// every ranking built on top.
pub fn read_products(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut products = Vec::new();
    for row in reader.deserialize() {
        products.push(row?);
    }
    Ok(products)
}

/// The three rankings rendered together, the catalogue's summary view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProductsReport {
    pub k: usize,
    pub most_expensive: Vec<Product>,
    pub bestsellers: Vec<Product>,
    pub most_profitable: Vec<Product>,
}

impl TopProductsReport {
    /// Build the summary. Asking for more entries than the catalogue holds
    /// is rejected rather than silently shortened.
    pub fn build(products: &[Product], k: usize) -> Result<Self, CatalogError> {
        if k > products.len() {
            return Err(CatalogError::NotEnoughProducts {
                requested: k,
                available: products.len(),
            });
        }

        Ok(Self {
            k,
            most_expensive: most_expensive(products, k),
            bestsellers: bestsellers(products, k),
            most_profitable: most_profitable(products, k),
        })
    }
}

impl Display for TopProductsReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Top {} most expensive products:", self.k)?;
        for (rank, product) in self.most_expensive.iter().enumerate() {
            writeln!(
                f,
                "  {}. {:<20}  ${:.2}",
                rank + 1,
                product.name,
                product.price
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Top {} best-selling products:", self.k)?;
        for (rank, product) in self.bestsellers.iter().enumerate() {
            writeln!(
                f,
                "  {}. {:<20}  {} units sold",
                rank + 1,
                product.name,
                format_count(product.sales)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Top {} most profitable products:", self.k)?;
        for (rank, product) in self.most_profitable.iter().enumerate() {
            writeln!(
                f,
                "  {}. {:<20}  ${} revenue",
                rank + 1,
                product.name,
                format_money(product.profit())
            )?;
        }

        Ok(())
    }
}

fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

fn format_money(value: f64) -> String {
    let formatted = format!("{value:.2}");
    match formatted.split_once('.') {
        Some((whole, cents)) => format!("{}.{cents}", group_thousands(whole)),
        None => group_thousands(&formatted),
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}
