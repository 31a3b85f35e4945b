use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::config::{SCORE_CEILING, SCORE_FLOOR};
use crate::error::{NutriscanError, Result};

// ---------------------------------------------------------------------------
// Product — a catalog entry keyed by barcode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub barcode: String,
    pub name: String,
    pub brand: String,
    pub image: Option<String>,
    pub nutrition: Option<Nutrition>,
    /// Display order; scoring ignores it.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    pub overall_score: f64,
    pub category: Category,
    pub ai_summary: Option<String>,
}

impl Product {
    /// Project this product into its search index row.
    pub fn index_entry(&self) -> SearchIndexEntry {
        SearchIndexEntry {
            barcode: self.barcode.clone(),
            name: self.name.clone(),
            brand: self.brand.clone(),
        }
    }

    /// Check the per-product invariants: a non-blank barcode and an
    /// `overallScore` inside `[0.1, 5.0]`.
    pub fn validate(&self) -> Result<()> {
        if self.barcode.trim().is_empty() {
            return Err(NutriscanError::Integrity(format!(
                "product '{}' has an empty barcode",
                self.name
            )));
        }
        if !(SCORE_FLOOR..=SCORE_CEILING).contains(&self.overall_score) {
            return Err(NutriscanError::Integrity(format!(
                "product '{}' has overallScore {} outside [{}, {}]",
                self.barcode, self.overall_score, SCORE_FLOOR, SCORE_CEILING
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Nutrition — per-serving facts; string fields carry their unit suffix
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    pub calories: i64,
    pub sugar: String,
    pub sodium: String,
    pub serving_size: String,
}

impl Nutrition {
    /// Leading integer of the sodium field (`"45mg"` -> `45`).
    ///
    /// Returns `None` when the field does not start with a number.
    pub fn sodium_amount(&self) -> Option<i64> {
        leading_integer(&self.sodium)
    }
}

/// Parse the integer prefix of `s`, ignoring leading whitespace and any
/// trailing unit text. Decimals are truncated at the point.
pub fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}

// ---------------------------------------------------------------------------
// Ingredient
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub category: Category,
    pub concern: String,
    pub ai_analysis: Option<String>,
}

impl Ingredient {
    /// Case-insensitive substring test against the ingredient name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// SearchIndexEntry — denormalized projection used only for search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexEntry {
    pub barcode: String,
    pub name: String,
    pub brand: String,
}

impl SearchIndexEntry {
    /// True when `needle_lower` (already lowercased) occurs in the name or
    /// the brand.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.brand.to_lowercase().contains(needle_lower)
    }
}
