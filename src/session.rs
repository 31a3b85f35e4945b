//! Presentation state for the single-page app.
//!
//! A [`Session`] holds what the view layer needs between events: which screen
//! is showing, the search box and its results, the selected product, the
//! user's preferences and the two UI flags. It stores barcodes rather than
//! products so it serializes cleanly; the catalog is passed in whenever data
//! is needed.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{NutriscanError, Result};
use crate::models::{Ingredient, Preference, Product, SearchIndexEntry, UserPreferences};
use crate::queries::ProductQuery;
use crate::scoring::ScoreBreakdown;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Product,
    Profile,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub view: View,
    pub query: String,
    pub results: Vec<SearchIndexEntry>,
    pub selected: Option<String>,
    pub preferences: UserPreferences,
    pub scan_in_progress: bool,
    pub show_analysis: bool,
}

impl Session {
    /// Fresh session on the home screen with every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    // -- Search ------------------------------------------------------------

    /// Replace the search text and re-run the search.
    pub fn set_query(&mut self, catalog: &Catalog, query: &str) {
        self.query = query.to_string();
        self.results = ProductQuery::new(catalog).search(query);
    }

    // -- Navigation --------------------------------------------------------

    /// Switch to another screen.
    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// Return to the home screen, keeping the search box as is.
    pub fn back_to_search(&mut self) {
        self.view = View::Home;
    }

    /// Select a product and show it. Unknown barcodes leave the state as is.
    pub fn select_product(&mut self, catalog: &Catalog, barcode: &str) -> Result<()> {
        if !catalog.contains(barcode) {
            return Err(NutriscanError::NotFound(format!(
                "no product with barcode '{barcode}'"
            )));
        }
        self.selected = Some(barcode.to_string());
        self.view = View::Product;
        Ok(())
    }

    /// The selected product, if it is still in the catalog.
    pub fn selected_product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        self.selected.as_deref().and_then(|b| catalog.get(b))
    }

    // -- Preferences -------------------------------------------------------

    /// Set one preference flag.
    pub fn set_preference(&mut self, pref: Preference, value: bool) {
        self.preferences.set(pref, value);
    }

    /// Flip one preference flag.
    pub fn toggle_preference(&mut self, pref: Preference) {
        let current = self.preferences.get(pref);
        self.preferences.set(pref, !current);
    }

    // -- Detailed analysis -------------------------------------------------

    /// Show or hide the detailed ingredient analysis.
    pub fn toggle_analysis(&mut self) {
        self.show_analysis = !self.show_analysis;
    }

    /// The ingredient's analysis text, only while detailed analysis is shown.
    pub fn visible_analysis<'a>(&self, ingredient: &'a Ingredient) -> Option<&'a str> {
        if self.show_analysis {
            ingredient.ai_analysis.as_deref()
        } else {
            None
        }
    }

    // -- Scanning ----------------------------------------------------------

    /// Enter the scanning state. Returns `false` while a scan is pending.
    pub fn begin_scan(&mut self) -> bool {
        if self.scan_in_progress {
            return false;
        }
        self.scan_in_progress = true;
        true
    }

    /// Show the scanned product and leave the scanning state.
    pub fn complete_scan(&mut self, product: &Product) {
        self.selected = Some(product.barcode.clone());
        self.view = View::Product;
        self.scan_in_progress = false;
    }

    /// Leave the scanning state without selecting anything.
    pub fn abort_scan(&mut self) {
        self.scan_in_progress = false;
    }

    // -- Scoring -----------------------------------------------------------

    /// Score breakdown for the selected product under current preferences.
    pub fn current_score(&self, catalog: &Catalog) -> Option<ScoreBreakdown> {
        self.selected_product(catalog)
            .map(|p| ScoreBreakdown::compute(p, &self.preferences))
    }
}
