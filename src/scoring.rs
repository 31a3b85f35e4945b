//! Personalized health scoring.
//!
//! score = clamp(overallScore + sugar + sodium + plant, 0.1, 5.0)
//!
//! * sugar:  -0.5 per ingredient naming sugar/syrup/fructose (diabetes)
//! * sodium: -0.3 flat when sodium's leading integer exceeds 200 (hypertension)
//! * plant:  +0.1 per healthy, non-meat ingredient (vegetarian or vegan)

use serde::Serialize;

use crate::config::{
    MEAT_MARKER, PLANT_BONUS, SCORE_CEILING, SCORE_FLOOR, SODIUM_PENALTY, SODIUM_THRESHOLD_MG,
    SUGAR_MARKERS, SUGAR_PENALTY,
};
use crate::models::{Category, Ingredient, Product, UserPreferences};

/// Personalized score for `product` under `prefs`, in `[0.1, 5.0]`.
pub fn personalized_score(product: &Product, prefs: &UserPreferences) -> f64 {
    ScoreBreakdown::compute(product, prefs).score
}

// ---------------------------------------------------------------------------
// ScoreBreakdown
// ---------------------------------------------------------------------------

/// Each rule's contribution alongside the base and final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: f64,
    pub sugar_adjustment: f64,
    pub sodium_adjustment: f64,
    pub plant_adjustment: f64,
    pub score: f64,
}

impl ScoreBreakdown {
    /// Apply every rule enabled by `prefs` to `product` and clamp the result.
    pub fn compute(product: &Product, prefs: &UserPreferences) -> Self {
        let base = product.overall_score;

        let sugar_adjustment = if prefs.diabetes {
            let hits = count_where(&product.ingredients, is_sugar_like);
            -(hits as f64 * SUGAR_PENALTY)
        } else {
            0.0
        };

        let sodium_adjustment = if prefs.hypertension {
            sodium_penalty(product)
        } else {
            0.0
        };

        let plant_adjustment = if prefs.plant_based() {
            let hits = count_where(&product.ingredients, is_plant_healthy);
            hits as f64 * PLANT_BONUS
        } else {
            0.0
        };

        // Accumulated in rule order so float rounding is stable across callers.
        let mut adjustment = 0.0;
        adjustment += sugar_adjustment;
        adjustment += sodium_adjustment;
        adjustment += plant_adjustment;
        let score = (base + adjustment).clamp(SCORE_FLOOR, SCORE_CEILING);

        tracing::debug!(
            barcode = %product.barcode,
            base,
            sugar_adjustment,
            sodium_adjustment,
            plant_adjustment,
            score,
            "scored product"
        );

        Self {
            base,
            sugar_adjustment,
            sodium_adjustment,
            plant_adjustment,
            score,
        }
    }

    /// Sum of all adjustments before clamping.
    pub fn total_adjustment(&self) -> f64 {
        self.sugar_adjustment + self.sodium_adjustment + self.plant_adjustment
    }

    /// True when the final score differs from the base score at all.
    pub fn is_personalized(&self) -> bool {
        self.score != self.base
    }

    /// `"2.1/5.0"`-style label. Ties round up (`2.25` shows as `2.3`).
    pub fn display(&self) -> String {
        let tenths = (self.score * 10.0).round() / 10.0;
        format!("{:.1}/{:.1}", tenths, SCORE_CEILING)
    }

    /// Colour bucket for the final score.
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// Width of the score bar, 0-100.
    pub fn percent_of_max(&self) -> f64 {
        self.score / SCORE_CEILING * 100.0
    }
}

fn count_where(ingredients: &[Ingredient], pred: fn(&Ingredient) -> bool) -> usize {
    ingredients.iter().filter(|ing| pred(ing)).count()
}

fn is_sugar_like(ing: &Ingredient) -> bool {
    let name = ing.name.to_lowercase();
    SUGAR_MARKERS.iter().any(|marker| name.contains(marker))
}

fn is_plant_healthy(ing: &Ingredient) -> bool {
    ing.category == Category::Healthy && !ing.name_contains(MEAT_MARKER)
}

fn sodium_penalty(product: &Product) -> f64 {
    let Some(nutrition) = &product.nutrition else {
        return 0.0;
    };
    match nutrition.sodium_amount() {
        Some(mg) if mg > SODIUM_THRESHOLD_MG => -SODIUM_PENALTY,
        Some(_) => 0.0,
        None => {
            tracing::debug!(
                barcode = %product.barcode,
                sodium = %nutrition.sodium,
                "sodium not numeric, skipping hypertension rule"
            );
            0.0
        }
    }
}

// ---------------------------------------------------------------------------
// ScoreBand — coloured bucket for the score bar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
    Bad,
}

impl ScoreBand {
    /// Bucket a score: 4 and up is good, then 3, then 2.
    pub fn from_score(score: f64) -> Self {
        if score >= 4.0 {
            ScoreBand::Good
        } else if score >= 3.0 {
            ScoreBand::Fair
        } else if score >= 2.0 {
            ScoreBand::Poor
        } else {
            ScoreBand::Bad
        }
    }

    /// Style class for the score bar fill.
    pub fn bar_class(self) -> &'static str {
        match self {
            ScoreBand::Good => "bg-green-500",
            ScoreBand::Fair => "bg-yellow-500",
            ScoreBand::Poor => "bg-orange-500",
            ScoreBand::Bad => "bg-red-500",
        }
    }
}
