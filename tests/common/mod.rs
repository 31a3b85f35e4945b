//! Shared test fixtures for the Nutriscan SDK integration tests.
//!
//! Provides an SDK over the bundled catalog plus small builders for ad hoc
//! products, so scoring edge cases can be exercised without seed files.

#![allow(dead_code)]

use nutriscan_sdk::{Category, Ingredient, Nutrition, NutriscanSdk, Product, UserPreferences};

pub const COCA_COLA: &str = "012000161155";
pub const CHEERIOS: &str = "028400064057";
pub const SPINACH: &str = "011110856234";
pub const MARLBORO: &str = "070038640776";

/// SDK over the bundled four-product catalog.
pub fn sample_sdk() -> NutriscanSdk {
    NutriscanSdk::builder().build().unwrap()
}

pub fn ingredient(name: &str, category: Category) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        category,
        concern: "None".to_string(),
        ai_analysis: None,
    }
}

pub fn nutrition(sodium: &str) -> Nutrition {
    Nutrition {
        calories: 100,
        sugar: "1g".to_string(),
        sodium: sodium.to_string(),
        serving_size: "1 cup".to_string(),
    }
}

pub fn product(barcode: &str, overall_score: f64, ingredients: Vec<Ingredient>) -> Product {
    Product {
        barcode: barcode.to_string(),
        name: format!("Product {barcode}"),
        brand: "Test Brand".to_string(),
        image: None,
        nutrition: None,
        ingredients,
        overall_score,
        category: Category::Neutral,
        ai_summary: None,
    }
}

/// Every one of the 64 flag combinations.
pub fn all_preference_combinations() -> Vec<UserPreferences> {
    (0u8..64)
        .map(|bits| UserPreferences {
            vegetarian: bits & 1 != 0,
            vegan: bits & 2 != 0,
            gluten_free: bits & 4 != 0,
            diabetes: bits & 8 != 0,
            hypertension: bits & 16 != 0,
            allergies: bits & 32 != 0,
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
