//! Personalized scoring rules, clamping and display helpers.

mod common;

use common::assert_close;
use nutriscan_sdk::{
    personalized_score, Category, Preference, ScoreBand, ScoreBreakdown, UserPreferences,
};

fn prefs(flags: &[Preference]) -> UserPreferences {
    flags
        .iter()
        .fold(UserPreferences::default(), |p, &f| p.with(f, true))
}

// ---------------------------------------------------------------------------
// documented scenarios
// ---------------------------------------------------------------------------

#[test]
fn diabetes_penalizes_fructose_syrup() {
    let sdk = common::sample_sdk();
    let coke = sdk.products().get(common::COCA_COLA).unwrap();
    let score = sdk.score(coke, &prefs(&[Preference::Diabetes]));
    assert_close(score, 1.6);
}

#[test]
fn hypertension_ignores_low_sodium() {
    let sdk = common::sample_sdk();
    let coke = sdk.products().get(common::COCA_COLA).unwrap();
    let score = sdk.score(coke, &prefs(&[Preference::Hypertension]));
    assert_eq!(score, 2.1);
}

#[test]
fn vegetarian_rewards_healthy_plant_ingredients() {
    let sdk = common::sample_sdk();
    let cheerios = sdk.products().get(common::CHEERIOS).unwrap();
    let score = sdk.score(cheerios, &prefs(&[Preference::Vegetarian]));
    assert_close(score, 3.0);
}

// ---------------------------------------------------------------------------
// properties
// ---------------------------------------------------------------------------

#[test]
fn score_stays_in_range_for_every_preference_combination() {
    let sdk = common::sample_sdk();
    for product in sdk.products().list() {
        for p in common::all_preference_combinations() {
            let score = personalized_score(product, &p);
            assert!(
                (0.1..=5.0).contains(&score),
                "{} scored {score} with {p:?}",
                product.barcode
            );
        }
    }
}

#[test]
fn no_flags_returns_base_score_exactly() {
    let sdk = common::sample_sdk();
    for product in sdk.products().list() {
        let score = personalized_score(product, &UserPreferences::default());
        assert_eq!(score, product.overall_score);
    }
}

#[test]
fn flags_without_rules_do_not_adjust() {
    let sdk = common::sample_sdk();
    let p = prefs(&[Preference::GlutenFree, Preference::Allergies]);
    for product in sdk.products().list() {
        assert_eq!(personalized_score(product, &p), product.overall_score);
    }
}

#[test]
fn scoring_is_repeatable() {
    let sdk = common::sample_sdk();
    let cheerios = sdk.products().get(common::CHEERIOS).unwrap();
    for p in common::all_preference_combinations() {
        assert_eq!(personalized_score(cheerios, &p), personalized_score(cheerios, &p));
    }
}

// ---------------------------------------------------------------------------
// individual rules
// ---------------------------------------------------------------------------

#[test]
fn sugar_markers_match_case_insensitively_and_once_per_ingredient() {
    let product = common::product(
        "1",
        4.0,
        vec![
            common::ingredient("Cane SUGAR", Category::Concerning),
            common::ingredient("Maple Syrup", Category::Neutral),
            common::ingredient("Fructose", Category::Concerning),
            common::ingredient("Sugar Syrup", Category::Concerning),
            common::ingredient("Salt", Category::Neutral),
        ],
    );
    let b = ScoreBreakdown::compute(&product, &prefs(&[Preference::Diabetes]));
    assert_close(b.sugar_adjustment, -2.0);
    assert_close(b.score, 2.0);
}

#[test]
fn high_sodium_is_a_flat_penalty() {
    let mut product = common::product("1", 3.0, vec![]);
    product.nutrition = Some(common::nutrition("1200mg"));
    let b = ScoreBreakdown::compute(&product, &prefs(&[Preference::Hypertension]));
    assert_close(b.sodium_adjustment, -0.3);
    assert_close(b.score, 2.7);
}

#[test]
fn sodium_threshold_is_exclusive() {
    let mut product = common::product("1", 3.0, vec![]);
    product.nutrition = Some(common::nutrition("200mg"));
    assert_eq!(
        personalized_score(&product, &prefs(&[Preference::Hypertension])),
        3.0
    );

    product.nutrition = Some(common::nutrition("201mg"));
    assert_close(
        personalized_score(&product, &prefs(&[Preference::Hypertension])),
        2.7,
    );
}

#[test]
fn sodium_decimal_uses_integer_part() {
    let mut product = common::product("1", 3.0, vec![]);
    product.nutrition = Some(common::nutrition("200.9mg"));
    assert_eq!(
        personalized_score(&product, &prefs(&[Preference::Hypertension])),
        3.0
    );
}

#[test]
fn malformed_sodium_skips_rule() {
    let mut product = common::product("1", 3.0, vec![]);
    product.nutrition = Some(common::nutrition("lots"));
    let b = ScoreBreakdown::compute(&product, &prefs(&[Preference::Hypertension]));
    assert_eq!(b.sodium_adjustment, 0.0);
    assert_eq!(b.score, 3.0);
}

#[test]
fn missing_nutrition_skips_rule() {
    let sdk = common::sample_sdk();
    let spinach = sdk.products().get(common::SPINACH).unwrap();
    assert_eq!(
        sdk.score(spinach, &prefs(&[Preference::Hypertension])),
        4.8
    );
}

#[test]
fn meat_ingredients_earn_no_plant_bonus() {
    let product = common::product(
        "1",
        3.0,
        vec![
            common::ingredient("Lean Meat", Category::Healthy),
            common::ingredient("Broccoli", Category::Healthy),
            common::ingredient("Salt", Category::Neutral),
        ],
    );
    let b = ScoreBreakdown::compute(&product, &prefs(&[Preference::Vegan]));
    assert_close(b.plant_adjustment, 0.1);
}

#[test]
fn vegetarian_and_vegan_count_once() {
    let sdk = common::sample_sdk();
    let cheerios = sdk.products().get(common::CHEERIOS).unwrap();
    let one = sdk.score(cheerios, &prefs(&[Preference::Vegan]));
    let both = sdk.score(cheerios, &prefs(&[Preference::Vegan, Preference::Vegetarian]));
    assert_eq!(one, both);
}

#[test]
fn rules_apply_together() {
    let sdk = common::sample_sdk();
    let cheerios = sdk.products().get(common::CHEERIOS).unwrap();
    let b = sdk.score_breakdown(
        cheerios,
        &prefs(&[Preference::Diabetes, Preference::Hypertension, Preference::Vegetarian]),
    );
    // one "Sugar", 160mg sodium, two healthy plant ingredients
    assert_close(b.sugar_adjustment, -0.5);
    assert_eq!(b.sodium_adjustment, 0.0);
    assert_close(b.plant_adjustment, 0.2);
    assert_close(b.score, 2.5);
}

#[test]
fn empty_ingredients_contribute_nothing() {
    let product = common::product("1", 2.5, vec![]);
    let p = prefs(&[Preference::Diabetes, Preference::Vegan]);
    assert_eq!(personalized_score(&product, &p), 2.5);
}

// ---------------------------------------------------------------------------
// clamping
// ---------------------------------------------------------------------------

#[test]
fn score_is_clamped_at_floor() {
    let sdk = common::sample_sdk();
    let coke = sdk.products().get(common::COCA_COLA).unwrap();
    let mut heavy = coke.clone();
    heavy.ingredients = (0..10)
        .map(|i| common::ingredient(&format!("Syrup {i}"), Category::Concerning))
        .collect();
    let b = sdk.score_breakdown(&heavy, &prefs(&[Preference::Diabetes]));
    assert_eq!(b.score, 0.1);
    assert_close(b.total_adjustment(), -5.0);
}

#[test]
fn score_is_clamped_at_ceiling() {
    let ingredients = (0..5)
        .map(|i| common::ingredient(&format!("Leaf {i}"), Category::Healthy))
        .collect();
    let product = common::product("1", 4.8, ingredients);
    assert_eq!(
        personalized_score(&product, &prefs(&[Preference::Vegetarian])),
        5.0
    );
}

// ---------------------------------------------------------------------------
// breakdown helpers
// ---------------------------------------------------------------------------

#[test]
fn personalized_flag_tracks_any_difference() {
    let sdk = common::sample_sdk();
    let coke = sdk.products().get(common::COCA_COLA).unwrap();
    assert!(!sdk.score_breakdown(coke, &UserPreferences::default()).is_personalized());
    assert!(sdk
        .score_breakdown(coke, &prefs(&[Preference::Diabetes]))
        .is_personalized());
}

#[test]
fn clamped_back_to_base_is_not_personalized() {
    let product = common::product(
        "1",
        0.1,
        vec![common::ingredient("Corn Syrup", Category::Concerning)],
    );
    let b = ScoreBreakdown::compute(&product, &prefs(&[Preference::Diabetes]));
    assert_close(b.sugar_adjustment, -0.5);
    assert_eq!(b.score, 0.1);
    assert!(!b.is_personalized());
}

#[test]
fn display_uses_one_decimal() {
    let sdk = common::sample_sdk();
    let coke = sdk.products().get(common::COCA_COLA).unwrap();
    let b = sdk.score_breakdown(coke, &prefs(&[Preference::Diabetes]));
    assert_eq!(b.display(), "1.6/5.0");
    assert_close(b.percent_of_max(), 32.0);
}

#[test]
fn display_rounds_exact_ties_up() {
    for (base, label) in [(2.25, "2.3/5.0"), (4.75, "4.8/5.0"), (0.25, "0.3/5.0")] {
        let b = ScoreBreakdown::compute(&common::product("1", base, vec![]), &prefs(&[]));
        assert_eq!(b.display(), label, "base {base}");
    }
}

#[test]
fn bands_cover_score_range() {
    assert_eq!(ScoreBand::from_score(4.8), ScoreBand::Good);
    assert_eq!(ScoreBand::from_score(4.0), ScoreBand::Good);
    assert_eq!(ScoreBand::from_score(3.0), ScoreBand::Fair);
    assert_eq!(ScoreBand::from_score(2.1), ScoreBand::Poor);
    assert_eq!(ScoreBand::from_score(1.99), ScoreBand::Bad);
    assert_eq!(ScoreBand::Bad.bar_class(), "bg-red-500");
}

#[test]
fn score_barcode_handles_unknown_barcode() {
    let sdk = common::sample_sdk();
    assert!(sdk.score_barcode("nope", &UserPreferences::default()).is_none());
    let b = sdk
        .score_barcode(common::SPINACH, &prefs(&[Preference::Vegan]))
        .unwrap();
    assert_close(b.score, 4.9);
}
