use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UserPreferences — dietary and health flags toggled on the profile screen
// ---------------------------------------------------------------------------

/// Six independent flags. Nothing couples them: `vegan` does not imply
/// `vegetarian`. All flags start off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub diabetes: bool,
    pub hypertension: bool,
    pub allergies: bool,
}

/// Names a single flag on [`UserPreferences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preference {
    Vegetarian,
    Vegan,
    GlutenFree,
    Diabetes,
    Hypertension,
    Allergies,
}

impl UserPreferences {
    /// Read a single flag.
    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::Vegetarian => self.vegetarian,
            Preference::Vegan => self.vegan,
            Preference::GlutenFree => self.gluten_free,
            Preference::Diabetes => self.diabetes,
            Preference::Hypertension => self.hypertension,
            Preference::Allergies => self.allergies,
        }
    }

    /// Set a single flag, leaving the others alone.
    pub fn set(&mut self, pref: Preference, value: bool) {
        let flag = match pref {
            Preference::Vegetarian => &mut self.vegetarian,
            Preference::Vegan => &mut self.vegan,
            Preference::GlutenFree => &mut self.gluten_free,
            Preference::Diabetes => &mut self.diabetes,
            Preference::Hypertension => &mut self.hypertension,
            Preference::Allergies => &mut self.allergies,
        };
        *flag = value;
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, pref: Preference, value: bool) -> Self {
        self.set(pref, value);
        self
    }

    /// True when either plant-based diet flag is on.
    pub fn plant_based(&self) -> bool {
        self.vegetarian || self.vegan
    }
}
