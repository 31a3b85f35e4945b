use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category — coarse safety classification for products and ingredients
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Healthy,
    Neutral,
    Concerning,
    Carcinogenic,
}

/// Icon shown next to a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CategoryIcon {
    CheckCircle,
    Info,
    AlertTriangle,
    XCircle,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Healthy,
        Category::Neutral,
        Category::Concerning,
        Category::Carcinogenic,
    ];

    /// Capitalized label used on badges.
    pub fn label(self) -> &'static str {
        match self {
            Category::Healthy => "Healthy",
            Category::Neutral => "Neutral",
            Category::Concerning => "Concerning",
            Category::Carcinogenic => "Carcinogenic",
        }
    }

    /// Foreground/background style classes for the badge.
    pub fn color_classes(self) -> &'static str {
        match self {
            Category::Healthy => "text-green-600 bg-green-100",
            Category::Neutral => "text-yellow-600 bg-yellow-100",
            Category::Concerning => "text-orange-600 bg-orange-100",
            Category::Carcinogenic => "text-red-600 bg-red-100",
        }
    }

    /// Icon shown on the badge.
    pub fn icon(self) -> CategoryIcon {
        match self {
            Category::Healthy => CategoryIcon::CheckCircle,
            Category::Neutral => CategoryIcon::Info,
            Category::Concerning => CategoryIcon::AlertTriangle,
            Category::Carcinogenic => CategoryIcon::XCircle,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
