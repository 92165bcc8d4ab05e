use serde::{Deserialize, Serialize};
use std::fmt;

/// Impact value attached to an answer option. 1 is the lowest impact; higher
/// values mean a heavier environmental footprint. 0 marks "unanswered" in a
/// snapshot and is never a valid option value.
pub type ImpactValue = u8;

//
// ─── CATEGORIES ────────────────────────────────────────────────────────────────
//

/// Survey categories in their fixed order.
///
/// The order is load-bearing: answer snapshots are index-aligned to
/// `Category::ALL`, and generated task lists follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    WasteManagement,
    Transportation,
    FoodPurchasing,
    HouseholdProducts,
    FoodWaste,
    ElectronicsDisposal,
    Packaging,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::WasteManagement,
        Category::Transportation,
        Category::FoodPurchasing,
        Category::HouseholdProducts,
        Category::FoodWaste,
        Category::ElectronicsDisposal,
        Category::Packaging,
    ];

    /// Human-readable category label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::WasteManagement => "Waste Management",
            Category::Transportation => "Transportation",
            Category::FoodPurchasing => "Food Purchasing",
            Category::HouseholdProducts => "Household Products",
            Category::FoodWaste => "Food Waste",
            Category::ElectronicsDisposal => "Electronics Disposal",
            Category::Packaging => "Packaging",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// One selectable answer for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: ImpactValue,
}

/// A survey question: category, prompt, ordered options, and a tip per value.
///
/// Questions are static data defined in [`crate::catalog`]; nothing mutates
/// them at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub category: Category,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
    pub tips: &'static [(ImpactValue, &'static str)],
}

impl Question {
    /// The highest impact value among this question's options.
    #[must_use]
    pub fn max_value(&self) -> ImpactValue {
        self.options.iter().map(|opt| opt.value).max().unwrap_or(0)
    }

    /// Returns true if `value` is offered by one of the options.
    #[must_use]
    pub fn has_option(&self, value: ImpactValue) -> bool {
        self.options.iter().any(|opt| opt.value == value)
    }

    /// The advisory tip keyed by the given value, if one exists.
    #[must_use]
    pub fn tip(&self, value: ImpactValue) -> Option<&'static str> {
        self.tips
            .iter()
            .find(|(key, _)| *key == value)
            .map(|(_, tip)| *tip)
    }
}
