//! Static survey, task, and game data.
//!
//! Everything here is build-time data: the seven survey questions (one per
//! [`Category`], in `Category::ALL` order), the per-category challenge lists
//! the tracker draws from, and the item list for the recycling game.

use crate::model::{AnswerOption, Category, Question, RecyclingItem};

//
// ─── SURVEY QUESTIONS ──────────────────────────────────────────────────────────
//

static QUESTIONS: [Question; 7] = [
    Question {
        category: Category::WasteManagement,
        prompt: "How do you handle waste at home?",
        options: &[
            AnswerOption { label: "Recycle and compost", value: 1 },
            AnswerOption { label: "Recycle but don't compost", value: 2 },
            AnswerOption { label: "Don't separate waste", value: 3 },
            AnswerOption { label: "Throw everything away", value: 4 },
        ],
        tips: &[
            (1, "Excellent! Separating waste and composting reduces landfill and provides organic fertilizer."),
            (2, "Good job recycling, but adding composting would further reduce waste."),
            (3, "Not separating waste leads to inefficient recycling. Consider sorting your trash."),
            (4, "Throwing everything away significantly increases landfill and environmental harm."),
        ],
    },
    Question {
        category: Category::Transportation,
        prompt: "How do you travel daily?",
        options: &[
            AnswerOption { label: "Use public transport, bike, or walk", value: 1 },
            AnswerOption { label: "Carpool or drive a hybrid/electric vehicle", value: 2 },
            AnswerOption { label: "Mostly drive my own car", value: 3 },
            AnswerOption { label: "Drive frequently for short trips", value: 4 },
        ],
        tips: &[
            (1, "Excellent choice for reducing emissions and congestion."),
            (2, "Good\u{2014}carpooling or using efficient vehicles minimizes your impact."),
            (3, "Driving alone increases emissions. Look for alternatives when possible."),
            (4, "Frequent short trips add up; try to combine errands or use public transit."),
        ],
    },
    Question {
        category: Category::FoodPurchasing,
        prompt: "How do you buy groceries?",
        options: &[
            AnswerOption { label: "Buy local and use reusable bags", value: 1 },
            AnswerOption { label: "Buy some local produce and use some plastic bags", value: 2 },
            AnswerOption { label: "Buy packaged foods and use disposable bags", value: 3 },
            AnswerOption { label: "Buy pre-packaged foods and always use plastic bags", value: 4 },
        ],
        tips: &[
            (1, "Great! Supporting local markets and reusables minimizes packaging waste."),
            (2, "Better than fully packaged, but try to use fewer plastic bags."),
            (3, "Packaged foods increase waste\u{2014}consider fresh, local options."),
            (4, "High packaging waste. Opt for local produce and reusable options whenever possible."),
        ],
    },
    Question {
        category: Category::HouseholdProducts,
        prompt: "What kind of cleaning products do you use?",
        options: &[
            AnswerOption { label: "Use eco-friendly, non-toxic cleaners", value: 1 },
            AnswerOption { label: "Use some eco-friendly, but also regular cleaners", value: 2 },
            AnswerOption { label: "Mostly use regular cleaning products", value: 3 },
            AnswerOption { label: "Use harsh chemical cleaners often", value: 4 },
        ],
        tips: &[
            (1, "Excellent! Eco-friendly cleaners are safer for both the environment and your health."),
            (2, "A mix is okay, but switching entirely to eco-friendly products is best."),
            (3, "Using mostly regular products increases chemical waste. Consider greener alternatives."),
            (4, "Harsh chemicals can be very damaging. Look for non-toxic, sustainable cleaning options."),
        ],
    },
    Question {
        category: Category::FoodWaste,
        prompt: "How do you manage food waste?",
        options: &[
            AnswerOption { label: "Compost food scraps and minimize waste", value: 1 },
            AnswerOption { label: "Throw away food scraps, but try not to waste much", value: 2 },
            AnswerOption { label: "Waste a lot of food", value: 3 },
            AnswerOption { label: "Don't think about food waste", value: 4 },
        ],
        tips: &[
            (1, "Excellent! Composting not only reduces waste but also creates nutrient-rich soil."),
            (2, "Some effort is made, but planning meals better could reduce waste even more."),
            (3, "High food waste can be reduced by planning and proper storage."),
            (4, "Ignoring food waste contributes to environmental harm. Consider mindful consumption."),
        ],
    },
    Question {
        category: Category::ElectronicsDisposal,
        prompt: "How do you dispose of old electronics?",
        options: &[
            AnswerOption { label: "Recycle them properly", value: 1 },
            AnswerOption { label: "Sell or donate them", value: 2 },
            AnswerOption { label: "Throw them away", value: 3 },
            AnswerOption { label: "Keep them forever", value: 4 },
        ],
        tips: &[
            (1, "Great choice! Proper recycling recovers valuable materials."),
            (2, "Good\u{2014}extending the life of electronics through donation or sale is beneficial."),
            (3, "Throwing away electronics harms the environment. Look for proper disposal options."),
            (4, "Holding on indefinitely isn't ideal; consider recycling if they're not in use."),
        ],
    },
    Question {
        category: Category::Packaging,
        prompt: "How do you handle plastic packaging?",
        options: &[
            AnswerOption { label: "Avoid plastic and use reusable containers", value: 1 },
            AnswerOption { label: "Try to reduce plastic, but still buy some", value: 2 },
            AnswerOption { label: "Often buy items with plastic packaging", value: 3 },
            AnswerOption { label: "Buy a lot of plastic-packaged items", value: 4 },
        ],
        tips: &[
            (1, "Excellent! Avoiding plastic greatly reduces waste and pollution."),
            (2, "Good effort, but further reduction in plastic use would be beneficial."),
            (3, "Frequent plastic use increases waste; consider reusables where possible."),
            (4, "High reliance on plastic is detrimental. Seek alternatives to reduce your impact."),
        ],
    },
];

/// The survey question list, one question per category in fixed order.
#[must_use]
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

//
// ─── TRACKER CHALLENGES ────────────────────────────────────────────────────────
//

/// Challenge descriptions offered when a category needs improvement.
#[must_use]
pub fn tasks_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::WasteManagement => &["Separate your waste", "Compost organic waste"],
        Category::Transportation => {
            &["Use public transport or carpool", "Walk or bike for short trips"]
        }
        Category::FoodPurchasing => &["Bring reusable bags", "Buy local produce"],
        Category::HouseholdProducts => {
            &["Switch to eco-friendly cleaners", "Avoid harsh chemical cleaners"]
        }
        Category::FoodWaste => &["Plan meals to reduce waste", "Compost food scraps"],
        Category::ElectronicsDisposal => {
            &["Recycle old electronics properly", "Donate unused electronics"]
        }
        Category::Packaging => &["Avoid plastic packaging", "Use reusable containers"],
    }
}

/// Fallback challenges when no category is flagged, so the tracker is never empty.
pub const DEFAULT_TASKS: [&str; 2] = [
    "Maintain your great habits",
    "Share your sustainability tips with others",
];

//
// ─── RECYCLING GAME ITEMS ──────────────────────────────────────────────────────
//

static RECYCLING_ITEMS: [RecyclingItem; 8] = [
    RecyclingItem {
        id: 1,
        name: "Plastic water bottle",
        recyclable: true,
        info: "Empty and rinse it first; caps can usually stay on.",
    },
    RecyclingItem {
        id: 2,
        name: "Greasy pizza box",
        recyclable: false,
        info: "Food grease contaminates the paper fibers. Compost or trash it.",
    },
    RecyclingItem {
        id: 3,
        name: "Aluminum can",
        recyclable: true,
        info: "Aluminum can be recycled endlessly without losing quality.",
    },
    RecyclingItem {
        id: 4,
        name: "Styrofoam cup",
        recyclable: false,
        info: "Most curbside programs cannot process expanded polystyrene.",
    },
    RecyclingItem {
        id: 5,
        name: "Glass jar",
        recyclable: true,
        info: "Rinse it and remove the lid; glass recycles indefinitely.",
    },
    RecyclingItem {
        id: 6,
        name: "Chip bag",
        recyclable: false,
        info: "Multi-layer foil/plastic bags cannot be separated for recycling.",
    },
    RecyclingItem {
        id: 7,
        name: "Newspaper",
        recyclable: true,
        info: "Clean, dry paper is one of the easiest materials to recycle.",
    },
    RecyclingItem {
        id: 8,
        name: "Banana peel",
        recyclable: false,
        info: "Not recyclable, but it composts beautifully.",
    },
];

/// The fixed item list for the "recyclable or not" game.
#[must_use]
pub fn recycling_items() -> &'static [RecyclingItem] {
    &RECYCLING_ITEMS
}
