use crate::domain::menu::model::MenuItem;
use crate::domain::menu::value_objects::Category;

/// Coarse meal signal detected in the context.
///
/// Detection is deliberately cheap: lowercase substring checks on item
/// names plus category membership. The enum order is also the priority
/// order used when picking a suggestion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSignal {
    BurgerLike,
    PizzaLike,
    ChineseLike,
    DesiLike,
}

impl std::fmt::Display for MealSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealSignal::BurgerLike => write!(f, "burger_like"),
            MealSignal::PizzaLike => write!(f, "pizza_like"),
            MealSignal::ChineseLike => write!(f, "chinese_like"),
            MealSignal::DesiLike => write!(f, "desi_like"),
        }
    }
}

const BURGER_KEYWORDS: &[&str] = &["burger", "zinger"];
const PIZZA_KEYWORDS: &[&str] = &["pizza"];
const CHINESE_KEYWORDS: &[&str] = &["noodle", "chow mein", "manchurian", "chop suey"];
const DESI_KEYWORDS: &[&str] = &["biryani", "karahi", "nihari", "daal", "pulao", "haleem"];

fn matches_any(name: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| name.contains(keyword))
}

/// Signals emitted by a single context item. `name` must be lowercased.
pub fn signals_for(name: &str, category: Category) -> Vec<MealSignal> {
    let mut signals = Vec::new();
    if matches_any(name, BURGER_KEYWORDS) {
        signals.push(MealSignal::BurgerLike);
    }
    if matches_any(name, PIZZA_KEYWORDS) {
        signals.push(MealSignal::PizzaLike);
    }
    if category == Category::Chinese || matches_any(name, CHINESE_KEYWORDS) {
        signals.push(MealSignal::ChineseLike);
    }
    if category == Category::DesiFood || matches_any(name, DESI_KEYWORDS) {
        signals.push(MealSignal::DesiLike);
    }
    signals
}

/// Whether a candidate plausibly complements the detected signal.
pub fn complements(signal: MealSignal, candidate: &MenuItem) -> bool {
    let name = candidate.name.to_lowercase();
    let is_beverage = candidate.category == Category::Beverages;
    match signal {
        MealSignal::BurgerLike => matches_any(&name, &["fries", "shake"]) || is_beverage,
        MealSignal::PizzaLike => {
            matches_any(&name, &["garlic bread", "wings", "fries"]) || is_beverage
        }
        MealSignal::ChineseLike => {
            matches_any(&name, &["spring roll", "fried rice", "soup"]) || is_beverage
        }
        MealSignal::DesiLike => matches_any(&name, &["lassi", "raita", "naan"]),
    }
}
