use super::context::{ContextMode, ScoringContext};
use super::signals::MealSignal;

/// Message selection for suggestion results.
///
/// A fixed priority order decides which observation about the context is
/// worth surfacing: detected meal signal first, then the missing-drink gap,
/// then history discovery, then lack of variety, then a generic line.

pub fn empty_context(mode: ContextMode) -> String {
    match mode {
        ContextMode::Cart => {
            "Your cart is empty, so there is nothing to base a suggestion on yet.".to_string()
        }
        ContextMode::History => {
            "No past orders yet, so there is nothing to base a suggestion on.".to_string()
        }
    }
}

pub fn nothing_left(mode: ContextMode) -> String {
    match mode {
        ContextMode::Cart => "Nothing left to suggest, your cart already covers it.".to_string(),
        ContextMode::History => {
            "Nothing new to suggest, you have tried everything we would recommend.".to_string()
        }
    }
}

/// Used when the catalog cannot be reached at all.
pub fn unavailable() -> String {
    "We could not fetch suggestions right now, please try again later.".to_string()
}

pub fn select(ctx: &ScoringContext) -> String {
    if let Some(signal) = ctx.signals.first() {
        return match signal {
            MealSignal::BurgerLike => {
                "Fries or a cold drink go great with a burger.".to_string()
            }
            MealSignal::PizzaLike => {
                "A cold drink or some sides would round off that pizza.".to_string()
            }
            MealSignal::ChineseLike => {
                "Spring rolls or fried rice pair well with your order.".to_string()
            }
            MealSignal::DesiLike => {
                "Some lassi or raita would go perfectly with that.".to_string()
            }
        };
    }

    if !ctx.has_beverage {
        return "How about something to drink with your meal?".to_string();
    }

    if ctx.mode == ContextMode::History {
        if let Some(favorite) = ctx.favorite_category {
            return format!(
                "You order a lot of {}. Here are some picks you have not tried yet.",
                favorite.label()
            );
        }
    }

    if ctx.categories.len() == 1 {
        return "A little variety might be nice. Have a look at these.".to_string();
    }

    "Here are a few picks we think you will like.".to_string()
}
