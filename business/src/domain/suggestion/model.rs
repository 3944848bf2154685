use chrono::{DateTime, Utc};

use crate::domain::menu::model::MenuItem;

/// One line of a cart or of a past order: an item and how many units.
#[derive(Debug, Clone)]
pub struct ContextEntry {
    pub item: MenuItem,
    pub quantity: u32,
}

impl ContextEntry {
    pub fn new(item: MenuItem, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

/// Input driving a suggestion: either the current cart or the order history.
#[derive(Debug, Clone)]
pub enum SuggestionRequest {
    Cart(Vec<ContextEntry>),
    History(Vec<Vec<ContextEntry>>),
}

impl SuggestionRequest {
    pub fn is_empty(&self) -> bool {
        match self {
            SuggestionRequest::Cart(entries) => entries.is_empty(),
            SuggestionRequest::History(orders) => {
                orders.iter().all(|order| order.is_empty())
            }
        }
    }
}

/// Ranked suggestion produced by the engine.
///
/// `items` holds at most four entries, highest score first. `is_semantic`
/// records which strategy produced the ranking; it is all-or-nothing per
/// call, never mixed.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub items: Vec<MenuItem>,
    pub message: String,
    pub is_semantic: bool,
    pub created_at: DateTime<Utc>,
}

impl Suggestion {
    pub fn rule_based(items: Vec<MenuItem>, message: String) -> Self {
        Self {
            items,
            message,
            is_semantic: false,
            created_at: Utc::now(),
        }
    }

    pub fn semantic(items: Vec<MenuItem>, message: String) -> Self {
        Self {
            items,
            message,
            is_semantic: true,
            created_at: Utc::now(),
        }
    }

    pub fn empty(message: String) -> Self {
        Self::rule_based(Vec::new(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::value_objects::Category;
    use uuid::Uuid;

    fn item(name: &str) -> MenuItem {
        MenuItem::from_catalog(
            Uuid::new_v4(),
            name.to_string(),
            Category::Snacks,
            100.0,
            None,
            4.0,
            10,
            vec![],
            true,
            false,
            false,
        )
    }

    #[test]
    fn should_report_empty_cart() {
        assert!(SuggestionRequest::Cart(vec![]).is_empty());
        let filled = SuggestionRequest::Cart(vec![ContextEntry::new(item("Samosa"), 1)]);
        assert!(!filled.is_empty());
    }

    #[test]
    fn should_treat_history_of_empty_orders_as_empty() {
        assert!(SuggestionRequest::History(vec![]).is_empty());
        assert!(SuggestionRequest::History(vec![vec![], vec![]]).is_empty());
    }

    #[test]
    fn should_tag_provenance_per_constructor() {
        assert!(Suggestion::semantic(vec![], "m".to_string()).is_semantic);
        assert!(!Suggestion::rule_based(vec![], "m".to_string()).is_semantic);
        assert!(Suggestion::empty("m".to_string()).items.is_empty());
    }
}
