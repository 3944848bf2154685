use std::collections::{HashMap, HashSet};

use regex::Regex;
use uuid::Uuid;

use crate::domain::menu::model::MenuItem;
use crate::domain::menu::value_objects::Category;

use super::config::ScoringConfig;
use super::model::SuggestionRequest;
use super::signals::{self, MealSignal};

const MIN_TOKEN_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMode {
    Cart,
    History,
}

/// Precomputed read-only view of a suggestion request.
///
/// Built once per call so the scoring rules never re-scan the raw entries.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    pub mode: ContextMode,
    /// Unique context items in first-seen order.
    pub items: Vec<MenuItem>,
    /// Lowercased names, parallel to `items`.
    pub item_names: Vec<String>,
    /// Total units per item id across the whole context.
    pub quantities: HashMap<Uuid, u32>,
    pub categories: HashSet<Category>,
    pub has_beverage: bool,
    /// Detected meal signals, in message priority order.
    pub signals: Vec<MealSignal>,
    /// Name tokens of frequently ordered items (history mode only).
    pub frequent_tokens: HashSet<String>,
    /// Most-ordered category by units (history mode only).
    pub favorite_category: Option<Category>,
    tokenizer: Regex,
}

impl ScoringContext {
    pub fn from_request(request: &SuggestionRequest, config: &ScoringConfig) -> Self {
        let tokenizer = Regex::new(r"[a-z]+").expect("token pattern is valid");

        let (mode, entries): (ContextMode, Vec<_>) = match request {
            SuggestionRequest::Cart(entries) => (ContextMode::Cart, entries.iter().collect()),
            SuggestionRequest::History(orders) => (
                ContextMode::History,
                orders.iter().flatten().collect(),
            ),
        };

        let mut items: Vec<MenuItem> = Vec::new();
        let mut quantities: HashMap<Uuid, u32> = HashMap::new();
        let mut category_units: Vec<(Category, u32)> = Vec::new();

        for entry in &entries {
            let units = quantities.entry(entry.item.id).or_insert(0);
            if *units == 0 {
                items.push(entry.item.clone());
            }
            *units += entry.quantity;

            match category_units
                .iter_mut()
                .find(|(category, _)| *category == entry.item.category)
            {
                Some((_, total)) => *total += entry.quantity,
                None => category_units.push((entry.item.category, entry.quantity)),
            }
        }

        let item_names: Vec<String> = items.iter().map(|i| i.name.to_lowercase()).collect();
        let categories: HashSet<Category> = items.iter().map(|i| i.category).collect();
        let has_beverage = categories.contains(&Category::Beverages);

        let detected: Vec<MealSignal> = items
            .iter()
            .zip(&item_names)
            .flat_map(|(item, name)| signals::signals_for(name, item.category))
            .collect();
        let signals = [
            MealSignal::BurgerLike,
            MealSignal::PizzaLike,
            MealSignal::ChineseLike,
            MealSignal::DesiLike,
        ]
        .into_iter()
        .filter(|signal| detected.contains(signal))
        .collect();

        let (frequent_tokens, favorite_category) = if mode == ContextMode::History {
            let mut tokens = HashSet::new();
            for (item, name) in items.iter().zip(&item_names) {
                if quantities[&item.id] >= config.repetition_threshold {
                    for token in tokenizer.find_iter(name) {
                        if token.as_str().len() >= MIN_TOKEN_LEN {
                            tokens.insert(token.as_str().to_string());
                        }
                    }
                }
            }
            // Strictly-greater keeps the first-seen category on ties.
            let favorite = category_units
                .iter()
                .fold(None, |best: Option<(Category, u32)>, &(category, units)| {
                    match best {
                        Some((_, top)) if units <= top => best,
                        _ => Some((category, units)),
                    }
                })
                .map(|(category, _)| category);
            (tokens, favorite)
        } else {
            (HashSet::new(), None)
        };

        Self {
            mode,
            items,
            item_names,
            quantities,
            categories,
            has_beverage,
            signals,
            frequent_tokens,
            favorite_category,
            tokenizer,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units of this item across the context, 0 if never seen.
    pub fn ordered_units(&self, id: &Uuid) -> u32 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    pub fn has_tried(&self, id: &Uuid) -> bool {
        self.ordered_units(id) > 0
    }

    pub fn contains_item(&self, id: &Uuid) -> bool {
        self.quantities.contains_key(id)
    }

    /// Substring match in either direction against any context item name.
    pub fn is_near_duplicate(&self, candidate_name: &str) -> bool {
        let name = candidate_name.to_lowercase();
        self.item_names
            .iter()
            .any(|context_name| context_name.contains(&name) || name.contains(context_name))
    }

    /// Whether a candidate name shares a keyword with frequently ordered items.
    pub fn overlaps_frequent_keywords(&self, candidate_name: &str) -> bool {
        let name = candidate_name.to_lowercase();
        self.tokenizer
            .find_iter(&name)
            .any(|token| {
                token.as_str().len() >= MIN_TOKEN_LEN
                    && self.frequent_tokens.contains(token.as_str())
            })
    }
}
