use uuid::Uuid;

use super::errors::MenuItemError;
use super::value_objects::Category;

pub const MAX_RATING: f64 = 5.0;

/// A single item on the cafeteria menu.
///
/// Items are immutable once handed to the suggestion engine; the catalog
/// collaborator owns their lifecycle.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub discounted_price: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    pub tags: Vec<String>,
    pub is_available: bool,
    pub is_promoted: bool,
    pub is_seasonal: bool,
}

pub struct NewMenuItemProps {
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub discounted_price: Option<f64>,
    pub rating: f64,
    pub review_count: u32,
    pub tags: Vec<String>,
    pub is_available: bool,
    pub is_promoted: bool,
    pub is_seasonal: bool,
}

impl MenuItem {
    pub fn new(props: NewMenuItemProps) -> Result<Self, MenuItemError> {
        if props.name.trim().is_empty() {
            return Err(MenuItemError::NameEmpty);
        }

        if props.price <= 0.0 || !props.price.is_finite() {
            return Err(MenuItemError::PriceInvalid);
        }

        if let Some(discounted) = props.discounted_price {
            if discounted <= 0.0 || discounted > props.price {
                return Err(MenuItemError::DiscountInvalid);
            }
        }

        if !(0.0..=MAX_RATING).contains(&props.rating) {
            return Err(MenuItemError::RatingOutOfRange);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name.trim().to_string(),
            category: props.category,
            price: props.price,
            discounted_price: props.discounted_price,
            rating: props.rating,
            review_count: props.review_count,
            tags: props.tags,
            is_available: props.is_available,
            is_promoted: props.is_promoted,
            is_seasonal: props.is_seasonal,
        })
    }

    /// Constructor for items already vetted at the catalog boundary (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_catalog(
        id: Uuid,
        name: String,
        category: Category,
        price: f64,
        discounted_price: Option<f64>,
        rating: f64,
        review_count: u32,
        tags: Vec<String>,
        is_available: bool,
        is_promoted: bool,
        is_seasonal: bool,
    ) -> Self {
        Self {
            id,
            name,
            category,
            price,
            discounted_price,
            rating,
            review_count,
            tags,
            is_available,
            is_promoted,
            is_seasonal,
        }
    }

    /// Price the customer actually pays.
    pub fn effective_price(&self) -> f64 {
        self.discounted_price.unwrap_or(self.price)
    }

    /// Flat text representation used for semantic similarity: name,
    /// category label, and tags concatenated into one string.
    pub fn embedding_text(&self) -> String {
        let mut parts = vec![self.name.clone(), self.category.label().to_string()];
        parts.extend(self.tags.iter().cloned());
        parts.join(" ")
    }
}
