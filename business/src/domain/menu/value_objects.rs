use serde::{Deserialize, Serialize};

/// Fixed set of menu categories offered by the cafeteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DesiFood,
    FastFood,
    Chinese,
    Snacks,
    Beverages,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::DesiFood => write!(f, "desi_food"),
            Category::FastFood => write!(f, "fast_food"),
            Category::Chinese => write!(f, "chinese"),
            Category::Snacks => write!(f, "snacks"),
            Category::Beverages => write!(f, "beverages"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desi_food" => Ok(Category::DesiFood),
            "fast_food" => Ok(Category::FastFood),
            "chinese" => Ok(Category::Chinese),
            "snacks" => Ok(Category::Snacks),
            "beverages" => Ok(Category::Beverages),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}

impl Category {
    /// Human-friendly label used in suggestion messages.
    pub fn label(&self) -> &'static str {
        match self {
            Category::DesiFood => "desi food",
            Category::FastFood => "fast food",
            Category::Chinese => "Chinese food",
            Category::Snacks => "snacks",
            Category::Beverages => "beverages",
        }
    }
}
