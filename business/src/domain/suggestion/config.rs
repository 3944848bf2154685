/// Tunable scoring constants for the suggestion engine.
///
/// Every bonus is plain configuration injected at construction time, not a
/// global. The defaults below are hand-tuned for the cafeteria menu; they
/// carry no meaning beyond their relative magnitudes.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Awarded per detected meal signal whose complement table matches the
    /// candidate (fries with a burger, lassi with desi staples, ...).
    pub pairing_bonus: f64,
    /// Awarded to beverage candidates when the context has no beverage yet.
    pub drink_bonus: f64,
    /// Awarded when the candidate's category is not represented in context.
    pub variety_bonus: f64,
    /// Applied when the candidate's name is a near-duplicate of a context
    /// item. Must be large enough to keep the candidate out of the result.
    pub redundancy_penalty: f64,
    /// Linear weight on the candidate's rating (0.0 to 5.0).
    pub rating_weight: f64,
    /// Weight on cosine similarity in the semantic strategy, chosen so the
    /// similarity term and the rule bonuses live on comparable scales.
    pub similarity_weight: f64,
    /// History mode: candidate never tried, in the user's most-ordered category.
    pub unvisited_category_bonus: f64,
    /// History mode: candidate name shares a keyword with frequently ordered items.
    pub keyword_overlap_bonus: f64,
    /// History mode: candidate never tried with rating at or above
    /// `top_rated_threshold`.
    pub top_rated_bonus: f64,
    pub top_rated_threshold: f64,
    /// History mode: candidate ordered before, below the repetition threshold.
    pub reorder_bonus: f64,
    /// History mode: total units at or above this exclude the item outright.
    pub repetition_threshold: u32,
    /// Hard cap on the number of returned suggestions.
    pub max_suggestions: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pairing_bonus: 10.0,
            drink_bonus: 8.0,
            variety_bonus: 4.0,
            redundancy_penalty: 25.0,
            rating_weight: 1.5,
            similarity_weight: 10.0,
            unvisited_category_bonus: 12.0,
            keyword_overlap_bonus: 6.0,
            top_rated_bonus: 3.0,
            top_rated_threshold: 4.5,
            reorder_bonus: 5.0,
            repetition_threshold: 2,
            max_suggestions: 4,
        }
    }
}
