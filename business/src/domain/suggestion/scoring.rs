use async_trait::async_trait;

use crate::domain::menu::model::MenuItem;
use crate::domain::menu::value_objects::Category;

use super::config::ScoringConfig;
use super::context::{ContextMode, ScoringContext};
use super::errors::SuggestionError;
use super::services::CandidateScorer;
use super::signals;

/// Beverage candidates get a push when the context has no drink yet.
pub fn drink_gap_bonus(ctx: &ScoringContext, item: &MenuItem, config: &ScoringConfig) -> f64 {
    if !ctx.has_beverage && item.category == Category::Beverages {
        config.drink_bonus
    } else {
        0.0
    }
}

/// Candidates from a category not yet in the context get a small push.
pub fn variety_bonus(ctx: &ScoringContext, item: &MenuItem, config: &ScoringConfig) -> f64 {
    if !ctx.categories.contains(&item.category) {
        config.variety_bonus
    } else {
        0.0
    }
}

/// Untried candidates in the user's most-ordered category get a large push.
pub fn unvisited_category_bonus(
    ctx: &ScoringContext,
    item: &MenuItem,
    config: &ScoringConfig,
) -> f64 {
    match ctx.favorite_category {
        Some(favorite) if favorite == item.category && !ctx.has_tried(&item.id) => {
            config.unvisited_category_bonus
        }
        _ => 0.0,
    }
}

/// Drops catalog items the context rules out before any scoring happens.
///
/// Cart mode excludes everything already in the cart. History mode excludes
/// items ordered at or above the repetition threshold; items ordered fewer
/// times stay eligible for the reorder bonus.
pub fn filter_candidates(
    items: Vec<MenuItem>,
    ctx: &ScoringContext,
    config: &ScoringConfig,
) -> Vec<MenuItem> {
    items
        .into_iter()
        .filter(|item| match ctx.mode {
            ContextMode::Cart => !ctx.contains_item(&item.id),
            ContextMode::History => ctx.ordered_units(&item.id) < config.repetition_threshold,
        })
        .collect()
}

/// Orders candidates by score, drops non-positive scores, caps the result.
///
/// The sort is stable, so equal scores keep catalog order. Never pads: if
/// fewer than `max` candidates score positive, fewer are returned.
pub fn rank(candidates: &[MenuItem], scores: &[f64], max: usize) -> Vec<MenuItem> {
    // Zipping keeps this total even if a scorer hands back the wrong
    // number of scores: candidates without a score are simply unranked.
    let mut positive: Vec<(&MenuItem, f64)> = candidates
        .iter()
        .zip(scores.iter().copied())
        .filter(|(_, score)| *score > 0.0)
        .collect();
    positive.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    positive
        .into_iter()
        .take(max)
        .map(|(item, _)| item.clone())
        .collect()
}

/// Deterministic heuristic strategy. Primary path when no embedding
/// provider is configured, fallback path otherwise.
pub struct RuleBasedScorer {
    config: ScoringConfig,
}

impl RuleBasedScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score_item(&self, ctx: &ScoringContext, item: &MenuItem) -> f64 {
        match ctx.mode {
            ContextMode::Cart => self.score_cart(ctx, item),
            ContextMode::History => self.score_history(ctx, item),
        }
    }

    fn score_cart(&self, ctx: &ScoringContext, item: &MenuItem) -> f64 {
        // Near-duplicates are never worth recommending, whatever else they
        // would have scored.
        if ctx.is_near_duplicate(&item.name) {
            return -self.config.redundancy_penalty;
        }

        let mut score = 0.0;
        for signal in &ctx.signals {
            if signals::complements(*signal, item) {
                score += self.config.pairing_bonus;
            }
        }
        score += drink_gap_bonus(ctx, item, &self.config);
        score += variety_bonus(ctx, item, &self.config);
        score += item.rating * self.config.rating_weight;
        score
    }

    fn score_history(&self, ctx: &ScoringContext, item: &MenuItem) -> f64 {
        let mut score = item.rating * self.config.rating_weight;
        if ctx.has_tried(&item.id) {
            score += self.config.reorder_bonus;
        } else {
            score += unvisited_category_bonus(ctx, item, &self.config);
            if item.rating >= self.config.top_rated_threshold {
                score += self.config.top_rated_bonus;
            }
        }
        if ctx.overlaps_frequent_keywords(&item.name) {
            score += self.config.keyword_overlap_bonus;
        }
        // The gap rules apply whatever the context: a history full of food
        // and no drinks should still push beverages.
        score += drink_gap_bonus(ctx, item, &self.config);
        score += variety_bonus(ctx, item, &self.config);
        score
    }
}

#[async_trait]
impl CandidateScorer for RuleBasedScorer {
    async fn score(
        &self,
        context: &ScoringContext,
        candidates: &[MenuItem],
    ) -> Result<Vec<f64>, SuggestionError> {
        Ok(candidates
            .iter()
            .map(|item| self.score_item(context, item))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::model::{ContextEntry, SuggestionRequest};
    use proptest::prelude::*;
    use uuid::Uuid;

    fn item(name: &str, category: Category, rating: f64) -> MenuItem {
        MenuItem::from_catalog(
            Uuid::new_v4(),
            name.to_string(),
            category,
            100.0,
            None,
            rating,
            10,
            vec![],
            true,
            false,
            false,
        )
    }

    fn cart_ctx(entries: Vec<ContextEntry>, config: &ScoringConfig) -> ScoringContext {
        ScoringContext::from_request(&SuggestionRequest::Cart(entries), config)
    }

    #[test]
    fn burger_complements_outrank_unrelated_desi_dish() {
        let config = ScoringConfig::default();
        let ctx = cart_ctx(
            vec![ContextEntry::new(
                item("Zinger Burger", Category::FastFood, 4.2),
                1,
            )],
            &config,
        );
        let scorer = RuleBasedScorer::new(config);

        let fries = item("French Fries", Category::Snacks, 4.0);
        let shake = item("Mango Shake", Category::Beverages, 4.0);
        let biryani = item("Chicken Biryani", Category::DesiFood, 4.5);

        let fries_score = scorer.score_item(&ctx, &fries);
        let shake_score = scorer.score_item(&ctx, &shake);
        let biryani_score = scorer.score_item(&ctx, &biryani);

        assert!(fries_score > biryani_score);
        assert!(shake_score > biryani_score);
    }

    #[test]
    fn near_duplicate_scores_below_inclusion_threshold() {
        let config = ScoringConfig::default();
        let ctx = cart_ctx(
            vec![ContextEntry::new(
                item("Zinger Burger", Category::FastFood, 4.2),
                1,
            )],
            &config,
        );
        let scorer = RuleBasedScorer::new(config);

        let duplicate = item("Zinger Burger Deluxe", Category::FastFood, 5.0);
        assert!(scorer.score_item(&ctx, &duplicate) < 0.0);
    }

    #[test]
    fn no_drink_bonus_once_cart_has_a_beverage() {
        let config = ScoringConfig::default();
        let without_drink = cart_ctx(
            vec![ContextEntry::new(
                item("Club Sandwich", Category::FastFood, 4.0),
                1,
            )],
            &config,
        );
        let with_drink = cart_ctx(
            vec![
                ContextEntry::new(item("Club Sandwich", Category::FastFood, 4.0), 1),
                ContextEntry::new(item("Pepsi", Category::Beverages, 4.0), 1),
            ],
            &config,
        );
        let scorer = RuleBasedScorer::new(config);

        let juice = item("Fresh Juice", Category::Beverages, 4.0);
        assert!(
            scorer.score_item(&without_drink, &juice) > scorer.score_item(&with_drink, &juice)
        );
    }

    #[test]
    fn untried_favorite_category_item_beats_reorder_candidate() {
        let config = ScoringConfig::default();
        let beef = item("Beef Burger", Category::FastFood, 4.0);
        let coke = item("Coke", Category::Beverages, 4.0);
        let request = SuggestionRequest::History(vec![vec![
            ContextEntry::new(beef.clone(), 3),
            ContextEntry::new(coke.clone(), 1),
        ]]);
        let ctx = ScoringContext::from_request(&request, &config);

        let chicken = item("Chicken Burger", Category::FastFood, 4.6);
        let scorer = RuleBasedScorer::new(config.clone());

        // Beef Burger sits at the repetition threshold and is filtered out.
        let catalog = vec![chicken.clone(), beef.clone(), coke.clone()];
        let candidates = filter_candidates(catalog, &ctx, &config);
        assert!(candidates.iter().all(|c| c.id != beef.id));

        // Coke was ordered once: eligible, but only worth a reorder bonus.
        let chicken_score = scorer.score_item(&ctx, &chicken);
        let coke_score = scorer.score_item(&ctx, &coke);
        assert!(chicken_score > coke_score);
    }

    #[test]
    fn rule_based_scoring_is_deterministic() {
        let config = ScoringConfig::default();
        let ctx = cart_ctx(
            vec![ContextEntry::new(
                item("Chicken Karahi", Category::DesiFood, 4.4),
                1,
            )],
            &config,
        );
        let scorer = RuleBasedScorer::new(config);
        let lassi = item("Sweet Lassi", Category::Beverages, 4.1);

        assert_eq!(
            scorer.score_item(&ctx, &lassi),
            scorer.score_item(&ctx, &lassi)
        );
    }

    #[test]
    fn rank_keeps_catalog_order_on_ties_and_drops_non_positive() {
        let a = item("Samosa", Category::Snacks, 4.0);
        let b = item("Pakora", Category::Snacks, 4.0);
        let c = item("Stale Bun", Category::Snacks, 0.0);
        let candidates = vec![a.clone(), b.clone(), c.clone()];
        let scores = vec![5.0, 5.0, 0.0];

        let ranked = rank(&candidates, &scores, 4);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, a.id);
        assert_eq!(ranked[1].id, b.id);
    }

    #[test]
    fn history_without_beverage_still_pushes_drinks() {
        let config = ScoringConfig::default();
        let request = SuggestionRequest::History(vec![vec![ContextEntry::new(
            item("Chicken Biryani", Category::DesiFood, 4.4),
            2,
        )]]);
        let ctx = ScoringContext::from_request(&request, &config);
        let scorer = RuleBasedScorer::new(config);

        let shake = item("Mango Shake", Category::Beverages, 4.0);
        let samosa = item("Samosa", Category::Snacks, 4.0);

        assert!(scorer.score_item(&ctx, &shake) > scorer.score_item(&ctx, &samosa));
    }

    #[test]
    fn rank_leaves_candidates_without_a_score_unranked() {
        let a = item("Samosa", Category::Snacks, 4.0);
        let b = item("Pakora", Category::Snacks, 4.0);
        let unscored = item("Mystery Special", Category::Snacks, 4.0);
        let candidates = vec![a.clone(), b.clone(), unscored.clone()];
        let scores = vec![2.0, 3.0];

        let ranked = rank(&candidates, &scores, 4);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|item| item.id != unscored.id));
    }

    #[test]
    fn rank_caps_at_requested_maximum() {
        let candidates: Vec<MenuItem> = (0..6)
            .map(|i| item(&format!("Item {}", i), Category::Snacks, 4.0))
            .collect();
        let scores = vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0];

        assert_eq!(rank(&candidates, &scores, 4).len(), 4);
    }

    const NAME_POOL: &[(&str, Category)] = &[
        ("Zinger Burger", Category::FastFood),
        ("Beef Burger", Category::FastFood),
        ("Chicken Shawarma", Category::FastFood),
        ("Pepperoni Pizza", Category::FastFood),
        ("Chicken Biryani", Category::DesiFood),
        ("Chicken Karahi", Category::DesiFood),
        ("Daal Chawal", Category::DesiFood),
        ("Garlic Naan", Category::DesiFood),
        ("Chicken Chow Mein", Category::Chinese),
        ("Egg Fried Rice", Category::Chinese),
        ("Spring Rolls", Category::Chinese),
        ("French Fries", Category::Snacks),
        ("Samosa", Category::Snacks),
        ("Mango Shake", Category::Beverages),
        ("Sweet Lassi", Category::Beverages),
        ("Coke", Category::Beverages),
    ];

    proptest! {
        #[test]
        fn cart_ranking_invariants_hold(
            picks in prop::collection::vec((0usize..NAME_POOL.len(), 0.0f64..=5.0), 0..16),
            cart_indices in prop::collection::vec(any::<prop::sample::Index>(), 0..5),
        ) {
            let config = ScoringConfig::default();
            let catalog: Vec<MenuItem> = picks
                .iter()
                .map(|&(n, rating)| item(NAME_POOL[n].0, NAME_POOL[n].1, rating))
                .collect();

            let cart: Vec<ContextEntry> = if catalog.is_empty() {
                Vec::new()
            } else {
                cart_indices
                    .iter()
                    .map(|ix| ContextEntry::new(catalog[ix.index(catalog.len())].clone(), 1))
                    .collect()
            };

            let ctx = cart_ctx(cart, &config);
            let candidates = filter_candidates(catalog, &ctx, &config);
            let scorer = RuleBasedScorer::new(config.clone());
            let scores: Vec<f64> = candidates
                .iter()
                .map(|c| scorer.score_item(&ctx, c))
                .collect();
            let ranked = rank(&candidates, &scores, config.max_suggestions);

            prop_assert!(ranked.len() <= config.max_suggestions);
            for suggested in &ranked {
                prop_assert!(!ctx.contains_item(&suggested.id));
                prop_assert!(scorer.score_item(&ctx, suggested) > 0.0);
            }
        }
    }
}
