use crate::models::RecipeMatch;

/// Sort matches descending by used-ingredient count
///
/// The sort must be stable: equal counts keep their relative input order,
/// so an empty pantry (all counts 0) reproduces catalog order exactly.
pub fn rank_matches(mut results: Vec<RecipeMatch>) -> Vec<RecipeMatch> {
    results.sort_by(|a, b| b.used_ingredient_count.cmp(&a.used_ingredient_count));
    results
}
