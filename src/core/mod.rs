// Core algorithm exports
pub mod matcher;
pub mod merge;
pub mod ranking;

pub use matcher::{match_recipes, classify_recipe, is_in_pantry};
pub use merge::merge_sources;
pub use ranking::rank_matches;
