//! Groups a post store by language and category — the taxonomy pass whose
//! output feeds series construction. Hosts that already classify posts can
//! skip this and hand their own [`Classification`] to
//! [`crate::build::Builder::build_classified`].

use crate::post::Post;
use std::collections::BTreeMap;

/// Post indices grouped by language, then by category. The indices point
/// into the post store slice the classification was computed from.
pub type Classification = BTreeMap<String, BTreeMap<String, Vec<usize>>>;

/// Groups `posts` by the `category` key of each per-language metadata bag.
/// A post without a category for a given language simply joins no series in
/// that language. BTreeMaps keep the grouping (and everything built from it)
/// in a stable order across runs.
pub fn classify(posts: &[Post]) -> Classification {
    let mut classification = Classification::new();
    for (index, post) in posts.iter().enumerate() {
        for (lang, meta) in &post.meta {
            if let Some(category) = meta.category() {
                classification
                    .entry(lang.clone())
                    .or_default()
                    .entry(category.to_owned())
                    .or_default()
                    .push(index);
            }
        }
    }
    classification
}
