//! Approximate text index
//!
//! Each product is indexed on its lowercased name, subcategory, id and
//! category label. A query matches a field when some substring of the field
//! is within `score * query_len` edits of the query (approximate substring
//! matching, Sellers' variant of Levenshtein). The best field score wins.

use shared::models::Product;

/// Highest accepted `edits / query length`
pub const FUZZY_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatch<'a> {
    pub product: &'a Product,
    /// 0.0 is an exact substring hit
    pub score: f64,
}

#[derive(Debug)]
struct IndexedProduct<'a> {
    product: &'a Product,
    keys: [Vec<char>; 4],
}

/// Index over a working set of products, built per query
#[derive(Debug)]
pub struct FuzzyIndex<'a> {
    entries: Vec<IndexedProduct<'a>>,
    threshold: f64,
}

impl<'a> FuzzyIndex<'a> {
    pub fn new(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self::with_threshold(products, FUZZY_THRESHOLD)
    }

    pub fn with_threshold(products: impl IntoIterator<Item = &'a Product>, threshold: f64) -> Self {
        let entries = products
            .into_iter()
            .map(|product| IndexedProduct {
                product,
                keys: [
                    lowered_chars(&product.name),
                    lowered_chars(&product.subcategory),
                    lowered_chars(&product.id),
                    lowered_chars(product.category.as_str()),
                ],
            })
            .collect();
        Self { entries, threshold }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Products matching `query`, best score first, ties in index order
    ///
    /// A blank query matches everything with score 0.
    pub fn search(&self, query: &str) -> Vec<FuzzyMatch<'a>> {
        let query = lowered_chars(query.trim());
        if query.is_empty() {
            return self
                .entries
                .iter()
                .map(|entry| FuzzyMatch {
                    product: entry.product,
                    score: 0.0,
                })
                .collect();
        }

        let query_len = query.len() as f64;
        let mut matches: Vec<FuzzyMatch<'a>> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let best = entry
                    .keys
                    .iter()
                    .map(|key| substring_edit_distance(&query, key))
                    .min()?;
                let score = best as f64 / query_len;
                (score <= self.threshold).then_some(FuzzyMatch {
                    product: entry.product,
                    score,
                })
            })
            .collect();

        // sort_by is stable, equal scores keep index order
        matches.sort_by(|a, b| a.score.total_cmp(&b.score));
        matches
    }
}

fn lowered_chars(value: &str) -> Vec<char> {
    value.to_lowercase().chars().collect()
}

/// Fewest edits turning `pattern` into any substring of `text`
pub fn substring_edit_distance(pattern: &[char], text: &[char]) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    if text.is_empty() {
        return pattern.len();
    }

    // Row i holds distances for pattern[..i]; a match may start anywhere in
    // text, so row 0 is all zeros.
    let mut prev = vec![0usize; text.len() + 1];
    let mut curr = vec![0usize; text.len() + 1];

    for (i, p) in pattern.iter().enumerate() {
        curr[0] = i + 1;
        for (j, t) in text.iter().enumerate() {
            let cost = usize::from(p != t);
            curr[j + 1] = (prev[j] + cost) // substitution
                .min(prev[j + 1] + 1) // deletion
                .min(curr[j] + 1); // insertion
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev.into_iter().min().unwrap_or(pattern.len())
}
