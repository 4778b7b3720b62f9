//! Cache key construction.
//!
//! Single products live under `product:{id}`. Collection views live under
//! `products:page:{p}:size:{s}:category:{c}:search:{t}`, so one glob
//! (`products:*`) covers every cached view and never touches product keys.

use crate::query::ProductQuery;

/// Prefix of single-product keys.
pub const PRODUCT_KEY_PREFIX: &str = "product:";

/// Prefix of every collection-view key.
pub const PRODUCT_LIST_KEY_PREFIX: &str = "products:";

/// Written in place of a filter that was not given.
const NO_FILTER: &str = "all";

/// Key for a single product.
pub fn product_key(id: i64) -> String {
    format!("{}{}", PRODUCT_KEY_PREFIX, id)
}

/// Key for one page of a filtered collection.
///
/// Present filters are written as `=` followed by the value with `\` and `:`
/// escaped, so a category literally named `all` or containing `:search:`
/// cannot produce the same key as a different query.
pub fn product_list_key(query: &ProductQuery) -> String {
    format!(
        "{}page:{}:size:{}:category:{}:search:{}",
        PRODUCT_LIST_KEY_PREFIX,
        query.page,
        query.page_size,
        filter_segment(query.category.as_deref()),
        filter_segment(query.search_term.as_deref()),
    )
}

/// Glob matching every collection-view key.
pub fn product_list_pattern() -> String {
    format!("{}*", PRODUCT_LIST_KEY_PREFIX)
}

fn filter_segment(value: Option<&str>) -> String {
    match value {
        None => NO_FILTER.to_string(),
        Some(value) => {
            let mut out = String::with_capacity(value.len() + 1);
            out.push('=');
            for c in value.chars() {
                if c == '\\' || c == ':' {
                    out.push('\\');
                }
                out.push(c);
            }
            out
        }
    }
}
