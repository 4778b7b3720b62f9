//! Query Engine
//!
//! Filters an in-scope product collection by category and free-text search,
//! counts the matches and slices out one page. Pure computation: no store or
//! cache access happens here.

use crate::models::{PagedResult, Product};

/// Normalized parameters of a collection read.
///
/// Empty filter strings are treated as absent, so `?category=` and no
/// category at all describe the same view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// 1-based page number
    pub page: usize,
    /// Items per page, at least 1
    pub page_size: usize,
    /// Case-insensitive substring of the category
    pub category: Option<String>,
    /// Case-insensitive substring of name or description
    pub search_term: Option<String>,
}

impl ProductQuery {
    pub fn new(
        page: usize,
        page_size: usize,
        category: Option<String>,
        search_term: Option<String>,
    ) -> Self {
        Self {
            page,
            page_size,
            category: category.filter(|c| !c.is_empty()),
            search_term: search_term.filter(|s| !s.is_empty()),
        }
    }

    /// Returns true when the product passes both filters.
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = match &self.category {
            Some(needle) => product
                .category
                .as_deref()
                .is_some_and(|c| contains_ignore_case(c, needle)),
            None => true,
        };

        let search_ok = match &self.search_term {
            Some(needle) => {
                contains_ignore_case(&product.name, needle)
                    || product
                        .description
                        .as_deref()
                        .is_some_and(|d| contains_ignore_case(d, needle))
            }
            None => true,
        };

        category_ok && search_ok
    }

    /// Number of matches skipped before this page starts.
    fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filters, counts and pages `products`.
///
/// Matches are ordered by id ascending before slicing so page boundaries
/// stay put between calls regardless of the store's iteration order.
pub fn paginate(products: Vec<Product>, query: &ProductQuery) -> PagedResult<Product> {
    let mut matched: Vec<Product> = products.into_iter().filter(|p| query.matches(p)).collect();
    matched.sort_by_key(|p| p.id);

    let total_records = matched.len();
    let total_pages = total_pages(total_records, query.page_size);

    let data = matched
        .into_iter()
        .skip(query.offset())
        .take(query.page_size)
        .collect();

    PagedResult {
        data,
        total_records,
        page: query.page,
        page_size: query.page_size,
        total_pages,
    }
}

/// ceiling(total / page_size); zero when page_size is zero.
pub fn total_pages(total_records: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_records.div_ceil(page_size)
}
