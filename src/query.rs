//! Listing query parsing
//!
//! A listing path has the shape
//! `sort-{sortType}[/{tagPath...}]/results-{resultsPerPage}.{pageNumber}.json`,
//! relative to the service base path. The optional tag path is split on
//! `/products/` into successive tag filters.

use crate::error::{ListingError, Result};
use crate::filter::PriceFilter;
use crate::sort::SortCriterion;

const SORT_PREFIX: &str = "sort-";
const RESULTS_PREFIX: &str = "results-";
const RESULTS_SUFFIX: &str = ".json";
const TAG_DELIMITER: &str = "/products/";

/// Structured form of one listing request
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    /// Sort name exactly as requested (echoed back in the response)
    pub sort: String,
    pub criterion: SortCriterion,
    /// 1-based page number
    pub page_number: i64,
    pub page_size: usize,
    /// Tag filters in request order
    pub tags: Vec<String>,
    pub price: Option<PriceFilter>,
}

impl ListingQuery {
    /// Parse a listing path (leading `/` optional)
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim_start_matches('/');

        let (sort_segment, rest) = path
            .split_once('/')
            .ok_or_else(|| ListingError::MalformedPath(path.to_string()))?;
        let sort = sort_segment
            .strip_prefix(SORT_PREFIX)
            .ok_or_else(|| ListingError::MalformedPath(path.to_string()))?;

        let (tag_path, results_segment) = match rest.rsplit_once('/') {
            Some((tag_path, results)) => (tag_path, results),
            None => ("", rest),
        };

        let (page_size, page_number) = parse_results_segment(results_segment)
            .ok_or_else(|| ListingError::MalformedPath(path.to_string()))?;

        Ok(Self {
            sort: sort.to_string(),
            criterion: SortCriterion::parse(sort),
            page_number: parse_number("pageNumber", page_number)?,
            page_size: parse_number("resultsPerPage", page_size)?,
            tags: split_tag_path(tag_path),
            price: None,
        })
    }

    /// Attach the optional `price` query-string filter
    pub fn with_price_filter(mut self, price: Option<&str>) -> Result<Self> {
        self.price = price.map(PriceFilter::parse).transpose()?;
        Ok(self)
    }
}

/// Split `results-{size}.{page}.json` into its raw size and page parts
fn parse_results_segment(segment: &str) -> Option<(&str, &str)> {
    segment
        .strip_prefix(RESULTS_PREFIX)?
        .strip_suffix(RESULTS_SUFFIX)?
        .split_once('.')
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| ListingError::InvalidNumericParameter {
            name,
            value: value.to_string(),
        })
}

/// Split the wildcard tag path into tag filters, dropping empty pieces
pub fn split_tag_path(tag_path: &str) -> Vec<String> {
    if tag_path.is_empty() {
        return Vec::new();
    }

    tag_path
        .split(TAG_DELIMITER)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
