//! Tests for listing query parsing

use crate::error::ListingError;
use crate::filter::PriceFilter;
use crate::query::{split_tag_path, ListingQuery};
use crate::sort::SortCriterion;

#[test]
fn test_parse_without_tags() {
    let query = ListingQuery::parse("sort-rating/results-12.3.json").unwrap();

    assert_eq!(query.sort, "rating");
    assert_eq!(query.criterion, SortCriterion::Rating);
    assert_eq!(query.page_size, 12);
    assert_eq!(query.page_number, 3);
    assert!(query.tags.is_empty());
    assert_eq!(query.price, None);
}

#[test]
fn test_parse_with_leading_slash() {
    let query = ListingQuery::parse("/sort-title/results-5.1.json").unwrap();
    assert_eq!(query.criterion, SortCriterion::Title);
}

#[test]
fn test_parse_single_tag() {
    let query = ListingQuery::parse("sort-recent/photoshop/results-10.1.json").unwrap();
    assert_eq!(query.tags, vec!["photoshop"]);
}

#[test]
fn test_parse_multiple_tags() {
    let query = ListingQuery::parse(
        "sort-popular/caas:products/photoshop/products/lightroom/results-24.2.json",
    )
    .unwrap();

    assert_eq!(query.criterion, SortCriterion::Popular);
    assert_eq!(query.tags, vec!["caas:products/photoshop", "lightroom"]);
    assert_eq!(query.page_size, 24);
    assert_eq!(query.page_number, 2);
}

#[test]
fn test_parse_unknown_sort_is_echoed() {
    let query = ListingQuery::parse("sort-newest/results-10.1.json").unwrap();
    assert_eq!(query.sort, "newest");
    assert_eq!(query.criterion, SortCriterion::Unsorted);
}

#[test]
fn test_parse_zero_and_negative_page_numbers() {
    let query = ListingQuery::parse("sort-rating/results-10.0.json").unwrap();
    assert_eq!(query.page_number, 0);

    let query = ListingQuery::parse("sort-rating/results-10.-2.json").unwrap();
    assert_eq!(query.page_number, -2);
}

#[test]
fn test_parse_zero_page_size_is_accepted() {
    // Rejected later when total pages are computed
    let query = ListingQuery::parse("sort-rating/results-0.1.json").unwrap();
    assert_eq!(query.page_size, 0);
}

#[test]
fn test_parse_non_numeric_page_size() {
    let err = ListingQuery::parse("sort-rating/results-ten.1.json").unwrap_err();
    match err {
        ListingError::InvalidNumericParameter { name, value } => {
            assert_eq!(name, "resultsPerPage");
            assert_eq!(value, "ten");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_negative_page_size() {
    let err = ListingQuery::parse("sort-rating/results--5.1.json").unwrap_err();
    assert!(matches!(
        err,
        ListingError::InvalidNumericParameter {
            name: "resultsPerPage",
            ..
        }
    ));
}

#[test]
fn test_parse_non_numeric_page_number() {
    let err = ListingQuery::parse("sort-rating/results-10.first.json").unwrap_err();
    assert!(matches!(
        err,
        ListingError::InvalidNumericParameter {
            name: "pageNumber",
            ..
        }
    ));
}

#[test]
fn test_parse_trailing_garbage_in_number() {
    let err = ListingQuery::parse("sort-rating/results-10.2x.json").unwrap_err();
    assert!(matches!(err, ListingError::InvalidNumericParameter { .. }));
}

#[test]
fn test_parse_malformed_paths() {
    for path in [
        "",
        "sort-rating",
        "rating/results-10.1.json",
        "sort-rating/results-10.json",
        "sort-rating/results-10.1.html",
        "sort-rating/photoshop",
    ] {
        assert!(
            matches!(ListingQuery::parse(path), Err(ListingError::MalformedPath(_))),
            "expected malformed path for {path:?}"
        );
    }
}

#[test]
fn test_with_price_filter() {
    let query = ListingQuery::parse("sort-rating/results-10.1.json")
        .unwrap()
        .with_price_filter(Some("free"))
        .unwrap();
    assert_eq!(query.price, Some(PriceFilter::Free));

    let query = ListingQuery::parse("sort-rating/results-10.1.json")
        .unwrap()
        .with_price_filter(None)
        .unwrap();
    assert_eq!(query.price, None);

    let result = ListingQuery::parse("sort-rating/results-10.1.json")
        .unwrap()
        .with_price_filter(Some("discounted"));
    assert!(matches!(result, Err(ListingError::InvalidPriceFilter(_))));
}

#[test]
fn test_split_tag_path() {
    assert!(split_tag_path("").is_empty());
    assert_eq!(split_tag_path("a/products/b"), vec!["a", "b"]);
    assert_eq!(split_tag_path("a/products//products/b"), vec!["a", "b"]);
    assert_eq!(split_tag_path("plain"), vec!["plain"]);
}
