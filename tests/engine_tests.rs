//! Integration tests for the query engine over the in-memory store
//!
//! Exercises the consistency properties between the page, facet and
//! summary paths, plus the pagination boundaries.

use salescope::core::filter::{FilterSpec, QueryParams};
use salescope::core::sort::{PageSpec, SortKey, SortOrder, SortSpec};
use salescope::core::transaction::Transaction;
use salescope::engine::QueryEngine;
use salescope::storage::InMemoryTransactionStore;
use std::collections::HashSet;
use std::sync::Arc;

fn record(
    id: i64,
    day: u32,
    region: &str,
    category: &str,
    tags: &str,
    quantity: u32,
    total: f64,
    final_amount: f64,
) -> Transaction {
    serde_json::from_str(&format!(
        r#"{{
            "TransactionID": {id},
            "Date": "2024-05-{day:02}T00:00:00Z",
            "CustomerName": "Customer {id}",
            "Age": {age},
            "CustomerRegion": "{region}",
            "ProductName": "Product {id}",
            "Brand": "Brand {brand}",
            "ProductCategory": "{category}",
            "Tags": "{tags}",
            "Quantity": {quantity},
            "TotalAmount": {total},
            "FinalAmount": {final_amount},
            "PaymentMethod": "{payment}",
            "OrderStatus": "{status}",
            "DeliveryType": "Standard",
            "Gender": "Female"
        }}"#,
        age = 20 + (id % 40),
        brand = id % 3,
        payment = if id % 2 == 0 { "UPI" } else { "Credit Card" },
        status = if id % 5 == 0 { "Cancelled" } else { "Completed" },
    ))
    .unwrap()
}

fn fixture() -> Vec<Transaction> {
    (1..=57)
        .map(|id| {
            let region = ["North", "South", "West"][(id % 3) as usize];
            let category = ["Beauty", "Electronics"][(id % 2) as usize];
            let tags = if id % 2 == 0 {
                "organic,skincare"
            } else {
                "gadget"
            };
            record(
                id,
                (id % 28 + 1) as u32,
                region,
                category,
                tags,
                (id % 4 + 1) as u32,
                100.0,
                90.0,
            )
        })
        .collect()
}

fn engine() -> QueryEngine {
    QueryEngine::new(Arc::new(InMemoryTransactionStore::new(fixture())))
}

fn spec(params: QueryParams) -> FilterSpec {
    FilterSpec::from_params(&params).unwrap()
}

#[tokio::test]
async fn summary_count_always_matches_page_count() {
    let engine = engine();

    let cases = vec![
        QueryParams::default(),
        QueryParams {
            region: Some("North,South".to_string()),
            ..Default::default()
        },
        QueryParams {
            category: Some("Beauty".to_string()),
            tags: Some("organic".to_string()),
            ..Default::default()
        },
        QueryParams {
            search: Some("Customer 1".to_string()),
            ..Default::default()
        },
        QueryParams {
            start_date: Some("2024-05-10".to_string()),
            end_date: Some("2024-05-20".to_string()),
            age_min: Some("25".to_string()),
            ..Default::default()
        },
    ];

    for params in cases {
        let page = engine
            .fetch_page(&spec(params.clone()), &SortSpec::default(), &PageSpec::default())
            .await
            .unwrap();
        let summary = engine.summarize(&spec(params)).await.unwrap();
        assert_eq!(
            summary.total_records as usize, page.pagination.total_documents,
            "summary and retriever disagree on the matching set size"
        );
    }
}

#[tokio::test]
async fn union_of_all_pages_reconstructs_matching_set() {
    let engine = engine();
    let params = QueryParams {
        region: Some("North,West".to_string()),
        ..Default::default()
    };
    let limit = 7;

    let first = engine
        .fetch_page(
            &spec(params.clone()),
            &SortSpec::default(),
            &PageSpec::new(1, limit),
        )
        .await
        .unwrap();
    let total = first.pagination.total_documents;
    let total_pages = first.pagination.total_pages;
    assert!(total > limit, "fixture should span multiple pages");

    let mut seen = HashSet::new();
    for page_no in 1..=total_pages {
        let page = engine
            .fetch_page(
                &spec(params.clone()),
                &SortSpec::default(),
                &PageSpec::new(page_no, limit),
            )
            .await
            .unwrap();
        for tx in page.data {
            assert!(
                seen.insert(tx.transaction_id),
                "record {} appeared on two pages",
                tx.transaction_id
            );
        }
    }
    assert_eq!(seen.len(), total, "pages omitted records");
}

#[tokio::test]
async fn facet_lists_do_not_depend_on_active_filters() {
    let engine = engine();

    let before = engine.filter_options().await.unwrap();

    // narrow the result set hard; facet lists must not move
    let params = QueryParams {
        region: Some("North".to_string()),
        category: Some("Beauty".to_string()),
        ..Default::default()
    };
    engine
        .fetch_page(&spec(params), &SortSpec::default(), &PageSpec::default())
        .await
        .unwrap();

    let after = engine.filter_options().await.unwrap();
    assert_eq!(before, after);
    // values the current filter would exclude are still offered
    assert!(after.regions.contains(&"South".to_string()));
    assert!(after.categories.contains(&"Electronics".to_string()));
}

#[tokio::test]
async fn facet_lists_are_sorted_and_deduplicated() {
    let engine = engine();
    let options = engine.filter_options().await.unwrap();

    for list in [
        &options.regions,
        &options.categories,
        &options.statuses,
        &options.payment_methods,
        &options.delivery_types,
        &options.brands,
        &options.tags,
    ] {
        let mut sorted = list.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(list, &sorted);
    }

    // tag strings are split into individual tokens
    assert!(options.tags.contains(&"organic".to_string()));
    assert!(options.tags.contains(&"skincare".to_string()));
    assert!(!options.tags.iter().any(|t| t.contains(',')));
}

#[tokio::test]
async fn identical_queries_yield_identical_results() {
    let engine = engine();
    let params = QueryParams {
        category: Some("Electronics".to_string()),
        sort_by: Some("amount".to_string()),
        ..Default::default()
    };
    let sort = SortSpec::from_params(Some("amount"), Some("asc"));

    let first = engine
        .fetch_page(&spec(params.clone()), &sort, &PageSpec::new(2, 5))
        .await
        .unwrap();
    let second = engine
        .fetch_page(&spec(params.clone()), &sort, &PageSpec::new(2, 5))
        .await
        .unwrap();
    assert_eq!(first.data, second.data);
    assert_eq!(first.pagination, second.pagination);

    let s1 = engine.summarize(&spec(params.clone())).await.unwrap();
    let s2 = engine.summarize(&spec(params)).await.unwrap();
    assert_eq!(s1, s2);

    let f1 = engine.filter_options().await.unwrap();
    let f2 = engine.filter_options().await.unwrap();
    assert_eq!(f1, f2);
}

#[tokio::test]
async fn page_beyond_total_pages_is_empty_with_no_next() {
    let engine = engine();
    let page = engine
        .fetch_page(
            &FilterSpec::default(),
            &SortSpec::default(),
            &PageSpec::new(999, 10),
        )
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert!(!page.pagination.has_next_page);
    assert!(page.pagination.has_prev_page);
    assert_eq!(page.pagination.total_documents, 57);
}

#[tokio::test]
async fn oversized_limit_is_clamped_to_maximum() {
    let engine = engine();
    let page = engine
        .fetch_page(
            &FilterSpec::default(),
            &SortSpec::default(),
            &PageSpec::new(1, 500),
        )
        .await
        .unwrap();
    assert_eq!(page.pagination.limit, 100);
    assert_eq!(page.data.len(), 57);
}

#[tokio::test]
async fn sorting_is_stable_across_equal_keys() {
    let engine = engine();
    // every record has FinalAmount 90: the page must come back in store order
    let sort = SortSpec {
        key: SortKey::FinalAmount,
        order: SortOrder::Desc,
    };
    let page = engine
        .fetch_page(&FilterSpec::default(), &sort, &PageSpec::new(1, 100))
        .await
        .unwrap();
    let ids: Vec<i64> = page.data.iter().map(|t| t.transaction_id).collect();
    assert_eq!(ids, (1..=57).collect::<Vec<i64>>());
}

#[tokio::test]
async fn region_scenario_from_single_record() {
    let engine = QueryEngine::new(Arc::new(InMemoryTransactionStore::new(vec![record(
        1, 1, "North", "Beauty", "", 3, 100.0, 90.0,
    )])));

    let matched = engine
        .fetch_page(
            &spec(QueryParams {
                region: Some("North,South".to_string()),
                ..Default::default()
            }),
            &SortSpec::default(),
            &PageSpec::default(),
        )
        .await
        .unwrap();
    assert_eq!(matched.data.len(), 1);

    let missed = engine
        .summarize(&spec(QueryParams {
            region: Some("East".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();
    assert_eq!(missed.total_units, 0);
    assert_eq!(missed.total_amount, 0.0);
    assert_eq!(missed.total_discount, 0.0);
    assert_eq!(missed.total_records, 0);

    let hit = engine.summarize(&FilterSpec::default()).await.unwrap();
    assert_eq!(hit.total_units, 3);
    assert!((hit.total_amount - 90.0).abs() < f64::EPSILON);
    assert!((hit.total_discount - 10.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn tags_scenario_substring_match_and_split_facets() {
    let engine = QueryEngine::new(Arc::new(InMemoryTransactionStore::new(vec![record(
        1,
        1,
        "North",
        "Beauty",
        "organic,skincare",
        1,
        10.0,
        10.0,
    )])));

    let matched = engine
        .fetch_page(
            &spec(QueryParams {
                tags: Some("skincare".to_string()),
                ..Default::default()
            }),
            &SortSpec::default(),
            &PageSpec::default(),
        )
        .await
        .unwrap();
    assert_eq!(matched.pagination.total_documents, 1);

    let missed = engine
        .fetch_page(
            &spec(QueryParams {
                tags: Some("cosmetic".to_string()),
                ..Default::default()
            }),
            &SortSpec::default(),
            &PageSpec::default(),
        )
        .await
        .unwrap();
    assert_eq!(missed.pagination.total_documents, 0);

    let options = engine.filter_options().await.unwrap();
    assert_eq!(options.tags, vec!["organic".to_string(), "skincare".to_string()]);
}

#[tokio::test]
async fn numeric_search_matches_id_when_no_name_contains_it() {
    let records = vec![
        record(42, 1, "North", "Beauty", "", 1, 10.0, 10.0),
        record(7, 2, "South", "Beauty", "", 1, 10.0, 10.0),
    ];
    // customer/product names are "Customer 42" etc., so rename them to
    // keep the term out of every name
    let records: Vec<Transaction> = records
        .into_iter()
        .map(|mut tx| {
            tx.customer_name = format!("Shopper {}", tx.transaction_id % 7);
            tx.product_name = "Soap".to_string();
            tx
        })
        .collect();
    let engine = QueryEngine::new(Arc::new(InMemoryTransactionStore::new(records)));

    let page = engine
        .fetch_page(
            &spec(QueryParams {
                search: Some("42".to_string()),
                ..Default::default()
            }),
            &SortSpec::default(),
            &PageSpec::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].transaction_id, 42);
}

#[tokio::test]
async fn no_filters_matches_every_record() {
    let engine = engine();
    let summary = engine.summarize(&FilterSpec::default()).await.unwrap();
    assert_eq!(summary.total_records, 57);
}
