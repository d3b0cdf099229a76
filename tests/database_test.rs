//! Postgres round-trip tests for the repositories.
//!
//! These need a reachable database (TEST_DATABASE_URL) and are ignored by
//! default; run with `cargo test -- --ignored` against a local Postgres.

mod helpers;

use helpers::*;
use aurum_backend::models::Purity;
use rust_decimal::Decimal;

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_item_create_and_find_roundtrip() {
    let db = TestDatabase::new().await;
    db.cleanup().await;

    let item = sample_item("RING-100", Purity::Gold22K, Decimal::new(105, 1));
    let created = db.item_repo.create(&item).await.expect("create item");
    assert_items_equal(&item, &created);

    let found = db
        .item_repo
        .find_by_id(item.id)
        .await
        .expect("find item")
        .expect("item should exist");
    assert_items_equal(&created, &found);

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_item_list_in_stock() {
    let db = TestDatabase::new().await;
    db.cleanup().await;

    for sku in ["A-1", "A-2", "A-3"] {
        let item = sample_item(sku, Purity::Gold18K, Decimal::new(5, 0));
        db.item_repo.create(&item).await.expect("create item");
    }

    let items = db.item_repo.list_in_stock().await.expect("list items");
    assert_eq!(items.len(), 3);

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_duplicate_sku_rejected() {
    let db = TestDatabase::new().await;
    db.cleanup().await;

    let first = sample_item("DUP-1", Purity::Silver, Decimal::new(20, 0));
    db.item_repo.create(&first).await.expect("create item");

    let second = sample_item("DUP-1", Purity::Silver, Decimal::new(20, 0));
    let result = db.item_repo.create(&second).await;
    assert!(result.is_err(), "unique sku constraint should reject");

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_snapshot_batch_and_latest_per_metal() {
    let db = TestDatabase::new().await;
    db.cleanup().await;

    let older: Vec<_> = Purity::ALL
        .iter()
        .map(|p| sample_snapshot(*p, Decimal::new(1000, 0)))
        .collect();
    db.rate_repo.insert_batch(&older).await.expect("insert batch");

    let newer: Vec<_> = Purity::ALL
        .iter()
        .map(|p| sample_snapshot(*p, Decimal::new(2000, 0)))
        .collect();
    db.rate_repo.insert_batch(&newer).await.expect("insert batch");

    let latest = db.rate_repo.latest_per_metal().await.expect("latest per metal");
    assert_eq!(latest.len(), Purity::ALL.len());
    for row in latest {
        assert_eq!(row.rate_per_gram, Decimal::new(2000, 0));
    }

    db.cleanup().await;
}

#[tokio::test]
#[ignore = "requires a running Postgres"]
async fn test_find_since_orders_newest_first() {
    let db = TestDatabase::new().await;
    db.cleanup().await;

    let rows: Vec<_> = Purity::ALL
        .iter()
        .map(|p| sample_snapshot(*p, Decimal::new(1500, 0)))
        .collect();
    db.rate_repo.insert_batch(&rows).await.expect("insert batch");

    let cutoff = chrono::Utc::now().naive_utc() - chrono::Duration::days(7);
    let since = db.rate_repo.find_since(cutoff).await.expect("find since");

    assert_eq!(since.len(), Purity::ALL.len());
    for pair in since.windows(2) {
        assert!(pair[0].observed_at >= pair[1].observed_at);
    }

    db.cleanup().await;
}
