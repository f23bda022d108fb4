//! `PgCustomerStore` tests against a live database

use pretty_assertions::assert_eq;

use customer_search::backend::customers::{CustomerFilter, CustomerStore, PgCustomerStore};
use customer_search::backend::database::seed_customers;

use crate::common::database::TestDatabase;

async fn seeded_store() -> Option<(TestDatabase, PgCustomerStore)> {
    let db = TestDatabase::connect().await?;
    let store = PgCustomerStore::new(db.pool().clone());
    let inserted = seed_customers(&store).await.expect("Failed to seed customers");
    assert_eq!(inserted, 11);
    Some((db, store))
}

fn by_name(name: &str) -> CustomerFilter {
    CustomerFilter::new(Some(name.to_string()), None, None)
}

#[tokio::test]
async fn test_search_name_substring() {
    let Some((_db, store)) = seeded_store().await else {
        return;
    };

    let found = store.search(&by_name("John")).await.unwrap();
    let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Robert Johnson"]);
}

#[tokio::test]
async fn test_search_account_number_loads_holdings() {
    let Some((_db, store)) = seeded_store().await else {
        return;
    };

    let filter = CustomerFilter::new(None, None, Some("1234567890".to_string()));
    let found = store.search(&filter).await.unwrap();

    assert_eq!(found.len(), 1);
    let john = &found[0];
    assert_eq!(john.id, 1);
    assert_eq!(john.name, "John Doe");
    assert_eq!(john.bank_accounts.len(), 1);
    assert_eq!(john.bank_accounts[0].account_number, "1234567890");
    assert_eq!(john.pockets[0].name, "Savings");
    assert_eq!(john.pockets[0].balance, 500.0);
    assert_eq!(john.term_deposits[0].amount, 2000.0);
    assert_eq!(john.term_deposits[0].duration, 12);
}

#[tokio::test]
async fn test_search_like_metacharacters_are_literal() {
    let Some((_db, store)) = seeded_store().await else {
        return;
    };

    assert!(store.search(&by_name("%")).await.unwrap().is_empty());
    assert!(store.search(&by_name("J_hn")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_is_case_sensitive() {
    let Some((_db, store)) = seeded_store().await else {
        return;
    };

    assert!(store.search(&by_name("john doe")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seed_skips_populated_table() {
    let Some((_db, store)) = seeded_store().await else {
        return;
    };

    assert_eq!(seed_customers(&store).await.unwrap(), 0);
    assert_eq!(store.count().await.unwrap(), 11);
}
