/**
 * Seed Data
 *
 * The initial set of customers loaded by `--seed`. Seeding only runs against
 * an empty customers table, so running it twice is harmless.
 */

use crate::backend::customers::db::CustomerStore;
use crate::backend::database::StoreError;
use crate::shared::NewCustomer;

/// The fixed customer data set
pub fn default_customers() -> Vec<NewCustomer> {
    vec![
        NewCustomer::single("John Doe", "john@example.com", ("1234567890", 1000.0), ("Savings", 500.0), (2000.0, 12)),
        NewCustomer::single("Jane Smith", "jane@example.com", ("2345678901", 2500.0), ("Emergency", 800.0), (5000.0, 24)),
        NewCustomer::single("Robert Johnson", "robert@example.com", ("3456789012", 3200.0), ("Vacation", 1200.0), (10000.0, 36)),
        NewCustomer::single("Emily Davis", "emily@example.com", ("4567890123", 4300.0), ("Education", 2000.0), (3500.0, 6)),
        NewCustomer::single("Michael Wilson", "michael@example.com", ("5678901234", 7500.0), ("Car", 3000.0), (15000.0, 48)),
        NewCustomer::single("Sarah Brown", "sarah@example.com", ("6789012345", 1800.0), ("House", 5000.0), (8000.0, 18)),
        NewCustomer::single("David Lee", "david@example.com", ("7890123456", 9200.0), ("Gadgets", 700.0), (6000.0, 9)),
        NewCustomer::single("Jennifer Taylor", "jennifer@example.com", ("8901234567", 4100.0), ("Travel", 1500.0), (12000.0, 30)),
        NewCustomer::single("Kevin Martinez", "kevin@example.com", ("9012345678", 6700.0), ("Business", 4500.0), (25000.0, 60)),
        NewCustomer::single("Lisa Anderson", "lisa@example.com", ("0123456789", 3400.0), ("Wedding", 7000.0), (9500.0, 15)),
        NewCustomer::single("Thomas Wright", "thomas@example.com", ("1122334455", 5600.0), ("Retirement", 10000.0), (30000.0, 72)),
    ]
}

/// Insert the default customers if the store has none
///
/// Returns the number of customers inserted.
pub async fn seed_customers(store: &dyn CustomerStore) -> Result<usize, StoreError> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::info!("Skipping seed: {} customers already present", existing);
        return Ok(0);
    }

    let customers = default_customers();
    let total = customers.len();
    for customer in customers {
        store.insert(customer).await?;
    }

    tracing::info!("Seeded {} customers", total);
    Ok(total)
}
