/**
 * Customer Search Service
 *
 * Rejects empty filters before they reach the store, then delegates to
 * whichever `CustomerStore` the server was built with. An empty result is a
 * successful search; deciding that "nothing found" means 404 is the
 * handler's job.
 */

use std::sync::Arc;
use thiserror::Error;

use crate::backend::customers::db::CustomerStore;
use crate::backend::customers::filter::CustomerFilter;
use crate::backend::database::StoreError;
use crate::shared::Customer;

#[derive(Debug, Error)]
pub enum SearchError {
    /// No name, email or account number supplied
    #[error("at least one search filter is required")]
    MissingFilter,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    /// Find customers matching every supplied field of `filter`
    pub async fn search(&self, filter: &CustomerFilter) -> Result<Vec<Customer>, SearchError> {
        if filter.is_empty() {
            return Err(SearchError::MissingFilter);
        }

        let customers = self.store.search(filter).await?;
        tracing::debug!("Customer search matched {} records", customers.len());
        Ok(customers)
    }
}
