use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::models::Product;

/// Shared product state. Components read it through [`PRODUCTS`]; all
/// mutation goes through the action functions below.
#[derive(Clone, Default, PartialEq)]
pub struct ProductState {
    pub items: Vec<Product>,
    pub total: usize,
    pub loading: bool,
}

pub static PRODUCTS: GlobalSignal<ProductState> = Signal::global(ProductState::default);

// Sequence number of the most recent page fetch. Responses that lost the
// race against a newer request must not land in the store.
static FETCH_SEQ: GlobalSignal<u64> = Signal::global(|| 0);

/// Load one page of products into the store.
///
/// While the request is in flight the previous items stay visible behind
/// the loading flag. A failed fetch clears the flag and leaves whatever the
/// store already holds.
pub async fn load_page(skip: usize, limit: usize) {
    let seq = {
        let mut counter = FETCH_SEQ.write();
        *counter += 1;
        *counter
    };
    PRODUCTS.write().loading = true;

    let client = ApiClient::new();
    let result = client.fetch_products(skip, limit).await;

    if *FETCH_SEQ.read() != seq {
        // A newer request owns the store now.
        return;
    }

    let mut state = PRODUCTS.write();
    state.loading = false;
    match result {
        Ok(page) => {
            state.items = page.products;
            state.total = page.total;
        }
        Err(err) => {
            log::warn!("failed to load products (skip={skip}, limit={limit}): {err}");
        }
    }
}

/// Delete a product, then reload the current page so the row set and the
/// server-reported total stay in sync. A failed delete is logged; the row
/// simply survives the next refetch.
pub async fn remove_product(id: u32, skip: usize, limit: usize) {
    let client = ApiClient::new();
    match client.delete_product(id).await {
        Ok(_) => {
            log::info!("deleted product {id}");
            load_page(skip, limit).await;
        }
        Err(err) => {
            log::warn!("failed to delete product {id}: {err}");
        }
    }
}
