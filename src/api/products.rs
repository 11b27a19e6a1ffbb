use super::ApiClient;
use crate::models::{Product, ProductPage};
use crate::utils::error::{AppError, Result};

/// Product catalog API
impl ApiClient {
    /// Fetch one page of products. The provider paginates server-side, so
    /// `total` in the response is the authoritative row count.
    pub async fn fetch_products(&self, skip: usize, limit: usize) -> Result<ProductPage> {
        let path = format!("/api/products{}", page_query(skip, limit));
        let response = self.get_request(&path).await?;
        Self::parse_json(&response)
    }

    /// Fetch a single product by id
    pub async fn get_product(&self, id: u32) -> Result<Product> {
        let response = self.get_request(&format!("/api/products/{id}")).await?;
        Self::parse_json(&response)
    }

    /// Create a new product, returning it as the provider stored it
    pub async fn create_product(&self, product: &Product) -> Result<Product> {
        let body = serde_json::to_string(product)
            .map_err(|e| AppError::Api(format!("Failed to serialize product: {}", e)))?;
        let response = self.post_request_with_body("/api/products/add", body).await?;
        Self::parse_json(&response)
    }

    /// Update an existing product
    pub async fn update_product(&self, product: &Product) -> Result<Product> {
        let body = serde_json::to_string(product)
            .map_err(|e| AppError::Api(format!("Failed to serialize product: {}", e)))?;
        let path = format!("/api/products/{}", product.id);
        let response = self.put_request_with_body(&path, body).await?;
        Self::parse_json(&response)
    }

    /// Delete a product by id. The provider echoes the deleted record back.
    pub async fn delete_product(&self, id: u32) -> Result<Product> {
        let response = self.delete_request(&format!("/api/products/{id}")).await?;
        Self::parse_json(&response)
    }
}

/// Query string for a server-side page: `skip` rows already consumed,
/// `limit` rows wanted.
fn page_query(skip: usize, limit: usize) -> String {
    format!("?skip={skip}&limit={limit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_encodes_skip_and_limit() {
        assert_eq!(page_query(20, 10), "?skip=20&limit=10");
    }

    #[test]
    fn test_page_query_first_page() {
        assert_eq!(page_query(0, 10), "?skip=0&limit=10");
    }
}
