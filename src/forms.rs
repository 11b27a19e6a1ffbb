use std::collections::BTreeMap;

use crate::models::{Dimensions, Product};

/// Constraint on a single form field, checked against the raw input text.
/// All checks are field-local.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Non-empty text
    RequiredText,
    /// Non-empty and parses as a number
    RequiredNumber,
    /// Non-empty, parses as a number, strictly greater than zero
    PositiveNumber,
    /// Non-empty, parses as a number within `[min, max]` inclusive
    BoundedNumber { min: f64, max: f64 },
}

impl Constraint {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Constraint::RequiredText)
    }

    /// Returns the violation message, or `None` when the value passes.
    fn check(&self, label: &str, raw: &str) -> Option<String> {
        if raw.is_empty() {
            return Some(format!("{label} is required"));
        }
        match self {
            Constraint::RequiredText => None,
            Constraint::RequiredNumber => match raw.parse::<f64>() {
                Ok(_) => None,
                Err(_) => Some(format!("{label} must be a number")),
            },
            Constraint::PositiveNumber => match raw.parse::<f64>() {
                Ok(n) if n > 0.0 => None,
                Ok(_) => Some(format!("{label} must be a positive number")),
                Err(_) => Some(format!("{label} must be a number")),
            },
            Constraint::BoundedNumber { min, max } => match raw.parse::<f64>() {
                Ok(n) if (*min..=*max).contains(&n) => None,
                Ok(_) => Some(format!("{label} must be between {min} and {max}")),
                Err(_) => Some(format!("{label} must be a number")),
            },
        }
    }
}

/// One field of the product form. `path` uses dots for the nested
/// dimensions object so the whole form stays a flat value map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub path: &'static str,
    pub label: &'static str,
    pub constraint: Constraint,
}

pub const PRODUCT_RULES: &[FieldRule] = &[
    FieldRule { path: "title", label: "Title", constraint: Constraint::RequiredText },
    FieldRule { path: "description", label: "Description", constraint: Constraint::RequiredText },
    FieldRule { path: "category", label: "Category", constraint: Constraint::RequiredText },
    FieldRule { path: "price", label: "Price", constraint: Constraint::PositiveNumber },
    FieldRule { path: "discountPercentage", label: "Discount percentage", constraint: Constraint::RequiredNumber },
    FieldRule { path: "rating", label: "Rating", constraint: Constraint::BoundedNumber { min: 0.0, max: 5.0 } },
    FieldRule { path: "stock", label: "Stock", constraint: Constraint::RequiredNumber },
    FieldRule { path: "tags", label: "Tags", constraint: Constraint::RequiredText },
    FieldRule { path: "brand", label: "Brand", constraint: Constraint::RequiredText },
    FieldRule { path: "sku", label: "SKU", constraint: Constraint::RequiredText },
    FieldRule { path: "weight", label: "Weight", constraint: Constraint::RequiredNumber },
    FieldRule { path: "dimensions.width", label: "Width", constraint: Constraint::RequiredNumber },
    FieldRule { path: "dimensions.height", label: "Height", constraint: Constraint::RequiredNumber },
    FieldRule { path: "dimensions.depth", label: "Depth", constraint: Constraint::RequiredNumber },
    FieldRule { path: "warrantyInformation", label: "Warranty information", constraint: Constraint::RequiredText },
    FieldRule { path: "shippingInformation", label: "Shipping information", constraint: Constraint::RequiredText },
    FieldRule { path: "availabilityStatus", label: "Availability status", constraint: Constraint::RequiredText },
    FieldRule { path: "returnPolicy", label: "Return policy", constraint: Constraint::RequiredText },
    FieldRule { path: "minimumOrderQuantity", label: "Minimum order quantity", constraint: Constraint::RequiredNumber },
];

/// Raw form values, keyed by field path.
pub type FormValues = BTreeMap<&'static str, String>;

/// Every field defaults to the empty string, the nested dimension
/// sub-fields included.
pub fn default_values() -> FormValues {
    PRODUCT_RULES.iter().map(|rule| (rule.path, String::new())).collect()
}

/// Check every rule against the values. Returns one message per violated
/// field; an empty map means the form may be submitted.
pub fn validate(values: &FormValues) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();
    for rule in PRODUCT_RULES {
        let raw = values.get(rule.path).map(String::as_str).unwrap_or("");
        if let Some(message) = rule.constraint.check(rule.label, raw.trim()) {
            errors.insert(rule.path, message);
        }
    }
    errors
}

/// Flatten a product into form values for the edit flow.
pub fn product_to_values(product: &Product) -> FormValues {
    let mut values = default_values();
    values.insert("title", product.title.clone());
    values.insert("description", product.description.clone());
    values.insert("category", product.category.clone());
    values.insert("price", product.price.to_string());
    values.insert("discountPercentage", product.discount_percentage.to_string());
    values.insert("rating", product.rating.to_string());
    values.insert("stock", product.stock.to_string());
    values.insert("tags", product.tags.join(", "));
    values.insert("brand", product.brand.clone());
    values.insert("sku", product.sku.clone());
    values.insert("weight", product.weight.to_string());
    values.insert("dimensions.width", product.dimensions.width.to_string());
    values.insert("dimensions.height", product.dimensions.height.to_string());
    values.insert("dimensions.depth", product.dimensions.depth.to_string());
    values.insert("warrantyInformation", product.warranty_information.clone());
    values.insert("shippingInformation", product.shipping_information.clone());
    values.insert("availabilityStatus", product.availability_status.clone());
    values.insert("returnPolicy", product.return_policy.clone());
    values.insert("minimumOrderQuantity", product.minimum_order_quantity.to_string());
    values
}

/// Build the submission payload from the form values. Callers run
/// [`validate`] first; a value that still fails to parse falls back to zero.
pub fn values_to_product(values: &FormValues, id: u32) -> Product {
    let text = |path: &str| values.get(path).cloned().unwrap_or_default();
    let number = |path: &str| text(path).trim().parse::<f64>().unwrap_or_default();

    Product {
        id,
        title: text("title"),
        description: text("description"),
        category: text("category"),
        price: number("price"),
        discount_percentage: number("discountPercentage"),
        rating: number("rating"),
        stock: number("stock") as i64,
        tags: text("tags")
            .split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect(),
        brand: text("brand"),
        sku: text("sku"),
        weight: number("weight"),
        dimensions: Dimensions {
            width: number("dimensions.width"),
            height: number("dimensions.height"),
            depth: number("dimensions.depth"),
        },
        warranty_information: text("warrantyInformation"),
        shipping_information: text("shippingInformation"),
        availability_status: text("availabilityStatus"),
        return_policy: text("returnPolicy"),
        minimum_order_quantity: number("minimumOrderQuantity") as u32,
        thumbnail: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_values() -> FormValues {
        let mut values = default_values();
        values.insert("title", "Essence Mascara".to_string());
        values.insert("description", "Lash princess".to_string());
        values.insert("category", "beauty".to_string());
        values.insert("price", "9.99".to_string());
        values.insert("discountPercentage", "7.17".to_string());
        values.insert("rating", "4.94".to_string());
        values.insert("stock", "5".to_string());
        values.insert("tags", "beauty, mascara".to_string());
        values.insert("brand", "Essence".to_string());
        values.insert("sku", "RCH45Q1A".to_string());
        values.insert("weight", "2".to_string());
        values.insert("dimensions.width", "23.17".to_string());
        values.insert("dimensions.height", "14.43".to_string());
        values.insert("dimensions.depth", "28.01".to_string());
        values.insert("warrantyInformation", "1 month warranty".to_string());
        values.insert("shippingInformation", "Ships in 1 month".to_string());
        values.insert("availabilityStatus", "Low Stock".to_string());
        values.insert("returnPolicy", "30 days return policy".to_string());
        values.insert("minimumOrderQuantity", "24".to_string());
        values
    }

    #[test]
    fn test_defaults_are_all_empty_strings() {
        let values = default_values();
        assert_eq!(values.len(), PRODUCT_RULES.len());
        assert!(values.values().all(String::is_empty));
        assert!(values.contains_key("dimensions.width"));
        assert!(values.contains_key("dimensions.height"));
        assert!(values.contains_key("dimensions.depth"));
    }

    #[test]
    fn test_filled_form_passes() {
        assert!(validate(&filled_values()).is_empty());
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let errors = validate(&default_values());
        assert_eq!(errors.len(), PRODUCT_RULES.len());
        assert_eq!(errors.get("title"), Some(&"Title is required".to_string()));
    }

    #[test]
    fn test_rating_above_bound_fails() {
        let mut values = filled_values();
        values.insert("rating", "6".to_string());
        let errors = validate(&values);
        assert_eq!(
            errors.get("rating"),
            Some(&"Rating must be between 0 and 5".to_string())
        );
    }

    #[test]
    fn test_rating_at_bound_passes() {
        let mut values = filled_values();
        values.insert("rating", "5".to_string());
        assert!(!validate(&values).contains_key("rating"));
    }

    #[test]
    fn test_negative_price_fails_positivity() {
        let mut values = filled_values();
        values.insert("price", "-1".to_string());
        let errors = validate(&values);
        assert_eq!(
            errors.get("price"),
            Some(&"Price must be a positive number".to_string())
        );
    }

    #[test]
    fn test_non_numeric_weight_fails() {
        let mut values = filled_values();
        values.insert("weight", "heavy".to_string());
        let errors = validate(&values);
        assert_eq!(
            errors.get("weight"),
            Some(&"Weight must be a number".to_string())
        );
    }

    #[test]
    fn test_validation_is_field_local() {
        // Breaking one field must not flag its neighbours.
        let mut values = filled_values();
        values.insert("rating", "6".to_string());
        let errors = validate(&values);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_values_round_trip_through_product() {
        let product = values_to_product(&filled_values(), 42);
        assert_eq!(product.id, 42);
        assert_eq!(product.price, 9.99);
        assert_eq!(product.tags, vec!["beauty".to_string(), "mascara".to_string()]);
        assert_eq!(product.dimensions.depth, 28.01);

        let values = product_to_values(&product);
        assert_eq!(values.get("title"), Some(&"Essence Mascara".to_string()));
        assert_eq!(values.get("dimensions.width"), Some(&"23.17".to_string()));
        assert!(validate(&values).is_empty());
    }
}
