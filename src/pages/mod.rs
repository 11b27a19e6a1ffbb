mod product_detail;
mod product_form;
mod products;

pub use product_detail::ProductDetail;
pub use product_form::ProductForm;
pub use products::Products;
