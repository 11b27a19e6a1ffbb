use dioxus::prelude::*;
use dioxus_router::Link;

use crate::app::Route;
use crate::components::icon::Icon;
use crate::models::Product;
use crate::styles::combinations::*;

/// How one product field shows up in the table: a stable key, a header
/// label, and a callback rendering the cell for a given row.
#[derive(Clone, PartialEq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub header: &'static str,
    pub cell: Callback<Product, Element>,
}

/// Price cell text: a literal dollar sign in front of the raw value, no
/// separators and no extra rounding.
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

/// Binary status classification: the literal "Low Stock" gets the warning
/// badge, every other value the ok badge.
pub fn status_badge_class(status: &str) -> &'static str {
    if status == "Low Stock" {
        BADGE_WARN
    } else {
        BADGE_OK
    }
}

/// Ordered column list for the product table. The actions column routes by
/// the row's id only; `on_delete` receives the id of the row whose delete
/// affordance was clicked.
pub fn product_columns(on_delete: EventHandler<u32>) -> Vec<ColumnDef> {
    vec![
        ColumnDef {
            key: "thumbnail",
            header: "Product",
            cell: Callback::new(|product: Product| rsx! {
                img {
                    src: "{product.thumbnail}",
                    alt: "{product.title}",
                    class: "w-14 h-14 rounded object-cover",
                }
            }),
        },
        ColumnDef {
            key: "title",
            header: "Name",
            cell: Callback::new(|product: Product| rsx! { "{product.title}" }),
        },
        ColumnDef {
            key: "brand",
            header: "Brand",
            cell: Callback::new(|product: Product| rsx! { "{product.brand}" }),
        },
        ColumnDef {
            key: "category",
            header: "Category",
            cell: Callback::new(|product: Product| rsx! { "{product.category}" }),
        },
        ColumnDef {
            key: "price",
            header: "Price ($)",
            cell: Callback::new(|product: Product| rsx! { "{format_price(product.price)}" }),
        },
        ColumnDef {
            key: "availabilityStatus",
            header: "Status",
            cell: Callback::new(|product: Product| rsx! {
                span {
                    class: status_badge_class(&product.availability_status),
                    "{product.availability_status}"
                }
            }),
        },
        ColumnDef {
            key: "actions",
            header: "Actions",
            cell: Callback::new(move |product: Product| {
                let id = product.id;
                rsx! {
                    div {
                        class: "flex items-center justify-between gap-3",
                        Link {
                            to: Route::ProductDetailPage { id },
                            class: ACTION_ICON,
                            Icon { icon: &icondata::AiEyeOutlined, class: "w-4 h-4" }
                        }
                        Link {
                            to: Route::ProductEditPage { id },
                            class: ACTION_ICON,
                            Icon { icon: &icondata::AiEditOutlined, class: "w-4 h-4" }
                        }
                        button {
                            class: ACTION_ICON,
                            onclick: move |_| on_delete.call(id),
                            Icon { icon: &icondata::AiDeleteOutlined, class: "w-4 h-4" }
                        }
                    }
                }
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_formats_with_dollar_sign_and_raw_value() {
        assert_eq!(format_price(9.99), "$9.99");
        assert_eq!(format_price(10.0), "$10");
        assert_eq!(format_price(1234.5), "$1234.5");
    }

    #[test]
    fn test_low_stock_gets_warning_badge() {
        assert_eq!(status_badge_class("Low Stock"), BADGE_WARN);
    }

    #[test]
    fn test_any_other_status_gets_ok_badge() {
        assert_eq!(status_badge_class("In Stock"), BADGE_OK);
        assert_eq!(status_badge_class("Out of Stock"), BADGE_OK);
        assert_eq!(status_badge_class("low stock"), BADGE_OK);
        assert_eq!(status_badge_class(""), BADGE_OK);
    }
}
