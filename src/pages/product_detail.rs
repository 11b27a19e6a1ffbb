use dioxus::prelude::*;
use dioxus_router::Link;

use crate::api::ApiClient;
use crate::app::Route;
use crate::components::card::Card;
use crate::components::common::{ErrorState, LoadingState};
use crate::components::data::KeyValueList;
use crate::components::icon::Icon;
use crate::components::page::{PageContainer, PageHeader};
use crate::components::table::format_price;
use crate::hooks::use_api_simple;
use crate::models::Product;
use crate::styles::styles::*;

/// Read-only view of a single product.
#[component]
pub fn ProductDetail(id: ReadOnlySignal<u32>) -> Element {
    let state = use_api_simple::<Product>();

    use_effect(move || {
        let id = id();
        let mut loading = state.loading.clone();
        let mut data = state.data.clone();
        spawn(async move {
            loading.set(true);
            let client = ApiClient::new();
            data.set(Some(client.get_product(id).await));
            loading.set(false);
        });
    });

    rsx! {
        PageContainer {
            PageHeader {
                title: "Product Details".to_string(),
                subtitle: None,
            }

            if state.is_loading() {
                Card {
                    title: "Loading",
                    LoadingState { message: Some("Loading product...".to_string()) }
                }
            } else if let Some(Ok(product)) = state.data.read().as_ref() {
                div {
                    class: SPACE_Y_6,
                    Card {
                        title: "Overview",
                        header_right: Some(rsx! {
                            Link {
                                to: Route::ProductEditPage { id: product.id },
                                class: "flex items-center gap-1 text-sm text-blue-600 hover:text-blue-800",
                                Icon { icon: &icondata::AiEditOutlined, class: "w-4 h-4" }
                                span { "Edit" }
                            }
                        }),
                        div {
                            class: "flex flex-col lg:flex-row gap-6",
                            img {
                                src: "{product.thumbnail}",
                                alt: "{product.title}",
                                class: "w-40 h-40 rounded object-cover bg-gray-100",
                            }
                            div {
                                class: "flex-1",
                                KeyValueList {
                                    items: vec![
                                        ("Title:", product.title.clone()),
                                        ("Description:", product.description.clone()),
                                        ("Brand:", product.brand.clone()),
                                        ("Category:", product.category.clone()),
                                        ("SKU:", product.sku.clone()),
                                        ("Tags:", product.tags.join(", ")),
                                    ]
                                }
                            }
                        }
                    }
                    Card {
                        title: "Pricing & Inventory",
                        KeyValueList {
                            items: vec![
                                ("Price:", format_price(product.price)),
                                ("Discount:", format!("{}%", product.discount_percentage)),
                                ("Rating:", product.rating.to_string()),
                                ("Stock:", product.stock.to_string()),
                                ("Availability:", product.availability_status.clone()),
                                ("Minimum order quantity:", product.minimum_order_quantity.to_string()),
                            ]
                        }
                    }
                    Card {
                        title: "Shipping & Policies",
                        KeyValueList {
                            items: vec![
                                (
                                    "Dimensions:",
                                    format!(
                                        "{} x {} x {}",
                                        product.dimensions.width,
                                        product.dimensions.height,
                                        product.dimensions.depth,
                                    ),
                                ),
                                ("Weight:", product.weight.to_string()),
                                ("Warranty:", product.warranty_information.clone()),
                                ("Shipping:", product.shipping_information.clone()),
                                ("Return policy:", product.return_policy.clone()),
                            ]
                        }
                    }
                }
            } else if let Some(Err(err)) = state.data.read().as_ref() {
                Card {
                    title: "Error",
                    ErrorState { error: format!("{:?}", err), title: None }
                }
            }
        }
    }
}
