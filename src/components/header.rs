use dioxus::prelude::*;
use dioxus_router::{use_route, Link};
use icondata::Icon as IconData;

use crate::app::Route;
use crate::components::icon::Icon;
use crate::components::table::DEFAULT_PAGE_SIZE;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            class: "bg-white shadow-sm border-b border-gray-200",
            div {
                class: "px-6 py-4",
                div {
                    class: "flex items-center justify-between",
                    // Logo and Brand
                    div {
                        class: "flex items-center space-x-4",
                        Link {
                            to: Route::ProductsPage { page: 0, size: DEFAULT_PAGE_SIZE },
                            class: "flex items-center space-x-2 text-xl font-bold text-gray-900 hover:text-blue-600",
                            Icon { icon: &icondata::AiShoppingOutlined, class: "w-6 h-6" }
                            span { "Catalog Admin" }
                        }
                    }

                    // Top Navigation Tabs
                    nav {
                        class: "hidden md:flex items-center space-x-1",
                        NavTab {
                            to: Route::ProductsPage { page: 0, size: DEFAULT_PAGE_SIZE },
                            icon: &icondata::AiAppstoreOutlined,
                            label: "Products"
                        }
                        NavTab {
                            to: Route::ProductCreatePage {},
                            icon: &icondata::AiPlusOutlined,
                            label: "Add Product"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavTab(to: Route, icon: &'static IconData, label: &'static str) -> Element {
    let route = use_route::<Route>();
    // Same variant counts as active regardless of its parameters, so the
    // Products tab stays lit while paging.
    let is_active = std::mem::discriminant(&route) == std::mem::discriminant(&to);

    let class_str = if is_active {
        "flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium transition-colors bg-blue-100 text-blue-700 hover:bg-blue-200"
    } else {
        "flex items-center space-x-2 px-3 py-2 rounded-lg text-sm font-medium transition-colors text-gray-700 hover:bg-gray-100 hover:text-gray-900"
    };

    rsx! {
        Link {
            to: to,
            class: class_str,
            Icon { icon, class: "w-4 h-4" }
            span {
                class: "hidden lg:inline",
                "{label}"
            }
        }
    }
}
