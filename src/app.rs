use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use crate::components::layout::AppLayout;
use crate::components::table::DEFAULT_PAGE_SIZE;
use crate::pages::{ProductDetail, ProductForm, Products};

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::ProductsPage { page: 0, size: DEFAULT_PAGE_SIZE })]
    #[route("/products?:page&:size")]
    ProductsPage { page: usize, size: usize },
    #[route("/products/new")]
    ProductCreatePage {},
    #[route("/products/:id")]
    ProductDetailPage { id: u32 },
    #[route("/products/:id/edit")]
    ProductEditPage { id: u32 },
}

#[component]
pub fn ProductsPage(page: usize, size: usize) -> Element {
    rsx! { AppLayout { Products { page, size } } }
}

#[component]
pub fn ProductCreatePage() -> Element {
    rsx! { AppLayout { ProductForm { id: None::<u32> } } }
}

#[component]
pub fn ProductDetailPage(id: u32) -> Element {
    rsx! { AppLayout { ProductDetail { id } } }
}

#[component]
pub fn ProductEditPage(id: u32) -> Element {
    rsx! { AppLayout { ProductForm { id: Some(id) } } }
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
