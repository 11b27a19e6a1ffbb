use dioxus::prelude::*;
use dioxus_router::{use_navigator, Link};

use crate::app::Route;
use crate::components::common::LoadingState;
use crate::components::confirm::{ConfirmDialog, DeleteDialog};
use crate::components::icon::Icon;
use crate::components::page::{PageContainer, PageTitle};
use crate::components::table::{
    product_columns, PageCursor, PaginationControls, TableBody, TableHeader,
};
use crate::store::{self, PRODUCTS};
use crate::styles::combinations::*;

/// Paginated product table. Owns the page cursor (mirrored into the URL),
/// requests the matching server-side page through the store, and wires the
/// row actions to the delete dialog.
#[component]
pub fn Products(page: ReadOnlySignal<usize>, size: ReadOnlySignal<usize>) -> Element {
    let navigator = use_navigator();
    let mut dialog = use_signal(DeleteDialog::default);

    // Column list is built once per mount; cells only ever key off the
    // row's id, so the same list serves every page.
    let columns = use_hook(move || {
        product_columns(EventHandler::new(move |id: u32| dialog.write().request(id)))
    });

    // Refetch whenever the cursor changes, jumping back to the top of the
    // viewport alongside the new page.
    use_effect(move || {
        let cursor = PageCursor::from_query(page(), size());
        spawn(async move {
            store::load_page(cursor.skip(), cursor.size).await;
        });
        scroll_to_top();
    });

    let cursor = PageCursor::from_query(page(), size());

    let on_page_change = move |next: PageCursor| {
        navigator.replace(Route::ProductsPage { page: next.index, size: next.size });
    };

    let on_cancel = move |_| dialog.write().cancel();
    // The dialog closes as soon as the delete is dispatched; a failed
    // delete leaves the row in place until the next refetch.
    let on_confirm = move |_| {
        if let Some(id) = dialog.write().confirm() {
            let cursor = PageCursor::from_query(page(), size());
            spawn(async move {
                store::remove_product(id, cursor.skip(), cursor.size).await;
            });
        }
    };

    let state = PRODUCTS.read();

    rsx! {
        PageContainer {
            div {
                class: "flex items-start justify-between",
                PageTitle {
                    title: "Products".to_string(),
                    subtitle: Some("Manage the product catalog".to_string()),
                    icon: Some(&icondata::AiAppstoreOutlined),
                }
                Link {
                    to: Route::ProductCreatePage {},
                    class: "{BUTTON_PRIMARY} flex items-center gap-2",
                    Icon { icon: &icondata::AiPlusOutlined, class: "w-4 h-4" }
                    span { "Add Product" }
                }
            }

            if state.loading {
                LoadingState { message: Some("Loading products...".to_string()) }
            } else {
                div {
                    class: TABLE_CONTAINER,
                    table {
                        class: TABLE,
                        TableHeader { columns: columns.clone() }
                        TableBody { columns: columns.clone(), rows: state.items.clone() }
                    }
                    PaginationControls {
                        cursor,
                        total: state.total,
                        on_change: on_page_change,
                    }
                }
            }

            if dialog.read().is_open() {
                ConfirmDialog {
                    title: "product".to_string(),
                    on_cancel: on_cancel,
                    on_confirm: on_confirm,
                }
            }
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
