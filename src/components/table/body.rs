use dioxus::prelude::*;

use super::columns::ColumnDef;
use crate::models::Product;
use crate::styles::combinations::*;

/// One row per product, one cell per column, each cell delegated to the
/// column's renderer. An empty row set renders an empty body.
#[component]
pub fn TableBody(columns: Vec<ColumnDef>, rows: Vec<Product>) -> Element {
    rsx! {
        tbody {
            for product in rows {
                tr {
                    key: "{product.id}",
                    class: TABLE_ROW,
                    for col in columns.iter() {
                        td {
                            key: "{col.key}",
                            class: TABLE_CELL,
                            {col.cell.call(product.clone())}
                        }
                    }
                }
            }
        }
    }
}
