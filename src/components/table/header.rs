use dioxus::prelude::*;

use super::columns::ColumnDef;
use crate::styles::combinations::*;

/// One header row, one cell per column, in declared order.
#[component]
pub fn TableHeader(columns: Vec<ColumnDef>) -> Element {
    rsx! {
        thead {
            class: TABLE_HEADER,
            tr {
                for col in columns {
                    th {
                        key: "{col.key}",
                        class: TABLE_HEADER_CELL,
                        "{col.header}"
                    }
                }
            }
        }
    }
}
