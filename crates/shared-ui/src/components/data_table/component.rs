use dioxus::prelude::*;

/// Scrollable table with a fixed header row built from `columns`.
#[component]
pub fn DataTable(columns: Vec<&'static str>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", "{column}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

/// Table body row.
#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

/// Table data cell.
#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row shown when the table has no data.
#[component]
pub fn DataTableEmpty(colspan: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", {children} }
        }
    }
}
