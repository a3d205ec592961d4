//! Data table of the jobs a user applied to.

use board_core::{Application, AppliedJobsTable, PAGE_SIZE_OPTIONS};
use dioxus::prelude::*;

use super::ApplicationStatusBadge;

/// Props for AppliedJobsTableView component.
#[derive(Props, Clone, PartialEq)]
pub struct AppliedJobsTableViewProps {
    /// Applications to list, already loaded.
    pub applications: Vec<Application>,
}

/// Paginated, searchable, selectable table of applications.
#[component]
pub fn AppliedJobsTableView(props: AppliedJobsTableViewProps) -> Element {
    let mut table = use_signal(AppliedJobsTable::new);
    let applications = props.applications.clone();

    let title = table.read().title(&applications);
    let total = table.read().rows(&applications).len();
    let rows = table.read().page_rows(&applications);
    let range = table.read().range_label(total);
    let page = table.read().page(total);
    let page_count = table.read().page_count(total);
    let per_page = table.read().per_page();
    let search = table.read().search().to_string();
    let selected_count = table.read().selected_count();
    let all_selected = !rows.is_empty() && rows.iter().all(|r| table.read().is_selected(&r.id));

    let rows_for_toggle = rows.clone();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "{title}" }
                div { class: "table-subheader",
                    if selected_count > 0 {
                        span { class: "card-count", "{selected_count} selected" }
                    }
                    input {
                        class: "table-search",
                        r#type: "search",
                        placeholder: "Search company, title or status",
                        value: "{search}",
                        oninput: move |event| table.write().set_search(event.value()),
                    }
                }
            }

            if rows.is_empty() {
                div { class: "empty-state",
                    p { "No applications to show" }
                }
            } else {
                div { class: "table-container",
                    table { class: "data-table",
                        thead {
                            tr {
                                th {
                                    input {
                                        r#type: "checkbox",
                                        checked: all_selected,
                                        onchange: move |_| table.write().toggle_all(&rows_for_toggle),
                                    }
                                }
                                th { "Apply Date" }
                                th { "Company" }
                                th { "Job title" }
                                th { "Job Salary" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for row in rows.into_iter() {
                                {
                                    let row_id = row.id;
                                    let selected = table.read().is_selected(&row_id);
                                    let row_class = if selected { "data-row data-row-selected" } else { "data-row" };

                                    rsx! {
                                        tr { key: "{row_id}", class: "{row_class}",
                                            td {
                                                input {
                                                    r#type: "checkbox",
                                                    checked: selected,
                                                    onchange: move |_| table.write().toggle_row(row_id),
                                                }
                                            }
                                            td { class: "tabular-nums", "{row.apply_date}" }
                                            td { "{row.company}" }
                                            td { "{row.title}" }
                                            td { class: "tabular-nums", "{row.salary}" }
                                            td {
                                                ApplicationStatusBadge { text: row.status.clone(), emphasis: row.emphasis }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "table-footer",
                label { class: "table-page-size",
                    "Rows per page: "
                    select {
                        value: "{per_page}",
                        onchange: move |event| {
                            if let Ok(n) = event.value().parse::<usize>() {
                                table.write().set_per_page(n);
                            }
                        },
                        for size in PAGE_SIZE_OPTIONS {
                            option { value: "{size}", selected: size == per_page, "{size}" }
                        }
                    }
                }
                span { class: "text-muted tabular-nums", "{range}" }
                button {
                    class: "btn btn-small",
                    disabled: page == 0,
                    onclick: move |_| table.write().prev_page(total),
                    "‹"
                }
                button {
                    class: "btn btn-small",
                    disabled: page + 1 >= page_count,
                    onclick: move |_| table.write().next_page(total),
                    "›"
                }
            }
        }
    }
}
