use common::view_model::{Avatar, LeadRow, SortColumn};
use yew::prelude::*;

use super::{DataTable, SortDirection};

/// Column count including the avatar and action columns.
const COLUMN_COUNT: usize = 8;

/// Callbacks the table raises towards its owner.
pub struct DataTableView<'a> {
    pub on_select: &'a Callback<String>,
    pub on_sort: &'a Callback<SortColumn>,
    pub on_page: &'a Callback<usize>,
}

impl DataTableView<'_> {
    pub fn render(&self, table: Option<&DataTable>) -> Html {
        let Some(table) = table else {
            return html! { <table id="usersTable" class="table table-hover align-middle"></table> };
        };

        html! {
            <div class="table-responsive">
                <table id="usersTable" class="table table-hover align-middle">
                    <thead>{ self.header(table) }</thead>
                    <tbody>
                        {
                            if let Some(placeholder) = table.config.placeholder {
                                html! {
                                    <tr>
                                        <td colspan={COLUMN_COUNT.to_string()} class="text-center empty-state">
                                            <i class="fas fa-users fa-3x mb-3"></i>
                                            <h5>{ placeholder.heading }</h5>
                                            <p class="text-muted">{ placeholder.hint }</p>
                                        </td>
                                    </tr>
                                }
                            } else if table.is_empty() {
                                html! {
                                    <tr><td colspan={COLUMN_COUNT.to_string()} class="text-center">{ table.config.empty_message }</td></tr>
                                }
                            } else {
                                table.visible_rows().iter().map(|row| self.row(row)).collect::<Html>()
                            }
                        }
                    </tbody>
                </table>
                { self.footer(table) }
            </div>
        }
    }

    fn header(&self, table: &DataTable) -> Html {
        let sortable = table.config.ordering;
        let cells = SortColumn::ALL
            .iter()
            .map(|column| {
                let column = *column;
                let marker = match table.order() {
                    Some((active, SortDirection::Ascending)) if active == column => " ▲",
                    Some((active, SortDirection::Descending)) if active == column => " ▼",
                    _ => "",
                };
                if sortable {
                    let on_sort = self.on_sort.clone();
                    html! {
                        <th class="sortable" onclick={Callback::from(move |_: MouseEvent| on_sort.emit(column))}>
                            { column.header() }{ marker }
                        </th>
                    }
                } else {
                    html! { <th>{ column.header() }</th> }
                }
            })
            .collect::<Html>();

        html! {
            <tr>
                <th></th>
                { cells }
                <th>{ "Actions" }</th>
            </tr>
        }
    }

    fn row(&self, row: &LeadRow) -> Html {
        let select = {
            let on_select = self.on_select.clone();
            let uid = row.uid.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(uid.clone()))
        };
        let view_button = {
            let on_select = self.on_select.clone();
            let uid = row.uid.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_select.emit(uid.clone());
            })
        };

        html! {
            <tr class={classes!("user-row", row.row_class.clone())} data-uid={row.uid.clone()} onclick={select}>
                <td>{ avatar(&row.avatar, "user-avatar") }</td>
                <td>
                    <div class="fw-semibold">{ row.user_name.clone() }</div>
                    {
                        match &row.profile_url {
                            Some(url) => html! {
                                <a href={url.clone()} target="_blank" class="linkedin-link"
                                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                                    <i class="fab fa-linkedin"></i>{ " Profile" }
                                </a>
                            },
                            None => html! { <span class="text-muted">{ "No LinkedIn" }</span> },
                        }
                    }
                </td>
                <td>{ row.title.clone() }</td>
                <td>{ row.location.clone() }</td>
                <td>{ row.school.clone() }</td>
                <td>{ row.country.clone() }</td>
                <td>
                    <span class={classes!("badge", row.badge.class, "source-badge")}>{ row.badge.label }</span>
                </td>
                <td>
                    <button class="btn btn-primary btn-sm btn-action" onclick={view_button}>
                        <i class="fas fa-eye"></i>{ " View" }
                    </button>
                </td>
            </tr>
        }
    }

    fn footer(&self, table: &DataTable) -> Html {
        let info = table
            .info()
            .map(|text| html! { <div class="dataTables_info">{ text }</div> })
            .unwrap_or_default();

        if !table.config.paging || table.page_count() <= 1 {
            return info;
        }

        let current = table.page();
        let last = table.page_count() - 1;
        let page_button = |label: String, target: usize, disabled: bool, active: bool| {
            let on_page = self.on_page.clone();
            html! {
                <li class={classes!("page-item", disabled.then_some("disabled"), active.then_some("active"))}>
                    <button class="page-link" disabled={disabled}
                        onclick={Callback::from(move |_: MouseEvent| on_page.emit(target))}>
                        { label }
                    </button>
                </li>
            }
        };

        html! {
            <div class="d-flex justify-content-between align-items-center">
                { info }
                <ul class="pagination mb-0">
                    { page_button("Previous".to_string(), current.saturating_sub(1), current == 0, false) }
                    { for (0..=last).map(|page| page_button((page + 1).to_string(), page, false, page == current)) }
                    { page_button("Next".to_string(), (current + 1).min(last), current == last, false) }
                </ul>
            </div>
        }
    }
}

/// Profile picture, or the initial on a coloured disc when there is none.
pub fn avatar(avatar: &Avatar, class: &'static str) -> Html {
    match avatar {
        Avatar::Image { url, alt } => html! { <img src={url.clone()} alt={alt.clone()} class={class} /> },
        Avatar::Initial(initial) => html! {
            <div class={format!("{}-placeholder", class)}>{ initial.clone() }</div>
        },
    }
}
