//! View rendering for the leads dashboard.
//!
//! Top to bottom: the notification stack, the statistics cards, the filter
//! bar, then the lead table. The detail sheet is always mounted and only
//! slides in once a detail has loaded.

use common::model::filters::{FilterField, FilterOptions};
use common::view_model::source_choices;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::detail::detail_dialog;
use super::helpers::format_count;
use super::messages::Msg;
use super::state::DashboardComponent;
use crate::components::data_table::DataTableView;

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="container-fluid dashboard-root">
            { build_notifications(component, link) }
            { build_statistics(component) }
            { build_filter_bar(component, link) }
            { build_table(component, link) }
            { detail_dialog(component, link) }
        </div>
    }
}

/// Newest notification on top; each one has its own close button.
fn build_notifications(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    html! {
        <div class="toast-container position-fixed top-0 end-0 p-3">
            { for component.dashboard.notifications().items().iter().map(|notification| {
                let id = notification.id;
                html! {
                    <div class="alert alert-danger alert-dismissible fade show" role="alert">
                        { notification.message.clone() }
                        <button
                            type="button"
                            class="btn-close"
                            onclick={link.callback(move |_| Msg::DismissNotification(id))}
                        ></button>
                    </div>
                }
            }) }
        </div>
    }
}

fn build_statistics(component: &DashboardComponent) -> Html {
    let stats = component.dashboard.statistics();
    html! {
        <div class="row mb-4">
            { stat_card("totalUsers", "Total Users", stats.total, "bg-primary") }
            { stat_card("schoolsOnly", "Schools Only", stats.schools_only, "bg-info") }
            { stat_card("salesnavOnly", "Sales Navigator Only", stats.salesnav_only, "bg-warning") }
            { stat_card("bothTables", "Both Tables", stats.both_tables, "bg-success") }
        </div>
    }
}

fn stat_card(id: &'static str, label: &'static str, value: usize, class: &'static str) -> Html {
    html! {
        <div class="col-md-3">
            <div class={classes!("card", "text-white", class)}>
                <div class="card-body">
                    <h6 class="card-title">{ label }</h6>
                    <h3 id={id}>{ format_count(value) }</h3>
                </div>
            </div>
        </div>
    }
}

fn build_filter_bar(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let criteria = component.dashboard.criteria();
    let empty = FilterOptions::default();
    let options = component.dashboard.options().unwrap_or(&empty);

    let on_search = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FilterChanged(FilterField::Search, input.value())
    });

    let sources: Vec<(String, String)> = source_choices()
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();

    html! {
        <div class="card mb-4">
            <div class="card-body">
                <div class="row g-2 align-items-end">
                    <div class="col-md-3">
                        <label class="form-label" for="searchInput">{ "Search" }</label>
                        <input
                            id="searchInput"
                            type="text"
                            class="form-control"
                            placeholder="Name, title or location"
                            value={criteria.search.clone()}
                            oninput={on_search}
                        />
                    </div>
                    { filter_select(link, FilterField::Location, "locationFilter", "All Locations", &pairs(&options.locations), criteria.location_filter.as_str()) }
                    { filter_select(link, FilterField::School, "schoolFilter", "All Schools", &pairs(&options.schools), criteria.school_filter.as_str()) }
                    { filter_select(link, FilterField::Country, "countryFilter", "All Countries", &pairs(&options.countries), criteria.country_filter.as_str()) }
                    { filter_select(link, FilterField::Source, "sourceFilter", "All Sources", &sources, criteria.source_filter.as_str()) }
                    <div class="col-md-1">
                        <button type="button" class="btn btn-outline-secondary w-100" onclick={link.callback(|_| Msg::ClearFilters)}>
                            { "Clear" }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn pairs(values: &[String]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.clone(), v.clone())).collect()
}

/// A dropdown whose first entry, the empty value, means "no filter".
fn filter_select(
    link: &Scope<DashboardComponent>,
    field: FilterField,
    id: &'static str,
    all_label: &'static str,
    choices: &[(String, String)],
    selected: &str,
) -> Html {
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::FilterChanged(field, select.value())
    });

    html! {
        <div class="col-md-2">
            <select id={id} class="form-select" {onchange}>
                <option value="" selected={selected.is_empty()}>{ all_label }</option>
                { for choices.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={value == selected}>{ label.clone() }</option>
                }) }
            </select>
        </div>
    }
}

fn build_table(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let on_select = link.callback(Msg::ShowDetail);
    let on_sort = link.callback(Msg::SortTable);
    let on_page = link.callback(Msg::GoToPage);
    let table = DataTableView {
        on_select: &on_select,
        on_sort: &on_sort,
        on_page: &on_page,
    };

    html! {
        <div class="card">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span id="userCount">{ component.dashboard.count_label() }</span>
                {
                    if component.dashboard.is_loading() {
                        html! {
                            <div id="loadingSpinner" class="spinner-border spinner-border-sm text-primary" role="status">
                                <span class="visually-hidden">{ "Loading..." }</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="card-body">
                { table.render(component.dashboard.table().widget()) }
            </div>
        </div>
    }
}
