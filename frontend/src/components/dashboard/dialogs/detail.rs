use common::view_model::DetailView;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::dashboard::{DashboardComponent, Msg};
use crate::components::data_table::avatar;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

/// Detail sheet for the lead currently held by the detail loader. The sheet
/// stays mounted so it can slide in and out; its body is empty until a
/// detail has loaded.
pub fn detail_dialog(component: &DashboardComponent, link: &Scope<DashboardComponent>) -> Html {
    let close = link.callback(|_: MouseEvent| Msg::CloseDetail);
    let dismiss = link.callback(|_: ()| Msg::CloseDetail);

    html! {
        <YwMaterialTopSheet node_ref={component.detail_sheet_ref.clone()} on_dismiss={dismiss}>
            <div class="modal-content" id="userDetailModal">
                {
                    match component.dashboard.detail().shown() {
                        Some(detail) => html! {
                            <>
                                <div class="modal-header">
                                    <h5 class="modal-title" id="userDetailModalLabel">{ detail.heading.clone() }</h5>
                                    <button type="button" class="btn-close" onclick={close}></button>
                                </div>
                                <div class="modal-body" id="userDetailContent">{ detail_body(detail) }</div>
                            </>
                        },
                        None => html! {},
                    }
                }
            </div>
        </YwMaterialTopSheet>
    }
}

fn detail_body(detail: &DetailView) -> Html {
    html! {
        <div class="row">
            <div class="col-md-4 text-center mb-3">
                { avatar(&detail.avatar, "detail-avatar") }
                <h5>{ detail.user_name.clone() }</h5>
                <p class="text-muted">{ detail.title.clone() }</p>
                <span class={classes!("badge", detail.badge.class, "mb-2")}>{ detail.badge.label }</span>
                {
                    match &detail.profile_url {
                        Some(url) => html! {
                            <div>
                                <a href={url.clone()} target="_blank" class="btn btn-outline-primary btn-sm">
                                    <i class="fab fa-linkedin"></i>{ " LinkedIn Profile" }
                                </a>
                            </div>
                        },
                        None => html! {},
                    }
                }
            </div>
            <div class="col-md-8">
                <div class="user-detail-section">
                    <h6><i class="fas fa-info-circle me-2"></i>{ "Basic Information" }</h6>
                    { for detail.basic.iter().map(|(label, value)| detail_row(label, html! { <>{ value.clone() }</> })) }
                </div>

                { for detail.sections.iter().map(|section| html! {
                    <div class="user-detail-section">
                        <h6><i class={classes!("fas", section.icon, "me-2")}></i>{ section.heading }</h6>
                        <p class="detail-value">{ section.text.clone() }</p>
                    </div>
                }) }

                <div class="user-detail-section">
                    <h6><i class="fas fa-database me-2"></i>{ "Data Source" }</h6>
                    { for detail.sources.iter().map(|source| {
                        let value = if source.present {
                            html! {
                                <>
                                    <span class="badge bg-success">{ "Yes" }</span>
                                    {
                                        match &source.timestamp {
                                            Some(ts) => html! { <small class="text-muted ms-2">{ ts.clone() }</small> },
                                            None => html! {},
                                        }
                                    }
                                </>
                            }
                        } else {
                            html! { <span class="badge bg-secondary">{ "No" }</span> }
                        };
                        detail_row(source.label, value)
                    }) }
                </div>
            </div>
        </div>
    }
}

fn detail_row(label: &str, value: Html) -> Html {
    html! {
        <div class="detail-row">
            <div class="row">
                <div class="col-sm-4 detail-label">{ format!("{}:", label) }</div>
                <div class="col-sm-8 detail-value">{ value }</div>
            </div>
        </div>
    }
}
