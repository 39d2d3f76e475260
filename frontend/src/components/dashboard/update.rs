//! Update function for the dashboard component.
//!
//! Each message is forwarded to the `Dashboard` state machine; whatever
//! requests it returns are dispatched, and whatever timers it asks for
//! (search debounce, notification expiry) are armed here with `gloo_timers`.

use common::api::{ApiRequest, ApiResponse};
use common::dashboard::FilterChange;
use common::feedback::NotificationId;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::dispatch;
use super::messages::Msg;
use super::state::DashboardComponent;

pub fn update(
    component: &mut DashboardComponent,
    ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Start => {
            for request in component.dashboard.start() {
                send(component, ctx, request);
            }
            true
        }
        Msg::FilterChanged(field, value) => {
            match component.dashboard.set_filter(field, value) {
                FilterChange::Immediate(request) => send(component, ctx, request),
                FilterChange::Debounced(ticket) => {
                    let link = ctx.link().clone();
                    let wait = component.dashboard.config().search_debounce.as_millis() as u32;
                    component.search_timer = Some(Timeout::new(wait, move || {
                        link.send_message(Msg::SearchSettled(ticket));
                    }));
                }
            }
            true
        }
        Msg::SearchSettled(ticket) => {
            component.search_timer = None;
            match component.dashboard.search_timer_fired(ticket) {
                Some(request) => {
                    send(component, ctx, request);
                    true
                }
                None => false,
            }
        }
        Msg::ClearFilters => {
            component.search_timer = None;
            let request = component.dashboard.clear_filters();
            send(component, ctx, request);
            true
        }
        Msg::Settled(response) => {
            let opens_detail = matches!(&response, ApiResponse::Detail { result: Ok(_), .. });
            if let Some(id) = component.dashboard.handle(response) {
                arm_expiry(component, ctx, id);
            }
            if opens_detail && component.dashboard.detail().shown().is_some() {
                open_top_sheet(component.detail_sheet_ref.clone());
            }
            true
        }
        Msg::ShowDetail(uid) => {
            let request = component.dashboard.open_detail(&uid);
            send(component, ctx, request);
            true
        }
        Msg::CloseDetail => {
            close_top_sheet(component.detail_sheet_ref.clone());
            component.dashboard.close_detail();
            true
        }
        Msg::DismissNotification(id) => {
            component.notification_timers.remove(&id);
            component.dashboard.dismiss_notification(id)
        }
        Msg::SortTable(column) => match component.dashboard.table_mut().widget_mut() {
            Some(table) => {
                table.sort_by(column);
                true
            }
            None => false,
        },
        Msg::GoToPage(page) => match component.dashboard.table_mut().widget_mut() {
            Some(table) => {
                table.go_to(page);
                true
            }
            None => false,
        },
    }
}

fn send(component: &DashboardComponent, ctx: &Context<DashboardComponent>, request: ApiRequest) {
    dispatch(ctx.link(), &component.api, request);
}

/// Each notification gets its own timer; dismissing it early drops the timer.
fn arm_expiry(
    component: &mut DashboardComponent,
    ctx: &Context<DashboardComponent>,
    id: NotificationId,
) {
    let link = ctx.link().clone();
    let ttl = component.dashboard.notifications().ttl().as_millis() as u32;
    let timer = Timeout::new(ttl, move || {
        link.send_message(Msg::DismissNotification(id));
    });
    component.notification_timers.insert(id, timer);
}
