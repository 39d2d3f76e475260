use common::api::{execute, ApiRequest};
use num_format::{Locale, ToFormattedString};
use yew::html::Scope;
use yew::platform::spawn_local;

use super::messages::Msg;
use super::state::DashboardComponent;
use crate::http::HttpLeadsApi;

/// Runs `request` in the background and reports back with `Msg::Settled`,
/// whatever the outcome.
pub fn dispatch(link: &Scope<DashboardComponent>, api: &HttpLeadsApi, request: ApiRequest) {
    let link = link.clone();
    let api = api.clone();
    spawn_local(async move {
        let response = execute(&api, request).await;
        link.send_message(Msg::Settled(response));
    });
}

/// Counter text for the statistics cards, e.g. `1,204`.
pub fn format_count(value: usize) -> String {
    value.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_use_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(1204), "1,204");
    }
}
