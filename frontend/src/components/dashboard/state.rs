//! Component state for the leads dashboard.
//!
//! All session data lives in `common::dashboard::Dashboard`; this struct only
//! adds what belongs to the browser: the HTTP client, the live timers and
//! the DOM node of the detail sheet.

use std::collections::HashMap;

use common::config::DashboardConfig;
use common::dashboard::Dashboard;
use common::feedback::NotificationId;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::data_table::DataTableFactory;
use crate::http::HttpLeadsApi;

pub struct DashboardComponent {
    pub dashboard: Dashboard<DataTableFactory>,

    pub api: HttpLeadsApi,

    /// Pending search debounce. Replacing it drops, and so cancels, the
    /// previous timeout.
    pub search_timer: Option<Timeout>,

    /// One expiry timer per visible notification.
    pub notification_timers: HashMap<NotificationId, Timeout>,

    pub detail_sheet_ref: NodeRef,
}

impl DashboardComponent {
    pub fn new(api_base: Option<String>) -> Self {
        let mut config = DashboardConfig::default();
        if let Some(base) = api_base {
            config.api_base = base;
        }
        Self {
            api: HttpLeadsApi::new(config.api_base.clone()),
            dashboard: Dashboard::new(config, DataTableFactory::default()),
            search_timer: None,
            notification_timers: HashMap::new(),
            detail_sheet_ref: NodeRef::default(),
        }
    }
}
