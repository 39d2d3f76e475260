//! The filtered-view state machine.
//!
//! `Dashboard` owns the whole session state: criteria, filter options, the
//! dataset, statistics, the table widget, the loading indicator, the
//! notifications and the detail dialog. It is only changed through the
//! methods below. Methods that need the network return an [`ApiRequest`];
//! the host executes it and passes the [`ApiResponse`] to
//! [`Dashboard::handle`]. On every applied list response the statistics are
//! recomputed and then the table is rebuilt, both from `current`.

use log::{debug, error};

use crate::api::{ApiRequest, ApiResponse};
use crate::config::DashboardConfig;
use crate::dataset::{Completion, DatasetStore, DatasetView, LoadKind};
use crate::debounce::{DebounceGate, Ticket};
use crate::detail::DetailLoader;
use crate::feedback::{LoadingIndicator, NotificationId, Notifications};
use crate::model::filters::{FilterCriteria, FilterField, FilterOptions};
use crate::requests::UserQuery;
use crate::stats::Statistics;
use crate::table::{TableFactory, TableLifecycle};

pub const FILTER_OPTIONS_FAILED: &str = "Failed to load filter options";
pub const LOAD_USERS_FAILED: &str = "Failed to load users data";
pub const APPLY_FILTERS_FAILED: &str = "Failed to apply filters";
pub const LOAD_DETAIL_FAILED: &str = "Failed to load user details";

/// What a filter edit asks the host to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    /// Discrete selection: fetch right away.
    Immediate(ApiRequest),
    /// Search text: arm a timer for the debounce wait and come back through
    /// [`Dashboard::search_timer_fired`] with this ticket.
    Debounced(Ticket),
}

pub struct Dashboard<F: TableFactory> {
    config: DashboardConfig,
    criteria: FilterCriteria,
    options: Option<FilterOptions>,
    store: DatasetStore,
    statistics: Statistics,
    table: TableLifecycle<F>,
    loading: LoadingIndicator,
    notifications: Notifications,
    detail: DetailLoader,
    search_gate: DebounceGate<String>,
}

impl<F: TableFactory> Dashboard<F> {
    pub fn new(config: DashboardConfig, factory: F) -> Self {
        Self {
            table: TableLifecycle::new(factory, config.page_length),
            notifications: Notifications::new(config.notification_ttl),
            search_gate: DebounceGate::new(config.search_debounce),
            criteria: FilterCriteria::default(),
            options: None,
            store: DatasetStore::new(),
            statistics: Statistics::default(),
            loading: LoadingIndicator::default(),
            detail: DetailLoader::default(),
            config,
        }
    }

    /// Startup: filter options (once per session) and the full list.
    pub fn start(&mut self) -> Vec<ApiRequest> {
        vec![ApiRequest::FilterOptions, self.load_all()]
    }

    /// Unconditional full load.
    pub fn load_all(&mut self) -> ApiRequest {
        self.list_request(LoadKind::All, UserQuery::unfiltered())
    }

    /// Fetch with the current criteria; replaces `current` only.
    pub fn apply_filters(&mut self) -> ApiRequest {
        let query = UserQuery::from_criteria(&self.criteria);
        self.list_request(LoadKind::Filtered, query)
    }

    /// Resets every criterion and reloads everything from the server.
    pub fn clear_filters(&mut self) -> ApiRequest {
        self.criteria.clear();
        self.search_gate.cancel();
        self.load_all()
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) -> FilterChange {
        let value = value.into();
        self.criteria.set(field, value.clone());
        if field.is_debounced() {
            FilterChange::Debounced(self.search_gate.call(value))
        } else {
            FilterChange::Immediate(self.apply_filters())
        }
    }

    /// The debounce timer armed for `ticket` elapsed. Yields the fetch only
    /// for the last keystroke of a burst.
    pub fn search_timer_fired(&mut self, ticket: Ticket) -> Option<ApiRequest> {
        let search = self.search_gate.fire(ticket)?;
        debug!("search settled on {:?}", search);
        Some(self.apply_filters())
    }

    pub fn open_detail(&mut self, uid: &str) -> ApiRequest {
        self.loading.acquire();
        ApiRequest::Detail {
            uid: uid.to_string(),
        }
    }

    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    /// Applies a settled request. Returns the notification raised for a
    /// failure, so the host can arm its expiry timer.
    pub fn handle(&mut self, response: ApiResponse) -> Option<NotificationId> {
        match response {
            ApiResponse::FilterOptions(Ok(options)) => {
                self.options = Some(options);
                None
            }
            ApiResponse::FilterOptions(Err(err)) => {
                error!("Error loading filter options: {}", err);
                Some(self.notifications.push(FILTER_OPTIONS_FAILED))
            }
            ApiResponse::Users {
                token,
                kind,
                result,
            } => {
                self.loading.release();
                if !self.store.is_latest(token) {
                    debug!("dropping stale {:?} response {:?}", kind, token);
                    return None;
                }
                match result {
                    Ok(records) => {
                        if self.store.complete(token, kind, records) == Completion::Applied {
                            self.refresh();
                        }
                        None
                    }
                    Err(err) => {
                        let message = match kind {
                            LoadKind::All => {
                                error!("Error loading users: {}", err);
                                LOAD_USERS_FAILED
                            }
                            LoadKind::Filtered => {
                                error!("Error applying filters: {}", err);
                                APPLY_FILTERS_FAILED
                            }
                        };
                        Some(self.notifications.push(message))
                    }
                }
            }
            ApiResponse::Detail { uid, result } => {
                self.loading.release();
                match result {
                    Ok(record) => {
                        self.detail.loaded(&record);
                        None
                    }
                    Err(err) => {
                        error!("Error loading user details for {}: {}", uid, err);
                        Some(self.notifications.push(LOAD_DETAIL_FAILED))
                    }
                }
            }
        }
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.notifications.dismiss(id)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn options(&self) -> Option<&FilterOptions> {
        self.options.as_ref()
    }

    pub fn view(&self) -> &DatasetView {
        self.store.view()
    }

    pub fn count_label(&self) -> String {
        self.store.view().count_label()
    }

    pub fn statistics(&self) -> Statistics {
        self.statistics
    }

    pub fn table(&self) -> &TableLifecycle<F> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableLifecycle<F> {
        &mut self.table
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_visible()
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn detail(&self) -> &DetailLoader {
        &self.detail
    }

    fn list_request(&mut self, kind: LoadKind, query: UserQuery) -> ApiRequest {
        self.loading.acquire();
        ApiRequest::Users {
            token: self.store.begin(),
            kind,
            query,
        }
    }

    fn refresh(&mut self) {
        let current = self.store.view().current();
        self.statistics = Statistics::from_records(current);
        self.table.render(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{LeadsApi, execute};
    use crate::error::FetchError;
    use crate::model::lead::{LeadRecord, SourceCategory};
    use crate::table::tests::RecordingFactory;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakeApi {
        all: RefCell<Vec<LeadRecord>>,
        filtered: RefCell<Vec<LeadRecord>>,
        fail_users: Cell<bool>,
        queries: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn new(all: Vec<LeadRecord>) -> Self {
            Self {
                all: RefCell::new(all),
                filtered: RefCell::new(Vec::new()),
                fail_users: Cell::new(false),
                queries: RefCell::new(Vec::new()),
            }
        }
    }

    impl LeadsApi for FakeApi {
        async fn filter_options(&self) -> Result<FilterOptions, FetchError> {
            Ok(FilterOptions {
                locations: vec!["London, UK".to_string()],
                ..Default::default()
            })
        }

        async fn users(&self, query: &UserQuery) -> Result<Vec<LeadRecord>, FetchError> {
            self.queries.borrow_mut().push(query.to_query_string());
            if self.fail_users.get() {
                return Err(FetchError::Status {
                    url: query.path("/api"),
                    status: 500,
                });
            }
            if query.is_empty() {
                Ok(self.all.borrow().clone())
            } else {
                Ok(self.filtered.borrow().clone())
            }
        }

        async fn user(&self, uid: &str) -> Result<LeadRecord, FetchError> {
            Ok(LeadRecord {
                uid: uid.to_string(),
                user_name: "Detail".to_string(),
                about: Some("about".to_string()),
                ..Default::default()
            })
        }
    }

    fn lead(uid: &str, category: SourceCategory) -> LeadRecord {
        LeadRecord {
            uid: uid.to_string(),
            user_name: uid.to_string(),
            source_category: category,
            ..Default::default()
        }
    }

    fn three() -> Vec<LeadRecord> {
        vec![
            lead("a", SourceCategory::Both),
            lead("b", SourceCategory::SchoolsOnly),
            lead("c", SourceCategory::SalesnavOnly),
        ]
    }

    fn dashboard() -> Dashboard<RecordingFactory> {
        Dashboard::new(DashboardConfig::default(), RecordingFactory::default())
    }

    fn run(
        dash: &mut Dashboard<RecordingFactory>,
        api: &FakeApi,
        request: ApiRequest,
    ) -> Option<NotificationId> {
        let response = block_on(execute(api, request));
        dash.handle(response)
    }

    fn started(api: &FakeApi) -> Dashboard<RecordingFactory> {
        let mut dash = dashboard();
        for request in dash.start() {
            run(&mut dash, api, request);
        }
        dash
    }

    #[test]
    fn startup_loads_options_and_everything() {
        let api = FakeApi::new(three());
        let dash = started(&api);

        assert_eq!(
            dash.statistics(),
            Statistics {
                total: 3,
                schools_only: 1,
                salesnav_only: 1,
                both_tables: 1,
            }
        );
        assert_eq!(dash.count_label(), "3 of 3 users");
        assert_eq!(dash.options().unwrap().locations, vec!["London, UK"]);
        assert!(dash.table().state().is_populated());
        assert!(!dash.is_loading());
        assert!(dash.notifications().items().is_empty());
    }

    #[test]
    fn empty_filtered_result_enters_empty_state() {
        let api = FakeApi::new(three());
        let mut dash = started(&api);

        let FilterChange::Immediate(request) =
            dash.set_filter(FilterField::Country, "Narnia")
        else {
            panic!("country filter must apply immediately");
        };
        run(&mut dash, &api, request);

        assert!(dash.table().state().is_empty_state());
        assert_eq!(dash.statistics(), Statistics::default());
        assert_eq!(dash.count_label(), "0 of 3 users");
        assert_eq!(api.queries.borrow().last().unwrap(), "country_filter=Narnia");
    }

    #[test]
    fn failed_filter_keeps_current_and_notifies_once() {
        let api = FakeApi::new(three());
        let mut dash = started(&api);
        let before = dash.view().current().to_vec();
        let stats_before = dash.statistics();

        api.fail_users.set(true);
        let request = dash.apply_filters();
        assert!(dash.is_loading());
        let note = run(&mut dash, &api, request);

        assert!(note.is_some());
        assert_eq!(dash.view().current(), before.as_slice());
        assert_eq!(dash.statistics(), stats_before);
        assert_eq!(dash.notifications().items().len(), 1);
        assert_eq!(dash.notifications().items()[0].message, APPLY_FILTERS_FAILED);
        assert!(!dash.is_loading());
    }

    #[test]
    fn failed_full_load_reports_users_data() {
        let api = FakeApi::new(three());
        let mut dash = started(&api);
        api.fail_users.set(true);
        let request = dash.load_all();
        run(&mut dash, &api, request);
        assert_eq!(dash.notifications().items()[0].message, LOAD_USERS_FAILED);
        assert_eq!(dash.count_label(), "3 of 3 users");
    }

    #[test]
    fn clear_is_a_fresh_full_load() {
        let api = FakeApi::new(three());
        let mut dash = started(&api);

        *api.filtered.borrow_mut() = vec![lead("b", SourceCategory::SchoolsOnly)];
        if let FilterChange::Immediate(request) =
            dash.set_filter(FilterField::Source, "schools_only")
        {
            run(&mut dash, &api, request);
        }
        assert_eq!(dash.count_label(), "1 of 3 users");

        // the server gained a record since the first load
        api.all.borrow_mut().push(lead("d", SourceCategory::Unknown));
        let request = dash.clear_filters();
        run(&mut dash, &api, request);

        assert!(dash.criteria().is_empty());
        assert_eq!(dash.view().current(), dash.view().baseline());
        assert_eq!(dash.view().current(), api.all.borrow().as_slice());
        assert_eq!(dash.count_label(), "4 of 4 users");
        assert_eq!(dash.statistics().total, 4);
        assert_eq!(dash.statistics().categorised(), 3);
    }

    #[test]
    fn search_burst_fetches_once_with_last_text() {
        let api = FakeApi::new(three());
        let mut dash = started(&api);
        let fetches_before = api.queries.borrow().len();

        let mut tickets = Vec::new();
        for text in ["d", "da", "dav"].iter() {
            match dash.set_filter(FilterField::Search, *text) {
                FilterChange::Debounced(ticket) => tickets.push(ticket),
                FilterChange::Immediate(_) => panic!("search must be debounced"),
            }
        }
        let requests: Vec<_> = tickets
            .into_iter()
            .filter_map(|ticket| dash.search_timer_fired(ticket))
            .collect();
        assert_eq!(requests.len(), 1);
        for request in requests {
            run(&mut dash, &api, request);
        }

        assert_eq!(api.queries.borrow().len(), fetches_before + 1);
        assert_eq!(api.queries.borrow().last().unwrap(), "search=dav");
    }

    #[test]
    fn clearing_cancels_pending_search() {
        let api = FakeApi::new(three());
        let mut dash = started(&api);
        let FilterChange::Debounced(ticket) =
            dash.set_filter(FilterField::Search, "zed")
        else {
            panic!("search must be debounced");
        };
        let request = dash.clear_filters();
        run(&mut dash, &api, request);
        assert_eq!(dash.search_timer_fired(ticket), None);
    }

    #[test]
    fn out_of_order_responses_keep_latest_request() {
        let api = FakeApi::new(three());
        let mut dash = started(&api);

        let slow = dash.apply_filters();
        let fast = match dash.set_filter(FilterField::Location, "London, UK") {
            FilterChange::Immediate(request) => request,
            FilterChange::Debounced(_) => panic!("location must apply immediately"),
        };
        let (ApiRequest::Users { token: slow_token, .. }, ApiRequest::Users { token: fast_token, .. }) =
            (slow, fast)
        else {
            panic!("list requests expected");
        };

        dash.handle(ApiResponse::Users {
            token: fast_token,
            kind: LoadKind::Filtered,
            result: Ok(vec![lead("c", SourceCategory::SalesnavOnly)]),
        });
        dash.handle(ApiResponse::Users {
            token: slow_token,
            kind: LoadKind::Filtered,
            result: Ok(three()),
        });

        assert_eq!(dash.view().current().len(), 1);
        assert_eq!(dash.view().current()[0].uid, "c");
        assert_eq!(dash.statistics().salesnav_only, 1);
        assert!(!dash.is_loading());
    }

    #[test]
    fn stale_failure_is_discarded() {
        let api = FakeApi::new(three());
        let mut dash = started(&api);

        let (
            ApiRequest::Users { token: older, .. },
            ApiRequest::Users { token: newer, .. },
        ) = (dash.apply_filters(), dash.apply_filters())
        else {
            panic!("list requests expected");
        };

        dash.handle(ApiResponse::Users {
            token: newer,
            kind: LoadKind::Filtered,
            result: Ok(Vec::new()),
        });
        let note = dash.handle(ApiResponse::Users {
            token: older,
            kind: LoadKind::Filtered,
            result: Err(FetchError::Status {
                url: "/api/users".to_string(),
                status: 500,
            }),
        });

        assert_eq!(note, None);
        assert!(dash.notifications().items().is_empty());
        assert!(dash.view().current().is_empty());
        assert_eq!(dash.count_label(), "0 of 3 users");
        assert!(dash.table().state().is_empty_state());
        assert!(!dash.is_loading());
    }

    #[test]
    fn detail_does_not_touch_the_list() {
        let api = FakeApi::new(three());
        let mut dash = started(&api);
        let before = dash.view().clone();

        let request = dash.open_detail("not-in-list");
        assert!(dash.is_loading());
        run(&mut dash, &api, request);

        let shown = dash.detail().shown().unwrap();
        assert_eq!(shown.uid, "not-in-list");
        assert_eq!(shown.sections.len(), 1);
        assert_eq!(dash.view(), &before);
        assert!(!dash.is_loading());

        dash.close_detail();
        assert!(dash.detail().shown().is_none());
    }

    #[test]
    fn overlapping_requests_hide_spinner_early() {
        let api = FakeApi::new(three());
        let mut dash = started(&api);

        let list = dash.apply_filters();
        let detail = dash.open_detail("a");
        run(&mut dash, &api, detail);
        // the list request is still out, but the shared spinner is already hidden
        assert!(!dash.is_loading());
        run(&mut dash, &api, list);
        assert!(!dash.is_loading());
    }

    #[test]
    fn never_more_than_one_live_widget() {
        let api = FakeApi::new(three());
        let mut dash = dashboard();
        let max_live = dash.table().factory().max_live.clone();
        let live = dash.table().factory().live.clone();

        for request in dash.start() {
            run(&mut dash, &api, request);
        }
        for value in ["Narnia", "", "USA"] {
            if let FilterChange::Immediate(request) =
                dash.set_filter(FilterField::Country, value)
            {
                run(&mut dash, &api, request);
            }
        }
        let request = dash.clear_filters();
        run(&mut dash, &api, request);

        assert_eq!(*max_live.borrow(), 1);
        assert_eq!(live.borrow().len(), 1);
    }
}
