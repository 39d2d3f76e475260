use common::api::ApiResponse;
use common::debounce::Ticket;
use common::feedback::NotificationId;
use common::model::filters::FilterField;
use common::view_model::SortColumn;

pub enum Msg {
    Start,
    FilterChanged(FilterField, String),
    SearchSettled(Ticket),
    ClearFilters,
    Settled(ApiResponse),
    ShowDetail(String),
    CloseDetail,
    DismissNotification(NotificationId),
    SortTable(SortColumn),
    GoToPage(usize),
}
