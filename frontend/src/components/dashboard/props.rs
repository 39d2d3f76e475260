//! Properties of the `DashboardComponent`.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Prefix of the leads API. Defaults to `/api`, served by the same
    /// origin as the page.
    #[prop_or_default]
    pub api_base: Option<String>,
}
