//! `LeadsApi` over `gloo_net`.
//!
//! Any non-2xx status is a failure, whatever the code. Bodies that do not
//! decode into the expected shape are reported as `FetchError::Decode`.

use common::api::LeadsApi;
use common::error::FetchError;
use common::model::filters::FilterOptions;
use common::model::lead::LeadRecord;
use common::requests::{detail_path, filters_path, UserQuery};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpLeadsApi {
    api_base: String,
}

impl HttpLeadsApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

impl LeadsApi for HttpLeadsApi {
    async fn filter_options(&self) -> Result<FilterOptions, FetchError> {
        get_json(&filters_path(&self.api_base)).await
    }

    async fn users(&self, query: &UserQuery) -> Result<Vec<LeadRecord>, FetchError> {
        get_json(&query.path(&self.api_base)).await
    }

    async fn user(&self, uid: &str) -> Result<LeadRecord, FetchError> {
        get_json(&detail_path(&self.api_base, uid)).await
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))
}
