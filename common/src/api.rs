//! The fetch seam between the dashboard state machine and the transport.
//!
//! The dashboard never awaits anything itself. Its update functions return
//! [`ApiRequest`] descriptors; the host runs them through [`execute`] with a
//! [`LeadsApi`] implementation and feeds the resulting [`ApiResponse`] back.

use crate::dataset::{LoadKind, RequestToken};
use crate::error::FetchError;
use crate::model::filters::FilterOptions;
use crate::model::lead::LeadRecord;
use crate::requests::UserQuery;

/// The three read endpoints of the leads API.
#[allow(async_fn_in_trait)]
pub trait LeadsApi {
    async fn filter_options(&self) -> Result<FilterOptions, FetchError>;

    async fn users(&self, query: &UserQuery) -> Result<Vec<LeadRecord>, FetchError>;

    async fn user(&self, uid: &str) -> Result<LeadRecord, FetchError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    FilterOptions,
    Users {
        token: RequestToken,
        kind: LoadKind,
        query: UserQuery,
    },
    Detail {
        uid: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    FilterOptions(Result<FilterOptions, FetchError>),
    Users {
        token: RequestToken,
        kind: LoadKind,
        result: Result<Vec<LeadRecord>, FetchError>,
    },
    Detail {
        uid: String,
        result: Result<LeadRecord, FetchError>,
    },
}

/// Runs one request against `api`. Always yields a response, failures included.
pub async fn execute<A: LeadsApi>(api: &A, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::FilterOptions => ApiResponse::FilterOptions(api.filter_options().await),
        ApiRequest::Users { token, kind, query } => ApiResponse::Users {
            token,
            kind,
            result: api.users(&query).await,
        },
        ApiRequest::Detail { uid } => {
            let result = api.user(&uid).await;
            ApiResponse::Detail { uid, result }
        }
    }
}
