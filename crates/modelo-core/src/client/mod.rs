//! Remote Resource Client
//!
//! - traits: the list/create/update/delete contract the state machine consumes
//! - http: reqwest implementation against the REST endpoint

mod http;
mod traits;

pub use http::HttpModeloClient;
pub use traits::ModeloApi;
