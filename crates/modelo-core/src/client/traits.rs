//! Remote client contract

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Modelo, ModeloDraft, ModeloId};

/// CRUD over the remote Modelo collection.
///
/// `?Send` because browser fetch futures are not `Send`; everything runs on
/// the single UI thread anyway.
#[async_trait(?Send)]
pub trait ModeloApi {
    /// Fetch the whole collection, in server order
    async fn list(&self) -> ApiResult<Vec<Modelo>>;

    /// Create a new record from a draft
    async fn create(&self, draft: &ModeloDraft) -> ApiResult<()>;

    /// Overwrite record `id` with the draft
    async fn update(&self, id: &ModeloId, draft: &ModeloDraft) -> ApiResult<()>;

    /// Delete record `id`
    async fn delete(&self, id: &ModeloId) -> ApiResult<()>;
}
