//! # Typed Client Trait
//!
//! Domain clients wrap a [`ResourceClient`] and map [`FrameworkError`] into their own
//! error type. Implementing [`ActorClient`] gives them `get`, `list` and `delete` for free.

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The table-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the table-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a row by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every row, unordered.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a row by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
