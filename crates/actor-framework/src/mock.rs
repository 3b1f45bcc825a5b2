//! # Mock Tables
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of scripted expectations instead of a running [`ResourceActor`](crate::ResourceActor).
//! Use it to test client wrappers and flows that sit on top of a table without
//! depending on the table's behaviour.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, scripted replies | real rows |
//! | Error injection | `return_err` | needs a failing hook |
//! | Use for | logic *around* a client | the table itself, whole-system flows |
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Dish { id: u32 }
//! #[derive(Debug)] struct DishCreate;
//! #[derive(Debug)] struct DishUpdate;
//! #[derive(Debug)] enum DishAction {}
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32; type Create = DishCreate; type Update = DishUpdate;
//!     type Action = DishAction; type ActionResult = (); type Context = (); type Error = DishError;
//!     fn from_create_params(id: u32, _: DishCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: DishUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: DishAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Dish>::new();
//!     let client = mock.client();
//!
//!     // Simulate the hosted store being unreachable
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.list().await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ChangeEvent, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{broadcast, mpsc, oneshot};

/// A scripted reply, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock table with expectation tracking.
///
/// Requests that arrive with no matching expectation at the head of the queue panic
/// the background task, which surfaces in the test as `ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    changes: broadcast::Sender<ChangeEvent<T::Id>>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let (changes, _) = broadcast::channel(16);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender, changes.clone()),
            changes,
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Push a change notification to every subscriber of this mock's client.
    pub fn notify(&self, event: ChangeEvent<T::Id>) {
        let _ = self.changes.send(event);
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(|response| Expectation::Get { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Update { response })
    }

    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(|response| Expectation::Action { response })
    }

    fn builder<R>(
        &self,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every scripted expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Queues one scripted reply of type `R`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// Use this when the test needs to inspect the payload of a request, not just answer it.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (changes, _) = broadcast::channel(16);
    (ResourceClient::new(sender, changes), receiver)
}

type Reply<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Next message must be a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Reply<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message must be a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Reply<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message must be an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Reply<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next message must be an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Reply<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Dish {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    struct DishCreate {
        name: String,
    }

    #[derive(Debug)]
    struct DishUpdate;

    #[derive(Debug)]
    enum DishAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("dish error")]
    struct DishError;

    #[async_trait]
    impl ActorEntity for Dish {
        type Id = u32;
        type Create = DishCreate;
        type Update = DishUpdate;
        type Action = DishAction;
        type ActionResult = ();
        type Context = ();
        type Error = DishError;

        fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
            })
        }

        async fn on_update(&mut self, _: DishUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, action: DishAction, _: &()) -> Result<(), Self::Error> {
            match action {}
        }
    }

    #[tokio::test]
    async fn test_raw_create_round_trip() {
        let (client, mut receiver) = create_mock_client::<Dish>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(DishCreate {
                    name: "Skop".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Skop");
        responder.send(Ok(7)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_scripted_expectations_are_consumed_in_order() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_create().return_ok(1);
        mock.expect_list().return_ok(vec![Dish {
            id: 1,
            name: "Mogodu".to_string(),
        }]);
        mock.expect_get().return_ok(None);

        let client = mock.client();
        let id = client
            .create(DishCreate {
                name: "Mogodu".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let rows = client.list().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Mogodu");

        assert!(client.get(2).await.unwrap().is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_notify_reaches_subscribers() {
        let mock = MockClient::<Dish>::new();
        let mut changes = mock.client().subscribe();

        mock.notify(ChangeEvent::Updated(3));

        assert_eq!(changes.recv().await.unwrap(), ChangeEvent::Updated(3));
    }
}
