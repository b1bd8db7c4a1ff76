//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a running store. It lets you unit-test code layered on
//! top of a client (services, domain clients) deterministically and without any state.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Testing logic *around* the client | Testing the store itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct User { id: Option<u32>, email: String }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("User error")]
//! struct UserError;
//!
//! impl ActorEntity for User {
//!     type Id = u32;
//!     type Error = UserError;
//!     fn id(&self) -> Option<&u32> { self.id.as_ref() }
//!     fn assign_id(&mut self, id: u32) { self.id = Some(id); }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<User>::new();
//!     mock.expect_get(1)
//!         .return_ok(Some(User { id: Some(1), email: "test@example.com".into() }));
//!     // Simulate a downstream failure
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     let user = client.get(1).await.unwrap().unwrap();
//!     assert_eq!(user.email, "test@example.com");
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and the raw receiver, or the fluent [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request to the mock client and the response to send back.
enum Expectation<T: ActorEntity> {
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Save {
        response: SaveResponse<T>,
    },
}

/// How a mocked `save` answers.
enum SaveResponse<T: ActorEntity> {
    /// Store the entity under this id (unless it already carries one) and echo it back.
    AssignId(T::Id),
    Err(FrameworkError),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (different operation, or a `get` for a different id) panics the
/// mock task, which surfaces in the caller as `FrameworkError::ActorDropped`.
///
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_save().assign_id(ProductId::from("p-1"));
/// mock.expect_get(ProductId::from("p-1")).return_ok(None);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Save {
                            mut entity,
                            respond_to,
                        },
                        Some(Expectation::Save { response }),
                    ) => {
                        let reply = match response {
                            SaveResponse::AssignId(id) => {
                                if entity.id().is_none() {
                                    entity.assign_id(id);
                                }
                                Ok(entity)
                            }
                            SaveResponse::Err(e) => Err(e),
                        };
                        let _ = respond_to.send(reply);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation for the given id.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `save` operation.
    pub fn expect_save(&mut self) -> SaveExpectationBuilder<T> {
        SaveExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    /// Sets the expectation to return the given entities.
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Ok(items) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `save` expectations.
pub struct SaveExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> SaveExpectationBuilder<T> {
    /// Echoes the saved entity back, giving it `id` when it arrived without one.
    pub fn assign_id(self, id: T::Id) {
        self.expectations.lock().unwrap().push_back(Expectation::Save {
            response: SaveResponse::AssignId(id),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Save {
            response: SaveResponse::Err(error),
        });
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends messages to a channel the test controls. The test inspects each
/// request as it arrives and answers through the enclosed responder, which makes it
/// possible to assert on the exact payload a caller sent.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Save { entity, respond_to }) => Some((entity, respond_to)),
        _ => None,
    }
}
