//! # Mock Repositories & Testing Guide
//!
//! [`MockRepository<T>`] implements [`Repository<T>`] and [`MockLookup<Id, V>`] implements
//! [`Lookup<Id, V>`] without holding any data. Each test queues the calls it expects together with
//! the answer to give, hands the mock to the controller under test and finally calls `verify()`.
//!
//! ## When to use Mocks vs Real Stores
//!
//! | Feature | Mock | `EntityStore` |
//! |---------|------|---------------|
//! | **State** | None, answers are scripted | Real records and ID sequence |
//! | **Call order** | Asserted, in order | Not checked |
//! | **Error injection** | `return_err(...)` | Only what the data produces |
//! | **Use case** | Controller logic around a dependency | The store itself or full system |
//!
//! ## Example
//!
//! ```rust
//! use entity_store::mock::MockRepository;
//! use entity_store::{Repository, StoreEntity, StoreError};
//!
//! #[derive(Clone, Debug)]
//! struct Sku { id: u32, code: String }
//!
//! impl StoreEntity for Sku {
//!     type Id = u32;
//!     fn id(&self) -> u32 { self.id }
//!     fn assign_id(&mut self, id: u32) { self.id = id; }
//!     fn apply_update(&mut self, update: Sku) { self.code = update.code; }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockRepository::<Sku>::new();
//!     mock.expect_get(1).return_ok(Sku { id: 1, code: "A-1".into() });
//!     mock.expect_get(2).return_err(StoreError::not_found::<Sku>(2));
//!
//!     assert_eq!(mock.get(1).await.unwrap().code, "A-1");
//!     assert!(mock.get(2).await.unwrap_err().is_not_found());
//!     mock.verify();
//! }
//! ```
//!
//! A call that arrives when a different call (or a different ID) was expected panics, which fails
//! the test at the point of the unexpected interaction.

use crate::entity::{entity_type, StoreEntity};
use crate::error::StoreError;
use crate::repository::{Lookup, Repository};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

type Queue<E> = Arc<Mutex<VecDeque<E>>>;

fn pop<E>(queue: &Queue<E>) -> Option<E> {
    queue.lock().unwrap().pop_front()
}

fn remaining<E>(queue: &Queue<E>) -> usize {
    queue.lock().unwrap().len()
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Finishes an expectation by choosing its answer.
pub struct ExpectationBuilder<E, R> {
    queue: Queue<E>,
    build: Box<dyn FnOnce(Result<R, StoreError>) -> E + Send>,
}

impl<E, R> ExpectationBuilder<E, R> {
    fn new(
        queue: Queue<E>,
        build: impl FnOnce(Result<R, StoreError>) -> E + Send + 'static,
    ) -> Self {
        Self {
            queue,
            build: Box::new(build),
        }
    }

    /// Answer the expected call with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Answer the expected call with `error`.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.build)(response);
        self.queue.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// MOCK REPOSITORY
// =============================================================================

/// A scripted call to a [`MockRepository`].
pub enum RepositoryCall<T: StoreEntity> {
    Create(Result<T, StoreError>),
    Update {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    Get {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    GetAll(Result<Vec<T>, StoreError>),
    Delete {
        id: T::Id,
        response: Result<T, StoreError>,
    },
}

impl<T: StoreEntity> RepositoryCall<T> {
    fn name(&self) -> String {
        match self {
            RepositoryCall::Create(_) => "create".to_string(),
            RepositoryCall::Update { id, .. } => format!("update({id})"),
            RepositoryCall::Get { id, .. } => format!("get({id})"),
            RepositoryCall::GetAll(_) => "get_all".to_string(),
            RepositoryCall::Delete { id, .. } => format!("delete({id})"),
        }
    }
}

/// Repository double driven by a queue of expected calls.
pub struct MockRepository<T: StoreEntity> {
    expectations: Queue<RepositoryCall<T>>,
}

impl<T: StoreEntity> Clone for MockRepository<T> {
    fn clone(&self) -> Self {
        Self {
            expectations: self.expectations.clone(),
        }
    }
}

impl<T: StoreEntity> Default for MockRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockRepository<T> {
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn expect_create(&self) -> ExpectationBuilder<RepositoryCall<T>, T> {
        ExpectationBuilder::new(self.expectations.clone(), RepositoryCall::Create)
    }

    pub fn expect_update(&self, id: T::Id) -> ExpectationBuilder<RepositoryCall<T>, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            RepositoryCall::Update { id, response }
        })
    }

    pub fn expect_get(&self, id: T::Id) -> ExpectationBuilder<RepositoryCall<T>, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            RepositoryCall::Get { id, response }
        })
    }

    pub fn expect_get_all(&self) -> ExpectationBuilder<RepositoryCall<T>, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), RepositoryCall::GetAll)
    }

    pub fn expect_delete(&self, id: T::Id) -> ExpectationBuilder<RepositoryCall<T>, T> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            RepositoryCall::Delete { id, response }
        })
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let left = remaining(&self.expectations);
        if left > 0 {
            panic!(
                "Not all {} expectations were met. {} remaining",
                entity_type::<T>(),
                left
            );
        }
    }

    fn next(&self, call: &str) -> RepositoryCall<T> {
        match pop(&self.expectations) {
            Some(expectation) => expectation,
            None => panic!("Unexpected {} call: {call}", entity_type::<T>()),
        }
    }
}

fn mismatch<T: StoreEntity>(call: String, expected: &RepositoryCall<T>) -> ! {
    panic!(
        "Unexpected {} call: {call}, expected {}",
        entity_type::<T>(),
        expected.name()
    )
}

#[async_trait]
impl<T: StoreEntity> Repository<T> for MockRepository<T> {
    async fn create(&self, _record: T) -> Result<T, StoreError> {
        match self.next("create") {
            RepositoryCall::Create(response) => response,
            other => mismatch("create".to_string(), &other),
        }
    }

    async fn update(&self, id: T::Id, _record: T) -> Result<(), StoreError> {
        match self.next("update") {
            RepositoryCall::Update {
                id: expected,
                response,
            } if expected == id => response,
            other => mismatch(format!("update({id})"), &other),
        }
    }

    async fn get(&self, id: T::Id) -> Result<T, StoreError> {
        match self.next("get") {
            RepositoryCall::Get {
                id: expected,
                response,
            } if expected == id => response,
            other => mismatch(format!("get({id})"), &other),
        }
    }

    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        match self.next("get_all") {
            RepositoryCall::GetAll(response) => response,
            other => mismatch("get_all".to_string(), &other),
        }
    }

    async fn delete(&self, id: T::Id) -> Result<T, StoreError> {
        match self.next("delete") {
            RepositoryCall::Delete {
                id: expected,
                response,
            } if expected == id => response,
            other => mismatch(format!("delete({id})"), &other),
        }
    }
}

// =============================================================================
// MOCK LOOKUP
// =============================================================================

/// A scripted call to a [`MockLookup`].
pub struct LookupCall<Id, V> {
    id: Id,
    response: Result<V, StoreError>,
}

/// Parent-lookup double driven by a queue of expected `get` calls.
pub struct MockLookup<Id, V> {
    expectations: Queue<LookupCall<Id, V>>,
}

impl<Id, V> Clone for MockLookup<Id, V> {
    fn clone(&self) -> Self {
        Self {
            expectations: self.expectations.clone(),
        }
    }
}

impl<Id, V> Default for MockLookup<Id, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id, V> MockLookup<Id, V> {
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let left = remaining(&self.expectations);
        if left > 0 {
            panic!("Not all lookup expectations were met. {left} remaining");
        }
    }
}

impl<Id, V> MockLookup<Id, V>
where
    Id: Send + 'static,
    V: 'static,
{
    pub fn expect_get(&self, id: Id) -> ExpectationBuilder<LookupCall<Id, V>, V> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| LookupCall {
            id,
            response,
        })
    }
}

#[async_trait]
impl<Id, V> Lookup<Id, V> for MockLookup<Id, V>
where
    Id: PartialEq + Debug + Send + Sync + 'static,
    V: Send + 'static,
{
    async fn get(&self, id: Id) -> Result<V, StoreError> {
        match pop(&self.expectations) {
            Some(call) if call.id == id => call.response,
            Some(call) => panic!("Unexpected lookup get({id:?}), expected get({:?})", call.id),
            None => panic!("Unexpected lookup get({id:?})"),
        }
    }
}
