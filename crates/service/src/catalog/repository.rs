use async_trait::async_trait;

use super::domain::Bird;
use super::errors::StoreError;

/// Persistence abstraction for the bird catalog.
///
/// Implementations must return an empty (not absent) list for zero records
/// and must never mutate the caller-supplied entry on create.
#[async_trait]
pub trait BirdStore: Send + Sync {
    /// Persist one entry. No field validation happens at this level.
    async fn create_bird(&self, bird: &Bird) -> Result<(), StoreError>;

    /// Every stored entry, as owned copies. Order is storage-defined.
    async fn get_birds(&self) -> Result<Vec<Bird>, StoreError>;
}

/// Recording test double for `BirdStore`, for testing handlers without a
/// live database.
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// One recorded invocation on the mock store.
    #[derive(Clone, Debug, PartialEq)]
    pub enum StoreCall {
        CreateBird(Bird),
        GetBirds,
    }

    /// Records every call and answers with whatever the test programmed.
    /// With nothing programmed, calls succeed and `get_birds` returns an
    /// empty list.
    #[derive(Default)]
    pub struct MockBirdStore {
        calls: Mutex<Vec<StoreCall>>,
        create_response: Mutex<Option<StoreError>>,
        get_response: Mutex<(Vec<Bird>, Option<StoreError>)>,
    }

    impl MockBirdStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Program the result of `create_bird`; `None` means success.
        pub fn on_create_bird(&self, err: Option<StoreError>) {
            *self.create_response.lock().unwrap() = err;
        }

        /// Program the result of `get_birds`.
        pub fn on_get_birds(&self, birds: Vec<Bird>, err: Option<StoreError>) {
            *self.get_response.lock().unwrap() = (birds, err);
        }

        /// Calls recorded so far, in invocation order.
        pub fn calls(&self) -> Vec<StoreCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BirdStore for MockBirdStore {
        async fn create_bird(&self, bird: &Bird) -> Result<(), StoreError> {
            self.calls.lock().unwrap().push(StoreCall::CreateBird(bird.clone()));
            match &*self.create_response.lock().unwrap() {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }

        async fn get_birds(&self) -> Result<Vec<Bird>, StoreError> {
            self.calls.lock().unwrap().push(StoreCall::GetBirds);
            let guard = self.get_response.lock().unwrap();
            let (birds, err) = &*guard;
            match err {
                Some(e) => Err(e.clone()),
                None => Ok(birds.clone()),
            }
        }
    }
}
