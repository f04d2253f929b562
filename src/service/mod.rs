pub mod breaker;

pub use breaker::{BreakerConfig, BreakerState, CircuitBreaker};

use std::future::Future;
use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::config::ServiceConfig;
use crate::error::StoreError;
use crate::models::{
    ImageUpload, NewInquiry, NewProperty, NewViewing, Property, PropertyImage, PropertyInquiry,
    PropertyUpdate, PropertyViewing, RealEstateProfessional, VerificationStatus, ViewingStatus,
};
use crate::query::{match_score, ClientPreferences, SearchQuery, SearchResult};
use crate::store::{MockStore, PropertyStore, RestStore};

/// Facade over the real-estate data layer.
///
/// Every operation goes to the backend first when the circuit breaker
/// allows it; transient backend failures open the breaker and the mock
/// store serves the request instead. Once the breaker's cooldown elapses
/// the backend is probed again, so an outage never outlives the session.
/// Validation errors (unknown id, illegal transition) are returned to the
/// caller and never trigger fallback.
pub struct EstateService<B: PropertyStore = RestStore> {
    backend: B,
    mock: MockStore,
    breaker: Mutex<CircuitBreaker>,
}

impl EstateService<RestStore> {
    /// Build the service against the configured backend. A single health
    /// probe decides the breaker's starting state; a dead backend means
    /// searches are served from sample data until it comes back.
    pub async fn connect(config: ServiceConfig) -> Result<Self, StoreError> {
        let backend = RestStore::new(&config)?;
        let mut breaker = CircuitBreaker::new(config.breaker);
        if backend.health().await {
            info!(base_url = %config.base_url, "backend is up");
        } else {
            warn!(
                base_url = %config.base_url,
                "backend unreachable, starting with the circuit open"
            );
            breaker.trip();
        }
        Ok(Self {
            backend,
            mock: MockStore::with_sample_data(),
            breaker: Mutex::new(breaker),
        })
    }
}

impl<B: PropertyStore> EstateService<B> {
    /// Assemble a service from explicit parts. Used by tests to inject a
    /// scripted backend.
    pub fn with_parts(backend: B, mock: MockStore, breaker_config: BreakerConfig) -> Self {
        Self {
            backend,
            mock,
            breaker: Mutex::new(CircuitBreaker::new(breaker_config)),
        }
    }

    pub fn breaker_state(&self) -> BreakerState {
        self.breaker().state()
    }

    /// Direct access to the mock store, for seeding demos and tests.
    pub fn mock(&self) -> &MockStore {
        &self.mock
    }

    fn breaker(&self) -> std::sync::MutexGuard<'_, CircuitBreaker> {
        self.breaker.lock().expect("breaker mutex poisoned")
    }

    async fn dispatch<T>(
        &self,
        op: &'static str,
        backend: impl Future<Output = Result<T, StoreError>> + Send,
        fallback: impl Future<Output = Result<T, StoreError>> + Send,
    ) -> Result<T, StoreError> {
        let allowed = self.breaker().allow_request();
        if allowed {
            match backend.await {
                Ok(value) => {
                    self.breaker().record_success();
                    return Ok(value);
                }
                Err(err) if err.is_transient() => {
                    warn!("{op} failed on backend, serving mock: {err}");
                    self.breaker().record_failure();
                }
                Err(err) => return Err(err),
            }
        } else {
            debug!("circuit open, serving {op} from mock");
        }
        fallback.await
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResult, StoreError> {
        self.dispatch("search", self.backend.search(query), self.mock.search(query))
            .await
    }

    pub async fn get_property(&self, id: &str) -> Result<Property, StoreError> {
        self.dispatch("get_property", self.backend.get(id), self.mock.get(id))
            .await
    }

    pub async fn create_property(&self, input: NewProperty) -> Result<Property, StoreError> {
        self.dispatch(
            "create_property",
            self.backend.create(input.clone()),
            self.mock.create(input),
        )
        .await
    }

    pub async fn update_property(
        &self,
        id: &str,
        update: PropertyUpdate,
    ) -> Result<Property, StoreError> {
        self.dispatch(
            "update_property",
            self.backend.update(id, update.clone()),
            self.mock.update(id, update),
        )
        .await
    }

    pub async fn delete_property(&self, id: &str) -> Result<(), StoreError> {
        self.dispatch(
            "delete_property",
            self.backend.delete(id),
            self.mock.delete(id),
        )
        .await
    }

    pub async fn upload_images(
        &self,
        property_id: &str,
        images: Vec<ImageUpload>,
    ) -> Result<Vec<PropertyImage>, StoreError> {
        self.dispatch(
            "upload_images",
            self.backend.upload_images(property_id, images.clone()),
            self.mock.upload_images(property_id, images),
        )
        .await
    }

    pub async fn schedule_viewing(&self, input: NewViewing) -> Result<PropertyViewing, StoreError> {
        self.dispatch(
            "schedule_viewing",
            self.backend.schedule_viewing(input.clone()),
            self.mock.schedule_viewing(input),
        )
        .await
    }

    pub async fn update_viewing(
        &self,
        id: &str,
        status: ViewingStatus,
    ) -> Result<PropertyViewing, StoreError> {
        self.dispatch(
            "update_viewing",
            self.backend.update_viewing(id, status),
            self.mock.update_viewing(id, status),
        )
        .await
    }

    pub async fn create_inquiry(&self, input: NewInquiry) -> Result<PropertyInquiry, StoreError> {
        self.dispatch(
            "create_inquiry",
            self.backend.create_inquiry(input.clone()),
            self.mock.create_inquiry(input),
        )
        .await
    }

    pub async fn respond_to_inquiry(
        &self,
        id: &str,
        message: String,
    ) -> Result<PropertyInquiry, StoreError> {
        self.dispatch(
            "respond_to_inquiry",
            self.backend.respond_to_inquiry(id, message.clone()),
            self.mock.respond_to_inquiry(id, message),
        )
        .await
    }

    pub async fn register_professional(
        &self,
        professional: RealEstateProfessional,
    ) -> Result<RealEstateProfessional, StoreError> {
        self.dispatch(
            "register_professional",
            self.backend.register_professional(professional.clone()),
            self.mock.register_professional(professional),
        )
        .await
    }

    pub async fn get_professional(&self, id: &str) -> Result<RealEstateProfessional, StoreError> {
        self.dispatch(
            "get_professional",
            self.backend.get_professional(id),
            self.mock.get_professional(id),
        )
        .await
    }

    pub async fn set_verification(
        &self,
        id: &str,
        status: VerificationStatus,
    ) -> Result<RealEstateProfessional, StoreError> {
        self.dispatch(
            "set_verification",
            self.backend.set_verification(id, status),
            self.mock.set_verification(id, status),
        )
        .await
    }

    /// Fetch a listing and score it against a client's preferences.
    pub async fn score_property(
        &self,
        property_id: &str,
        preferences: &ClientPreferences,
    ) -> Result<u8, StoreError> {
        let property = self.get_property(property_id).await?;
        Ok(match_score(&property, preferences))
    }
}
