//! Transport endpoints and the location-keyed store that keeps them unique.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use booth_core::ids::{EndpointId, LocationRef, Position};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The booth travelers depart from and arrive at. One per location.
#[derive(Debug, PartialEq, Eq)]
pub struct TransportEndpoint {
    id: EndpointId,
    host: LocationRef,
    created_at: DateTime<Utc>,
}

impl TransportEndpoint {
    fn new(host: LocationRef, created_at: DateTime<Utc>) -> Self {
        Self {
            id: EndpointId(Uuid::new_v4()),
            host,
            created_at,
        }
    }

    /// Endpoint identifier.
    #[must_use]
    pub fn id(&self) -> EndpointId {
        self.id
    }

    /// The location this endpoint stands in.
    #[must_use]
    pub fn host(&self) -> &LocationRef {
        &self.host
    }

    /// When the endpoint was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The position of an entity standing inside this endpoint.
    #[must_use]
    pub fn position(&self) -> Position {
        Position::Endpoint(self.id)
    }
}

#[derive(Debug, Default)]
struct Slots {
    by_host: HashMap<LocationRef, Arc<TransportEndpoint>>,
    by_id: HashMap<EndpointId, Arc<TransportEndpoint>>,
}

/// Location-keyed endpoint store.
///
/// Lookup and creation happen under one lock, so a location never gets a
/// second endpoint no matter how many callers race for it.
#[derive(Debug, Default)]
pub struct EndpointStore {
    slots: Mutex<Slots>,
}

impl EndpointStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the endpoint at `host`, creating it if there is none. The
    /// flag is `true` when this call created it.
    pub fn get_or_create(
        &self,
        host: &LocationRef,
        now: DateTime<Utc>,
    ) -> (Arc<TransportEndpoint>, bool) {
        let mut slots = self.lock();
        if let Some(existing) = slots.by_host.get(host) {
            return (Arc::clone(existing), false);
        }

        let endpoint = Arc::new(TransportEndpoint::new(host.clone(), now));
        slots.by_host.insert(host.clone(), Arc::clone(&endpoint));
        slots.by_id.insert(endpoint.id, Arc::clone(&endpoint));
        (endpoint, true)
    }

    /// The endpoint at `host`, if any.
    #[must_use]
    pub fn at(&self, host: &LocationRef) -> Option<Arc<TransportEndpoint>> {
        self.lock().by_host.get(host).cloned()
    }

    /// The endpoint with identifier `id`, if any.
    #[must_use]
    pub fn by_id(&self, id: EndpointId) -> Option<Arc<TransportEndpoint>> {
        self.lock().by_id.get(&id).cloned()
    }

    /// The endpoint an entity at `position` is standing inside, if any.
    #[must_use]
    pub fn containing(&self, position: &Position) -> Option<Arc<TransportEndpoint>> {
        match position {
            Position::Endpoint(id) => self.by_id(*id),
            Position::Location(_) => None,
        }
    }

    /// Number of endpoints ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().by_host.len()
    }

    /// Whether no endpoint exists yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().by_host.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_get_or_create_is_idempotent_per_location() {
        // Arrange
        let store = EndpointStore::new();
        let gotham = LocationRef::new("loc:gotham");

        // Act
        let (first, created_first) = store.get_or_create(&gotham, now());
        let (second, created_second) = store.get_or_create(&gotham, now());

        // Assert
        assert!(created_first);
        assert!(!created_second);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_distinct_locations_get_distinct_endpoints() {
        let store = EndpointStore::new();

        let (gotham, _) = store.get_or_create(&LocationRef::new("loc:gotham"), now());
        let (sesame, _) = store.get_or_create(&LocationRef::new("loc:sesame"), now());

        assert_ne!(gotham.id(), sesame.id());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_containing_maps_positions_to_endpoints() {
        let store = EndpointStore::new();
        let host = LocationRef::new("loc:mall");
        let (endpoint, _) = store.get_or_create(&host, now());

        let inside = store.containing(&endpoint.position()).unwrap();
        assert!(Arc::ptr_eq(&inside, &endpoint));
        assert!(store.containing(&Position::Location(host.clone())).is_none());
        assert!(Arc::ptr_eq(&store.at(&host).unwrap(), &endpoint));
        assert_eq!(endpoint.created_at(), now());
    }

    #[test]
    fn test_unknown_endpoint_id_is_none() {
        let store = EndpointStore::new();

        assert!(store.by_id(EndpointId(Uuid::new_v4())).is_none());
        assert!(store.is_empty());
    }
}
