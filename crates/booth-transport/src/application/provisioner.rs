//! Lazy, idempotent provisioning of the endpoint at a remote location.

use std::sync::Arc;

use booth_core::clock::Clock;
use booth_core::error::DomainError;
use booth_core::ids::Locator;
use booth_core::placement::LocationActivator;
use tracing::{debug, info, warn};

use crate::domain::endpoint::{EndpointStore, TransportEndpoint};

/// Finds or creates the single endpoint at a target location.
pub struct RemoteEndpointProvisioner {
    activator: Arc<dyn LocationActivator>,
    store: Arc<EndpointStore>,
    clock: Arc<dyn Clock>,
}

impl RemoteEndpointProvisioner {
    /// Creates a provisioner over `store`.
    #[must_use]
    pub fn new(
        activator: Arc<dyn LocationActivator>,
        store: Arc<EndpointStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            activator,
            store,
            clock,
        }
    }

    /// Returns the endpoint at the location addressed by `locator`,
    /// activating the location and creating the endpoint on first use.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ProvisionFailure` if the location cannot be
    /// activated. Nothing is created in that case, so a later call can
    /// succeed once the location is reachable.
    pub async fn ensure_endpoint(
        &self,
        locator: &Locator,
    ) -> Result<Arc<TransportEndpoint>, DomainError> {
        let host = self.activator.activate(locator).await.map_err(|err| {
            warn!(%locator, error = %err, "destination location is unreachable");
            DomainError::ProvisionFailure {
                locator: locator.clone(),
            }
        })?;

        let (endpoint, created) = self.store.get_or_create(&host, self.clock.now());
        if created {
            info!(%locator, %host, endpoint_id = %endpoint.id(), "created transport endpoint");
        } else {
            debug!(%locator, endpoint_id = %endpoint.id(), "reusing transport endpoint");
        }
        Ok(endpoint)
    }

    /// The store this provisioner writes to.
    #[must_use]
    pub fn store(&self) -> &Arc<EndpointStore> {
        &self.store
    }
}
