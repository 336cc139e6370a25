//! In-memory placement and location activation.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use booth_core::error::{ActivationError, RelocationRejected};
use booth_core::ids::{EntityId, LocationRef, Locator, Position};
use booth_core::placement::{LocationActivator, Placement};
use tracing::debug;

#[derive(Debug, Default)]
struct State {
    positions: HashMap<EntityId, Position>,
    offline: HashSet<Locator>,
}

/// A world held entirely in memory.
///
/// Every locator names a location of the same name. Locators marked
/// offline refuse to activate until brought back.
#[derive(Debug, Default)]
pub struct InMemoryWorld {
    state: RwLock<State>,
}

impl InMemoryWorld {
    /// Creates a world where every locator in `offline` is unreachable.
    #[must_use]
    pub fn new(offline: impl IntoIterator<Item = Locator>) -> Self {
        let state = State {
            positions: HashMap::new(),
            offline: offline.into_iter().collect(),
        };
        Self {
            state: RwLock::new(state),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Puts `entity` at `position`, wherever it was before.
    pub fn place(&self, entity: EntityId, position: Position) {
        self.write().positions.insert(entity, position);
    }

    /// Where `entity` is, if it exists.
    #[must_use]
    pub fn position_of(&self, entity: EntityId) -> Option<Position> {
        self.read().positions.get(&entity).cloned()
    }

    /// Entities currently at `position`.
    #[must_use]
    pub fn occupants(&self, position: &Position) -> Vec<EntityId> {
        self.read()
            .positions
            .iter()
            .filter(|(_, at)| *at == position)
            .map(|(entity, _)| *entity)
            .collect()
    }

    /// Takes `locator` offline or brings it back.
    pub fn set_offline(&self, locator: Locator, offline: bool) {
        let mut state = self.write();
        if offline {
            state.offline.insert(locator);
        } else {
            state.offline.remove(&locator);
        }
    }
}

#[async_trait]
impl Placement for InMemoryWorld {
    async fn current_position(&self, entity: EntityId) -> Option<Position> {
        self.position_of(entity)
    }

    async fn relocate(&self, entity: EntityId, target: Position) -> Result<(), RelocationRejected> {
        let mut state = self.write();
        let Some(position) = state.positions.get_mut(&entity) else {
            return Err(RelocationRejected(format!("entity {entity} no longer exists")));
        };
        debug!(%entity, from = %position, to = %target, "entity relocated");
        *position = target;
        Ok(())
    }
}

#[async_trait]
impl LocationActivator for InMemoryWorld {
    async fn activate(&self, locator: &Locator) -> Result<LocationRef, ActivationError> {
        if locator.as_str().trim().is_empty() {
            return Err(ActivationError {
                locator: locator.clone(),
                reason: "empty locator".to_owned(),
            });
        }
        if self.read().offline.contains(locator) {
            return Err(ActivationError {
                locator: locator.clone(),
                reason: "domain is offline".to_owned(),
            });
        }
        Ok(LocationRef::new(locator.as_str()))
    }
}
