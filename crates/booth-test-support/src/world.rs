//! Test world: in-memory `Placement` and `LocationActivator` with knobs
//! for the failure paths.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use booth_core::error::{ActivationError, RelocationRejected};
use booth_core::ids::{EntityId, LocationRef, Locator, Position};
use booth_core::placement::{LocationActivator, Placement};

#[derive(Debug, Default)]
struct State {
    positions: HashMap<EntityId, Position>,
    offline: HashSet<Locator>,
    reject_relocations: bool,
    relocations: Vec<(EntityId, Position)>,
    activations: usize,
    activation_yields: usize,
}

/// A world where every locator activates to a location of the same name
/// unless marked offline.
#[derive(Debug, Default)]
pub struct FakeWorld {
    state: Mutex<State>,
}

impl FakeWorld {
    /// Create an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `entity` at `position`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn place(&self, entity: EntityId, position: Position) {
        self.state.lock().unwrap().positions.insert(entity, position);
    }

    /// Removes `entity` from the world entirely.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn remove(&self, entity: EntityId) {
        self.state.lock().unwrap().positions.remove(&entity);
    }

    /// Where `entity` is.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn position_of(&self, entity: EntityId) -> Option<Position> {
        self.state.lock().unwrap().positions.get(&entity).cloned()
    }

    /// Makes activation of `locator` fail (or succeed again).
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn set_offline(&self, locator: &Locator, offline: bool) {
        let mut state = self.state.lock().unwrap();
        if offline {
            state.offline.insert(locator.clone());
        } else {
            state.offline.remove(locator);
        }
    }

    /// Makes every relocation fail (or succeed again).
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn reject_relocations(&self, reject: bool) {
        self.state.lock().unwrap().reject_relocations = reject;
    }

    /// Number of scheduler yields inside each activation, to widen race
    /// windows in concurrency tests.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn set_activation_yields(&self, yields: usize) {
        self.state.lock().unwrap().activation_yields = yields;
    }

    /// Every relocation attempted, including rejected ones.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn relocations(&self) -> Vec<(EntityId, Position)> {
        self.state.lock().unwrap().relocations.clone()
    }

    /// Number of activation calls.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn activation_count(&self) -> usize {
        self.state.lock().unwrap().activations
    }
}

#[async_trait]
impl Placement for FakeWorld {
    async fn current_position(&self, entity: EntityId) -> Option<Position> {
        self.position_of(entity)
    }

    async fn relocate(&self, entity: EntityId, target: Position) -> Result<(), RelocationRejected> {
        let mut state = self.state.lock().unwrap();
        state.relocations.push((entity, target.clone()));
        if state.reject_relocations {
            return Err(RelocationRejected("destination refused entry".into()));
        }
        match state.positions.get_mut(&entity) {
            Some(position) => {
                *position = target;
                Ok(())
            }
            None => Err(RelocationRejected("entity no longer exists".into())),
        }
    }
}

#[async_trait]
impl LocationActivator for FakeWorld {
    async fn activate(&self, locator: &Locator) -> Result<LocationRef, ActivationError> {
        let yields = {
            let mut state = self.state.lock().unwrap();
            state.activations += 1;
            state.activation_yields
        };
        for _ in 0..yields {
            tokio::task::yield_now().await;
        }

        if self.state.lock().unwrap().offline.contains(locator) {
            return Err(ActivationError {
                locator: locator.clone(),
                reason: "domain is offline".into(),
            });
        }
        Ok(LocationRef::new(locator.as_str()))
    }
}
