//! Announcement port.

use crate::ids::{EntityId, Position};

/// Who receives an announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// A single entity.
    Entity(EntityId),
    /// Everyone at `position`, optionally minus one entity.
    Occupants {
        /// Where the audience stands.
        position: Position,
        /// An entity left out, usually the one the text is about.
        except: Option<EntityId>,
    },
}

impl Audience {
    /// Everyone at `position`.
    #[must_use]
    pub fn everyone_at(position: Position) -> Self {
        Self::Occupants {
            position,
            except: None,
        }
    }

    /// Everyone at `position` except `entity`.
    #[must_use]
    pub fn onlookers_at(position: Position, entity: EntityId) -> Self {
        Self::Occupants {
            position,
            except: Some(entity),
        }
    }

    /// Whether `entity`, standing at `at`, is part of this audience.
    #[must_use]
    pub fn includes(&self, entity: EntityId, at: Option<&Position>) -> bool {
        match self {
            Self::Entity(target) => *target == entity,
            Self::Occupants { position, except } => {
                at == Some(position) && *except != Some(entity)
            }
        }
    }
}

/// Best-effort, fire-and-forget text delivery.
pub trait Announcer: Send + Sync {
    /// Deliver `text` to `audience`.
    fn announce(&self, audience: &Audience, text: &str);
}
