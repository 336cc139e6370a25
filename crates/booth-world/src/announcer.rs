//! Console announcer for a single local player.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use booth_core::announce::{Announcer, Audience};
use booth_core::ids::EntityId;
use tracing::{trace, warn};

use crate::world::InMemoryWorld;

/// Prints announcements the local player would perceive.
///
/// Announcements to other audiences are dropped; the player sees
/// broadcasts only while standing where they are made.
pub struct ConsoleAnnouncer {
    player: EntityId,
    world: Arc<InMemoryWorld>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleAnnouncer {
    /// Creates an announcer writing to `out` on behalf of `player`.
    #[must_use]
    pub fn new(player: EntityId, world: Arc<InMemoryWorld>, out: Box<dyn Write + Send>) -> Self {
        Self {
            player,
            world,
            out: Mutex::new(out),
        }
    }
}

impl Announcer for ConsoleAnnouncer {
    fn announce(&self, audience: &Audience, text: &str) {
        let at = self.world.position_of(self.player);
        if !audience.includes(self.player, at.as_ref()) {
            trace!(?audience, text, "announcement out of earshot");
            return;
        }

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            warn!(error = %err, "failed to write announcement");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booth_core::ids::{LocationRef, Position};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_player_sees_direct_text_and_broadcasts_where_they_stand() {
        // Arrange
        let world = Arc::new(InMemoryWorld::default());
        let player = EntityId::new_random();
        let other = EntityId::new_random();
        let mall = Position::Location(LocationRef::new("loc:mall"));
        let gotham = Position::Location(LocationRef::new("loc:gotham"));
        world.place(player, mall.clone());
        let buffer = SharedBuffer::default();
        let announcer = ConsoleAnnouncer::new(player, Arc::clone(&world), Box::new(buffer.clone()));

        // Act
        announcer.announce(&Audience::Entity(player), "You press the button for Gotham.");
        announcer.announce(&Audience::Entity(other), "not for you");
        announcer.announce(&Audience::everyone_at(mall.clone()), "The camera begins to hum softly.");
        announcer.announce(&Audience::onlookers_at(mall, player), "about the player");
        announcer.announce(&Audience::everyone_at(gotham), "elsewhere");

        // Assert
        assert_eq!(
            buffer.text(),
            "You press the button for Gotham.\nThe camera begins to hum softly.\n"
        );
    }
}
