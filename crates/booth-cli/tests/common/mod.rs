//! Shared harness for dispatch tests.
#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use booth_cli::config::AppConfig;
use booth_cli::state::AppState;
use booth_core::ids::Locator;
use booth_test_support::ManualScheduler;
use booth_transport::config::TransportConfig;

/// Locator of the booth the player starts in.
pub const START: &str = "loc:mall";

/// Captures what the player would see on the console.
#[derive(Clone, Default)]
pub struct Screen(Arc<Mutex<Vec<u8>>>);

impl Screen {
    /// Everything printed so far, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Forgets everything printed so far.
    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl Write for Screen {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A running console session on virtual time.
pub struct Session {
    pub state: AppState,
    pub scheduler: Arc<ManualScheduler>,
    pub screen: Screen,
    pub unit: Duration,
}

/// Starts a session with the built-in destinations, `offline` locators
/// unreachable.
pub async fn session_with_offline(offline: &[&str]) -> Session {
    session_with_config(AppConfig {
        transport: TransportConfig::default(),
        offline: offline.iter().map(|locator| Locator::new(*locator)).collect(),
        start: Some(Locator::new(START)),
    })
    .await
}

/// Starts a session from an explicit configuration.
pub async fn session_with_config(config: AppConfig) -> Session {
    let scheduler = Arc::new(ManualScheduler::new());
    let screen = Screen::default();
    let state = AppState::build(
        &config,
        Box::new(screen.clone()),
        Arc::clone(&scheduler) as Arc<dyn booth_core::scheduler::DelayScheduler>,
    )
    .await
    .unwrap();
    Session {
        state,
        scheduler,
        screen,
        unit: config.transport.stage_unit(),
    }
}

/// Starts a session where every destination is reachable.
pub async fn session() -> Session {
    session_with_offline(&[]).await
}
