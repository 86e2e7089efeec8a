//! Shared fixtures for in-memory widget integration tests.

use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};
use rstest::fixture;
use taskdeck::{
    config::WidgetConfig,
    storage::adapters::memory::InMemoryKeyValueStore,
    task::adapters::cue::CountingCue,
    widget::{TaskWidget, WidgetPorts},
};

use crate::test_helpers::ManualClock;

/// Widget type wired to in-memory collaborators.
pub type MemoryWidget = TaskWidget<InMemoryKeyValueStore, ManualClock, CountingCue, StdRng>;

/// Collaborators that outlive a single widget instance, so tests can reload.
pub struct Session {
    pub backing: InMemoryKeyValueStore,
    pub clock: Arc<ManualClock>,
    pub cue: Arc<CountingCue>,
}

impl Session {
    /// Opens a widget over this session's store with default config.
    pub fn open(&self) -> MemoryWidget {
        TaskWidget::load(
            WidgetPorts::new(
                Arc::new(self.backing.clone()),
                Arc::clone(&self.clock),
                Arc::clone(&self.cue),
            ),
            StdRng::seed_from_u64(11),
            &WidgetConfig::default(),
        )
    }
}

/// Session with nothing persisted yet.
#[fixture]
pub fn fresh() -> Session {
    Session {
        backing: InMemoryKeyValueStore::new(),
        clock: Arc::new(ManualClock::default()),
        cue: Arc::new(CountingCue::new()),
    }
}

/// Session whose persisted task list is empty.
#[fixture]
pub fn empty_list() -> Session {
    Session {
        backing: InMemoryKeyValueStore::with_entries([("tasks", "[]")]),
        clock: Arc::new(ManualClock::default()),
        cue: Arc::new(CountingCue::new()),
    }
}
