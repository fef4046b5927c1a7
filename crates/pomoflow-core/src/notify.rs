//! Completion notification sink.
//!
//! Fire-and-forget: the reaction engine invokes the sink when a phase
//! completes with sound enabled, logs failures, and never awaits or
//! retries. Hosts supply their own implementation (the CLI rings the
//! terminal bell).

/// Plays the phase-completion notification.
pub trait NotificationSink {
    /// # Errors
    /// Implementations may fail; the dispatch core logs and swallows errors.
    fn play_completion_sound(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// Sink that does nothing. Default for embedded and test use.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn play_completion_sound(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
