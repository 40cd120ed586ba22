mod controller;
mod progress;
mod source;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{CompletionSink, LessonSessionController};
pub use progress::SessionProgress;
pub use source::{LessonBundle, LessonSessionLoader, LessonSource};
