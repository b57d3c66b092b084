/// Controller subsystem - routes user input to the active mode's handler.
///
/// Each mode (Normal, Insert, Command) has its own controller implementing
/// the `ModeController` trait against the shared editing state, which keeps
/// the handlers independently testable and the rendering layer out of the
/// editing logic.
pub mod command;
pub mod command_types;
pub mod editor;
pub mod insert;
pub mod key_handler;
pub mod normal;
pub mod shared_state;

pub use command_types::Mode;
pub use editor::EditorController;
pub use shared_state::{ModeController, ModeTransition, SharedEditorState};
