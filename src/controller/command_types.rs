/// Editor modes. Exactly one is active at any time; Normal is initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
}

/// One decoded editing command, produced by the key handler and executed by
/// a mode controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveWordForward,
    MoveWordBackward,
    MoveLineStart,
    MoveLineEnd,
    DeleteLine,
    EnterInsertMode,
    EnterCommandMode,
    ExitToNormal,
    InsertChar(char),
    InsertNewline,
    DeleteBackward,
    DeleteForward,
}
