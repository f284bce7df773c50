use crate::terminal::KeyEvent;
use crate::widgets::traits::TextAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    /// Next step, or submit when already on the last one.
    Next,
    Previous,
    Submit,
    NextFocus,
    PrevFocus,
    InputKey(KeyEvent),
    TextAction(TextAction),
    Tick,
    Noop,
}
