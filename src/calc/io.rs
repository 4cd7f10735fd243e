use super::key::Key;
use crate::error::CalcError;
use std::fmt::Debug;

/// The keypad and display the calculator is wired to.
pub trait CalcIo: Debug {
    /// Block until a key is pressed.
    fn blocking_get_key(&mut self) -> std::io::Result<Key>;

    /// Redraw the display. Called once at startup and after every key.
    fn render(&mut self, view: View<'_>) -> std::io::Result<()>;
}

/// What the display shows: the live stack, the pending entry, and the
/// error from the last key, if any.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// Bottom first.
    pub values: &'a [f32],
    pub capacity: usize,
    pub entry: &'a str,
    pub error: Option<&'a CalcError>,
}
