pub mod calc;
pub mod error;
pub mod stack;
pub mod terminal_io;

pub use calc::io::{CalcIo, View};
pub use calc::key::{Key, Op};
pub use calc::Calculator;
pub use error::{CalcError, StackError};
pub use stack::{Stack, DEFAULT_CAPACITY};
pub use terminal_io::TerminalIo;
