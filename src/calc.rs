pub mod io;
pub mod key;

use self::io::{CalcIo, View};
use self::key::{Key, Op};
use crate::error::{CalcError, StackError};
use crate::stack::{Stack, DEFAULT_CAPACITY};
use log::{debug, trace};
use std::fmt::{self, Debug};

/// An RPN calculator session: the value stack plus the number being typed.
#[derive(Debug, Clone, Default)]
pub struct Calculator<const N: usize = DEFAULT_CAPACITY> {
    stack: Stack<N>,
    entry: Entry,
}

impl<const N: usize> Calculator<N> {
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
            entry: Entry::new(),
        }
    }

    pub fn stack(&self) -> &Stack<N> {
        &self.stack
    }

    /// The digits typed so far but not yet entered.
    pub fn entry(&self) -> &str {
        self.entry.as_str()
    }

    pub fn view<'a>(&'a self, error: Option<&'a CalcError>) -> View<'a> {
        View {
            values: self.stack.as_slice(),
            capacity: N,
            entry: self.entry.as_str(),
            error,
        }
    }

    /// Drive the calculator from `io` until the `Quit` key.
    ///
    /// Calculator errors are shown on the display, not returned; only I/O
    /// failures end the session early.
    pub fn run(&mut self, io: &mut dyn CalcIo) -> std::io::Result<()> {
        io.render(self.view(None))?;

        loop {
            let key = io.blocking_get_key()?;
            if key == Key::Quit {
                return Ok(());
            }

            let err = self.press(key).err();
            if let Some(e) = &err {
                debug!("{key:?}: {e}");
            }
            io.render(self.view(err.as_ref()))?;
        }
    }

    pub fn press(&mut self, key: Key) -> Result<(), CalcError> {
        match key {
            Key::Digit(d) => {
                let c = char::from_digit(d.into(), 10)
                    .ok_or_else(|| CalcError::InvalidNumber(d.to_string()))?;
                self.entry.push(c as u8)?;
            }
            Key::Point => {
                // A second point is ignored.
                if !self.entry.as_str().contains('.') {
                    self.entry.push(b'.')?;
                }
            }
            Key::Enter => {
                // Enter with nothing typed repeats the top value.
                if self.entry.is_empty() {
                    self.apply(Op::Dup)?;
                } else {
                    self.enter()?;
                }
            }
            Key::Op(op) => {
                self.enter()?;
                self.apply(op)?;
            }
            Key::Backspace => self.entry.pop(),
            Key::Clear => self.clear(),
            Key::Quit => (),
        }
        Ok(())
    }

    /// Evaluate one word: a number, an operator, or `clear`.
    pub fn eval_token(&mut self, token: &str) -> Result<(), CalcError> {
        if token == "clear" {
            self.clear();
            return Ok(());
        }
        if let Some(op) = Op::from_token(token) {
            return self.apply(op);
        }

        let value = parse_number(token)?;
        self.stack.push(value)?;
        Ok(())
    }

    /// Evaluate whitespace-separated tokens, stopping at the first error.
    /// Tokens before the failing one keep their effect.
    ///
    /// Returns the top of the stack afterwards.
    pub fn eval_line(&mut self, line: &str) -> Result<Option<f32>, CalcError> {
        for token in line.split_whitespace() {
            self.eval_token(token)?;
        }
        Ok(self.stack.peek().ok())
    }

    /// Apply `op` to the stack. Either the whole op happens or the stack is
    /// left untouched.
    pub fn apply(&mut self, op: Op) -> Result<(), CalcError> {
        if self.stack.len() < op.arity() {
            debug!(
                "{} needs {} operands, have {}",
                op.symbol(),
                op.arity(),
                self.stack.len()
            );
            return Err(StackError::Underflow.into());
        }
        trace!("apply {} to {:?}", op.symbol(), self.stack);

        match op {
            Op::Add => self.binary(|a, b| a + b)?,
            Op::Sub => self.binary(|a, b| a - b)?,
            Op::Mul => self.binary(|a, b| a * b)?,
            Op::Div => self.binary(|a, b| a / b)?,
            Op::Neg => {
                let a = self.stack.pop()?;
                self.stack.push(-a)?;
            }
            Op::Dup => {
                let a = self.stack.peek()?;
                self.stack.push(a)?;
            }
            Op::Swap => {
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                self.stack.push(b)?;
                self.stack.push(a)?;
            }
            Op::Drop => {
                self.stack.pop()?;
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.entry.clear();
    }

    /// Push the pending entry, if there is one. On failure the entry is kept.
    fn enter(&mut self) -> Result<(), CalcError> {
        if self.entry.is_empty() {
            return Ok(());
        }
        let value = parse_number(self.entry.as_str())?;
        self.stack.push(value)?;
        self.entry.clear();
        Ok(())
    }

    /// Helper for `apply`. The caller has already checked there are two operands.
    fn binary(&mut self, f: impl FnOnce(f32, f32) -> f32) -> Result<(), StackError> {
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        self.stack.push(f(a, b))
    }
}

fn parse_number(s: &str) -> Result<f32, CalcError> {
    s.parse().map_err(|_| {
        let numeric = s
            .trim_start_matches(['-', '+'])
            .starts_with(|c: char| c.is_ascii_digit() || c == '.');
        if numeric {
            CalcError::InvalidNumber(s.to_string())
        } else {
            CalcError::UnknownToken(s.to_string())
        }
    })
}

/// Capacity of the entry line, in characters.
const ENTRY_LEN: usize = 16;

/// The number being typed. Only ASCII digits and `.` are ever stored.
#[derive(Clone, Default)]
struct Entry {
    bytes: [u8; ENTRY_LEN],
    len: usize,
}

impl Entry {
    fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, byte: u8) -> Result<(), CalcError> {
        if self.len == ENTRY_LEN {
            return Err(CalcError::EntryTooLong);
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) {
        self.len = self.len.saturating_sub(1);
    }

    fn clear(&mut self) {
        self.len = 0;
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }
}

impl Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}
