/// A keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `0..=9`.
    Digit(u8),
    Point,
    Enter,
    Op(Op),
    Backspace,
    Clear,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Dup,
    Swap,
    Drop,
}

impl Op {
    pub const ALL: [Op; 8] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Neg,
        Op::Dup,
        Op::Swap,
        Op::Drop,
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == token)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Neg => "neg",
            Op::Dup => "dup",
            Op::Swap => "swap",
            Op::Drop => "drop",
        }
    }

    /// How many values must be on the stack for this op to apply.
    pub fn arity(self) -> usize {
        match self {
            Op::Add | Op::Sub | Op::Mul | Op::Div | Op::Swap => 2,
            Op::Neg | Op::Dup | Op::Drop => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for op in Op::ALL {
            assert_eq!(Op::from_token(op.symbol()), Some(op));
        }
        assert_eq!(Op::from_token("%"), None);
        assert_eq!(Op::from_token(""), None);
    }
}
