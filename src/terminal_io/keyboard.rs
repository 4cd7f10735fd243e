use crate::calc::key::{Key, Op};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// Block until a key that means something to the calculator is pressed.
pub fn wait_for_key() -> io::Result<Key> {
    loop {
        if let Some(key) = filter_event(&event::read()?) {
            return Ok(key);
        }
    }
}

/// If this is a relevant key-press event, return the calculator key.
fn filter_event(terminal_event: &Event) -> Option<Key> {
    let Event::Key(e) = terminal_event else {
        return None;
    };
    if e.kind == KeyEventKind::Release {
        return None;
    }

    // Raw mode swallows the signal, so treat ctrl+c as quit.
    if is_ctrl_c(e) {
        return Some(Key::Quit);
    }

    keycode_to_key(e.code)
}

fn is_ctrl_c(e: &KeyEvent) -> bool {
    matches!(e.code, KeyCode::Char('c' | 'C')) && e.modifiers.contains(KeyModifiers::CONTROL)
}

/// Translate a key from the physical keyboard into a calculator key.
///
/// Digits, `.` and `+ - * /` are themselves. `n` negates, `s` swaps,
/// `d` drops, `c` clears. Enter (or space) enters, `q` or Esc quits.
fn keycode_to_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Char(c @ '0'..='9') => Key::Digit(c as u8 - b'0'),
        KeyCode::Char('.' | ',') => Key::Point,
        KeyCode::Enter | KeyCode::Char(' ') => Key::Enter,
        KeyCode::Backspace => Key::Backspace,

        KeyCode::Char('+') => Key::Op(Op::Add),
        KeyCode::Char('-') => Key::Op(Op::Sub),
        KeyCode::Char('*' | 'x' | 'X') => Key::Op(Op::Mul),
        KeyCode::Char('/') => Key::Op(Op::Div),
        KeyCode::Char('n' | 'N') => Key::Op(Op::Neg),
        KeyCode::Char('s' | 'S') => Key::Op(Op::Swap),
        KeyCode::Char('d' | 'D') => Key::Op(Op::Drop),

        KeyCode::Char('c' | 'C') | KeyCode::Delete => Key::Clear,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Key::Quit,

        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn digits_and_operators() {
        let none = KeyModifiers::NONE;
        assert_eq!(
            filter_event(&press(KeyCode::Char('7'), none)),
            Some(Key::Digit(7))
        );
        assert_eq!(
            filter_event(&press(KeyCode::Char('0'), none)),
            Some(Key::Digit(0))
        );
        assert_eq!(
            filter_event(&press(KeyCode::Char('/'), none)),
            Some(Key::Op(Op::Div))
        );
        assert_eq!(
            filter_event(&press(KeyCode::Enter, none)),
            Some(Key::Enter)
        );
        assert_eq!(filter_event(&press(KeyCode::Char('z'), none)), None);
        assert_eq!(filter_event(&press(KeyCode::F(1), none)), None);
    }

    #[test]
    fn ctrl_c_quits_plain_c_clears() {
        assert_eq!(
            filter_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Quit)
        );
        assert_eq!(
            filter_event(&press(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(Key::Clear)
        );
    }

    #[test]
    fn releases_are_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(filter_event(&release), None);
        assert_eq!(filter_event(&Event::FocusGained), None);
    }
}
