use crate::calc::io::View;
use std::fmt::{self, Display, Write};

/// Width of the value column.
const WIDTH: usize = 16;

/// The last frame drawn, kept so it can be printed again on exit.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    text: String,
}

impl Screen {
    pub fn draw(&mut self, view: &View<'_>) {
        self.text.clear();
        // Writing to a String can't fail.
        write_view(&mut self.text, view).ok();
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// One line per occupied level, numbered from the top (level 1), then the
/// entry line, then the error if there is one.
///
/// ```text
/// [2/20]
///  2:                3
///  1:                4
/// > 12.5
/// ! stack full
/// ```
fn write_view(w: &mut impl Write, view: &View<'_>) -> fmt::Result {
    writeln!(w, "[{}/{}]", view.values.len(), view.capacity)?;
    for (level, value) in (1..=view.values.len()).rev().zip(view.values) {
        writeln!(w, "{level:>2}: {value:>WIDTH$}")?;
    }
    writeln!(w, "> {}", view.entry)?;
    if let Some(e) = view.error {
        writeln!(w, "! {e}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CalcError, StackError};
    use pretty_assertions::assert_eq;

    #[test]
    fn draws_levels_top_last() {
        let mut screen = Screen::default();
        screen.draw(&View {
            values: &[3.0, 4.5],
            capacity: 20,
            entry: "12.",
            error: None,
        });

        let expected = "\
[2/20]
 2:                3
 1:              4.5
> 12.
";
        assert_eq!(screen.to_string(), expected);
    }

    #[test]
    fn draws_error_line() {
        let err = CalcError::Stack(StackError::Underflow);
        let mut screen = Screen::default();
        screen.draw(&View {
            values: &[],
            capacity: 4,
            entry: "",
            error: Some(&err),
        });

        assert_eq!(screen.to_string(), "[0/4]\n> \n! stack empty\n");
    }
}
