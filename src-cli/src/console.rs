//! Terminal input/output for commands.

use crate::render::Renderer;
use shoplist_theme::Palette;
use std::io::{self, BufRead, Write};

/// Where commands read confirmations from and write results to.
pub struct Console<R, W> {
    pub input: R,
    pub output: W,
    /// Emit ANSI colors
    pub color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Renderer for `palette` honoring the color setting.
    pub fn renderer(&self, palette: Palette) -> Renderer {
        Renderer::new(palette, self.color)
    }

    /// Ask a yes/no question; anything but `y`/`yes` (including EOF) is no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question} [y/N] ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Ok(false);
        }

        let answer = answer.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (bool, String) {
        let mut console = Console::new(input.as_bytes(), Vec::new(), false);
        let answer = console.confirm("Proceed?").expect("confirm");
        (answer, String::from_utf8(console.output).expect("utf-8"))
    }

    #[test]
    fn test_confirm_accepts_yes() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
        assert!(ask("  yes  \n").0);
    }

    #[test]
    fn test_confirm_rejects_everything_else() {
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("sure\n").0);
    }

    #[test]
    fn test_confirm_eof_is_no() {
        let (answer, output) = ask("");
        assert!(!answer);
        assert_eq!(output, "Proceed? [y/N] \n");
    }
}
