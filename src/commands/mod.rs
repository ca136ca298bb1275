//! Command implementations

pub mod play;
pub mod simple;

pub use play::play_session;
pub use simple::{Shell, run_simple};

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line
///
/// Returns `None` once input is closed.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed or input cannot be read.
pub fn read_input<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_lines_until_closed() {
        let mut input = Cursor::new("  a \n\nlast");
        assert_eq!(read_input(&mut input, "x").unwrap(), Some("a".to_string()));
        assert_eq!(read_input(&mut input, "x").unwrap(), Some(String::new()));
        assert_eq!(read_input(&mut input, "x").unwrap(), Some("last".to_string()));
        assert_eq!(read_input(&mut input, "x").unwrap(), None);
    }
}
