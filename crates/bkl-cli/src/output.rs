//! Output helpers for CLI commands.
//!
//! Results go to stdout; diagnostics go through `tracing` to stderr.

use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use crate::error::CliError;

/// Write `value` as a single line of JSON.
pub fn write_json_line<W, T>(writer: &mut W, value: &T) -> Result<(), CliError>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a human-readable line.
pub fn write_line<W, T>(writer: &mut W, value: &T) -> Result<(), CliError>
where
    W: Write,
    T: Display + ?Sized,
{
    writeln!(writer, "{value}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Item {
        id: i64,
        name: &'static str,
    }

    #[test]
    fn test_write_json_line() {
        let mut buf = Vec::new();
        write_json_line(&mut buf, &Item { id: 1, name: "Home" }).unwrap();
        write_json_line(&mut buf, &Item { id: 2, name: "Setup" }).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "{\"id\":1,\"name\":\"Home\"}\n{\"id\":2,\"name\":\"Setup\"}\n"
        );
    }

    #[test]
    fn test_write_line() {
        let mut buf = Vec::new();
        write_line(&mut buf, "updated: A => B").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "updated: A => B\n");
    }
}
