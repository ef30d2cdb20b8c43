//! Line-oriented terminal source
//!
//! Each line is `<field> [value]`, e.g. `unit miles` or `pace-min 4`.
//! `help` lists the fields, `quit` (or end of input) ends the session.

use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tracing::{debug, info};

use crate::input::split_command;
use crate::render::preset_summary;
use crate::source::EditSource;
use crate::types::{Edit, Field};
use crate::{CalculatorError, Result};

/// Source reading commands from a line stream
pub struct TerminalSource<R, W> {
    lines: Lines<R>,
    /// Where `help` output goes
    output: W,
    line_number: usize,
}

impl TerminalSource<BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    /// Read commands from the process stdin, answering `help` on stdout
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> TerminalSource<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    pub fn new(reader: R, output: W) -> Self {
        Self { lines: reader.lines(), output, line_number: 0 }
    }

    /// Consume the source, returning the help output sink
    pub fn into_output(self) -> W {
        self.output
    }

    async fn write_help(&mut self) -> Result<()> {
        let mut text = String::from("Commands:\n");
        for field in Field::ALL {
            text.push_str("  ");
            text.push_str(field.usage());
            text.push('\n');
        }
        text.push_str("  help\n  quit\n");
        text.push_str(&format!("Presets: {}\n", preset_summary()));

        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl<R, W> EditSource for TerminalSource<R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: AsyncWrite + Unpin + Send + 'static,
{
    async fn next_edit(&mut self) -> Result<Option<Edit>> {
        loop {
            let next = self
                .lines
                .next_line()
                .await
                .map_err(|e| CalculatorError::file_error(PathBuf::from("<stdin>"), e))?;
            let Some(line) = next else {
                info!("Terminal input closed after {} lines", self.line_number);
                return Ok(None);
            };
            self.line_number += 1;

            match line.trim().to_ascii_lowercase().as_str() {
                "quit" | "exit" | "q" => {
                    debug!("Quit requested on line {}", self.line_number);
                    return Ok(None);
                }
                "help" | "?" => {
                    self.write_help().await?;
                    continue;
                }
                _ => {}
            }

            let Some((field, text)) = split_command(&line)? else {
                continue;
            };

            return Edit::from_input(field, &text).map(Some).map_err(|e| match e {
                CalculatorError::InvalidCommand { reason, .. } => {
                    CalculatorError::invalid_command(line.trim(), reason)
                }
                other => other,
            });
        }
    }

    fn describe(&self) -> String {
        "terminal".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Preset, Unit};

    fn source(input: &'static str) -> TerminalSource<&'static [u8], Vec<u8>> {
        TerminalSource::new(input.as_bytes(), Vec::new())
    }

    #[tokio::test]
    async fn test_reads_commands_skipping_blanks() {
        let mut src = source("unit miles\n\n# note\ndistance half\npace-min 4x\n");
        assert_eq!(src.next_edit().await.unwrap(), Some(Edit::SetUnit(Unit::Miles)));
        assert_eq!(
            src.next_edit().await.unwrap(),
            Some(Edit::SelectPreset(Preset::HalfMarathon))
        );
        assert_eq!(src.next_edit().await.unwrap(), Some(Edit::SetPaceMinutes(4)));
        assert_eq!(src.next_edit().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_quit_ends_input() {
        let mut src = source("quit\nunit miles\n");
        assert_eq!(src.next_edit().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_help_is_written_and_skipped() {
        let mut src = source("help\ncustom\n");
        assert_eq!(src.next_edit().await.unwrap(), Some(Edit::SelectCustom));
        let help = String::from_utf8(src.into_output()).unwrap();
        assert!(help.contains("unit <km|miles>"));
        assert!(help.contains("Marathon (42.195 km)"));
    }

    #[tokio::test]
    async fn test_bad_command_is_error_and_source_continues() {
        let mut src = source("unit furlongs\nwarp 9\nhours 2\n");
        let err = src.next_edit().await.unwrap_err();
        assert!(err.to_string().contains("unit furlongs"));
        assert!(src.next_edit().await.is_err());
        assert_eq!(src.next_edit().await.unwrap(), Some(Edit::SetHours(2)));
    }

    #[tokio::test]
    async fn test_unreadable_input_names_stdin() {
        let mut src = TerminalSource::new(&b"unit miles\n\xff\xfe\n"[..], Vec::new());
        assert_eq!(src.next_edit().await.unwrap(), Some(Edit::SetUnit(Unit::Miles)));

        let err = src.next_edit().await.unwrap_err();
        match &err {
            CalculatorError::File { path, .. } => assert_eq!(path, &PathBuf::from("<stdin>")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "Cannot read <stdin>");
        assert!(!err.is_retryable());
    }
}
