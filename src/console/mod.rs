//! Interactive console session.
//!
//! Reads one line at a time, hands it to the [`Dispatcher`] and writes the
//! reply back. The session ends on an exit command or at end of input.

use crate::commands::{Dispatcher, Outcome};
use crate::repositories::RecordRepository;
use std::borrow::Cow;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Prompt printed before every line when none is configured.
pub const DEFAULT_PROMPT: &str = "Command: ";

/// Run the read / dispatch / print loop until the user leaves.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` end the session with an error;
/// command failures are answered in-line.
pub async fn run_session<R, I, O>(
    dispatcher: &mut Dispatcher<R>,
    mut input: I,
    mut output: O,
    prompt: &str,
) -> io::Result<()>
where
    R: RecordRepository,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        output.write_all(prompt.as_bytes()).await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            info!("End of input, closing session");
            output.write_all(b"\n").await?;
            break;
        }

        let line = decode_line(&buf);
        if let Cow::Owned(_) = line {
            warn!("Input line was not valid UTF-8, dispatching lossy text");
        }

        match dispatcher.dispatch(&line) {
            Outcome::Reprompt => debug!("Blank line, reprompting"),
            Outcome::Reply(text) => write_line(&mut output, &text).await?,
            Outcome::Exit(text) => {
                write_line(&mut output, &text).await?;
                break;
            }
        }
    }

    output.flush().await
}

/// Strip the line terminator and decode, replacing invalid UTF-8 sequences.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}

async fn write_line<O: AsyncWrite + Unpin>(output: &mut O, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn transcript(input: &str) -> String {
        transcript_bytes(input.as_bytes()).await
    }

    async fn transcript_bytes(input: &[u8]) -> String {
        let mut dispatcher = Dispatcher::new();
        let mut output = Vec::new();
        run_session(&mut dispatcher, input, &mut output, "> ")
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_session_stops_at_exit() {
        let out = transcript("hello\nexit\nhello\n").await;
        assert_eq!(out, "> How can I help you?\n> Good bye!\n");
    }

    #[tokio::test]
    async fn test_blank_lines_only_reprompt() {
        let out = transcript("\n   \nclose\n").await;
        assert_eq!(out, "> > > Good bye!\n");
    }

    #[tokio::test]
    async fn test_session_ends_at_eof() {
        let out = transcript("hello").await;
        assert_eq!(out, "> How can I help you?\n> \n");
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_keeps_session_alive() {
        let out =
            transcript_bytes(b"add dima 0975323736\n\xff\xfe\nphone dima\nexit\n").await;
        assert_eq!(
            out,
            "> Contact dima has been added\n\
             > Unknown command, type 'help' for usage\n\
             > 0975323736\n\
             > Good bye!\n"
        );
    }

    #[tokio::test]
    async fn test_crlf_line_endings() {
        let out = transcript("hello\r\nexit\r\n").await;
        assert_eq!(out, "> How can I help you?\n> Good bye!\n");
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"hello\r\n"), "hello");
        assert_eq!(decode_line(b"hello"), "hello");
        assert_eq!(decode_line(b"\xff\n"), "\u{fffd}");
    }
}
