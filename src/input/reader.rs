//! Line reader for byte streams (redirected files, pipes, test cursors).

use super::{Input, reserve_doubling};
use crate::error::ShellResult;
use std::io::{self, BufRead};

/// Initial capacity of a line buffer, in bytes.
pub const LINE_BUFFER_SIZE: usize = 1024;

/// Read bytes until a newline or the end of the stream.
///
/// The newline is consumed but not returned. The buffer starts at
/// [`LINE_BUFFER_SIZE`] bytes and doubles whenever the next chunk would not
/// fit. End of stream is not an error: it yields [`Input::EndOfStream`] with
/// whatever was read so far, possibly nothing.
pub fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> ShellResult<Input> {
    let mut buffer: Vec<u8> = Vec::new();
    reserve_doubling(&mut buffer, 0, LINE_BUFFER_SIZE, "line reader")?;

    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        if available.is_empty() {
            return Ok(Input::EndOfStream(into_text(buffer)));
        }

        let newline = available.iter().position(|&byte| byte == b'\n');
        let chunk = match newline {
            Some(index) => &available[..index],
            None => available,
        };

        reserve_doubling(&mut buffer, chunk.len(), LINE_BUFFER_SIZE, "line reader")?;
        buffer.extend_from_slice(chunk);

        let consumed = chunk.len() + usize::from(newline.is_some());
        reader.consume(consumed);

        if newline.is_some() {
            return Ok(Input::Line(into_text(buffer)));
        }
    }
}

fn into_text(buffer: Vec<u8>) -> String {
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
