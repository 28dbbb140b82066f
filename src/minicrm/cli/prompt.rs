use minicrm::error::{CrmError, Result};
use minicrm::model::ContactId;
use std::io::{self, BufRead, Write};

/// Read one line, trimmed. `None` at end of input. Bytes that are not
/// UTF-8 are replaced rather than treated as a read failure.
pub(super) fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

/// Print `label` and read the answer. End of input reads as an empty answer.
pub(super) fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;
    Ok(read_line(input)?.unwrap_or_default())
}

pub(super) fn parse_id(s: &str) -> Result<ContactId> {
    s.trim()
        .parse::<ContactId>()
        .map_err(|_| CrmError::Input(format!("'{}' is not a valid ID", s.trim())))
}
