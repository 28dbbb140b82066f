use colored::Colorize;
use minicrm::api::{CmdMessage, MessageLevel};
use minicrm::error::CrmError;
use minicrm::model::Contact;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, err: &CrmError) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(format!("Error: {}", err))])
}

/// One aligned line per contact, in the order given.
pub(super) fn print_contacts<W: Write>(out: &mut W, contacts: &[Contact]) -> io::Result<()> {
    if contacts.is_empty() {
        return print_messages(out, &[CmdMessage::info("No contacts.")]);
    }

    let id_width = contacts
        .iter()
        .map(|c| c.id().to_string().len())
        .max()
        .unwrap_or(0);
    let name_width = contacts
        .iter()
        .map(|c| c.name().width())
        .max()
        .unwrap_or(0);

    writeln!(out)?;
    writeln!(out, "{}", "=== Contacts ===".bold())?;
    for c in contacts {
        let padding = name_width.saturating_sub(c.name().width());
        writeln!(
            out,
            "- ID:{:>id_width$} | Name:{}{} | Email:{}",
            c.id(),
            c.name(),
            " ".repeat(padding),
            c.email(),
            id_width = id_width
        )?;
    }
    Ok(())
}
