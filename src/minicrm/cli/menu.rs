use super::print::{print_contacts, print_error, print_messages};
use super::prompt::{ask, parse_id, read_line};
use minicrm::api::ContactService;
use minicrm::store::ContactStore;
use std::io::{self, BufRead, Write};

/// The interactive loop. Generic over its input and output so it can be
/// driven from a test with in-memory buffers.
pub(super) struct Menu<'a, S: ContactStore, R: BufRead, W: Write> {
    service: &'a mut ContactService<S>,
    input: R,
    out: W,
}

impl<'a, S: ContactStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub(super) fn new(service: &'a mut ContactService<S>, input: R, out: W) -> Self {
        Self {
            service,
            input,
            out,
        }
    }

    /// Runs until Quit or end of input. Only I/O errors on the terminal
    /// itself end the loop early; operation errors are printed.
    pub(super) fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            write!(self.out, "Your choice: ")?;
            self.out.flush()?;

            let Some(choice) = read_line(&mut self.input)? else {
                writeln!(self.out)?;
                writeln!(self.out, "Goodbye!")?;
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.handle_add()?,
                "2" => self.handle_list()?,
                "3" => self.handle_delete()?,
                "4" => self.handle_update()?,
                "5" => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid choice. Try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== Mini-CRM ===")?;
        writeln!(self.out, "1) Add a contact")?;
        writeln!(self.out, "2) List contacts")?;
        writeln!(self.out, "3) Delete a contact by ID")?;
        writeln!(self.out, "4) Update a contact")?;
        writeln!(self.out, "5) Quit")
    }

    fn ask(&mut self, label: &str) -> io::Result<String> {
        ask(&mut self.input, &mut self.out, label)
    }

    fn handle_add(&mut self) -> io::Result<()> {
        let raw_id = self.ask("ID: ")?;
        let id = match parse_id(&raw_id) {
            Ok(id) => id,
            Err(e) => return print_error(&mut self.out, &e),
        };
        let name = self.ask("Name: ")?;
        let email = self.ask("Email: ")?;

        match self.service.add_contact(id, &name, &email) {
            Ok(result) => print_messages(&mut self.out, &result.messages),
            Err(e) => print_error(&mut self.out, &e),
        }
    }

    fn handle_list(&mut self) -> io::Result<()> {
        let result = self.service.list_contacts();
        print_contacts(&mut self.out, &result.listed_contacts)?;
        print_messages(&mut self.out, &result.messages)
    }

    fn handle_delete(&mut self) -> io::Result<()> {
        let raw_id = self.ask("ID to delete: ")?;
        let id = match parse_id(&raw_id) {
            Ok(id) => id,
            Err(e) => return print_error(&mut self.out, &e),
        };

        match self.service.remove_contact(id) {
            Ok(result) => print_messages(&mut self.out, &result.messages),
            Err(e) => print_error(&mut self.out, &e),
        }
    }

    fn handle_update(&mut self) -> io::Result<()> {
        let raw_id = self.ask("ID to update: ")?;
        let id = match parse_id(&raw_id) {
            Ok(id) => id,
            Err(e) => return print_error(&mut self.out, &e),
        };

        let Some(current) = self.service.get_contact(id) else {
            return writeln!(self.out, "ID not found.");
        };

        let name = self.ask(&format!(
            "New name (leave empty to keep '{}'): ",
            current.name()
        ))?;
        let email = self.ask(&format!(
            "New email (leave empty to keep '{}'): ",
            current.email()
        ))?;

        match self.service.update_contact(id, &name, &email) {
            Ok(result) => print_messages(&mut self.out, &result.messages),
            Err(e) => print_error(&mut self.out, &e),
        }
    }
}
