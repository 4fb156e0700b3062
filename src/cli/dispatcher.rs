//! The interactive prompt loop.

use super::command::Command;
use super::render;
use crate::config::Config;
use crate::services::ContactService;
use std::io::{self, BufRead, Write};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Reads commands, runs them against a [`ContactService`] and writes replies.
///
/// Input and output are generic so a session can be driven from any reader
/// and captured into any writer.
pub struct Dispatcher<S: ContactService> {
    service: S,
    page_size: usize,
    prompt: String,
    show_help: bool,
}

impl<S: ContactService> Dispatcher<S> {
    pub fn new(service: S, config: &Config) -> Self {
        Self {
            service,
            page_size: config.page_size,
            prompt: config.prompt.clone(),
            show_help: config.show_help,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run until an exit command or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        if self.show_help {
            writeln!(output, "{}", render::HELP_TEXT)?;
        }

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input");
                writeln!(output)?;
                writeln!(output, "{}", render::FAREWELL)?;
                return Ok(());
            }

            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(command) => {
                    if self.execute(command, &mut input, &mut output)? == Flow::Exit {
                        return Ok(());
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Rejected command");
                    writeln!(output, "{}", render::command_error(&e))?;
                }
            }
        }
    }

    /// Execute a single parsed command.
    ///
    /// `input` is only read by `show in parts`, which waits for Enter
    /// between pages.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Flow> {
        tracing::debug!(?command, "Executing command");

        match command {
            Command::Hello => writeln!(output, "{}", render::GREETING)?,
            Command::Help => writeln!(output, "{}", render::HELP_TEXT)?,
            Command::Add {
                name,
                phone,
                birthday,
            } => match self.service.add(&name, &phone, birthday.as_deref()) {
                Ok(record) => writeln!(output, "{}", render::added(record.name().as_str()))?,
                Err(e) => {
                    tracing::warn!(error = %e, "Add rejected");
                    writeln!(output, "{}", render::book_error(&e))?;
                }
            },
            Command::Remove { name } => {
                let existed = self.service.remove(&name);
                writeln!(output, "{}", render::removed(&name, existed))?;
            }
            Command::Find { token } => {
                for line in render::found(&self.service.find(&token)) {
                    writeln!(output, "{}", line)?;
                }
            }
            Command::Change { name, old, new } => match self.service.change(&name, &old, &new) {
                Ok(change) => writeln!(
                    output,
                    "{}",
                    render::changed(&name, &old, &new, change.changed)
                )?,
                Err(e) => {
                    tracing::warn!(error = %e, "Change rejected");
                    writeln!(output, "{}", render::book_error(&e))?;
                }
            },
            Command::ShowAll => self.show_all(output)?,
            Command::ShowInParts => self.show_in_parts(input, output)?,
            Command::Exit => {
                writeln!(output, "{}", render::FAREWELL)?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn show_all<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let contacts = self.service.list_all();
        if contacts.is_empty() {
            return writeln!(output, "{}", render::NO_CONTACTS);
        }
        for contact in &contacts {
            writeln!(output, "{}", render::summary(contact))?;
        }
        Ok(())
    }

    fn show_in_parts<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> io::Result<()> {
        if self.service.is_empty() {
            return writeln!(output, "{}", render::NO_CONTACTS);
        }

        let mut pages = self.service.list_paged(self.page_size).peekable();
        while let Some(page) = pages.next() {
            for line in &page {
                writeln!(output, "{}", line)?;
            }

            if pages.peek().is_none() {
                break;
            }

            write!(output, "{}", render::CONTINUE_PROMPT)?;
            output.flush()?;
            let mut ack = String::new();
            if input.read_line(&mut ack)? == 0 {
                writeln!(output)?;
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::AddressBook;
    use crate::services::ContactServiceImpl;
    use std::io::Cursor;

    fn dispatcher(page_size: usize) -> Dispatcher<ContactServiceImpl> {
        let config = Config {
            page_size,
            prompt: "> ".to_string(),
            show_help: false,
            ..Config::default()
        };
        Dispatcher::new(ContactServiceImpl::new(AddressBook::new()), &config)
    }

    fn execute(dispatcher: &mut Dispatcher<ContactServiceImpl>, line: &str) -> (Flow, String) {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        let command = Command::parse(line).unwrap();
        let flow = dispatcher
            .execute(command, &mut input, &mut output)
            .unwrap();
        (flow, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_execute_add_then_find() {
        let mut dispatcher = dispatcher(2);
        let (flow, out) = execute(&mut dispatcher, "add Anna 380501234567 1990-05-20");
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "Contact Anna has been saved.\n");

        let (_, out) = execute(&mut dispatcher, "find anna");
        assert_eq!(out, "Contacts found:\nAnna - 380501234567\n");
    }

    #[test]
    fn test_execute_add_invalid_birthday() {
        let mut dispatcher = dispatcher(2);
        let (_, out) = execute(&mut dispatcher, "add Anna 380501234567 2023-02-30");
        assert!(out.starts_with("Invalid birthday: 2023-02-30"));
        assert!(dispatcher.service().is_empty());
    }

    #[test]
    fn test_execute_exit() {
        let mut dispatcher = dispatcher(2);
        let (flow, out) = execute(&mut dispatcher, "good bye");
        assert_eq!(flow, Flow::Exit);
        assert_eq!(out, "Good bye!\n");
    }

    #[test]
    fn test_show_in_parts_waits_between_pages_only() {
        let mut dispatcher = dispatcher(2);
        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            execute(&mut dispatcher, &format!("add {} 38050000000{}", name, i));
        }

        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();
        dispatcher
            .execute(Command::ShowInParts, &mut input, &mut output)
            .unwrap();

        let out = String::from_utf8(output).unwrap();
        assert_eq!(
            out,
            "A: 380500000000\nB: 380500000001\nPress Enter to continue...\
             C: 380500000002\nD: 380500000003\n"
        );
    }

    #[test]
    fn test_show_in_parts_stops_at_end_of_input() {
        let mut dispatcher = dispatcher(1);
        execute(&mut dispatcher, "add A 380500000000");
        execute(&mut dispatcher, "add B 380500000001");

        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        dispatcher
            .execute(Command::ShowInParts, &mut input, &mut output)
            .unwrap();

        let out = String::from_utf8(output).unwrap();
        assert_eq!(out, "A: 380500000000\nPress Enter to continue...\n");
    }

    #[test]
    fn test_show_all_empty() {
        let mut dispatcher = dispatcher(2);
        let (_, out) = execute(&mut dispatcher, "show all");
        assert_eq!(out, "There are no contacts.\n");
    }
}
