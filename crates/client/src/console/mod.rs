//! Line-oriented console frontend.
//!
//! Reads one command per line, feeds it to the [`Session`], and prints the
//! events it produced. The loop is generic over its reader and writer so it
//! can be driven from tests.

mod command;
pub mod render;

pub use command::{Command, CommandError, HELP};

use std::io::{BufRead, Write};

use anyhow::Result;
use satchel_core::{ErrorSeverity, GameError};
use satchel_runtime::{GameEvent, Session};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Console<R, W> {
    session: Session,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "satchel console. type 'help' for commands.")?;
        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.dispatch(command)? == Flow::Quit {
                        break;
                    }
                }
                Err(CommandError::Empty) => {}
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        tracing::info!("console closed");
        Ok(())
    }

    /// Executes one command and prints its result.
    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(?command, "console command");
        let events = match command {
            Command::Spawn(id) => match self.session.spawn_world_item(&id) {
                Ok(item) => {
                    writeln!(self.output, "spawned {id} as @{}", item.0)?;
                    return Ok(Flow::Continue);
                }
                Err(err) => return self.report(&err),
            },
            Command::PickUp { item, contact } => match self.session.pick_up(item, contact) {
                Ok(events) => events,
                Err(err) => return self.report(&err),
            },
            Command::Select(entry) => self.session.select(entry),
            Command::ClearSelection => self.session.clear_selection(),
            Command::Use => self.session.use_selected(),
            Command::Destroy => self.session.destroy_selected(),
            Command::Drag { entry, target } => self.session.drag(entry, target),
            Command::BeginDrag(entry) => self.session.begin_drag(entry),
            Command::Drop { entry, target } => self.session.drop_on(entry, target),
            Command::EndDrag(entry) => self.session.end_drag(entry),
            Command::Open => {
                let events = self.session.open_panel();
                self.print_events(&events)?;
                writeln!(self.output, "{}", render::status(&self.session))?;
                return Ok(Flow::Continue);
            }
            Command::Close => self.session.close_panel(),
            Command::World => return self.print(render::world(&self.session)),
            Command::Status => return self.print(render::status(&self.session)),
            Command::List => return self.print(render::catalog(&self.session)),
            Command::Help => return self.print(HELP.to_owned()),
            Command::Quit => return Ok(Flow::Quit),
        };

        if events.is_empty() {
            writeln!(self.output, "nothing happened")?;
        }
        self.print_events(&events)?;
        Ok(Flow::Continue)
    }

    fn print(&mut self, text: String) -> Result<Flow> {
        writeln!(self.output, "{text}")?;
        Ok(Flow::Continue)
    }

    /// Logs a failed command by severity and tells the player what went wrong.
    fn report<E>(&mut self, err: &E) -> Result<Flow>
    where
        E: GameError + std::error::Error,
    {
        let code = err.error_code();
        let severity = err.severity().as_str();
        match err.severity() {
            ErrorSeverity::Fatal => {
                tracing::error!(code, severity, error = %err, "command failed");
            }
            ErrorSeverity::Validation => {
                tracing::warn!(code, severity, error = %err, "command rejected");
            }
        }

        match err.source() {
            Some(source) => writeln!(self.output, "{err}: {source}")?,
            None => writeln!(self.output, "{err}")?,
        }
        Ok(Flow::Continue)
    }

    fn print_events(&mut self, events: &[GameEvent]) -> Result<()> {
        for event in events {
            writeln!(self.output, "  {}", render::event(&self.session, event))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use satchel_core::GameConfig;
    use satchel_runtime::{ItemCatalog, RuntimeConfig};

    use super::*;

    fn run(script: &str) -> (Session, String) {
        let session = Session::builder()
            .config(RuntimeConfig::new(
                GameConfig::new().with_capacity(2).with_slot_count(2),
            ))
            .catalog(ItemCatalog::builtin())
            .build()
            .unwrap();

        let mut console = Console::new(session, script.as_bytes(), Vec::new());
        console.run().unwrap();
        let Console {
            session, output, ..
        } = console;
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn scripted_pickup_and_use() {
        let (session, output) = run("spawn poison\npickup 0\nopen\nselect 0\nuse\nquit\nstatus\n");

        assert!(output.contains("spawned poison as @0"));
        assert!(output.contains("Poison shown as #0 in slot 0"));
        assert!(output.contains("HP 100 -> 85 / 100"));
        assert!(output.contains("used Poison: deals 15 damage"));
        // Lines after quit are never read.
        assert!(!output.contains("inventory 0/2"));
        assert_eq!(session.state().health.current(), 85);
    }

    #[test]
    fn bad_input_is_reported_and_loop_continues() {
        let (_, output) = run("dance\n\nuse\n");

        assert!(output.contains("unknown command 'dance'"));
        assert!(output.contains("nothing happened"));
    }

    #[test]
    fn closed_panel_ignores_select() {
        let (session, output) = run("spawn sword\npickup 0\nselect 0\n");

        assert!(output.contains("nothing happened"));
        assert_eq!(session.state().panel.selection().selected(), None);
    }

    #[test]
    fn unknown_spawn_id_names_the_id() {
        let (session, output) = run("spawn dragon_egg\n");

        assert!(output.contains("invalid item catalog: unknown item id 'dragon_egg'"));
        assert_eq!(session.state().world.len(), 0);
    }

    #[test]
    fn pickup_of_missing_item_prints_error() {
        let (session, output) = run("pickup 9\n");

        assert!(output.contains("#9"));
        assert!(session.state().inventory.is_empty());
    }
}
