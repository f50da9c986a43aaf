//! Line-to-command mapping for the console.
//!
//! The console speaks in entry and slot numbers as printed by `status`; this
//! module turns one input line into a [`Command`] so the loop never looks at
//! raw text.

use std::str::{FromStr, SplitWhitespace};

use satchel_core::{Contact, EntityId, EntryId, SlotIndex};
use thiserror::Error;

/// First word of an input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
enum Verb {
    Spawn,
    World,
    #[strum(to_string = "pickup", serialize = "pick")]
    Pickup,
    #[strum(to_string = "select", serialize = "click")]
    Select,
    Clear,
    Use,
    Destroy,
    Drag,
    Begin,
    Drop,
    End,
    Open,
    Close,
    #[strum(to_string = "status", serialize = "panel")]
    Status,
    #[strum(to_string = "list", serialize = "items")]
    List,
    #[strum(to_string = "help", serialize = "?")]
    Help,
    #[strum(to_string = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

/// High-level outcome of parsing an input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place a catalog item in the world.
    Spawn(String),
    /// List pickables lying in the world.
    World,
    PickUp { item: EntityId, contact: Contact },
    Select(EntryId),
    ClearSelection,
    Use,
    Destroy,
    /// Full drag gesture onto `target`.
    Drag { entry: EntryId, target: SlotIndex },
    BeginDrag(EntryId),
    Drop { entry: EntryId, target: SlotIndex },
    EndDrag(EntryId),
    Open,
    Close,
    Status,
    /// Print the item catalog.
    List,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{verb}' needs a {what}")]
    MissingArgument {
        verb: &'static str,
        what: &'static str,
    },

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("unknown contact '{0}' (player or other)")]
    InvalidContact(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or(CommandError::Empty)?;
        let verb = Verb::from_str(first)
            .map_err(|_| CommandError::UnknownCommand(first.to_owned()))?;

        let mut args = Args { verb, words };
        let command = match verb {
            Verb::Spawn => Command::Spawn(args.word("catalog id")?.to_owned()),
            Verb::World => Command::World,
            Verb::Pickup => {
                let item = EntityId(args.number("world item id")?);
                let contact = match args.words.next() {
                    Some(raw) => Contact::from_str(raw)
                        .map_err(|_| CommandError::InvalidContact(raw.to_owned()))?,
                    None => Contact::Player,
                };
                Command::PickUp { item, contact }
            }
            Verb::Select => Command::Select(args.entry()?),
            Verb::Clear => Command::ClearSelection,
            Verb::Use => Command::Use,
            Verb::Destroy => Command::Destroy,
            Verb::Drag => Command::Drag {
                entry: args.entry()?,
                target: args.slot()?,
            },
            Verb::Begin => Command::BeginDrag(args.entry()?),
            Verb::Drop => Command::Drop {
                entry: args.entry()?,
                target: args.slot()?,
            },
            Verb::End => Command::EndDrag(args.entry()?),
            Verb::Open => Command::Open,
            Verb::Close => Command::Close,
            Verb::Status => Command::Status,
            Verb::List => Command::List,
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        };
        Ok(command)
    }
}

struct Args<'a> {
    verb: Verb,
    words: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn word(&mut self, what: &'static str) -> Result<&'a str, CommandError> {
        self.words.next().ok_or(CommandError::MissingArgument {
            verb: self.verb.into(),
            what,
        })
    }

    fn number<T: FromStr>(&mut self, what: &'static str) -> Result<T, CommandError> {
        let raw = self.word(what)?;
        raw.parse()
            .map_err(|_| CommandError::InvalidNumber(raw.to_owned()))
    }

    fn entry(&mut self) -> Result<EntryId, CommandError> {
        self.number("entry id").map(EntryId)
    }

    fn slot(&mut self) -> Result<SlotIndex, CommandError> {
        self.number("slot index").map(SlotIndex)
    }
}

pub const HELP: &str = "\
commands:
  spawn <id>                 place a catalog item in the world
  world                      list items lying in the world
  pickup <item> [player|other]
  select <entry>             click a displayed item
  clear                      clear the selection
  use | destroy              act on the selected item
  drag <entry> <slot>        begin, drop and end in one go
  begin <entry> / drop <entry> <slot> / end <entry>
  open | close               toggle the inventory panel
  status | list | help | quit";
