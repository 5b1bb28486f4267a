use std::{fmt, str::FromStr};

use bulksearch::{enrich::Session, presence::PresenceCheck};
use log::{debug, trace};

/// Something that can show a URL to the user.
pub trait Launcher {
    /// Opens `url`, failures are not reported back.
    fn open(&self, url: &str);
}

/// Opens URLs in the default web browser.
pub struct Browser;

impl Launcher for Browser {
    fn open(&self, url: &str) {
        trace!("Opening '{url}' in the default browser");
        if let Err(e) = webbrowser::open(url) {
            debug!("Could not open '{url}': {e}");
        }
    }
}

/// A command entered at the selection prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Choice {
    /// Check every resolved entry.
    All,
    /// Same as [`Choice::All`].
    Libgen,
    /// Stop without checking anything.
    Exit,
    /// 1-based positions, resolved entries first and unresolved entries after them.
    Select(Vec<i64>),
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidInput;

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Invalid input. Please enter valid numbers.")
    }
}

impl std::error::Error for InvalidInput {}

impl FromStr for Choice {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "libgen" => Ok(Self::Libgen),
            "exit" => Ok(Self::Exit),
            list => list
                .split(',')
                .map(|token| token.trim().parse::<i64>().map_err(|_| InvalidInput))
                .collect::<Result<_, _>>()
                .map(Self::Select),
        }
    }
}

impl Choice {
    /// Runs the presence check for the chosen entries and opens every hit.
    ///
    /// Returns the positions that did not match any entry, in the order they were given.
    pub fn execute<P, L>(self, session: &Session, checker: &P, launcher: &L) -> Vec<i64>
    where
        P: PresenceCheck,
        L: Launcher,
    {
        let open = |identifier: &str| {
            if let Some(url) = checker.check_presence(identifier) {
                launcher.open(&url);
            }
        };

        match self {
            Self::All | Self::Libgen => {
                session.resolved.iter().for_each(|r| open(&r.identifier));
                vec![]
            }
            Self::Exit => vec![],
            Self::Select(positions) => {
                let mut invalid = vec![];
                for position in positions {
                    match identifier_at(session, position) {
                        Some(identifier) => open(identifier),
                        None => invalid.push(position),
                    }
                }
                invalid
            }
        }
    }
}

fn identifier_at(session: &Session, position: i64) -> Option<&str> {
    let index = usize::try_from(position.checked_sub(1)?).ok()?;
    let resolved = &session.resolved;

    resolved
        .get(index)
        .map(|r| r.identifier.as_str())
        .or_else(|| {
            index
                .checked_sub(resolved.len())
                .and_then(|i| session.unresolved.get(i))
                .map(|u| u.identifier.as_str())
        })
}

/// Prompts with `next_command` until a command is accepted and carried out.
///
/// Input is read until a valid command is given or `next_command` returns `None`.
pub fn dispatch<I, P, L>(
    session: &Session,
    mut next_command: I,
    checker: &P,
    launcher: &L,
) -> eyre::Result<()>
where
    I: FnMut() -> eyre::Result<Option<String>>,
    P: PresenceCheck,
    L: Launcher,
{
    while let Some(line) = next_command()? {
        match line.parse::<Choice>() {
            Ok(choice) => {
                trace!("Carrying out {choice:?}");
                for position in choice.execute(session, checker, launcher) {
                    println!("Invalid index: {position}");
                }
                return Ok(());
            }
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}
