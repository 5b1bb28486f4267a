use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use eyre::{eyre, Context, Result};
use log::trace;

const PROMPT: &str = "Enter the number(s) of the book(s) to open (comma-separated), \
'all' to open all, 'libgen' to search on LibGen, or 'exit' to quit";

/// Reads one command from the user.
///
/// `None` means the input was closed and nothing more can be read. A terminal gets the
/// interactive prompt, piped or redirected input is read line by line.
pub fn user_command() -> Result<Option<String>> {
    println!();

    let stdin = io::stdin();
    if !stdin.is_terminal() {
        print!("{PROMPT}: ");
        io::stdout().flush().wrap_err("Cannot write the prompt")?;
        return read_command(&mut stdin.lock());
    }

    let res = Input::<String>::new()
        .with_prompt(PROMPT)
        .allow_empty(true)
        .interact_text();

    match res {
        Ok(line) => Ok(Some(line)),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            trace!("Input closed - nothing left to read");
            Ok(None)
        }
        Err(e) => Err(e).wrap_err_with(|| eyre!("User input cancelled")),
    }
}

fn read_command<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    match reader.read_line(&mut line).wrap_err("Cannot read from stdin")? {
        0 => {
            // keep the next output off the prompt line
            println!();
            trace!("Input closed - nothing left to read");
            Ok(None)
        }
        _ => Ok(Some(line)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::read_command;

    #[test]
    fn lines_are_read_one_at_a_time_until_input_ends() {
        let mut input = Cursor::new("abc\nexit\n");

        assert_eq!(Some("abc\n".to_owned()), read_command(&mut input).unwrap());
        assert_eq!(Some("exit\n".to_owned()), read_command(&mut input).unwrap());
        assert_eq!(None, read_command(&mut input).unwrap());
    }

    #[test]
    fn empty_input_is_closed() {
        assert_eq!(None, read_command(&mut Cursor::new("")).unwrap());
    }

    #[test]
    fn last_line_without_newline_is_still_a_command() {
        assert_eq!(
            Some("1".to_owned()),
            read_command(&mut Cursor::new("1")).unwrap()
        );
    }
}
