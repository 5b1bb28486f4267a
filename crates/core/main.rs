#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::{path::PathBuf, process, time::Duration};

mod app;
mod commands;
mod file;
mod interact;

use app::Palette;
use commands::{dispatch, Browser};

use bulksearch as lib;

use lib::{
    enrich::{enrich, Progress},
    file::Loaded,
    presence::Libgen,
};

use clap::Parser;
use eyre::{eyre, Context};
use log::trace;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let Cli {
        file,
        timeout,
        no_color,
        verbosity,
        quiet,
    } = Cli::parse();

    setup_errlog(verbosity as usize, quiet)?;

    let path = if let Some(path) = file {
        trace!("'file' option used with value of '{}'", path.display());
        path
    } else {
        file::default_input_path()?
    };

    let parsed = match lib::file::load(&path)
        .wrap_err_with(|| eyre!("Cannot read the bulk search file '{}'", path.display()))?
    {
        Loaded::Created(path) => {
            println!(
                "Created {}. Please enter ISBN and Title data following the format and rerun the program.",
                path.display()
            );
            return Ok(());
        }
        Loaded::Parsed(parsed) => parsed,
    };

    if parsed.records().next().is_none() {
        for line in parsed.skipped() {
            println!("Skipping invalid line: {line}");
        }
        println!(
            "No ISBN and Title data found in {}. Please follow the format and enter the data.",
            path.display()
        );
        return Ok(());
    }

    let timeout = (timeout > 0).then(|| Duration::from_secs(timeout));
    let client = lib::http_client(timeout).wrap_err("Cannot create the HTTP client")?;

    let session = enrich(&client, parsed.lines, |progress| match progress {
        Progress::Skipped(line) => println!("Skipping invalid line: {line}"),
        Progress::Resolved(resolved) => println!("{}", app::progress_line(resolved)),
    });

    print!("{}", app::report(&session, Palette::new(!no_color)));

    dispatch(
        &session,
        interact::user_command,
        &Libgen::new(&client),
        &Browser,
    )
}

fn setup_errlog(verbosity: usize, quiet: bool) -> eyre::Result<()> {
    // if quiet then ignore verbosity but still show errors
    let verbosity = if quiet { 0 } else { verbosity + 1 };

    stderrlog::new()
        .verbosity(verbosity)
        .init()
        .wrap_err("Cannot set up logging")
}

#[derive(Parser)]
#[clap(name = "bulksearch")]
#[clap(
    about = "Look up a list of books on Google Books and open the ones found on Library Genesis"
)]
#[clap(version, author)]
struct Cli {
    /// The bulk search file to read, created with a header when it does not exist
    ///
    /// Defaults to bulksearch.txt on the desktop of the current user.
    #[clap(short, long, parse(from_os_str))]
    file: Option<PathBuf>,

    /// Seconds to wait for each web request, 0 waits forever
    #[clap(short, long, default_value = "30")]
    timeout: u64,

    /// Print the report without colours
    #[clap(long)]
    no_color: bool,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only errors will be logged to stderr.
    #[clap(short, long)]
    quiet: bool,
}
