use std::path::PathBuf;

use eyre::{eyre, Result};
use log::trace;

const DIRECTORY: &str = "Desktop";
const FILE_NAME: &str = "bulksearch.txt";

/// `<home>/Desktop/bulksearch.txt`
pub fn default_input_path() -> Result<PathBuf> {
    trace!("'file' option not used - using the default bulk search file");
    dirs::home_dir()
        .map(|home| home.join(DIRECTORY).join(FILE_NAME))
        .ok_or_else(|| eyre!("Cannot determine the home directory - use the --file option"))
}
