//! `chainreg init` command — write the embedded document to a file.

use std::fs;
use std::path::Path;

use chainreg::{DEFAULT_DOCUMENT, Error};

/// Execute the `init` command.
///
/// Writes the embedded configuration document to `output` as a starting
/// point for a customized registry. Refuses to overwrite an existing file
/// unless `force` is `true`.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or if
/// writing fails.
#[allow(clippy::print_stderr)]
pub fn run(output: &Path, force: bool) -> Result<(), Error> {
    if output.exists() && !force {
        return Err(Error::ConfigParse(format!(
            "'{}' already exists, use --force to overwrite",
            output.display()
        )));
    }

    fs::write(output, DEFAULT_DOCUMENT)?;

    eprintln!("Config file written to {}", output.display());
    Ok(())
}
