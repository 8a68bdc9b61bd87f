use crate::cmd::{CmdError, Result};
use docex::{Opts, TextSource};
use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

pub(crate) fn test_file(opts: &Opts, input: &Path, output: &Path) -> Result {
    let src = load(input)?;
    let contents = docex::generate_tests(&src, opts)?;
    publish(output, &contents).map_err(|err| CmdError::io(output, err))
}

pub(crate) fn doc_file(input: &Path, output: &Path, name: &str) -> Result {
    let src = load(input)?;
    let contents = docex::generate_docs(&src, name)?;
    publish(output, &contents).map_err(|err| CmdError::io(output, err))
}

fn load(input: &Path) -> std::result::Result<TextSource, CmdError> {
    TextSource::file(input).map_err(|err| CmdError::io(input, err))
}

/// Writes `contents` beside `path` and renames it into place, so readers
/// never observe a partial file.
pub(crate) fn publish(path: &Path, contents: &str) -> io::Result<()> {
    let staging = staging_path(path);
    debug!(path = %staging.display(), "staging output");
    if let Err(err) = fs::write(&staging, contents).and_then(|()| fs::rename(&staging, path)) {
        // NOTE: staging file may not exist if the write itself failed
        let _ = fs::remove_file(&staging);
        return Err(err);
    }
    info!(path = %path.display(), bytes = contents.len(), "published");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push("~");
    name.into()
}
