use crate::{
    args::{Args, Command},
    run,
};
use docex::{Opts, Policy};
use std::{
    io,
    path::{Path, PathBuf},
    result,
};
use thiserror::Error;

pub(crate) type Result = result::Result<(), CmdError>;

#[derive(Debug)]
pub(crate) enum Cmd {
    Doc(PathBuf, PathBuf, String),
    Test(Opts, PathBuf, PathBuf),
}

impl Cmd {
    pub(crate) fn execute(self) -> Result {
        match self {
            Self::Doc(input, output, name) => run::doc_file(&input, &output, &name),
            Self::Test(opts, input, output) => run::test_file(&opts, &input, &output),
        }
    }
}

impl From<Args> for Cmd {
    fn from(value: Args) -> Self {
        match value.cmd {
            Command::Doc {
                input,
                output,
                name,
            } => Self::Doc(input, output, name),
            Command::Test {
                input,
                output,
                indent,
                lenient,
            } => Self::Test(
                Opts {
                    indent: indent.into(),
                    policy: if lenient {
                        Policy::Lenient
                    } else {
                        Policy::Strict
                    },
                },
                input,
                output,
            ),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum CmdError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Run(#[from] docex::Error),
}

impl CmdError {
    pub(crate) fn io(path: &Path, err: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
