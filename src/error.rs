//! Rich diagnostic error types for diffable-hebrew.
//!
//! Each concern defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text, and the top-level [`DiffableError`]
//! carries them through to the CLI unchanged.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for diffable-hebrew.
#[derive(Debug, Error, Diagnostic)]
pub enum DiffableError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Table(#[from] TableIntegrityError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    ShortName(#[from] ShortNameError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Table construction errors
// ---------------------------------------------------------------------------

/// A defect in the curated short-code data. Fatal: the table is never built.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum TableIntegrityError {
    #[error("short code \"{code}\" is assigned to both U+{first:04X} and U+{second:04X}")]
    #[diagnostic(
        code(diffable::table::duplicate_code),
        help("Every curated character needs its own short code. Pick a different code for one of them.")
    )]
    DuplicateCode { code: String, first: u32, second: u32 },

    #[error("U+{code_point:04X} is listed more than once in the curated tables")]
    #[diagnostic(
        code(diffable::table::duplicate_char),
        help("Remove the repeated entry so each character has exactly one short code.")
    )]
    DuplicateChar { code_point: u32 },

    #[error("short code for U+{code_point:04X} is empty")]
    #[diagnostic(code(diffable::table::empty_code))]
    EmptyCode { code_point: u32 },

    #[error("short code \"{code}\" for U+{code_point:04X} contains a comma")]
    #[diagnostic(
        code(diffable::table::comma_in_code),
        help("Commas separate per-character codes within a word token, so codes may not contain them.")
    )]
    CommaInCode { code: String, code_point: u32 },
}

// ---------------------------------------------------------------------------
// Resolver errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ShortNameError {
    #[error("expected exactly one character, got {count}: {input:?}")]
    #[diagnostic(
        code(diffable::resolve::invalid_argument),
        help("Short names are resolved one Unicode scalar value at a time.")
    )]
    InvalidArgument { input: String, count: usize },

    #[error("U+{code_point:04X} has no curated short code")]
    #[diagnostic(
        code(diffable::resolve::not_curated),
        help("Only letters, points, accents, and Hebrew punctuation have curated codes.")
    )]
    NotCurated { code_point: u32 },
}

// ---------------------------------------------------------------------------
// Atomic write errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum WriteError {
    #[error("{path} stayed locked after {attempts} replace attempts")]
    #[diagnostic(
        code(diffable::write::transient_lock),
        help(
            "Another process (a virus scanner, a sync client, an editor) kept the \
             destination locked. Close it and run again."
        )
    )]
    TransientLock {
        path: PathBuf,
        attempts: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    #[diagnostic(
        code(diffable::write::persistence),
        help("Check that the destination directory is writable and the disk is not full.")
    )]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("destination has no file name: {path}")]
    #[diagnostic(
        code(diffable::write::invalid_destination),
        help("Pass a path to a file, not a directory or a root.")
    )]
    InvalidDestination { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    #[diagnostic(code(diffable::config::read), help("Check that the file exists and is readable."))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {message}")]
    #[diagnostic(
        code(diffable::config::parse),
        help("The config file must be TOML with optional [output] and [retry] tables.")
    )]
    Parse { path: PathBuf, message: String },

    #[error("failed to read input {path}")]
    #[diagnostic(code(diffable::config::input), help("The input must be a readable UTF-8 text file."))]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type TableResult<T> = std::result::Result<T, TableIntegrityError>;
pub type WriteResult<T> = std::result::Result<T, WriteError>;
