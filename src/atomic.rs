//! Atomic file writes through a sibling temporary file.
//!
//! Content goes to `stem.tmp.ext` next to the destination, is flushed and
//! synced, and then renamed over the destination. Readers see either the old
//! file or the new one, never a partial write.
//!
//! The rename is retried with exponential backoff when another process holds
//! a transient lock on the destination (virus scanners and sync clients do
//! this on Windows). Any other failure is reported at once.

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::error::{WriteError, WriteResult};

/// How often, and how patiently, a locked replace is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    /// Delay before the first retry; doubles for each retry after it.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based): `base_delay * 2^(retry - 1)`.
    pub fn delay(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry.saturating_sub(1)).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Total attempts, the first one included.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Moves a finished temporary file onto its destination.
pub trait Replace {
    fn replace(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Replace via `std::fs::rename`, which overwrites atomically on the same volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReplace;

impl Replace for FsReplace {
    fn replace(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

/// Blocks the calling thread between retries.
pub trait Pause {
    fn pause(&self, delay: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

/// Whether `err` means "someone else holds the file right now".
pub fn is_lock_contention(err: &io::Error) -> bool {
    #[cfg(windows)]
    {
        // ERROR_SHARING_VIOLATION, ERROR_LOCK_VIOLATION
        if matches!(err.raw_os_error(), Some(32 | 33)) {
            return true;
        }
    }
    matches!(
        err.kind(),
        io::ErrorKind::PermissionDenied | io::ErrorKind::ResourceBusy
    )
}

/// Sibling temporary path: `/d/stem.ext` → `/d/stem.tmp.ext`, `/d/name` → `/d/name.tmp`.
pub fn tmp_path(dest: &Path) -> WriteResult<PathBuf> {
    let stem = match (dest.file_name(), dest.file_stem()) {
        (Some(_), Some(stem)) => stem,
        _ => {
            return Err(WriteError::InvalidDestination {
                path: dest.to_path_buf(),
            });
        }
    };
    let mut name = OsString::from(stem);
    name.push(".tmp");
    if let Some(ext) = dest.extension() {
        name.push(".");
        name.push(ext);
    }
    Ok(dest.with_file_name(name))
}

#[derive(Debug)]
enum ReplaceState {
    Renaming { attempt: u32 },
    Retrying { retry: u32, source: io::Error },
    Done { attempts: u32 },
    Failed(WriteError),
}

/// Writes files atomically. Holds no per-file state; one writer can serve
/// any number of destinations in turn.
#[derive(Debug, Clone, Default)]
pub struct AtomicWriter<R = FsReplace, P = ThreadSleep> {
    policy: RetryPolicy,
    replacer: R,
    pauser: P,
}

impl AtomicWriter {
    pub fn new(policy: RetryPolicy) -> Self {
        Self::with_parts(policy, FsReplace, ThreadSleep)
    }
}

impl<R: Replace, P: Pause> AtomicWriter<R, P> {
    pub fn with_parts(policy: RetryPolicy, replacer: R, pauser: P) -> Self {
        Self {
            policy,
            replacer,
            pauser,
        }
    }

    /// Write whatever `produce` emits to `dest`, atomically.
    ///
    /// Missing parent directories are created. If `produce` fails, or the
    /// replace cannot be completed, the temporary file is removed and `dest`
    /// keeps its previous content.
    pub fn write<T, F>(&self, dest: &Path, produce: F) -> WriteResult<T>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<T>,
    {
        let tmp = tmp_path(dest)?;
        if let Some(dir) = dest.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| WriteError::Persistence {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let value = match write_synced(&tmp, produce) {
            Ok(value) => value,
            Err(source) => {
                discard(&tmp);
                return Err(WriteError::Persistence {
                    path: dest.to_path_buf(),
                    source,
                });
            }
        };

        if let Err(err) = self.replace_with_retry(&tmp, dest) {
            discard(&tmp);
            return Err(err);
        }
        Ok(value)
    }

    /// Serialize `value` as JSON into `dest`, with `indent` spaces per level
    /// and a trailing newline. An indent of 0 still puts each element on its own line.
    pub fn write_json<S: Serialize>(&self, dest: &Path, value: &S, indent: usize) -> WriteResult<()> {
        self.write(dest, |w| {
            let indent = vec![b' '; indent];
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
            let mut ser = serde_json::Serializer::with_formatter(&mut *w, formatter);
            value.serialize(&mut ser).map_err(io::Error::from)?;
            w.write_all(b"\n")
        })
    }

    fn replace_with_retry(&self, tmp: &Path, dest: &Path) -> WriteResult<()> {
        let mut state = ReplaceState::Renaming { attempt: 1 };
        loop {
            state = match state {
                ReplaceState::Renaming { attempt } => match self.replacer.replace(tmp, dest) {
                    Ok(()) => ReplaceState::Done { attempts: attempt },
                    Err(source) if is_lock_contention(&source) => ReplaceState::Retrying {
                        retry: attempt,
                        source,
                    },
                    Err(source) => ReplaceState::Failed(WriteError::Persistence {
                        path: dest.to_path_buf(),
                        source,
                    }),
                },
                ReplaceState::Retrying { retry, source } if retry > self.policy.max_retries => {
                    ReplaceState::Failed(WriteError::TransientLock {
                        path: dest.to_path_buf(),
                        attempts: retry,
                        source,
                    })
                }
                ReplaceState::Retrying { retry, source } => {
                    let delay = self.policy.delay(retry);
                    tracing::warn!(
                        path = %dest.display(),
                        retry,
                        delay_ms = delay.as_millis() as u64,
                        error = %source,
                        "destination locked, retrying replace"
                    );
                    self.pauser.pause(delay);
                    ReplaceState::Renaming { attempt: retry + 1 }
                }
                ReplaceState::Done { attempts } => {
                    tracing::debug!(path = %dest.display(), attempts, "atomic write complete");
                    return Ok(());
                }
                ReplaceState::Failed(err) => return Err(err),
            };
        }
    }
}

/// Write to `path`, flush, and sync to disk before the file is closed.
fn write_synced<T, F>(path: &Path, produce: F) -> io::Result<T>
where
    F: FnOnce(&mut dyn Write) -> io::Result<T>,
{
    let mut out = BufWriter::new(File::create(path)?);
    let value = produce(&mut out)?;
    out.flush()?;
    let file = out.into_inner().map_err(io::IntoInnerError::into_error)?;
    file.sync_all()?;
    Ok(value)
}

fn discard(tmp: &Path) {
    match std::fs::remove_file(tmp) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %tmp.display(), error = %e, "could not remove temporary file");
        }
    }
}
