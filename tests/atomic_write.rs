//! Atomic writer against a real filesystem.
//!
//! Lock contention is simulated by a replacer that refuses a fixed number of
//! times before delegating to the real rename.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use diffable_hebrew::atomic::{AtomicWriter, FsReplace, Pause, Replace, RetryPolicy};
use diffable_hebrew::error::WriteError;

struct LockedFor {
    refusals: u32,
    calls: Cell<u32>,
}

impl LockedFor {
    fn new(refusals: u32) -> Self {
        Self {
            refusals,
            calls: Cell::new(0),
        }
    }
}

impl Replace for LockedFor {
    fn replace(&self, from: &Path, to: &Path) -> io::Result<()> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n < self.refusals {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        } else {
            FsReplace.replace(from, to)
        }
    }
}

#[derive(Default)]
struct Delays(RefCell<Vec<Duration>>);

impl Pause for &Delays {
    fn pause(&self, delay: Duration) {
        self.0.borrow_mut().push(delay);
    }
}

fn unit_policy() -> RetryPolicy {
    RetryPolicy {
        max_retries: 5,
        base_delay: Duration::from_millis(1),
    }
}

#[test]
fn writes_content_and_leaves_no_temp_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let dest = dir.path().join("nested").join("deeper").join("words.json");

    let n = AtomicWriter::new(unit_policy())
        .write(&dest, |w| {
            w.write_all(b"[\n\"v,a\"\n]\n")?;
            Ok(42)
        })
        .unwrap();

    assert_eq!(n, 42);
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "[\n\"v,a\"\n]\n");
    let names: Vec<_> = std::fs::read_dir(dest.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("words.json")]);
}

#[test]
fn replaces_existing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let dest = dir.path().join("out.txt");
    std::fs::write(&dest, "old").unwrap();

    AtomicWriter::new(unit_policy())
        .write(&dest, |w| w.write_all(b"new"))
        .unwrap();

    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "new");
}

#[test]
fn failing_producer_keeps_old_content() {
    let dir = tempfile::TempDir::new().unwrap();
    let dest = dir.path().join("out.json");
    std::fs::write(&dest, "previous").unwrap();

    let err = AtomicWriter::new(unit_policy())
        .write(&dest, |w| -> io::Result<()> {
            w.write_all(b"half")?;
            Err(io::Error::other("producer gave up"))
        })
        .unwrap_err();

    assert!(matches!(err, WriteError::Persistence { .. }));
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "previous");
    assert!(!dir.path().join("out.tmp.json").exists());
}

#[test]
fn recovers_from_five_lock_refusals() {
    let dir = tempfile::TempDir::new().unwrap();
    let dest = dir.path().join("out.json");
    let delays = Delays::default();
    let writer = AtomicWriter::with_parts(unit_policy(), LockedFor::new(5), &delays);

    writer.write(&dest, |w| w.write_all(b"done")).unwrap();

    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "done");
    let ms: Vec<u128> = delays.0.borrow().iter().map(Duration::as_millis).collect();
    assert_eq!(ms, vec![1, 2, 4, 8, 16]);
    assert!(!dir.path().join("out.tmp.json").exists());
}

#[test]
fn six_lock_refusals_fail_without_corrupting_destination() {
    let dir = tempfile::TempDir::new().unwrap();
    let dest = dir.path().join("out.json");
    std::fs::write(&dest, "intact").unwrap();
    let delays = Delays::default();
    let writer = AtomicWriter::with_parts(unit_policy(), LockedFor::new(6), &delays);

    let err = writer.write(&dest, |w| w.write_all(b"never seen")).unwrap_err();

    match err {
        WriteError::TransientLock { attempts, .. } => assert_eq!(attempts, 6),
        other => panic!("expected TransientLock, got {other:?}"),
    }
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "intact");
    assert_eq!(delays.0.borrow().len(), 5);
    assert!(!dir.path().join("out.tmp.json").exists());
}

struct Broken;

impl Replace for Broken {
    fn replace(&self, _from: &Path, _to: &Path) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::NotFound))
    }
}

#[test]
fn non_lock_replace_failure_is_not_retried_and_keeps_destination() {
    let dir = tempfile::TempDir::new().unwrap();
    let dest = dir.path().join("out.json");
    std::fs::write(&dest, "old").unwrap();
    let delays = Delays::default();
    let writer = AtomicWriter::with_parts(unit_policy(), Broken, &delays);

    let err = writer.write(&dest, |w| w.write_all(b"new")).unwrap_err();

    assert!(matches!(err, WriteError::Persistence { .. }));
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "old");
    assert!(!dir.path().join("out.tmp.json").exists());
    assert!(delays.0.borrow().is_empty());
}

#[test]
fn json_with_zero_indent_puts_elements_on_own_lines() {
    let dir = tempfile::TempDir::new().unwrap();
    let dest = dir.path().join("lines.json");
    let lines = vec![vec!["v,a".to_string(), "$".to_string()]];

    AtomicWriter::new(unit_policy())
        .write_json(&dest, &lines, 0)
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&dest).unwrap(),
        "[\n[\n\"v,a\",\n\"$\"\n]\n]\n"
    );
}

#[test]
fn rejects_destination_without_file_name() {
    let err = AtomicWriter::new(unit_policy())
        .write(Path::new("/"), |w| w.write_all(b"x"))
        .unwrap_err();
    assert!(matches!(err, WriteError::InvalidDestination { .. }));
}
