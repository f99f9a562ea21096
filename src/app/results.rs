use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

/// Appends one win to the results log, creating the file on first use.
pub(super) fn append(path: &Path, side: u8, elapsed: Duration) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{side}x{side} : {}", format_elapsed(elapsed))
}

/// Reads the whole results log back. `None` when no game was ever won.
pub(super) fn read(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Formats a run duration the way it is shown after a win.
pub(super) fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        "The game is not over".to_string()
    } else if secs >= 60.0 {
        format!("{:.0} min {:.1} sec", (secs / 60.0).floor(), secs % 60.0)
    } else {
        format!("{secs:.1} sec")
    }
}
