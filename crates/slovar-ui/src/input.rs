use std::io::{self, BufRead, BufReader};
use std::thread;

use kanal::AsyncReceiver;

/// Lines of user input, `None` marks the end of input
pub type LineReceiver = AsyncReceiver<Option<String>>;

/// Read stdin on its own thread.
///
/// A blocking stdin read cannot be cancelled, so it stays off the runtime and
/// a pending read never holds up shutdown.
pub fn spawn_stdin_reader() -> io::Result<LineReceiver> {
    spawn_line_reader(BufReader::new(io::stdin()))
}

pub fn spawn_line_reader<R>(reader: R) -> io::Result<LineReceiver>
where
    R: BufRead + Send + 'static,
{
    // Zero capacity: a send returns only once the UI took the line
    let (tx, rx) = kanal::bounded(0);

    thread::Builder::new()
        .name("slovar-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        if tx.send(Some(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("[UI] Failed to read input: {e}");
                        break;
                    }
                }
            }
            let _ = tx.send(None);
        })?;

    Ok(rx.to_async())
}
