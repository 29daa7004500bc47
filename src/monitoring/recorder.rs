use std::{
    cell::RefCell,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{Header, Outcome, Payload, Result, monitoring::Monitor};

#[derive(Serialize)]
struct Entry<'a> {
    header: &'a Header,
    outcome: Option<Outcome>,
}

/// A monitor that records dispatched messages to a file in JSON Lines format.
///
/// Each handled message becomes one object with its header and the handler's
/// outcome. Undeliverable messages are written with `"outcome": null`.
/// Payloads are never recorded.
pub struct Recorder {
    writer: RefCell<BufWriter<File>>,
}

impl Recorder {
    /// Create a new recorder that writes to the specified path.
    pub fn new<T: AsRef<Path>>(path: T) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: RefCell::new(BufWriter::new(file)),
        })
    }

    fn write(&self, entry: &Entry<'_>) {
        let Ok(mut writer) = self.writer.try_borrow_mut() else {
            tracing::warn!("Recorder failed to borrow writer");
            return;
        };
        if let Err(e) = serde_json::to_writer(&mut *writer, entry) {
            tracing::warn!(error = %e, "Recorder failed to serialize message header");
            return;
        }
        let _ = writer.write_all(b"\n");
        let _ = writer.flush();
    }
}

impl<P: Payload> Monitor<P> for Recorder {
    fn on_message_handled(&self, header: &Header, outcome: Outcome) {
        self.write(&Entry {
            header,
            outcome: Some(outcome),
        });
    }

    fn on_undeliverable(&self, header: &Header) {
        self.write(&Entry {
            header,
            outcome: None,
        });
    }
}
