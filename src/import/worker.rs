//! Background file import
//!
//! Reading and parsing run on the tokio runtime so the dialog stays
//! responsive. Each submitted file yields exactly one [`ImportEvent`]
//! carrying the whole batch, so rows from overlapping imports never
//! interleave. There is no cancellation: a later submission does not abort
//! an earlier one.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use super::{import_bytes, ImportBatch, ImportError, TabularParser};
use crate::config::ImportSettings;
use crate::domain::UploadedFile;

/// Identifier of one submitted import
pub type ImportTicket = u64;

/// Result of a submitted import
#[derive(Debug)]
pub enum ImportEvent {
    Completed {
        ticket: ImportTicket,
        /// Editor session the file was chosen in
        session: u64,
        file_name: String,
        batch: ImportBatch,
    },
    Failed {
        ticket: ImportTicket,
        session: u64,
        file_name: String,
        error: ImportError,
    },
}

impl ImportEvent {
    pub fn ticket(&self) -> ImportTicket {
        match self {
            ImportEvent::Completed { ticket, .. } | ImportEvent::Failed { ticket, .. } => *ticket,
        }
    }

    pub fn session(&self) -> u64 {
        match self {
            ImportEvent::Completed { session, .. } | ImportEvent::Failed { session, .. } => {
                *session
            }
        }
    }
}

/// Read a file from disk and parse it.
///
/// The declared type defaults to the one a browser would report for the
/// file's extension; `mime_override` replaces it.
pub async fn read_and_import(
    path: &Path,
    mime_override: Option<&str>,
    settings: &ImportSettings,
    parser: Arc<dyn TabularParser>,
) -> Result<ImportBatch, ImportError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mime = mime_override
        .map(str::to_string)
        .unwrap_or_else(|| UploadedFile::mime_for_path(path).to_string());
    let file = UploadedFile::new(file_name(path), mime, bytes);
    let settings = settings.clone();

    tokio::task::spawn_blocking(move || import_bytes(&file, &settings, parser.as_ref()))
        .await
        .map_err(|e| ImportError::Task(e.to_string()))?
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Runs imports on a tokio runtime and hands results back to the UI thread
pub struct ImportWorker {
    runtime: Handle,
    settings: ImportSettings,
    parser: Arc<dyn TabularParser>,
    tx: Sender<ImportEvent>,
    rx: Receiver<ImportEvent>,
    next_ticket: ImportTicket,
    in_flight: usize,
    notify: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ImportWorker {
    pub fn new(runtime: Handle, settings: ImportSettings, parser: Arc<dyn TabularParser>) -> Self {
        let (tx, rx) = channel();
        Self {
            runtime,
            settings,
            parser,
            tx,
            rx,
            next_ticket: 1,
            in_flight: 0,
            notify: None,
        }
    }

    /// Called from the task after each result is sent (e.g. to wake the UI)
    pub fn with_notify(mut self, notify: impl Fn() + Send + Sync + 'static) -> Self {
        self.notify = Some(Arc::new(notify));
        self
    }

    /// Schedule an import of `path` for the given editor session
    pub fn submit(&mut self, path: PathBuf, session: u64) -> ImportTicket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight += 1;

        let settings = self.settings.clone();
        let parser = Arc::clone(&self.parser);
        let tx = self.tx.clone();
        let notify = self.notify.clone();

        info!("Import #{} started: {}", ticket, path.display());

        self.runtime.spawn(async move {
            let file_name = file_name(&path);
            let event = match read_and_import(&path, None, &settings, parser).await {
                Ok(batch) => {
                    debug!("Import #{}: {}", ticket, batch.summary());
                    ImportEvent::Completed {
                        ticket,
                        session,
                        file_name,
                        batch,
                    }
                }
                Err(error) => {
                    warn!("Import #{} failed: {}", ticket, error);
                    ImportEvent::Failed {
                        ticket,
                        session,
                        file_name,
                        error,
                    }
                }
            };

            if tx.send(event).is_err() {
                debug!("Import #{} finished after the dialog went away", ticket);
            }
            if let Some(notify) = notify {
                notify();
            }
        });

        ticket
    }

    /// Drain finished imports (non-blocking), in completion order
    pub fn poll(&mut self) -> Vec<ImportEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            events.push(event);
        }
        events
    }

    /// Number of submitted imports whose result has not been polled yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }
}
