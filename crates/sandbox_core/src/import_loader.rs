//! Background import file reading
//!
//! [`ImportLoader`] owns a worker thread that reads import files and sends
//! their text back through a channel. The worker only does I/O; parsing and
//! applying the import happen on the caller's thread when it polls, so the
//! registry is never touched off the main thread.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;

use crate::error::SerializeError;

/// Result of a background file read
pub struct ImportFile {
    /// Path that was requested
    pub path: PathBuf,
    /// The file's text or the read error
    pub result: Result<String, SerializeError>,
}

/// Background file reader using a dedicated worker thread
///
/// Submit paths with [`read_async`](ImportLoader::read_async) and pick up
/// finished reads with [`poll`](ImportLoader::poll) once per frame.
pub struct ImportLoader {
    /// Channel to send paths to the worker thread
    sender: Sender<PathBuf>,
    /// Channel to receive file contents from the worker thread
    receiver: Receiver<ImportFile>,
}

impl ImportLoader {
    /// Create a loader with a background worker thread
    ///
    /// The worker thread runs until the loader is dropped.
    pub fn new() -> Self {
        let (request_tx, request_rx) = channel::<PathBuf>();
        let (result_tx, result_rx) = channel::<ImportFile>();

        thread::spawn(move || {
            while let Ok(path) = request_rx.recv() {
                let result = fs::read_to_string(&path).map_err(SerializeError::from);
                // If the receiver is dropped, we stop
                if result_tx.send(ImportFile { path, result }).is_err() {
                    break;
                }
            }
        });

        Self {
            sender: request_tx,
            receiver: result_rx,
        }
    }

    /// Queue a file to be read in the background
    pub fn read_async(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        log::debug!("Queued import of {}", path.display());
        if self.sender.send(path).is_err() {
            log::error!("Import worker thread has exited");
        }
    }

    /// Take one finished read, if any (non-blocking)
    pub fn poll(&self) -> Option<ImportFile> {
        match self.receiver.try_recv() {
            Ok(file) => Some(file),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Take every finished read (non-blocking)
    pub fn poll_all(&self) -> Vec<ImportFile> {
        let mut files = Vec::new();
        while let Ok(file) = self.receiver.try_recv() {
            files.push(file);
        }
        files
    }
}

impl Default for ImportLoader {
    fn default() -> Self {
        Self::new()
    }
}
