use tokio::sync::mpsc;

/// Progress hooks invoked during a preload run.
///
/// Per entry exactly one of `loaded` or `error` is called. `done` is called at
/// most once per run and always last. A run whose manifest cannot be fetched
/// reports `error(manifest_url)` and never calls `done`.
pub trait PreloadCallback: Send + Sync {
    /// `url` loaded successfully; `loaded` of `total` entries have finished.
    fn loaded(&self, url: &str, loaded: usize, total: usize);

    /// `url` failed to load (or, for the manifest, the run failed).
    fn error(&self, url: &str);

    /// Every entry of the run has finished.
    fn done(&self);
}

/// One callback invocation, as a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreloadEvent {
    Loaded {
        url: String,
        loaded: usize,
        total: usize,
    },
    Error {
        url: String,
    },
    Done,
}

/// Forwards callbacks into a channel so a run can be consumed as a stream.
///
/// Events sent after the receiver is dropped are discarded.
impl PreloadCallback for mpsc::UnboundedSender<PreloadEvent> {
    fn loaded(&self, url: &str, loaded: usize, total: usize) {
        let _ = self.send(PreloadEvent::Loaded {
            url: url.to_string(),
            loaded,
            total,
        });
    }

    fn error(&self, url: &str) {
        let _ = self.send(PreloadEvent::Error {
            url: url.to_string(),
        });
    }

    fn done(&self) {
        let _ = self.send(PreloadEvent::Done);
    }
}
