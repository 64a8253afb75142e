//! View Model
//!
//! A stand-in for a real download: flipping `is_downloading` on, waiting,
//! then flipping `downloaded` on. Setters report whether anything changed and
//! queue a notification only when it did, which is what keeps the two-way
//! binding with the button from ping-ponging.

use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, info};

use crate::glyph::GlyphSource;
use crate::scheduler::Scheduler;
use crate::DownloadButton;

/// How long the simulated download takes.
pub const DEFAULT_DOWNLOAD_DURATION: Duration = Duration::from_secs(10);

/// Bindable properties of the view model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property {
    IsDownloading,
    Downloaded,
}

#[derive(Debug)]
pub struct DownloadViewModel {
    is_downloading: bool,
    downloaded: bool,
    duration: Duration,
    changes: Vec<Property>,
}

impl Default for DownloadViewModel {
    fn default() -> Self {
        Self::new(DEFAULT_DOWNLOAD_DURATION)
    }
}

impl DownloadViewModel {
    pub fn new(duration: Duration) -> Self {
        Self {
            is_downloading: false,
            downloaded: false,
            duration,
            changes: Vec::new(),
        }
    }

    pub fn is_downloading(&self) -> bool {
        self.is_downloading
    }

    pub fn downloaded(&self) -> bool {
        self.downloaded
    }

    pub fn set_is_downloading(&mut self, value: bool) -> bool {
        Self::set_property(&mut self.is_downloading, value, Property::IsDownloading, &mut self.changes)
    }

    pub fn set_downloaded(&mut self, value: bool) -> bool {
        Self::set_property(&mut self.downloaded, value, Property::Downloaded, &mut self.changes)
    }

    fn set_property(slot: &mut bool, value: bool, property: Property, changes: &mut Vec<Property>) -> bool {
        if *slot == value {
            return false;
        }
        *slot = value;
        debug!(?property, value, "property changed");
        changes.push(property);
        true
    }

    /// Drain queued change notifications in the order they happened.
    pub fn take_changes(&mut self) -> Vec<Property> {
        std::mem::take(&mut self.changes)
    }

    /// The download command: mark downloading, then call `on_complete` from a
    /// background thread once the simulated transfer time has passed.
    ///
    /// `on_complete` must hand control back to the owner thread, which then
    /// calls `complete_download`. There is no cancellation.
    pub fn start_download(
        &mut self,
        on_complete: impl FnOnce() + Send + 'static,
    ) -> std::io::Result<JoinHandle<()>> {
        self.set_is_downloading(true);
        let duration = self.duration;
        info!(?duration, "download started");
        std::thread::Builder::new()
            .name("download".into())
            .spawn(move || {
                std::thread::sleep(duration);
                on_complete();
            })
    }

    pub fn complete_download(&mut self) {
        info!("download finished");
        self.set_downloaded(true);
    }

    /// Push pending changes into `button`, and write back anything the button
    /// forced (it drops `is_downloading` once downloaded). Runs until both
    /// sides agree.
    pub fn sync<S: Scheduler, G: GlyphSource>(&mut self, button: &mut DownloadButton<S, G>) {
        loop {
            let changes = self.take_changes();
            if changes.is_empty() {
                break;
            }
            for property in changes {
                match property {
                    Property::IsDownloading => button.set_downloading(self.is_downloading),
                    Property::Downloaded => button.set_downloaded(self.downloaded),
                }
            }
            // IsDownloading binds both ways.
            self.set_is_downloading(button.is_downloading());
        }
    }
}
