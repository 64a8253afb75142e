//! Download Button Demo
//!
//! Headless host for the download button. Binds the view model to the
//! button, taps it once, and repaints whenever the button asks until the
//! simulated download completes. Frames can be dumped as PNGs.

mod config;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use anyhow::{Context, Result};
use download_button::{
    DownloadButton, DownloadViewModel, FrameTimer, IconFont, Surface, TouchAction, TouchEvent,
};
use glam::Vec2;
use tracing::{debug, info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::config::DemoConfig;

/// Messages marshalled onto the owner thread.
#[derive(Clone, Copy, Debug)]
enum HostEvent {
    Tick,
    Clicked,
    DownloadFinished,
}

/// Give up if nothing arrives for this long.
const IDLE_TIMEOUT: Duration = Duration::from_secs(30);

struct Host {
    button: DownloadButton<FrameTimer>,
    view_model: DownloadViewModel,
    surface: Surface,
    events: Receiver<HostEvent>,
    sender: Sender<HostEvent>,
    frames_dir: Option<PathBuf>,
    frame: u32,
}

impl Host {
    fn new(config: &DemoConfig) -> Result<Self> {
        let (sender, events) = mpsc::channel();

        let font = IconFont::load(&config.font_path)
            .with_context(|| format!("loading icon font {}", config.font_path.display()))?;

        let tick = sender.clone();
        let timer = FrameTimer::new(move || {
            let _ = tick.send(HostEvent::Tick);
        });

        let mut button = DownloadButton::new(timer, font).with_style(config.style);
        let clicked = sender.clone();
        button.set_clicked_command(move || {
            let _ = clicked.send(HostEvent::Clicked);
        });

        let surface = Surface::new(config.width, config.height)?;
        if let Some(dir) = &config.frames_dir {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating frames dir {}", dir.display()))?;
        }

        Ok(Self {
            button,
            view_model: DownloadViewModel::new(Duration::from_millis(config.download_ms)),
            surface,
            events,
            sender,
            frames_dir: config.frames_dir.clone(),
            frame: 0,
        })
    }

    fn handle_event(&mut self, event: HostEvent) -> Result<()> {
        match event {
            HostEvent::Tick => self.button.on_tick(),
            HostEvent::Clicked => {
                let done = self.sender.clone();
                self.view_model
                    .start_download(move || {
                        let _ = done.send(HostEvent::DownloadFinished);
                    })
                    .context("spawning download")?;
            }
            HostEvent::DownloadFinished => self.view_model.complete_download(),
        }
        self.view_model.sync(&mut self.button);
        Ok(())
    }

    fn redraw_if_needed(&mut self) -> Result<()> {
        let requests = self.button.take_redraw_requests();
        if requests == 0 {
            return Ok(());
        }
        if requests > 1 {
            debug!(requests, "coalesced redraws");
        }
        self.draw()
    }

    fn draw(&mut self) -> Result<()> {
        let (w, h) = (self.surface.width() as f32, self.surface.height() as f32);
        self.button.paint(w, h);
        self.surface.render(self.button.display_list(), self.button.glyphs());
        self.frame += 1;

        if let Some(dir) = &self.frames_dir {
            let path = dir.join(format!("frame-{:04}.png", self.frame));
            self.surface.save_png(&path)?;
        }
        Ok(())
    }

    /// Press and release in the middle of the button.
    fn tap_center(&mut self) {
        let center = Vec2::new(self.surface.width() as f32, self.surface.height() as f32) / 2.0;
        for action in [TouchAction::Pressed, TouchAction::Released] {
            self.button.handle_touch(TouchEvent::new(action, center));
        }
    }

    fn run(&mut self) -> Result<()> {
        // First frame establishes the button's bounds for hit testing.
        self.draw()?;
        self.tap_center();

        while !self.button.downloaded() {
            let event = match self.events.recv_timeout(IDLE_TIMEOUT) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => {
                    warn!("no events for {:?}, giving up", IDLE_TIMEOUT);
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            };
            self.handle_event(event)?;
            self.redraw_if_needed()?;
        }

        info!(frames = self.frame, "finished");
        Ok(())
    }
}

fn main() -> Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => DemoConfig::load(&PathBuf::from(path))?,
        None => DemoConfig::default(),
    };

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(
        width = config.width,
        height = config.height,
        download_ms = config.download_ms,
        "starting download button demo"
    );

    let mut host = Host::new(&config)?;
    host.run()
}
