use std::path::PathBuf;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{debug, info};

use crate::{
    audio::system::AudioSystem,
    config::AppConfig,
    event::events::Event,
    ui::{
        browser::FileBrowser,
        message::AppMessage,
        state::{Focus, UiState},
    },
};

use super::{
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub audio_system: AudioSystem,
    pub config: AppConfig,
    pub state: UiState,
    pub browser: Option<FileBrowser>,
    pub last_dir: PathBuf,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let audio_system = AudioSystem::new(event_tx.clone(), config.audio.clone())?;

        Ok(Self {
            event_rx,
            event_tx,
            audio_system,
            last_dir: config.start_dir.clone(),
            config,
            state: UiState {
                focus: Focus::Open,
                has_focus: true,
            },
            browser: None,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new(self.config.audio.refresh_interval)?;
        tui.enter()?;
        info!(profile = ?self.config.audio.profile, "app_started");

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        info!("app_stopped");
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        if self.state.has_focus {
            frame.render_widget(self, frame.area());
        }
    }

    pub fn update(&mut self, msg: AppMessage) {
        let controls = self.audio_system.controls();
        let with_loop = controls.loop_enabled;

        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::Open => self.open_browser(),
            AppMessage::Play => {
                if controls.play_enabled {
                    self.audio_system.play_clicked();
                }
            }
            AppMessage::Stop => {
                if controls.stop_enabled {
                    self.audio_system.stop_clicked();
                }
            }
            AppMessage::ToggleLoop => {
                if controls.loop_enabled {
                    self.audio_system.toggle_loop();
                }
            }
            AppMessage::NextControl => self.state.focus = self.state.focus.next(with_loop),
            AppMessage::PreviousControl => {
                self.state.focus = self.state.focus.previous(with_loop)
            }
            AppMessage::Activate => {
                let msg = match self.state.focus {
                    Focus::Open => AppMessage::Open,
                    Focus::Play => AppMessage::Play,
                    Focus::Stop => AppMessage::Stop,
                    Focus::Loop => AppMessage::ToggleLoop,
                };
                self.update(msg);
            }
            msg => self.update_browser(msg),
        }
    }

    fn open_browser(&mut self) {
        if self.browser.is_none() {
            debug!(dir = %self.last_dir.display(), "browser_opened");
            self.browser = Some(FileBrowser::open(
                self.last_dir.clone(),
                self.audio_system.extensions(),
            ));
        }
    }

    fn update_browser(&mut self, msg: AppMessage) {
        let Some(browser) = self.browser.as_mut() else {
            return;
        };

        match msg {
            AppMessage::BrowserUp => browser.select_previous(),
            AppMessage::BrowserDown => browser.select_next(),
            AppMessage::BrowserFirst => browser.select_first(),
            AppMessage::BrowserLast => browser.select_last(),
            AppMessage::BrowserParent => browser.go_up(),
            AppMessage::BrowserToggleHidden => browser.toggle_hidden(),
            AppMessage::BrowserEnter => {
                if let Some(path) = browser.activate() {
                    self.close_browser(Some(path));
                }
            }
            AppMessage::BrowserCancel => self.close_browser(None),
            _ => {}
        }
    }

    /// Hands the chooser's result back through the event queue, like a
    /// dialog completion callback.
    fn close_browser(&mut self, selection: Option<PathBuf>) {
        if let Some(browser) = self.browser.take() {
            self.last_dir = browser.dir().to_path_buf();
        }
        let _ = self.event_tx.send(Event::FileChosen(selection));
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::TransportChanged => {
                self.audio_system.on_transport_changed();
            }
            Event::FileChosen(path) => self.audio_system.file_chosen(path),
        }
    }
}
