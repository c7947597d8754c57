use ratatui::crossterm::event::{KeyEvent, KeyEventKind};

use crate::ui::{
    app::App,
    input::InputHandler,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for one terminal event, then drains whatever the audio side queued.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            app.handle_event(evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.state.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.state.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Resize(_, _) => tui.autoresize()?,
            TerminalEvent::Tick => {
                return Ok(app.state.has_focus);
            }
        }

        Ok(true)
    }

    fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        let msg = if app.browser.is_some() {
            InputHandler::handle_browser_key(evt)
        } else {
            InputHandler::handle_key(evt)
        };

        if let Some(msg) = msg {
            app.update(msg);
        }
    }
}
