use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    ui::{
        app::App,
        components::{
            browser::FileBrowserWidget, controls::PlayerControlsWidget, progress::ProgressWidget,
        },
    },
    util::colors,
};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL))
            .title_top("deckplay")
            .title_alignment(Alignment::Center);
        let inner = outer.inner(area);
        outer.render(area, buf);

        let audio = &self.audio_system;
        let controls = audio.controls();
        let features = audio.features();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(PlayerControlsWidget::height(&controls)),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        PlayerControlsWidget::new(controls.clone(), self.state.focus, audio.is_looping())
            .render(chunks[0], buf);

        let label = if features.position {
            audio.position_label()
        } else {
            audio.state().to_string()
        };
        ProgressWidget::new(audio.progress(), label, audio.track(), features.position)
            .render(chunks[1], buf);

        let mut hints = vec!["o open", "space play", "s stop"];
        if controls.loop_enabled {
            hints.push("l loop");
        }
        hints.extend(["tab focus", "q quit"]);
        Paragraph::new(Line::from(hints.join("  ·  ")))
            .style(Style::new().fg(colors::NEUTRAL))
            .centered()
            .render(chunks[3], buf);

        if let Some(browser) = &self.browser {
            FileBrowserWidget::new(browser).render(area, buf);
        }
    }
}
