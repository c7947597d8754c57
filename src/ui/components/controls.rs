use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{audio::state::Controls, ui::state::Focus, util::colors};

pub struct PlayerControlsWidget {
    controls: Controls,
    focus: Focus,
    looping: bool,
}

impl PlayerControlsWidget {
    pub fn new(controls: Controls, focus: Focus, looping: bool) -> Self {
        Self {
            controls,
            focus,
            looping,
        }
    }

    pub fn height(controls: &Controls) -> u16 {
        if controls.loop_enabled { 12 } else { 9 }
    }
}

impl Widget for PlayerControlsWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let count = if self.controls.loop_enabled { 4 } else { 3 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); count])
            .split(area);

        button("Open...", true, self.focus == Focus::Open, colors::PRIMARY).render(rows[0], buf);
        button(
            self.controls.play_label,
            self.controls.play_enabled,
            self.focus == Focus::Play,
            colors::PLAY,
        )
        .render(rows[1], buf);
        button(
            self.controls.stop_label,
            self.controls.stop_enabled,
            self.focus == Focus::Stop,
            colors::STOP,
        )
        .render(rows[2], buf);

        if self.controls.loop_enabled {
            let label = if self.looping { "[x] Loop" } else { "[ ] Loop" };
            button(label, true, self.focus == Focus::Loop, colors::SECONDARY).render(rows[3], buf);
        }
    }
}

fn button(label: &str, enabled: bool, focused: bool, color: Color) -> Paragraph<'_> {
    let (text_style, border_style) = match (enabled, focused) {
        (false, _) => (
            Style::new().fg(colors::NEUTRAL),
            Style::new().fg(colors::NEUTRAL),
        ),
        (true, true) => (
            Style::new()
                .fg(colors::BACKGROUND)
                .bg(color)
                .add_modifier(Modifier::BOLD),
            Style::new().fg(color),
        ),
        (true, false) => (Style::new().fg(color), Style::new().fg(colors::NEUTRAL)),
    };

    Paragraph::new(label)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(border_style),
        )
        .centered()
}
