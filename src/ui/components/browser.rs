use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::{
    ui::{
        browser::{EntryKind, FileBrowser},
        util::truncate_to_width,
    },
    util::colors,
};

pub struct FileBrowserWidget<'a> {
    browser: &'a FileBrowser,
}

impl<'a> FileBrowserWidget<'a> {
    pub fn new(browser: &'a FileBrowser) -> Self {
        Self { browser }
    }
}

impl<'a> Widget for FileBrowserWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, 80, 70);
        Clear.render(popup, buf);

        let filter = self
            .browser
            .extensions()
            .iter()
            .map(|ext| format!("*.{ext}"))
            .collect::<Vec<_>>()
            .join(";");
        let inner_width = popup.width.saturating_sub(4) as usize;
        let dir = truncate_to_width(&self.browser.dir().display().to_string(), inner_width);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::PRIMARY))
            .title_top(format!(" Select an audio file ({filter}) "))
            .title_bottom(Line::from(dir).alignment(Alignment::Left))
            .title_alignment(Alignment::Center)
            .style(Style::new().bg(colors::BACKGROUND));

        let mut items: Vec<ListItem> = self
            .browser
            .entries()
            .iter()
            .map(|entry| {
                let (name, style) = match entry.kind {
                    EntryKind::Parent => ("../".to_string(), Style::new().fg(colors::NEUTRAL)),
                    EntryKind::Directory => (
                        format!("{}/", entry.name),
                        Style::new().fg(colors::SECONDARY),
                    ),
                    EntryKind::File => (entry.name.clone(), Style::new()),
                };
                ListItem::new(truncate_to_width(&name, inner_width)).style(style)
            })
            .collect();

        if let Some(error) = self.browser.error() {
            items.push(ListItem::new(truncate_to_width(error, inner_width)).fg(colors::STOP));
        }

        let list = List::new(items).block(block).highlight_style(
            Style::new()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        let mut state = ListState::default().with_selected(Some(self.browser.selected()));
        StatefulWidget::render(list, popup, buf, &mut state);
    }
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}
