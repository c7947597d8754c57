use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    symbols::border,
    text::ToSpan,
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::{
    audio::{decoder::LoadedTrack, format::format_duration, progress::TrackProgress},
    util::colors,
};

pub struct ProgressWidget<'a> {
    progress: &'a TrackProgress,
    label: String,
    track: Option<&'a LoadedTrack>,
    show_position: bool,
}

impl<'a> ProgressWidget<'a> {
    pub fn new(
        progress: &'a TrackProgress,
        label: String,
        track: Option<&'a LoadedTrack>,
        show_position: bool,
    ) -> Self {
        Self {
            progress,
            label,
            track,
            show_position,
        }
    }
}

impl<'a> Widget for ProgressWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let track_info = match self.track {
            Some(track) => {
                let mut info = format!(
                    "{} · {} Hz · {} ch",
                    track.file_name(),
                    track.sample_rate,
                    track.channels
                );
                if let Some(duration) = track.duration {
                    info = format!("{info} · {}", format_duration(duration));
                }
                info
            }
            None => "No file loaded".to_string(),
        };

        let block = Block::default()
            .title_top(track_info)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(colors::NEUTRAL));

        if !self.show_position {
            Paragraph::new(self.label.as_str())
                .block(block)
                .centered()
                .render(area, buf);
            return;
        }

        Gauge::default()
            .block(block)
            .gauge_style(Style::new().fg(colors::PRIMARY).bg(colors::BACKGROUND))
            .ratio(self.progress.ratio())
            .label(self.label.to_span().fg(Color::White))
            .use_unicode(true)
            .render(area, buf);
    }
}
