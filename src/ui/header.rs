use crate::ui::app::Route;
use crate::ui::theme::Palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    route: &'a Route,
    detail_title: Option<&'a str>,
    dark_mode: bool,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a Route, detail_title: Option<&'a str>, dark_mode: bool) -> Self {
        Self {
            route,
            detail_title,
            dark_mode,
        }
    }

    /// Title line, mirroring what a browser tab would show.
    pub fn title(&self) -> String {
        match self.route {
            Route::List { query: Some(query), .. } => format!("Search Results for {query}"),
            Route::List { .. } => "MovieBase".to_string(),
            Route::Detail { .. } => match self.detail_title {
                Some(title) if !title.is_empty() => format!("{title} - MovieBase"),
                _ => "MovieBase".to_string(),
            },
        }
    }

    pub fn widget(&self, palette: Palette) -> Paragraph<'static> {
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.muted);
        let theme_label = if self.dark_mode { "☀ light" } else { "☾ dark" };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.title(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("t: {theme_label}"), separator_style),
        ]);

        Paragraph::new(line).style(Style::default().bg(palette.background)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
