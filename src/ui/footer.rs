use crate::ui::app::{InputMode, Route};
use crate::ui::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const INPUT_KEYS: &[(&str, &str)] = &[("Enter", "Submit"), ("Esc", "Cancel")];
const LIST_KEYS: &[(&str, &str)] = &[
    ("↑↓", "Select"),
    ("Enter", "Open"),
    ("←→", "Page"),
    ("g", "Go to"),
    ("/", "Search"),
    ("h", "Home"),
    ("t", "Theme"),
    ("q", "Quit"),
];
const DETAIL_KEYS: &[(&str, &str)] = &[
    ("Esc", "Back"),
    ("r", "Reload"),
    ("h", "Home"),
    ("t", "Theme"),
    ("q", "Quit"),
];

/// Key hints for the current screen, with the version at the right edge.
pub struct Footer<'a> {
    route: &'a Route,
    input_mode: &'a InputMode,
}

impl<'a> Footer<'a> {
    pub fn new(route: &'a Route, input_mode: &'a InputMode) -> Self {
        Self { route, input_mode }
    }

    fn keys(&self) -> &'static [(&'static str, &'static str)] {
        match (self.input_mode, self.route) {
            (InputMode::Search(_) | InputMode::GoToPage(_), _) => INPUT_KEYS,
            (InputMode::Normal, Route::List { .. }) => LIST_KEYS,
            (InputMode::Normal, Route::Detail { .. }) => DETAIL_KEYS,
        }
    }

    pub fn widget(&self, area: Rect, palette: Palette) -> Paragraph<'static> {
        let key_style = Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(palette.muted);

        let mut spans = vec![Span::raw(" ")];
        for (index, (key, label)) in self.keys().iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", label_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {label}"), label_style));
        }

        let version = format!("v{VERSION} ");
        // Display width, not byte length: the arrows are multi-byte.
        let used: usize = spans.iter().map(|span| span.content.chars().count()).sum();
        let inner_width = usize::from(area.width.saturating_sub(2));
        let padding = inner_width.saturating_sub(used + version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, label_style.add_modifier(Modifier::DIM)));

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
