use crate::catalog::{CatalogSource, MovieDetail, MovieSummary};
use crate::present::genres::card_genres;
use crate::present::pagination::{page_items, PageItem};
use crate::present::{backdrop_url, format, poster_url, ErrorView};
use crate::store::CatalogSnapshot;
use crate::ui::app::{App, InputMode, Route};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{palette, Palette};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw<S: CatalogSource>(frame: &mut Frame<'_>, app: &App<S>, snapshot: &CatalogSnapshot) {
    let colors = palette(snapshot.dark_mode);
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors.background)),
        area,
    );

    let show_pager = matches!(app.route(), Route::List { .. })
        && !snapshot.loading
        && snapshot.error.is_none()
        && snapshot.last_page() > 1;
    let regions = layout_regions(area, show_pager);

    let detail_title = snapshot.selected_detail.as_ref().map(|d| d.title.as_str());
    let header = Header::new(app.route(), detail_title, snapshot.dark_mode);
    frame.render_widget(header.widget(colors), regions.header);

    draw_body(frame, app, snapshot, colors, regions.body);

    if show_pager {
        frame.render_widget(pager(snapshot, colors), regions.pager);
    }

    let footer = Footer::new(app.route(), app.input_mode());
    frame.render_widget(footer.widget(regions.footer, colors), regions.footer);

    match app.input_mode() {
        InputMode::Search(text) => draw_prompt(frame, "Search movies", text, colors),
        InputMode::GoToPage(text) => draw_prompt(frame, "Go to page", text, colors),
        InputMode::Normal => {}
    }

    if let Some(message) = app.status_message() {
        draw_prompt(frame, "Notice", message, colors);
    }
}

fn draw_body<S: CatalogSource>(
    frame: &mut Frame<'_>,
    app: &App<S>,
    snapshot: &CatalogSnapshot,
    colors: Palette,
    area: Rect,
) {
    if snapshot.loading {
        frame.render_widget(centered_text("Loading…", colors.accent), area);
        return;
    }

    if let Some(error) = &snapshot.error {
        let view = match app.route() {
            Route::List { .. } => ErrorView::for_listing(error),
            Route::Detail { .. } => ErrorView::from(error),
        };
        let lines = vec![
            Line::styled(view.text(), Style::default().fg(colors.error)),
            Line::from(""),
            Line::styled("Esc: Return to list │ c: Dismiss", Style::default().fg(colors.muted)),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
        return;
    }

    match app.route() {
        Route::List { collection, query } => {
            if snapshot.movies.is_empty() {
                let text = match query {
                    Some(query) => format!("No result found for '{query}'"),
                    None => "No movies found.".to_string(),
                };
                frame.render_widget(centered_text(&text, colors.text), area);
                return;
            }
            let items: Vec<ListItem> = snapshot
                .movies
                .iter()
                .map(|movie| movie_card(movie, colors))
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .title(format!(" {} ", collection.title()))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(colors.border)),
                )
                .highlight_style(
                    Style::default()
                        .bg(colors.highlight)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");
            let mut state = ListState::default().with_selected(Some(app.selection()));
            frame.render_stateful_widget(list, area, &mut state);
        }
        Route::Detail { .. } => match &snapshot.selected_detail {
            Some(detail) => frame.render_widget(
                detail_view(detail, app.image_base_url(), colors),
                area,
            ),
            None => frame.render_widget(centered_text("Movie not found", colors.text), area),
        },
    }
}

fn movie_card(movie: &MovieSummary, colors: Palette) -> ListItem<'static> {
    let title = if movie.title.is_empty() {
        format::NOT_AVAILABLE.to_string()
    } else {
        movie.title.clone()
    };
    ListItem::new(Line::from(vec![
        Span::styled(title, Style::default().fg(colors.text)),
        Span::styled(
            format!("  ★ {}", format::rating(movie.vote_average)),
            Style::default().fg(colors.rating),
        ),
        Span::styled(
            format!("  {}", format::year(movie.release_date.as_deref())),
            Style::default().fg(colors.muted),
        ),
        Span::styled(
            format!("  {}", card_genres(&movie.genre_ids)),
            Style::default().fg(colors.muted),
        ),
    ]))
}

fn detail_view(detail: &MovieDetail, image_base: &str, colors: Palette) -> Paragraph<'static> {
    let label = Style::default().fg(colors.muted);
    let value = Style::default().fg(colors.text);
    let field = |name: &str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name:<22}"), label),
            Span::styled(text, value),
        ])
    };
    let or_na = |text: Option<&str>| {
        text.filter(|t| !t.is_empty())
            .unwrap_or(format::NOT_AVAILABLE)
            .to_string()
    };
    let join = |names: Vec<&str>| {
        if names.is_empty() {
            format::NOT_AVAILABLE.to_string()
        } else {
            names.join(", ")
        }
    };

    let mut lines = vec![
        Line::styled(
            or_na(Some(detail.title.as_str())),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(format::year(detail.release_date.as_deref()), value),
            Span::styled(" • ", label),
            Span::styled(format::runtime(detail.runtime), value),
            Span::styled(" • ", label),
            Span::styled(
                format!("★ {}", format::rating(detail.vote_average)),
                Style::default().fg(colors.rating),
            ),
        ]),
    ];
    if let Some(tagline) = detail.tagline.as_deref().filter(|t| !t.is_empty()) {
        lines.push(Line::styled(
            tagline.to_string(),
            label.add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled("Overview", value.add_modifier(Modifier::BOLD)));
    lines.push(Line::styled(or_na(detail.overview.as_deref()), value));
    lines.push(Line::from(""));
    lines.push(field(
        "Genres",
        join(detail.genres.iter().map(|g| g.name.as_str()).collect()),
    ));
    lines.push(field("Status", or_na(detail.status.as_deref())));
    lines.push(field(
        "Original Language",
        or_na(detail.original_language.as_deref()).to_uppercase(),
    ));
    lines.push(field("Budget", format::currency(detail.budget)));
    lines.push(field("Revenue", format::currency(detail.revenue)));
    lines.push(field(
        "Production Companies",
        join(
            detail
                .production_companies
                .iter()
                .map(|c| c.name.as_str())
                .collect(),
        ),
    ));
    lines.push(field(
        "Poster",
        poster_url(image_base, detail.poster_path.as_deref())
            .unwrap_or_else(|| format::NOT_AVAILABLE.to_string()),
    ));
    lines.push(field(
        "Backdrop",
        backdrop_url(image_base, detail.backdrop_path.as_deref())
            .unwrap_or_else(|| format::NOT_AVAILABLE.to_string()),
    ));

    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border)),
    )
}

fn pager(snapshot: &CatalogSnapshot, colors: Palette) -> Paragraph<'static> {
    let current = snapshot.current_page;
    let last = snapshot.last_page();
    let idle = Style::default().fg(colors.text);
    let disabled = Style::default().fg(colors.muted).add_modifier(Modifier::DIM);
    let active = Style::default()
        .fg(colors.background)
        .bg(colors.accent)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(
        "‹ Prev ",
        if current <= 1 { disabled } else { idle },
    )];
    for item in page_items(current, snapshot.total_pages) {
        spans.push(match item {
            PageItem::Page { number, current: true } => {
                Span::styled(format!(" {number} "), active)
            }
            PageItem::Page { number, .. } => Span::styled(format!(" {number} "), idle),
            PageItem::Gap => Span::styled(" … ", disabled),
        });
    }
    spans.push(Span::styled(
        " Next ›",
        if current >= last { disabled } else { idle },
    ));

    Paragraph::new(vec![
        Line::from(spans),
        Line::styled(
            format!("Page {current} of {last}"),
            Style::default().fg(colors.muted),
        ),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(colors.border)),
    )
}

fn centered_text(text: &str, color: ratatui::style::Color) -> Paragraph<'static> {
    Paragraph::new(Line::styled(text.to_string(), Style::default().fg(color)))
        .alignment(Alignment::Center)
}

fn draw_prompt(frame: &mut Frame<'_>, title: &str, text: &str, colors: Palette) {
    let area = centered_rect(50, 3, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(Line::styled(format!("{text}▏"), Style::default().fg(colors.text)))
            .style(Style::default().bg(colors.background))
            .block(
                Block::default()
                    .title(format!(" {title} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.accent)),
            ),
        area,
    );
}
