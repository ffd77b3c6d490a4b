use chrono::{Local, Timelike};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::content::{self, MATCHES, PLATFORMS, RECOMMENDATIONS};
use super::tiles::{Tile, TileKind, rows};
use super::view::DashboardView;

/// Terminal lines per dashboard row
pub const ROW_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, view: &mut DashboardView) {
    let area = frame.area();
    frame.render_widget(Block::default().style(view.theme.background_style()), area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(ROW_HEIGHT),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, view, chunks[0]);
    render_rows(frame, view, chunks[1]);
    render_status(frame, view, chunks[2]);
}

fn render_header(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let now = Local::now();
    let (greeting, context) = content::greeting(now.hour());
    let theme = &view.theme;

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}, {}!", greeting, view.household_name),
                Style::default().fg(theme.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", context), theme.muted_style()),
        ]),
        Line::from(vec![
            Span::styled(format!("[{}] ", view.language.code()), Style::default().fg(theme.peach)),
            Span::styled(view.language.welcome(), Style::default().fg(theme.text)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_rows(frame: &mut Frame, view: &mut DashboardView, area: Rect) {
    view.viewport.set_visible_rows(area.height / ROW_HEIGHT);

    let top = view.viewport.top;
    let visible = view.viewport.visible_rows();
    let mut y = area.y;

    for row in top..(top + visible).min(rows::COUNT) {
        let row_area = Rect::new(area.x, y, area.width, ROW_HEIGHT.min(area.bottom() - y));
        y += ROW_HEIGHT;

        let tiles = view.row_tiles(row);
        if tiles.is_empty() {
            continue;
        }

        let constraints: Vec<Constraint> = tiles
            .iter()
            .map(|_| Constraint::Ratio(1, tiles.len() as u32))
            .collect();
        let cells = Layout::horizontal(constraints).split(row_area);

        for (tile, cell) in tiles.iter().zip(cells.iter()) {
            render_tile(frame, view, tile, row, *cell);
        }
    }
}

fn render_tile(frame: &mut Frame, view: &DashboardView, tile: &Tile, row: u16, area: Rect) {
    let theme = &view.theme;
    let border_style = if tile.disabled {
        theme.disabled_style()
    } else if view.is_focused(&tile.id) {
        theme.focus_border_style()
    } else {
        theme.tile_border_style()
    };

    // Section name goes on the first tile of each row
    let title = if tile.order.column == 0 {
        format!(" {} | {} ", rows::title(row), tile.kind.title())
    } else {
        format!(" {} ", tile.kind.title())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    let paragraph = Paragraph::new(tile_lines(view, tile))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn tile_lines(view: &DashboardView, tile: &Tile) -> Vec<Line<'static>> {
    let theme = &view.theme;
    let text = Style::default().fg(theme.text);
    let muted = theme.muted_style();

    match tile.kind {
        TileKind::ThemeToggle => vec![Line::styled(format!("{} mode", view.theme.variant.label()), text)],
        TileKind::Language => vec![Line::styled(view.language.code(), text)],
        TileKind::Voice => vec![Line::styled("unavailable", theme.disabled_style())],
        TileKind::Settings => vec![Line::styled("config.toml", muted)],
        TileKind::Weather => vec![
            Line::styled("No live forecast", text),
            Line::styled("offline mode", muted),
        ],
        TileKind::Clock => {
            let now = Local::now();
            vec![
                Line::styled(now.format("%H:%M:%S").to_string(), Style::default().fg(theme.sky)),
                Line::styled(now.format("%A, %d %B %Y").to_string(), muted),
            ]
        }
        TileKind::Astronomy => vec![
            Line::styled("Sunrise 6:42 AM", Style::default().fg(theme.yellow)),
            Line::styled("Sunset 6:15 PM", Style::default().fg(theme.peach)),
        ],
        TileKind::Photos => {
            let photo = view.current_photo();
            vec![
                Line::styled(photo.title, text),
                Line::styled(photo.date, muted),
            ]
        }
        TileKind::PhotoPlay => vec![Line::styled(play_glyph(view.slideshow_playing), text)],
        TileKind::MusicPlay => vec![Line::styled(play_glyph(view.music_playing), text)],
        TileKind::PhotoPrevious | TileKind::MusicPrevious => vec![Line::styled("<<", text)],
        TileKind::PhotoNext | TileKind::MusicNext => vec![Line::styled(">>", text)],
        TileKind::Music => {
            let track = view.current_track();
            vec![
                Line::styled(track.title, text),
                Line::styled(track.artist, muted),
            ]
        }
        TileKind::Platform(i) => match PLATFORMS.get(i) {
            Some(platform) => vec![
                Line::styled(platform.name, Style::default().fg(theme.pink)),
                Line::styled(platform.url.trim_start_matches("https://"), muted),
            ],
            None => Vec::new(),
        },
        TileKind::NewsCategory(category) => {
            let style = if category == view.category {
                Style::default().fg(theme.green).add_modifier(Modifier::BOLD)
            } else {
                muted
            };
            vec![Line::styled(category.label(), style)]
        }
        TileKind::Headline(category, i) => category
            .headlines()
            .get(i)
            .map(|headline| vec![Line::styled(*headline, text)])
            .unwrap_or_default(),
        TileKind::Match(i) => match MATCHES.get(i) {
            Some(m) => {
                let status_style = if m.is_live() {
                    theme.live_style()
                } else {
                    Style::default().fg(theme.blue)
                };
                vec![
                    Line::styled(format!("{} {}", m.team1, m.score1), text),
                    Line::styled(format!("{} {}", m.team2, m.score2), text),
                    Line::from(vec![
                        Span::styled(m.status, status_style),
                        Span::styled(format!("  {}", m.details), muted),
                    ]),
                ]
            }
            None => Vec::new(),
        },
        TileKind::Recommendation(i) => match RECOMMENDATIONS.get(i) {
            Some(r) => vec![Line::styled(r.title, text), Line::styled(r.subtitle, muted)],
            None => Vec::new(),
        },
        TileKind::Help => vec![Line::styled("Arrows move, Enter selects, Esc clears", muted)],
        TileKind::About => vec![Line::styled("Smart TV Dashboard v2.0", muted)],
    }
}

fn play_glyph(playing: bool) -> &'static str {
    if playing { "||" } else { ">" }
}

fn render_status(frame: &mut Frame, view: &DashboardView, area: Rect) {
    let theme = &view.theme;
    let focused = view
        .focused
        .as_ref()
        .and_then(|id| view.tile(id))
        .map(|tile| tile.kind.title())
        .unwrap_or_else(|| "nothing focused".to_string());
    let message = view
        .status
        .clone()
        .unwrap_or_else(|| "Arrows to move, Enter to select, Esc to clear, q to quit".to_string());

    let line = Line::from(vec![
        Span::styled(format!(" [{}] ", focused), Style::default().fg(theme.lavender)),
        Span::raw(message),
    ]);
    frame.render_widget(Paragraph::new(line).style(theme.status_style()), area);
}
