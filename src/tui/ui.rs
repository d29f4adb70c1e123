//! UI rendering functions
//!
//! Single-screen layout, top to bottom:
//! - Header: brand mark, title and the live clock
//! - Menu: five inert navigation buttons
//! - Tiles: four summary figures
//! - Metrics: CPU, memory and disk ring gauges plus the network panel
//! - Footer: key help and status message
//!
//! Rings are drawn on a Braille canvas. A Braille cell is 2×4 dots on a
//! roughly 1:2 terminal cell, so a canvas twice as wide as it is tall has
//! square dots and the ring stays circular.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Paragraph,
    },
    Frame,
};

use super::app::App;
use crate::gauge::{RingGauge, RingGeometry};
use crate::layout::{self, Icon, MENU, STAT_TILES};
use crate::metrics::RandomSource;
use crate::palette::{self, Rgb};

fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

fn panel() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(rgb(palette::SLATE_700)))
        .style(Style::default().bg(rgb(palette::SLATE_800)))
}

/// Main drawing function
pub fn draw<S: RandomSource>(f: &mut Frame, app: &App<S>) {
    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(rgb(palette::SLATE_900))
                .fg(rgb(palette::SLATE_200)),
        ),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Menu
            Constraint::Length(4), // Tiles
            Constraint::Min(8),    // Gauges + network
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_menu(f, app, chunks[1]);
    draw_tiles(f, chunks[2]);
    draw_metrics(f, app, chunks[3]);
    draw_footer(f, app, chunks[4]);
}

/// Brand on the left, time and date on the right
fn draw_header<S: RandomSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(rgb(palette::SLATE_700)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(36)])
        .split(inner);

    let brand = Line::from(vec![
        Span::styled(
            format!(" {} ", Icon::PlayCircle),
            Style::default()
                .bg(rgb(palette::BRAND_RED))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            layout::BRAND_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(brand), columns[0]);

    let clock = app.dashboard.clock();
    let clock_lines = vec![
        Line::from(Span::styled(
            clock.formatted_time(),
            Style::default()
                .fg(rgb(palette::SLATE_50))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            clock.formatted_date(),
            Style::default().fg(rgb(palette::SLATE_400)),
        )),
    ];
    f.render_widget(
        Paragraph::new(clock_lines).alignment(Alignment::Right),
        columns[1],
    );
}

/// Navigation buttons; the focused one is highlighted like a hovered button
fn draw_menu<S: RandomSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let constraints = vec![Constraint::Ratio(1, MENU.len() as u32); MENU.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (idx, entry) in MENU.iter().enumerate() {
        let mut block = panel();
        if idx == app.focused_menu {
            block = block
                .border_style(Style::default().fg(rgb(palette::ACCENT_CYAN)))
                .style(Style::default().bg(rgb(palette::SLATE_700)));
        }
        let button = Paragraph::new(Line::from(vec![
            Span::raw(entry.icon.glyph()),
            Span::raw(" "),
            Span::raw(entry.label),
        ]))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(button, cells[idx]);
    }
}

fn draw_tiles(f: &mut Frame, area: Rect) {
    let constraints = vec![Constraint::Ratio(1, STAT_TILES.len() as u32); STAT_TILES.len()];
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (tile, cell) in STAT_TILES.iter().zip(cells.iter()) {
        let block = panel().title(
            Line::from(Span::styled(
                format!(" {} ", tile.icon),
                Style::default().fg(rgb(palette::SLATE_200)),
            ))
            .right_aligned(),
        );

        let mut lines = vec![
            Line::from(Span::styled(
                tile.label,
                Style::default().fg(rgb(palette::SLATE_300)),
            )),
            Line::from(Span::styled(
                tile.value,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(badge) = tile.badge {
            lines.push(Line::from(Span::styled(
                badge,
                Style::default().fg(rgb(palette::SLATE_400)),
            )));
        }

        f.render_widget(Paragraph::new(lines).block(block), *cell);
    }
}

fn draw_metrics<S: RandomSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (gauge, cell) in app.dashboard.gauges().iter().zip(cells.iter()) {
        draw_ring_gauge(f, gauge, *cell);
    }
    draw_network(f, app, cells[3]);
}

/// Ring on a Braille canvas with the value and label underneath
fn draw_ring_gauge(f: &mut Frame, gauge: &RingGauge, area: Rect) {
    let block = panel();
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(inner);

    let caption = vec![
        Line::from(Span::styled(
            gauge.value_text(),
            Style::default()
                .fg(rgb(palette::SLATE_50))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            gauge.label.clone().unwrap_or_default(),
            Style::default().fg(rgb(palette::SLATE_300)),
        )),
    ];
    f.render_widget(
        Paragraph::new(caption).alignment(Alignment::Center),
        rows[1],
    );

    let ring_area = ring_rect(rows[0]);
    if ring_area.height < 2 {
        return;
    }

    let g = &gauge.geometry;
    let dot = g.diameter / (ring_area.height as f64 * 4.0);
    let track = ring_points(g, std::f64::consts::TAU, dot, false);
    let arc = ring_points(g, g.sweep_radians(), dot, true);
    let track_color = rgb(palette::RING_TRACK);
    let accent = rgb(gauge.accent);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(rgb(palette::SLATE_800))
        .x_bounds([0.0, g.diameter])
        .y_bounds([0.0, g.diameter])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &track,
                color: track_color,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &arc,
                color: accent,
            });
        });
    f.render_widget(canvas, ring_area);
}

/// Largest centred rect that keeps Braille dots square (width = 2 × height)
fn ring_rect(area: Rect) -> Rect {
    let height = area.height.min(area.width / 2);
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Dots covering a stroked arc of `sweep` radians, in canvas (y-up) coordinates
///
/// `dot` is the size of one Braille dot in geometry units. With `round_caps`
/// both ends get a half-disc like an SVG round line cap.
fn ring_points(g: &RingGeometry, sweep: f64, dot: f64, round_caps: bool) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    if g.radius <= 0.0 || dot <= 0.0 {
        return points;
    }
    let half = g.stroke_width / 2.0;
    let bands = ((g.stroke_width / dot).ceil() as usize).max(1);

    for band in 0..=bands {
        let r = g.radius - half + g.stroke_width * band as f64 / bands as f64;
        if r <= 0.0 {
            continue;
        }
        let steps = ((sweep * r) / (dot * 0.5)).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let (x, y) = g.point_at_radius(sweep * i as f64 / steps as f64, r);
            points.push((x, g.diameter - y));
        }
    }

    if round_caps {
        for theta in [0.0, sweep] {
            let (cx, cy) = g.point_at(theta);
            let span = (half / dot).ceil() as i64;
            for i in -span..=span {
                for j in -span..=span {
                    let (dx, dy) = (i as f64 * dot, j as f64 * dot);
                    if dx * dx + dy * dy <= half * half {
                        points.push((cx + dx, g.diameter - (cy + dy)));
                    }
                }
            }
        }
    }

    points
}

fn draw_network<S: RandomSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = panel().title(Span::styled(
        format!(" {} {} ", Icon::Wifi, layout::NETWORK_TITLE),
        Style::default().fg(rgb(palette::SLATE_300)),
    ));

    let mut lines = Vec::new();
    for (figure, caption) in layout::network_rows(app.dashboard.metrics()) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            figure,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            caption,
            Style::default().fg(rgb(palette::SLATE_400)),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_footer<S: RandomSource>(f: &mut Frame, app: &App<S>, area: Rect) {
    let key = Style::default()
        .fg(rgb(palette::ACCENT_CYAN))
        .add_modifier(Modifier::BOLD);
    let sep = Span::styled(" │ ", Style::default().fg(rgb(palette::SLATE_700)));

    let mut spans = vec![
        Span::styled(" q", key),
        Span::raw(" quit"),
        sep.clone(),
        Span::styled("←/→", key),
        Span::raw(" focus menu"),
        sep.clone(),
        Span::styled("F12", key),
        Span::raw(" save config"),
    ];
    if let Some(msg) = app.get_status_message() {
        spans.push(sep);
        spans.push(Span::styled(
            msg.to_string(),
            Style::default().fg(rgb(palette::SLATE_50)),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(rgb(palette::SLATE_400))),
        area,
    );
}
