//! The UI renders the application state into something visible and clickable.
//!
//! The draw function lays out the document list, the chosen affordance next to (or above) it and
//! a help bar. Every region it draws is recorded in [`AppState::areas`] so mouse input can be hit
//! tested against what is actually on screen.

use crate::app_state::{Affordance, AppState, HitAreas};
use crate::position::{SectionWithDimensions, TabMeasurement, ThumbTrack};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const TAB_SEPARATOR: &str = " │ ";
const PICKER_WIDTH: u16 = 32;

/// Renders the list and its fast-navigation affordance.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(match app.affordance {
            Affordance::Tabs => vec![
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ],
            Affordance::Dots | Affordance::Indicator => {
                vec![Constraint::Length(0), Constraint::Min(0), Constraint::Length(3)]
            }
        })
        .split(f.area());
    let (tab_row, body, help) = (rows[0], rows[1], rows[2]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(2)])
        .split(body);
    let (list_area, side) = match app.affordance {
        Affordance::Tabs => (body, None),
        Affordance::Dots | Affordance::Indicator => (columns[0], Some(columns[1])),
    };

    app.areas = HitAreas {
        list: list_area,
        ..HitAreas::default()
    };
    draw_list(f, app, list_area);

    match (app.affordance, side) {
        (Affordance::Dots, Some(area)) => {
            draw_dots(f, app, area);
            draw_picker(f, app, list_area);
        }
        (Affordance::Indicator, Some(area)) => draw_indicator(f, app, area),
        _ => draw_tabs(f, app, tab_row),
    }

    draw_help(f, app, help);
}

fn draw_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.list.set_height(usize::from(area.height));
    let active_row = app.engine.active_section().map(|s| s.index);

    let items: Vec<ListItem> = app
        .list
        .rows()
        .iter()
        .enumerate()
        .skip(app.list.offset())
        .take(app.list.height())
        .map(|(row, text)| {
            let style = if Some(row) == active_row {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(text.clone(), style)))
        })
        .collect();

    f.render_widget(List::new(items), area);
}

fn draw_dots(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.areas.dots = Some(area);
    app.column_offset = app.engine.column_scroll_offset(f32::from(area.height));
    if !app.engine.is_visible() {
        return;
    }

    let active = app.engine.active_section().map(|s| s.section_index);
    let thumb = app.engine.thumb_pixel();
    let dimensions = app.engine.dimensions();

    let lines: Vec<Line> = (0..area.height)
        .map(|y| {
            let pixel = f32::from(y) + 0.5 + app.column_offset;
            let on_thumb = thumb.is_some_and(|t| (t - pixel).abs() < 0.5);
            let dot = dot_at(&dimensions, pixel).map(|d| {
                let is_active = Some(d.section.section_index) == active;
                let color = d.section.dot_color.unwrap_or(Color::White);
                if is_active {
                    Span::styled("●", Style::default().fg(Color::Yellow))
                } else {
                    Span::styled("•", Style::default().fg(color))
                }
            });
            let marker = if on_thumb {
                Span::styled("▶", Style::default().fg(Color::Yellow))
            } else {
                Span::raw(" ")
            };
            Line::from(vec![marker, dot.unwrap_or_else(|| Span::raw(" "))])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn dot_at<'a, 'b>(
    dimensions: &'b [SectionWithDimensions<'a>],
    pixel: f32,
) -> Option<&'b SectionWithDimensions<'a>> {
    dimensions.iter().find(|d| d.top <= pixel && pixel < d.end)
}

fn draw_picker(f: &mut Frame, app: &mut AppState, list_area: Rect) {
    if !app.engine.picker().is_visible() || list_area.width < PICKER_WIDTH {
        return;
    }
    let sections = app.engine.sections();
    let height = u16::try_from(sections.len() + 2)
        .unwrap_or(u16::MAX)
        .min(list_area.height);
    let area = Rect {
        x: list_area.right() - PICKER_WIDTH,
        y: list_area.y,
        width: PICKER_WIDTH,
        height,
    };
    app.areas.picker = Some(area);

    let visible = usize::from(height.saturating_sub(2));
    let max_offset = sections.len().saturating_sub(visible);
    app.picker_offset = app.picker_offset.min(max_offset);

    let highlighted = app.engine.picker().highlighted();
    let items: Vec<ListItem> = sections
        .iter()
        .skip(app.picker_offset)
        .take(visible)
        .map(|section| {
            let is_active = Some(section.section_index) == highlighted;
            let line = section.label.render(section, is_active);
            let style = if is_active {
                Style::default().bg(Color::DarkGray).fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(
        List::new(items).block(Block::default().borders(Borders::ALL).title("Sections")),
        area,
    );
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_tabs(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.areas.tabs = Some(area);
    let active = app.engine.active_section().map(|s| s.section_index);

    let mut spans = Vec::new();
    let mut tabs = Vec::new();
    let mut left = 0.0_f32;
    for section in app.engine.sections() {
        if !spans.is_empty() {
            spans.push(Span::styled(TAB_SEPARATOR, Style::default().fg(Color::DarkGray)));
            left += TAB_SEPARATOR.chars().count() as f32;
        }
        let is_active = Some(section.section_index) == active;
        let line = section.label.render(section, is_active);
        let width = line.width() as f32;
        tabs.push(TabMeasurement { left, width });
        left += width;

        let style = if is_active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        spans.extend(line.spans.into_iter().map(|span| span.patch_style(style)));
    }

    let scroll = app
        .engine
        .tab_scroll_amount(&tabs, left, f32::from(area.width))
        .round() as u16;
    app.tabs = tabs;
    app.tab_scroll = scroll;

    f.render_widget(Paragraph::new(Line::from(spans)).scroll((0, scroll)), area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_indicator(f: &mut Frame, app: &mut AppState, area: Rect) {
    app.areas.indicator = Some(area);
    let track = app.engine.indicator().track();
    let track_length = f32::from(area.height);
    if (track.track_length - track_length).abs() > f32::EPSILON {
        app.engine.set_thumb_track(ThumbTrack {
            track_length,
            thumb_length: track.thumb_length,
        });
    }
    if !app.engine.indicator().is_visible() {
        return;
    }

    let start = app.engine.indicator().thumb_offset().round() as u16;
    let end = start.saturating_add(track.thumb_length.round().max(1.0) as u16);
    let style = if app.engine.indicator().is_dragging() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let lines: Vec<Line> = (0..area.height)
        .map(|y| {
            if (start..end).contains(&y) {
                Line::from(Span::styled(" █", style))
            } else {
                Line::from(Span::styled(" │", Style::default().fg(Color::DarkGray)))
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let section = app
        .engine
        .active_section()
        .map_or_else(|| "-".to_string(), |s| s.label.render(s, true).to_string());
    let mut text = format!(
        "{section} | ↑↓/jk: Scroll | PgUp/PgDn | n/p: Section | Tab: {:?} | q: Quit",
        app.affordance
    );
    if let Some(message) = &app.message {
        text = format!("{text} | {message}");
    }

    let help = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
