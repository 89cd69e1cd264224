//! The UI renders the document view with the floating panel drawn over it.
//!
//! The document fills the screen above a help bar. The panel is a bordered overlay whose
//! position comes from the positioner, whose rows come from the panel model, and whose
//! highlight and scroll offset come from the active-section tracker.

use crate::app_state::AppState;
use crate::document::Block as ContentBlock;
use crate::positioner::Cursor;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Splits the frame into the document viewport and the help bar.
#[must_use]
pub fn layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Renders the document, the panel and the help bar.
pub fn draw(f: &mut Frame, app: &AppState) {
    let (document_area, help_area) = layout(f.area());
    draw_document(f, app, document_area);
    draw_panel(f, app);
    draw_help(f, app, help_area);
}

fn draw_document(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(document) = app.controller.host().document() else {
        return;
    };
    let lines: Vec<Line> = document
        .blocks
        .iter()
        .skip(app.scroll)
        .take(usize::from(area.height))
        .map(|block| match block {
            ContentBlock::Heading(node) => Line::from(vec![
                Span::styled(
                    format!("{} ", "#".repeat(usize::from(node.level))),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    node.text.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            ContentBlock::Text(text) => Line::raw(text.clone()),
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_panel(f: &mut Frame, app: &AppState) {
    let Some(rect) = app.panel_rect() else {
        return;
    };
    let Some(panel) = app.controller.panel() else {
        return;
    };
    let Some(model) = panel.model() else {
        return;
    };

    let border = match panel.positioner().cursor() {
        Cursor::Grab => Style::default().fg(Color::Gray),
        Cursor::Grabbing => Style::default().fg(Color::Yellow),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            format!("{} {}", app.title_glyph, model.title),
            Style::default()
                .fg(Color::Rgb(0, 212, 255))
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(rect);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = panel.list().map_or(0, |list| list.scroll.max(0.0) as usize);
    let active = panel.active_entry();
    let selected = app.selected;
    let lines: Vec<Line> = model
        .entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(usize::from(inner.height))
        .map(|(index, entry)| {
            let style = if Some(index) == active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Rgb(0, 212, 255))
            } else {
                Style::default()
            };
            let style = if Some(index) == selected {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            };
            let marker = if Some(index) == active { "▌" } else { " " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Rgb(0, 212, 255))),
                Span::raw("  ".repeat(entry.depth)),
                Span::styled(entry.label.clone(), style),
            ])
        })
        .collect();

    f.render_widget(Clear, rect);
    f.render_widget(block, rect);
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help = Line::from(vec![
        Span::styled(
            "↑/↓ PgUp/PgDn",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" scroll  "),
        Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" next doc  "),
        Span::styled("drag", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" move panel  "),
        Span::styled("n/p", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" select  "),
        Span::styled("click/Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" jump  "),
        Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit  │ "),
        Span::styled(app.status(), Style::default().fg(Color::DarkGray)),
    ]);
    let paragraph = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
