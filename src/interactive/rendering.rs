//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::Slot;
use crate::game::Phase;
use crate::output::formatters::tiles_to_string;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tile stack
            Constraint::Length(8), // Slots
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_stack(f, app, chunks[1]);
    render_slots(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 WORDSTACK - Unscramble Two Words")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_stack(f: &mut Frame, app: &App, area: Rect) {
    let mut tiles = app.session.remaining();
    let content = match tiles.next() {
        Some(top) => Line::from(vec![
            Span::styled(
                tiles_to_string([top]),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(tiles_to_string(tiles), Style::default().fg(Color::Yellow)),
        ]),
        None => Line::from("No tiles left"),
    };

    let title = format!(" Tiles ({}) ", app.session.remaining_count());
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_slots(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Length(2)])
        .split(area);

    for slot in Slot::ALL {
        render_slot(f, app, slot, chunks[slot.index()]);
    }
    render_progress(f, app, chunks[2]);
}

fn render_slot(f: &mut Frame, app: &App, slot: Slot, area: Rect) {
    let placed = app.session.slot(slot);
    let mut spans: Vec<Span> = placed
        .letters()
        .iter()
        .map(|letter| {
            Span::styled(
                format!(" {} ", letter.as_char().to_ascii_uppercase()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    for _ in placed.count()..placed.capacity() {
        spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
    }

    // Highlight the drop target the way a drag-over would
    let border_color = match (app.session.outcome(), app.hint) {
        (Some(outcome), _) if outcome.won => Color::Green,
        (Some(_), _) => Color::Red,
        (None, Some(hinted)) if hinted == slot => Color::LightGreen,
        _ => Color::Blue,
    };

    let key = match slot {
        Slot::First => '1',
        Slot::Second => '2',
    };
    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(format!(" [{key}] {} ", slot.to_string().to_uppercase()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border_color)),
    );
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.tile_count();
    let placed = total - app.session.remaining_count();
    let percent = if total == 0 {
        0
    } else {
        (placed * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{placed}/{total} tiles placed"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let phase = match app.session.phase() {
        Phase::NotStarted => "Not started",
        Phase::InProgress => "Playing",
        Phase::Completed => "Round over",
    };
    let mode = Paragraph::new(format!("Mode: {phase}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let help_text = if app.session.phase() == Phase::InProgress {
        "1/2: Place | ←/→: Move | u: Undo | h: Hint | n: New | q: Quit"
    } else {
        "n: New Game | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
