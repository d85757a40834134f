use crate::cards::Suit;
use crate::engine::DrawPokerEngine;
use crate::hand::{Slot, HAND_SIZE};
use crate::round::RoundState;
use crate::tui::app::{AppState, CardPhase, TITLE};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{card_slots, inner, squeeze};

const CARD_HEIGHT: u16 = 7;

pub(super) fn draw_table<E: DrawPokerEngine>(f: &mut Frame, app: &AppState<E>) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // HUD
            Constraint::Min(CARD_HEIGHT + 3),     // cards
            Constraint::Length(3),                // result / message
            Constraint::Length(4),                // keys
        ])
        .split(size);

    draw_hud(f, chunks[0], app);
    draw_cards(f, chunks[1], app);
    draw_result(f, chunks[2], app);
    draw_keys(f, chunks[3], app);
}

fn draw_hud<E: DrawPokerEngine>(f: &mut Frame, area: Rect, app: &AppState<E>) {
    let e = &app.engine;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let credits_style = if e.out_of_credits() { bold.fg(Color::Red) } else { bold.fg(Color::Green) };
    let line = Line::from(vec![
        Span::raw("Credits: "),
        Span::styled(e.credits().to_string(), credits_style),
        Span::raw("   Bet: "),
        Span::styled(e.current_bet().to_string(), bold.fg(Color::Yellow)),
        Span::raw(format!("   Round: {}", e.rounds_completed() + 1)),
        Span::raw(format!("   Deck: {}", e.deck_remaining())),
    ]);
    let hud = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().title(TITLE).title_alignment(Alignment::Center).borders(Borders::ALL));
    f.render_widget(hud, area);
}

fn draw_cards<E: DrawPokerEngine>(f: &mut Frame, area: Rect, app: &AppState<E>) {
    let block = Block::default()
        .title(format!("Hand: {}", app.engine.state()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(block, area);
    let table = inner(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(9), Constraint::Length(2), Constraint::Min(10)])
        .split(table);
    let rows = |r: Rect| {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CARD_HEIGHT), Constraint::Length(1), Constraint::Min(0)])
            .split(r)
    };
    let pile_rows = rows(cols[0]);
    let pile = pile_rows[0];
    if app.engine.deck_remaining() > 0 {
        render_back(f, pile, app.animation.is_shuffling());
    }
    let pile_label = if app.animation.is_shuffling() { "shuffle" } else { "deck" };
    f.render_widget(
        Paragraph::new(Span::styled(pile_label, Style::default().add_modifier(Modifier::DIM)))
            .alignment(Alignment::Center),
        pile_rows[1],
    );

    let hand_rows = rows(cols[2]);
    let slots = card_slots(hand_rows[0], HAND_SIZE as u16);
    let labels = card_slots(hand_rows[1], HAND_SIZE as u16);
    let hand = app.engine.hand();
    for (i, (&slot_area, &label_area)) in slots.iter().zip(labels.iter()).enumerate() {
        let slot = hand.and_then(|h| h.slot(i));
        let phase = app.animation.phase(i);
        match (phase, slot) {
            (CardPhase::Empty, _) | (_, None) => render_placeholder(f, slot_area, i),
            (CardPhase::Sliding(p), Some(_)) => render_back(f, slide_from(pile, slot_area, p), false),
            (CardPhase::FaceDown, Some(_)) => render_back(f, slot_area, false),
            (CardPhase::Flipping(p), Some(_)) if p < 50 => {
                render_back(f, squeeze(slot_area, 100 - 2 * p), false)
            }
            (CardPhase::Flipping(p), Some(s)) => render_face(f, squeeze(slot_area, 2 * p - 100), s),
            (CardPhase::FaceUp, Some(s)) => render_face(f, slot_area, s),
        }
        let held = slot.is_some_and(|s| s.held);
        let label = if held {
            Span::styled("HELD", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(format!("[{}]", i + 1), Style::default().add_modifier(Modifier::DIM))
        };
        f.render_widget(Paragraph::new(label).alignment(Alignment::Center), label_area);
    }
}

/// Interpolate a card's position between the deck pile and its slot.
fn slide_from(pile: Rect, slot: Rect, percent: u8) -> Rect {
    let lerp = |a: u16, b: u16| -> u16 {
        let (a, b, p) = (i32::from(a), i32::from(b), i32::from(percent.min(100)));
        (a + (b - a) * p / 100) as u16
    };
    Rect {
        x: lerp(pile.x, slot.x),
        y: lerp(pile.y, slot.y),
        width: lerp(pile.width, slot.width),
        height: slot.height,
    }
}

fn draw_result<E: DrawPokerEngine>(f: &mut Frame, area: Rect, app: &AppState<E>) {
    let e = &app.engine;
    let line = if let Some(msg) = app.message() {
        Line::from(Span::styled(msg.to_string(), Style::default().fg(Color::LightRed)))
    } else if !app.is_settled() {
        Line::from(Span::styled("Dealing…", Style::default().add_modifier(Modifier::DIM)))
    } else {
        match (e.state(), e.last_result()) {
            (RoundState::RoundResolved, Some(r)) if r.reward > 0 => Line::from(Span::styled(
                format!("{}!  You win {} credits.", r.category, r.reward),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            (RoundState::RoundResolved, Some(r)) => Line::from(format!("{}. No win this time.", r.category)),
            (RoundState::HandDealt, _) => Line::from("Hold cards with 1-5, then draw."),
            (RoundState::AwaitingBet, _) if e.out_of_credits() => Line::from(Span::styled(
                "Not enough credits. Want to restart the game?",
                Style::default().fg(Color::Red),
            )),
            _ => Line::from(format!("Press Space to deal. Bet is {}.", e.current_bet())),
        }
    };
    let para = Paragraph::new(line).alignment(Alignment::Center).block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_keys<E: DrawPokerEngine>(f: &mut Frame, area: Rect, app: &AppState<E>) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Keys"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner(area));

    let e = &app.engine;
    let ready = app.is_settled() && app.overlay().is_none();
    let state = e.state();
    let deal_enabled = ready && state == RoundState::AwaitingBet && !e.out_of_credits();
    let hold_enabled = ready && state == RoundState::HandDealt;
    let next_enabled = ready && state == RoundState::RoundResolved;
    let restart_enabled = ready && e.out_of_credits();
    let style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let actions = Line::from(vec![
        Span::styled("Space deal", style(deal_enabled)),
        Span::raw(" • "),
        Span::styled("1-5 hold", style(hold_enabled)),
        Span::raw(" • "),
        Span::styled("D draw", style(hold_enabled)),
        Span::raw(" • "),
        Span::styled("N next hand", style(next_enabled)),
        Span::raw(" • "),
        Span::styled("R restart", style(restart_enabled)),
    ]);
    f.render_widget(Paragraph::new(actions).wrap(Wrap { trim: true }), cols[0]);
    let right = Paragraph::new("P paytable • H history • ? help • Q quit")
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Right);
    f.render_widget(right, cols[1]);
}

fn render_placeholder(f: &mut Frame, area: Rect, index: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let body = inner(area);
    f.render_widget(block, area);
    let mid = Rect { y: body.y + body.height / 2, height: body.height.min(1), ..body };
    f.render_widget(
        Paragraph::new(Span::styled((index + 1).to_string(), Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center),
        mid,
    );
}

fn render_back(f: &mut Frame, area: Rect, highlight: bool) {
    let colour = if highlight { Color::LightMagenta } else { Color::Blue };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colour));
    let body = inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let row = "▚".repeat(usize::from(body.width));
    let lines: Vec<Line> = (0..body.height)
        .map(|_| Line::from(Span::styled(row.clone(), Style::default().fg(colour))))
        .collect();
    f.render_widget(Paragraph::new(lines), body);
}

fn render_face(f: &mut Frame, area: Rect, slot: &Slot) {
    let card = slot.card;
    let style = suit_style(card.suit());
    let border = if slot.held {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let block = Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(border);
    let body = inner(area);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    if body.height == 0 || body.width == 0 {
        return;
    }
    let corner = card.face();
    let mut lines = vec![Line::from(Span::styled(corner.clone(), style))];
    let mid = body.height.saturating_sub(2) / 2;
    for _ in 0..mid {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(card.suit().glyph().to_string(), style)).alignment(Alignment::Center));
    while lines.len() + 1 < usize::from(body.height) {
        lines.push(Line::from(""));
    }
    if body.height > 2 {
        lines.push(Line::from(Span::styled(corner, style)).alignment(Alignment::Right));
    }
    f.render_widget(Paragraph::new(lines), body);
}

pub(super) fn suit_style(s: Suit) -> Style {
    if s.is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}
