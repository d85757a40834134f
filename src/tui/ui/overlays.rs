use crate::config::GameConfig;
use crate::engine::DrawPokerEngine;
use crate::round::RoundState;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};
use super::table::suit_style;

fn popup(f: &mut Frame, title: &str, percent_x: u16, percent_y: u16, lines: Vec<Line>) {
    let area = centered_rect(percent_x, percent_y, f.area());
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
}

fn bet_rule(rules: &GameConfig) -> String {
    let start = format!("Bets start at {}", rules.base_bet);
    match (rules.bet_step, rules.max_bet) {
        (0, _) => format!("{start} and stay there."),
        (step, Some(cap)) => format!("{start} and rise by {step} every hand, up to {cap}."),
        (step, None) => format!("{start} and rise by {step} every hand."),
    }
}

pub(super) fn draw_help<E: DrawPokerEngine>(f: &mut Frame, app: &AppState<E>) {
    let lines = vec![
        heading("Round:"),
        Line::from("- Space / Enter: deal, draw or next hand"),
        Line::from("- 1-5: hold / release a card"),
        Line::from("- D: draw replacements for cards not held"),
        Line::from("- N: next hand"),
        Line::from("- R: restart (only when out of credits)"),
        Line::from(""),
        heading("Views:"),
        Line::from("- P: paytable"),
        Line::from("- H: round history (Up / Down to scroll)"),
        Line::from("- ?: this help"),
        Line::from(""),
        Line::from(bet_rule(app.engine.rules())),
        Line::from("Q or Esc quits."),
        Line::from(""),
        Line::from(Span::styled("Close: ? or Esc", Style::default().add_modifier(Modifier::DIM))),
    ];
    popup(f, "Help", 60, 70, lines);
}

pub(super) fn draw_paytable<E: DrawPokerEngine>(f: &mut Frame, app: &AppState<E>) {
    let e = &app.engine;
    let last = match e.state() {
        RoundState::RoundResolved => e.last_result().map(|r| r.category),
        _ => None,
    };
    let mut lines: Vec<Line> = Vec::with_capacity(12);
    for (category, payout) in e.paytable().rows() {
        let text = format!("{:<18}{:>6}", category.label(), payout);
        let style = if Some(category) == last {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Close: P or Esc", Style::default().add_modifier(Modifier::DIM))));
    popup(f, "Paytable", 40, 60, lines);
}

pub(super) fn draw_history<E: DrawPokerEngine>(f: &mut Frame, app: &AppState<E>) {
    let page = AppState::<E>::HISTORY_PAGE_SIZE;
    let records = app.engine.recent_rounds(page + app.history_offset());
    let mut lines: Vec<Line> = Vec::new();
    if records.is_empty() {
        lines.push(Line::from("No rounds played yet."));
    }
    for r in records.iter().skip(app.history_offset()).take(page) {
        let mut spans = vec![Span::raw(format!("#{:<4} bet {:<4} ", r.round, r.bet))];
        for card in r.cards {
            spans.push(Span::styled(format!("{:>3} ", card.face()), suit_style(card.suit())));
        }
        let outcome = if r.reward > 0 {
            Span::styled(
                format!(" {} +{}", r.category, r.reward),
                Style::default().fg(Color::Yellow),
            )
        } else {
            Span::styled(format!(" {}", r.category), Style::default().add_modifier(Modifier::DIM))
        };
        spans.push(outcome);
        spans.push(Span::raw(format!("  = {}", r.credits_after)));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    popup(f, "History", 80, 80, lines);
}
