mod layout;
mod overlays;
mod table;

use crate::engine::DrawPokerEngine;
use crate::tui::app::{AppState, Overlay};
use ratatui::prelude::Frame;

pub fn draw<E: DrawPokerEngine>(f: &mut Frame, app: &AppState<E>) {
    table::draw_table(f, app);
    match app.overlay() {
        Some(Overlay::Help) => overlays::draw_help(f, app),
        Some(Overlay::Paytable) => overlays::draw_paytable(f, app),
        Some(Overlay::History) => overlays::draw_history(f, app),
        None => {}
    }
}
