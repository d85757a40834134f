mod animation;
mod state;

pub use animation::{Animation, CardPhase};
pub use state::{AppState, InputAction, Overlay, TITLE};
