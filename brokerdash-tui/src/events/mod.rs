mod handler;
mod keybinds;

pub use handler::{Action, ClickableRegion, EventHandler, ScrollDirection};
pub use keybinds::{KeyBinding, KeybindConfig, Keybinds};
