mod actions;
mod components;
mod scripts;
pub(crate) mod state;
mod view;

pub use view::ItemsView;

#[cfg(test)]
mod intent_smoke;
