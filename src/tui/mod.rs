pub mod app;
pub mod dialog;
pub mod input;
pub mod render;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use app::run;
