mod check;
mod context;
mod formats;

pub use check::run_check;
pub use context::color_choice_to_mode;
pub use formats::run_formats;
