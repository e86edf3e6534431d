pub mod output;
pub mod view;

pub use output::Output;
pub use view::{OutputFormat, ViewTab, render_json, render_view};
