//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod features;
mod interactive;
mod model_info;

pub use check::run_check;
pub use completions::{run_completions, run_manpage};
pub use features::run_features;
pub use interactive::run_interactive;
pub use model_info::run_model_info;
