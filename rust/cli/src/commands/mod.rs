//! Command handlers, one module per subcommand.
//!
//! Each handler has the shape `handle_COMMAND_command(..., out: &mut dyn Write)
//! -> Result<(), CliError>`; output streams are passed in so tests can
//! capture them.

mod cfg;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::{PlayOptions, handle_play_command};
