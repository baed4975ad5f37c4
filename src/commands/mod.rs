//! Command handlers: one file per `Commands` variant (`spec.md` §6). Each
//! handler discovers a container if it needs one, calls into `slotwt`, prints
//! the single line of output the operation warrants, and lets `main`
//! translate any error into the `wt: <message>` line and exit code.
//!
//! Grounded on the teacher's `src/commands/*.rs` split (one file per
//! subcommand, `handle_<name>(...)` entry points returning `anyhow::Result<()>`).

mod checkout;
mod init;
mod pin_unpin;
mod resume;
mod shell_init;

pub use checkout::handle_checkout;
pub use init::handle_init;
pub use pin_unpin::{handle_pin, handle_unpin};
pub use resume::handle_resume;
pub use shell_init::handle_shell_init;
