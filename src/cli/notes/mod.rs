//! Secure note commands.
//!
//! Add, list, show, edit, and remove notes.

mod add;
mod edit;
mod list;
mod rm;
mod show;

pub use add::{execute as add, AddArgs};
pub use edit::execute as edit;
pub use list::execute as list;
pub use rm::execute as rm;
pub use show::execute as show;
