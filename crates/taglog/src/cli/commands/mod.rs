//! CLI commands

mod add;
mod init;
mod show;
mod validate;

pub use add::AddCommand;
pub use init::InitCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
