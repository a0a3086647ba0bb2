//! Command handlers, one module per subcommand.

pub mod completion;
pub mod config_cmd;
pub mod dish;
pub mod ingredient;
pub mod init;
pub mod phase;
pub mod reset;
pub mod results;
pub mod shopping;
pub mod status;
pub mod version;
pub mod vote;
