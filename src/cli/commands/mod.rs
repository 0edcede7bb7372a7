pub mod check;
mod command_result;
pub mod entries;
pub mod helper;
pub mod init;
pub mod matches;
#[cfg(feature = "words")]
pub mod words;

pub use command_result::*;
