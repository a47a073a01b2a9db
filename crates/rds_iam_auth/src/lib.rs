//! Host validation and token plumbing for IAM database authentication
//! against Amazon RDS.

mod config;
mod error;
mod helper;
mod host;
mod region;
mod token;

pub use self::config::*;
pub use error::*;
pub use helper::*;
pub use host::*;
pub use region::*;
pub use token::*;
