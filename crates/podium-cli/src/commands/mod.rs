//! Command implementations.

pub mod analyze;
pub mod session;

pub use self::analyze::execute_analyze;
pub use self::session::execute_session;
