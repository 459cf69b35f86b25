pub mod error;
pub mod mysql;
pub mod session;
