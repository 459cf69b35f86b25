pub mod core;
pub mod entities;
pub mod execution;
pub mod quality;
pub mod records;
