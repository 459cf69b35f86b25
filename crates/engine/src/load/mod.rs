pub mod dependent;
pub mod simple;

pub use dependent::load_sales;
pub use simple::load_batch;
