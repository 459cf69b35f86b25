pub mod error;
pub mod load;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod tables;
pub mod transform;
