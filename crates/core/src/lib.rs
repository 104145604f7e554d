pub mod deployment;
pub mod pipeline;
pub mod shared;
