pub mod employee;
pub mod plan;
pub mod review;
