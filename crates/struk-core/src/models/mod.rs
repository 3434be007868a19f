pub mod batch;
pub mod employee;
pub mod transaction;
