pub mod employee;
pub mod result_code;
