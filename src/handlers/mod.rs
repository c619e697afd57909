pub mod attendance;
pub mod employees;
pub mod payroll;
pub mod shared;
