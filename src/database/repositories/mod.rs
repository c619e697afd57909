pub mod attendance;
pub mod employee;
pub mod payroll;

// Re-export all repositories for easy importing
pub use attendance::AttendanceRepository;
pub use employee::EmployeeRepository;
pub use payroll::PayrollRepository;
