pub mod candidate;
pub mod dashboard;
pub mod history;
pub mod interview;
pub mod job;
pub mod masters;
pub mod offer;
pub mod salary;
pub mod timesheet;
