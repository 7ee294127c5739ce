pub mod cors;
pub mod session;
