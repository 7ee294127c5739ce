pub mod cookies;
pub mod flexible;
pub mod format;
pub mod time;
pub mod validation;
