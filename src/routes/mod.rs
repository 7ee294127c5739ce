pub mod auth;
pub mod candidate;
pub mod health;
pub mod jobs;
pub mod masters;
pub mod pages;
