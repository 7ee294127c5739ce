pub mod backend_service;
pub mod gateway_service;
