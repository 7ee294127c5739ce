pub mod auth_dto;
pub mod candidate_dto;
pub mod jobs_dto;
pub mod page_dto;
