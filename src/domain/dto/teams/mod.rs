//! 팀 API의 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{FormTeamRequest, INVALID_MEMBER_EMAILS};
pub use response::TeamResponse;
