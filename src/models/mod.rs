pub mod agenda_item;
pub mod attendance;
pub mod meeting;
pub mod member;
pub mod motion;
pub mod quorum;
pub mod report;
pub mod role;
pub mod setting;
pub mod statement;
