//! CLI command implementations

pub mod import;
pub mod ls;
pub mod neighborhoods;
pub mod recommend;
pub mod search;
pub mod status;
pub mod trending;
