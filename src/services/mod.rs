pub mod match_cache;
pub mod match_service;

pub use match_cache::{MatchCache, MatchKey, MatchOp};
pub use match_service::MatchService;
