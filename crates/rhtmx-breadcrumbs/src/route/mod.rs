//! Route module for breadcrumb matching
//!
//! Contains pure functional components for pattern parsing and matching:
//! - `pattern`: pattern source → typed tokens
//! - `matcher`: tokens + options → anchored regex → [`MatchResult`]
//! - `options`: exact/strict/sensitive flags

pub mod matcher;
pub mod options;
pub mod pattern;

// Re-export commonly used types
pub use matcher::{match_path, MatchResult};
pub use options::MatchOptions;
pub use pattern::{tokenize, ParamKind, ParamToken, PatternToken, RoutePattern};
