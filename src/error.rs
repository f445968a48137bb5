use thiserror::Error;

use crate::cursor::Cursor;
use crate::node::RuleName;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("invalid token pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// The requested rule never completed, or completed at a level the caller's
/// predicate rejects. Reductions performed along the way are not rolled back;
/// they stay visible in `remainder`.
#[derive(Debug, Error)]
#[error("no parse for `{rule}`, unconsumed: {remainder}")]
pub struct NoParse {
    pub rule: RuleName,
    pub remainder: Cursor,
}
