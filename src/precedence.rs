/// Binding level of a rule alternative. Lower numbers bind tighter; terminals
/// sit at level 0.
pub type Level = u32;

/// Bound applied to a level: either "binds tighter than N" or "binds at or
/// looser than N".
///
/// The same predicate serves two purposes: it decides which alternatives of a
/// rule may fire during a bottom-up step, and it decides whether a completed
/// tree is acceptable to whoever asked for it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Precedence {
    /// `< N`
    Below(Level),
    /// `<= N`
    AtMost(Level),
}

pub const DEFAULT_PRECEDENCE: Precedence = Precedence::AtMost(100);

impl Default for Precedence {
    fn default() -> Self { DEFAULT_PRECEDENCE }
}

impl Precedence {
    pub fn accepts(self, level: Level) -> bool {
        match self {
            Precedence::Below(bound) => level < bound,
            Precedence::AtMost(bound) => level <= bound,
        }
    }

    pub fn bound(self) -> Level {
        match self {
            Precedence::Below(bound) | Precedence::AtMost(bound) => bound,
        }
    }
}

#[cfg(test)]
#[path = "tests/precedence.rs"]
mod tests_for_precedence;
