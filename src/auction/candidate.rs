use crate::*;

/// A feasible bundle together with its aggregate gas and tip.
///
/// Produced by [`Feasible`] for one side of the pool under one capacity
/// bound. `gas` never exceeds the bound it was enumerated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    bundle: Bundle,
    gas: Gas,
    tip: Tip,
}

impl Move {
    pub fn new(bundle: Bundle, gas: Gas, tip: Tip) -> Self {
        Self { bundle, gas, tip }
    }
    pub fn bundle(&self) -> Bundle {
        self.bundle
    }
    pub fn gas(&self) -> Gas {
        self.gas
    }
    pub fn tip(&self) -> Tip {
        self.tip
    }
    /// Highest-tip move, keeping the earliest on ties.
    pub fn best<'a, I>(moves: I) -> Option<&'a Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        moves.into_iter().fold(None, |best, next| match best {
            Some(best) if best.tip >= next.tip => Some(best),
            _ => Some(next),
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} gas {} tip {}", self.bundle, self.gas, self.tip)
    }
}
