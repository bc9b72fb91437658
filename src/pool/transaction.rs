use crate::*;
use rand::Rng;

/// A candidate transaction competing for block space.
///
/// Costs `gas` against the shared block capacity and pays `tip` to whichever
/// player includes it. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transaction {
    gas: Gas,
    tip: Tip,
}

impl Transaction {
    pub const fn new(gas: Gas, tip: Tip) -> Self {
        Self { gas, tip }
    }
    pub fn gas(&self) -> Gas {
        self.gas
    }
    pub fn tip(&self) -> Tip {
        self.tip
    }
    /// Draws gas then tip, each uniform over its inclusive reference range.
    pub fn sample<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let gas = rng.random_range(GAS_MIN..=GAS_MAX);
        let tip = rng.random_range(TIP_MIN..=TIP_MAX);
        Self { gas, tip }
    }
}

impl From<(Gas, Tip)> for Transaction {
    fn from((gas, tip): (Gas, Tip)) -> Self {
        Self::new(gas, tip)
    }
}

impl Arbitrary for Transaction {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "gas {:>2} tip {:>2}", self.gas, self.tip)
    }
}
