use crate::*;

/// A set of transactions from one pool, as a bitmask over pool positions.
///
/// Bit `i` is set when `TxId::from(i)` is included. Copyable and ordered by
/// mask value; enumeration order is the concern of [`Feasible`], not of the
/// bundle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bundle(u32);

impl Bundle {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, id: &TxId) -> bool {
        self.0 & Self::bit(*id) != 0
    }
    pub fn add(self, id: TxId) -> Self {
        Self(self.0 | Self::bit(id))
    }
    /// Whether the two bundles share no transaction.
    pub fn disjoint(&self, other: &Self) -> bool {
        self.0 & other.0 == 0
    }
    /// Members in ascending identifier order.
    pub fn members(&self) -> impl Iterator<Item = TxId> + '_ {
        let mut mask = self.0;
        std::iter::from_fn(move || match mask {
            0 => None,
            _ => {
                let i = mask.trailing_zeros() as usize;
                mask = mask & (mask - 1);
                Some(TxId::from(i))
            }
        })
    }
    fn bit(id: TxId) -> u32 {
        1 << id.index()
    }
}

impl From<TxId> for Bundle {
    fn from(id: TxId) -> Self {
        Self(Self::bit(id))
    }
}
impl From<u32> for Bundle {
    fn from(mask: u32) -> Self {
        Self(mask)
    }
}
impl From<Bundle> for u32 {
    fn from(bundle: Bundle) -> Self {
        bundle.0
    }
}

impl FromIterator<TxId> for Bundle {
    fn from_iter<T: IntoIterator<Item = TxId>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), Self::add)
    }
}

impl std::fmt::Display for Bundle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let members = self
            .members()
            .map(|id| id.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{{{}}}", members)
    }
}
