/// Order of a covalent bond.
///
/// `Unspecified` is what a topology without bond-order information
/// provides. It counts as a single bond for valence purposes and is
/// finalized to [`BondOrder::Single`] by bond-order inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum BondOrder {
    Unspecified,
    #[default]
    Single,
    Double,
    Triple,
}

impl BondOrder {
    /// Contribution of this bond to each endpoint's valence.
    pub fn valence(self) -> u8 {
        match self {
            BondOrder::Unspecified | BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }

    /// The next order up, or `None` for a triple bond.
    pub fn raised(self) -> Option<BondOrder> {
        match self {
            BondOrder::Unspecified | BondOrder::Single => Some(BondOrder::Double),
            BondOrder::Double => Some(BondOrder::Triple),
            BondOrder::Triple => None,
        }
    }

    /// The next order down, or `None` when the bond is already single.
    pub fn lowered(self) -> Option<BondOrder> {
        match self {
            BondOrder::Triple => Some(BondOrder::Double),
            BondOrder::Double => Some(BondOrder::Single),
            BondOrder::Unspecified | BondOrder::Single => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub order: BondOrder,
}

impl Bond {
    pub fn new(order: BondOrder) -> Self {
        Self { order }
    }

    pub fn unspecified() -> Self {
        Self::new(BondOrder::Unspecified)
    }
}

impl Default for Bond {
    fn default() -> Self {
        Self::new(BondOrder::Single)
    }
}

impl crate::traits::HasBondOrder for Bond {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}

impl crate::traits::HasBondOrderMut for Bond {
    fn bond_order_mut(&mut self) -> &mut BondOrder {
        &mut self.order
    }
}
