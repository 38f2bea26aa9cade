use crate::bond::BondOrder;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    fn formal_charge(&self) -> i8;
}

pub trait HasFormalChargeMut {
    fn formal_charge_mut(&mut self) -> &mut i8;
}

pub trait HasHydrogenCount {
    fn hydrogen_count(&self) -> u8;
}

pub trait HasPosition3D {
    fn position_3d(&self) -> Option<[f64; 3]>;
}

pub trait HasBondOrder {
    fn bond_order(&self) -> BondOrder;
}

pub trait HasBondOrderMut {
    fn bond_order_mut(&mut self) -> &mut BondOrder;
}
