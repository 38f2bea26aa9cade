use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::element::Element;
use crate::mol::Mol;
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasBondOrderMut, HasFormalCharge, HasHydrogenCount,
};
use crate::valence::total_valence;

use super::InferError;

/// Per-atom element, formal charge and current valence, kept in step with
/// the bond orders of the molecule being inferred.
pub(crate) struct Ledger {
    elements: Vec<Element>,
    charges: Vec<i8>,
    valences: Vec<u8>,
}

impl Ledger {
    pub(crate) fn new<A, B>(mol: &Mol<A, B>) -> Result<Self, InferError>
    where
        A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
        B: HasBondOrder,
    {
        let n = mol.atom_count();
        let mut elements = Vec::with_capacity(n);
        let mut charges = Vec::with_capacity(n);
        let mut valences = Vec::with_capacity(n);
        for idx in mol.atoms() {
            let atom = mol.atom(idx);
            let elem = Element::from_atomic_num(atom.atomic_num())
                .filter(|e| !e.default_valences().is_empty())
                .ok_or(InferError::UnsupportedElement {
                    atom: idx,
                    atomic_num: atom.atomic_num(),
                })?;
            elements.push(elem);
            charges.push(atom.formal_charge());
            valences.push(total_valence(mol, idx));
        }
        Ok(Self {
            elements,
            charges,
            valences,
        })
    }

    pub(crate) fn element(&self, atom: NodeIndex) -> Element {
        self.elements[atom.index()]
    }

    pub(crate) fn charge(&self, atom: NodeIndex) -> i8 {
        self.charges[atom.index()]
    }

    pub(crate) fn set_charge(&mut self, atom: NodeIndex, charge: i8) {
        self.charges[atom.index()] = charge;
    }

    pub(crate) fn valence(&self, atom: NodeIndex) -> u8 {
        self.valences[atom.index()]
    }

    pub(crate) fn allowed(&self, atom: NodeIndex) -> Vec<u8> {
        self.element(atom).charged_valences(self.charge(atom))
    }

    pub(crate) fn is_satisfied(&self, atom: NodeIndex) -> bool {
        self.allowed(atom).contains(&self.valence(atom))
    }

    /// Bonding capacity still missing to reach the nearest allowed valence
    /// at or above the current one. Zero for satisfied and over-valent atoms.
    pub(crate) fn deficit(&self, atom: NodeIndex) -> u8 {
        let v = self.valence(atom);
        self.allowed(atom)
            .into_iter()
            .find(|&allowed| allowed >= v)
            .map_or(0, |allowed| allowed - v)
    }

    /// The next allowed valence strictly above the current one.
    pub(crate) fn next_valence(&self, atom: NodeIndex) -> Option<u8> {
        let v = self.valence(atom);
        self.allowed(atom).into_iter().find(|&allowed| allowed > v)
    }

    fn shift(&mut self, atom: NodeIndex, up: bool) {
        let v = &mut self.valences[atom.index()];
        *v = if up { v.saturating_add(1) } else { v.saturating_sub(1) };
    }
}

/// Raise `edge` by one order and update both endpoints. Returns `false`
/// (leaving everything untouched) for a triple bond.
pub(crate) fn raise_bond<A, B>(mol: &mut Mol<A, B>, ledger: &mut Ledger, edge: EdgeIndex) -> bool
where
    B: HasBondOrder + HasBondOrderMut,
{
    let Some((a, b)) = mol.bond_endpoints(edge) else {
        return false;
    };
    let Some(order) = mol.bond(edge).bond_order().raised() else {
        return false;
    };
    *mol.bond_mut(edge).bond_order_mut() = order;
    ledger.shift(a, true);
    ledger.shift(b, true);
    true
}

/// Lower `edge` by one order. Returns `false` for a single bond.
pub(crate) fn lower_bond<A, B>(mol: &mut Mol<A, B>, ledger: &mut Ledger, edge: EdgeIndex) -> bool
where
    B: HasBondOrder + HasBondOrderMut,
{
    let Some((a, b)) = mol.bond_endpoints(edge) else {
        return false;
    };
    let Some(order) = mol.bond(edge).bond_order().lowered() else {
        return false;
    };
    *mol.bond_mut(edge).bond_order_mut() = order;
    ledger.shift(a, false);
    ledger.shift(b, false);
    true
}

/// Bonds of `atom` paired with the neighbour they lead to, in ascending
/// neighbour index. Self-loops are skipped.
pub(crate) fn sorted_bonds<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> Vec<(NodeIndex, EdgeIndex)> {
    let mut bonds: Vec<(NodeIndex, EdgeIndex)> = mol
        .bonds_of(atom)
        .filter_map(|e| Some((mol.other_atom(e, atom)?, e)))
        .filter(|&(other, _)| other != atom)
        .collect();
    bonds.sort_by_key(|&(other, e)| (other.index(), e.index()));
    bonds
}
