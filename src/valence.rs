use petgraph::graph::NodeIndex;
use thiserror::Error;

use crate::element::Element;
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "atom {} ({element}, charge {charge}): valence {actual_valence} not in {allowed_valences:?}",
    .atom_idx.index()
)]
pub struct ValenceError {
    pub atom_idx: NodeIndex,
    pub element: Element,
    pub charge: i8,
    pub actual_valence: u8,
    pub allowed_valences: Vec<u8>,
}

pub fn bond_order_sum<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> u8
where
    B: HasBondOrder,
{
    mol.bonds_of(atom)
        .map(|ei| mol.bond(ei).bond_order().valence())
        .fold(0u8, u8::saturating_add)
}

pub fn total_valence<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> u8
where
    A: HasHydrogenCount,
    B: HasBondOrder,
{
    bond_order_sum(mol, atom).saturating_add(mol.atom(atom).hydrogen_count())
}

/// Whether `atom` currently sits on an allowed valence for its element and
/// formal charge. Atoms without valence data count as satisfied.
pub fn has_allowed_valence<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> bool
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
{
    let a = mol.atom(atom);
    let Some(elem) = Element::from_atomic_num(a.atomic_num()) else {
        return true;
    };
    if elem.default_valences().is_empty() {
        return true;
    }
    elem.charged_valences(a.formal_charge())
        .contains(&total_valence(mol, atom))
}

/// Check every atom against the charge-adjusted valences of its element.
///
/// Atoms whose element has no valence model (transition metals, unknown
/// atomic numbers) are skipped.
pub fn check_valence<A, B>(mol: &Mol<A, B>) -> Result<(), Vec<ValenceError>>
where
    A: HasAtomicNum + HasFormalCharge + HasHydrogenCount,
    B: HasBondOrder,
{
    let errors: Vec<ValenceError> = mol
        .atoms()
        .filter_map(|idx| {
            let atom = mol.atom(idx);
            let elem = Element::from_atomic_num(atom.atomic_num())?;
            if elem.default_valences().is_empty() {
                return None;
            }
            let allowed = elem.charged_valences(atom.formal_charge());
            let v = total_valence(mol, idx);
            if allowed.contains(&v) {
                return None;
            }
            Some(ValenceError {
                atom_idx: idx,
                element: elem,
                charge: atom.formal_charge(),
                actual_valence: v,
                allowed_valences: allowed,
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::{Bond, BondOrder};

    #[test]
    fn methane_valid() {
        let mut mol = Mol::<Atom, Bond>::new();
        mol.add_atom(Atom::with_hydrogens(6, 4));
        assert!(check_valence(&mol).is_ok());
    }

    #[test]
    fn ethene_total_valence() {
        let mut mol = Mol::<Atom, Bond>::new();
        let a = mol.add_atom(Atom::with_hydrogens(6, 2));
        let b = mol.add_atom(Atom::with_hydrogens(6, 2));
        mol.add_bond(a, b, Bond::new(BondOrder::Double));
        for idx in mol.atoms() {
            assert_eq!(total_valence(&mol, idx), 4);
        }
        assert!(check_valence(&mol).is_ok());
    }

    #[test]
    fn unspecified_bond_counts_as_single() {
        let mut mol = Mol::<Atom, Bond>::new();
        let c = mol.add_atom(Atom::with_hydrogens(6, 3));
        let o = mol.add_atom(Atom::with_hydrogens(8, 1));
        mol.add_bond(c, o, Bond::unspecified());
        assert_eq!(bond_order_sum(&mol, c), 1);
        assert!(check_valence(&mol).is_ok());
    }

    #[test]
    fn pentavalent_carbon_invalid() {
        let mut mol = Mol::<Atom, Bond>::new();
        let c = mol.add_atom(Atom::with_hydrogens(6, 5));
        let errs = check_valence(&mol).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].atom_idx, c);
        assert_eq!(errs[0].actual_valence, 5);
        assert_eq!(errs[0].allowed_valences, vec![4]);
    }

    #[test]
    fn ammonium_valid_with_charge() {
        let mut mol = Mol::<Atom, Bond>::new();
        let n = mol.add_atom(Atom {
            atomic_num: 7,
            formal_charge: 1,
            hydrogen_count: 4,
        });
        assert!(check_valence(&mol).is_ok());
        assert!(has_allowed_valence(&mol, n));
    }

    #[test]
    fn neutral_ammonium_invalid() {
        let mut mol = Mol::<Atom, Bond>::new();
        mol.add_atom(Atom::with_hydrogens(7, 4));
        assert!(check_valence(&mol).is_err());
    }

    #[test]
    fn metal_skipped() {
        let mut mol = Mol::<Atom, Bond>::new();
        mol.add_atom(Atom {
            atomic_num: 26,
            formal_charge: 2,
            hydrogen_count: 0,
        });
        assert!(check_valence(&mol).is_ok());
    }

    #[test]
    fn sulfur_hexafluoride_valid() {
        let mut mol = Mol::<Atom, Bond>::new();
        let s = mol.add_atom(Atom::new(16));
        for _ in 0..6 {
            let f = mol.add_atom(Atom::new(9));
            mol.add_bond(s, f, Bond::default());
        }
        assert!(check_valence(&mol).is_ok());
    }

    #[test]
    fn error_display() {
        let err = ValenceError {
            atom_idx: NodeIndex::new(3),
            element: Element::N,
            charge: 0,
            actual_valence: 4,
            allowed_valences: vec![3],
        };
        assert_eq!(err.to_string(), "atom 3 (N, charge 0): valence 4 not in [3]");
    }
}
