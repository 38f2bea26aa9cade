use petgraph::graph::NodeIndex;

use crate::element::Element;
use crate::mol::Mol;
use crate::traits::{HasAtomicNum, HasPosition3D};

/// Atom pairs close enough to be bonded, and the atoms that could not be
/// considered at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuessedBonds {
    /// Pairs `(a, b)` with `a < b`, in ascending order.
    pub bonds: Vec<(NodeIndex, NodeIndex)>,
    /// Atoms without coordinates or without a van der Waals radius.
    pub skipped: Vec<NodeIndex>,
}

/// Find atom pairs closer than the sum of their van der Waals radii times
/// `radius_factor`.
///
/// Atoms lacking a position or a radius are reported in
/// [`GuessedBonds::skipped`] and get no bonds. Existing bonds of `mol` are
/// ignored.
pub fn guess_bonds<A, B>(mol: &Mol<A, B>, radius_factor: f64) -> GuessedBonds
where
    A: HasAtomicNum + HasPosition3D,
{
    let mut skipped = Vec::new();
    let candidates: Vec<(NodeIndex, [f64; 3], f64)> = mol
        .atoms()
        .filter_map(|idx| {
            let atom = mol.atom(idx);
            let radius = Element::from_atomic_num(atom.atomic_num()).and_then(Element::vdw_radius);
            match (atom.position_3d(), radius) {
                (Some(pos), Some(r)) => Some((idx, pos, r)),
                _ => {
                    skipped.push(idx);
                    None
                }
            }
        })
        .collect();

    let mut bonds = Vec::new();
    for (i, &(a, pos_a, r_a)) in candidates.iter().enumerate() {
        for &(b, pos_b, r_b) in &candidates[i + 1..] {
            let limit = (r_a + r_b) * radius_factor;
            if distance(pos_a, pos_b) < limit {
                bonds.push((a, b));
            }
        }
    }

    GuessedBonds { bonds, skipped }
}

fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::record::AtomRecord;
    use crate::convert::MdAtom;
    use crate::bond::Bond;

    fn md_atom(z: u8, symbol: &str, pos: Option<[f64; 3]>) -> MdAtom {
        let mut record = AtomRecord::new(0, symbol, symbol);
        record.position = pos;
        MdAtom::from_record(&record, z)
    }

    #[test]
    fn water_geometry() {
        let mut mol: Mol<MdAtom, Bond> = Mol::new();
        mol.add_atom(md_atom(8, "O", Some([0.0, 0.0, 0.0])));
        mol.add_atom(md_atom(1, "H", Some([0.957, 0.0, 0.0])));
        mol.add_atom(md_atom(1, "H", Some([-0.24, 0.927, 0.0])));
        let guessed = guess_bonds(&mol, 0.55);
        let n = NodeIndex::new;
        // H-H is about 1.51 A apart, beyond (1.10 + 1.10) * 0.55
        assert_eq!(guessed.bonds, vec![(n(0), n(1)), (n(0), n(2))]);
        assert!(guessed.skipped.is_empty());
    }

    #[test]
    fn atoms_without_position_or_radius_are_skipped() {
        let mut mol: Mol<MdAtom, Bond> = Mol::new();
        mol.add_atom(md_atom(6, "C", Some([0.0, 0.0, 0.0])));
        mol.add_atom(md_atom(6, "C", None));
        mol.add_atom(md_atom(26, "Fe", Some([0.5, 0.0, 0.0])));
        mol.add_atom(md_atom(6, "C", Some([1.5, 0.0, 0.0])));
        let guessed = guess_bonds(&mol, 0.55);
        let n = NodeIndex::new;
        assert_eq!(guessed.bonds, vec![(n(0), n(3))]);
        assert_eq!(guessed.skipped, vec![n(1), n(2)]);
    }

    #[test]
    fn distant_atoms_unbonded() {
        let mut mol: Mol<MdAtom, Bond> = Mol::new();
        mol.add_atom(md_atom(11, "Na", Some([0.0, 0.0, 0.0])));
        mol.add_atom(md_atom(17, "Cl", Some([5.0, 0.0, 0.0])));
        assert!(guess_bonds(&mol, 0.55).bonds.is_empty());
    }
}
