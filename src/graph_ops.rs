use petgraph::graph::NodeIndex;

use crate::mol::Mol;

/// Connected components of the bond graph.
///
/// Each fragment lists its atoms in ascending index; fragments are ordered
/// by their lowest atom index.
pub fn fragments<A, B>(mol: &Mol<A, B>) -> Vec<Vec<NodeIndex>> {
    let n = mol.atom_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();
    for node in mol.atoms() {
        if visited[node.index()] {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            if visited[current.index()] {
                continue;
            }
            visited[current.index()] = true;
            component.push(current);
            for neighbor in mol.neighbors(current) {
                if !visited[neighbor.index()] {
                    stack.push(neighbor);
                }
            }
        }
        component.sort();
        components.push(component);
    }
    components
}

pub fn num_fragments<A, B>(mol: &Mol<A, B>) -> usize {
    fragments(mol).len()
}

/// Copy each fragment into a molecule of its own, atoms renumbered from
/// zero in their original relative order.
pub fn split_fragments<A: Clone, B: Clone>(mol: &Mol<A, B>) -> Vec<Mol<A, B>> {
    let components = fragments(mol);
    let mut index_map = vec![NodeIndex::new(0); mol.atom_count()];
    let mut split = Vec::with_capacity(components.len());
    for component in &components {
        let mut frag = Mol::with_capacity(component.len(), component.len());
        for &old_idx in component {
            index_map[old_idx.index()] = frag.add_atom(mol.atom(old_idx).clone());
        }
        for &old_idx in component {
            for edge in mol.bonds_of(old_idx) {
                if let Some((a, b)) = mol.ordered_endpoints(edge) {
                    if a == old_idx {
                        frag.add_bond(
                            index_map[a.index()],
                            index_map[b.index()],
                            mol.bond(edge).clone(),
                        );
                    }
                }
            }
        }
        split.push(frag);
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::{Bond, BondOrder};

    fn n(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    /// Methanol (0-1), a sodium ion (2) and water (3-5), interleaved order.
    fn mixture() -> Mol<Atom, Bond> {
        let mut mol = Mol::new();
        mol.add_atom(Atom::with_hydrogens(6, 3));
        mol.add_atom(Atom::with_hydrogens(8, 1));
        mol.add_atom(Atom::new(11));
        mol.add_atom(Atom::new(8));
        mol.add_atom(Atom::new(1));
        mol.add_atom(Atom::new(1));
        mol.add_bond(n(0), n(1), Bond::default());
        mol.add_bond(n(4), n(3), Bond::default());
        mol.add_bond(n(3), n(5), Bond::new(BondOrder::Single));
        mol
    }

    #[test]
    fn fragments_sorted() {
        let mol = mixture();
        assert_eq!(
            fragments(&mol),
            vec![vec![n(0), n(1)], vec![n(2)], vec![n(3), n(4), n(5)]]
        );
        assert_eq!(num_fragments(&mol), 3);
    }

    #[test]
    fn empty_molecule_has_no_fragments() {
        let mol: Mol<Atom, Bond> = Mol::new();
        assert!(fragments(&mol).is_empty());
    }

    #[test]
    fn split_renumbers() {
        let parts = split_fragments(&mixture());
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].atom_count(), 2);
        assert_eq!(parts[0].bond_count(), 1);
        assert_eq!(parts[1].atom_count(), 1);
        assert_eq!(parts[1].atom(n(0)).atomic_num, 11);

        let water = &parts[2];
        assert_eq!(water.atom_count(), 3);
        assert_eq!(water.bond_count(), 2);
        assert_eq!(water.atom(n(0)).atomic_num, 8);
        assert!(water.bond_between(n(0), n(1)).is_some());
        assert!(water.bond_between(n(0), n(2)).is_some());
        assert!(water.bond_between(n(1), n(2)).is_none());
    }
}
