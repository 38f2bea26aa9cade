//! Alternating-path repair for deficits the greedy passes could not pair.
//!
//! Two deficient atoms that are not bonded to each other can still be
//! satisfied together when a path between them alternates raisable and
//! lowerable bonds: raising the odd bonds and lowering the even ones moves
//! a double bond along the path, leaving every interior atom's valence
//! unchanged. This is the augmenting-path step of bipartite matching,
//! applied to bond orders.

use std::collections::VecDeque;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;
use crate::traits::{HasBondOrder, HasBondOrderMut};

use super::ledger::{lower_bond, raise_bond, sorted_bonds, Ledger};

/// Flip alternating paths until no deficient atom can reach another one.
/// Returns the number of paths flipped.
pub(crate) fn repair<A, B>(mol: &mut Mol<A, B>, ledger: &mut Ledger) -> usize
where
    B: HasBondOrder + HasBondOrderMut,
{
    let mut flipped = 0;
    let atoms: Vec<NodeIndex> = mol.atoms().collect();
    for start in atoms {
        while ledger.deficit(start) > 0 {
            let Some(path) = find_path(mol, ledger, start) else {
                break;
            };
            log::debug!(
                "flipping alternating path of {} bonds from atom {}",
                path.len(),
                start.index()
            );
            flip_path(mol, ledger, &path);
            flipped += 1;
        }
    }
    flipped
}

fn find_path<A, B>(mol: &Mol<A, B>, ledger: &Ledger, start: NodeIndex) -> Option<Vec<EdgeIndex>>
where
    B: HasBondOrder,
{
    let n = mol.atom_count();
    let mut prev: Vec<Option<(NodeIndex, EdgeIndex)>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        for (v, e) in sorted_bonds(mol, u) {
            if visited[v.index()] || mol.bond(e).bond_order().raised().is_none() {
                continue;
            }
            visited[v.index()] = true;
            prev[v.index()] = Some((u, e));

            if ledger.deficit(v) > 0 {
                return Some(trace(&prev, start, v));
            }

            for (w, f) in sorted_bonds(mol, v) {
                if f == e || visited[w.index()] || mol.bond(f).bond_order().lowered().is_none() {
                    continue;
                }
                visited[w.index()] = true;
                prev[w.index()] = Some((v, f));
                queue.push_back(w);
            }
        }
    }
    None
}

fn trace(prev: &[Option<(NodeIndex, EdgeIndex)>], start: NodeIndex, end: NodeIndex) -> Vec<EdgeIndex> {
    let mut path = Vec::new();
    let mut cur = end;
    while cur != start {
        let Some((p, e)) = prev[cur.index()] else {
            break;
        };
        path.push(e);
        cur = p;
    }
    path.reverse();
    path
}

fn flip_path<A, B>(mol: &mut Mol<A, B>, ledger: &mut Ledger, path: &[EdgeIndex])
where
    B: HasBondOrder + HasBondOrderMut,
{
    for (i, &edge) in path.iter().enumerate() {
        if i % 2 == 0 {
            raise_bond(mol, ledger, edge);
        } else {
            lower_bond(mol, ledger, edge);
        }
    }
}
