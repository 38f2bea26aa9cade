use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;
use crate::traits::{HasBondOrder, HasBondOrderMut};

use super::ledger::{raise_bond, Ledger};

pub(crate) struct Saturation {
    pub passes: usize,
    pub raised: usize,
    pub converged: bool,
}

/// Raise bonds between deficient atoms until a pass changes nothing or
/// `max_passes` is spent.
///
/// Each pass orders its candidate bonds by tightness (the smaller number of
/// candidate bonds at either endpoint), then by the terminal atom they would
/// close, then by endpoint indices. A bond is raised by a single order while
/// both endpoints are still deficient, and an atom gains at most one order
/// per pass.
pub(crate) fn saturate<A, B>(mol: &mut Mol<A, B>, ledger: &mut Ledger, max_passes: usize) -> Saturation
where
    B: HasBondOrder + HasBondOrderMut,
{
    let mut raised = 0usize;
    for pass in 1..=max_passes {
        let mut touched = vec![false; mol.atom_count()];
        let mut changed = false;
        for (edge, a, b) in candidate_bonds(mol, ledger) {
            if touched[a.index()] || touched[b.index()] {
                continue;
            }
            if ledger.deficit(a) == 0 || ledger.deficit(b) == 0 {
                continue;
            }
            if raise_bond(mol, ledger, edge) {
                touched[a.index()] = true;
                touched[b.index()] = true;
                raised += 1;
                changed = true;
            }
        }
        log::debug!("saturation pass {pass}: {raised} bond order increments so far");
        if !changed {
            return Saturation {
                passes: pass,
                raised,
                converged: true,
            };
        }
    }
    Saturation {
        passes: max_passes,
        raised,
        converged: candidate_bonds(mol, ledger).is_empty(),
    }
}

type CandidateKey = (usize, u8, usize, usize, usize);

fn candidate_bonds<A, B>(mol: &Mol<A, B>, ledger: &Ledger) -> Vec<(EdgeIndex, NodeIndex, NodeIndex)>
where
    B: HasBondOrder,
{
    let open: Vec<(EdgeIndex, NodeIndex, NodeIndex)> = mol
        .bonds()
        .filter_map(|e| {
            let (a, b) = mol.ordered_endpoints(e)?;
            let raisable = a != b
                && mol.bond(e).bond_order().raised().is_some()
                && ledger.deficit(a) > 0
                && ledger.deficit(b) > 0;
            raisable.then_some((e, a, b))
        })
        .collect();

    let mut choices = vec![0usize; mol.atom_count()];
    for &(_, a, b) in &open {
        choices[a.index()] += 1;
        choices[b.index()] += 1;
    }

    // outer electrons of a degree-1 endpoint; a shortfall left on a
    // terminal atom is charged, so the more electronegative one keeps it
    let terminal = |atom: NodeIndex| {
        if mol.degree(atom) == 1 {
            ledger.element(atom).outer_shell_electrons()
        } else {
            0
        }
    };

    let mut keyed: Vec<(CandidateKey, (EdgeIndex, NodeIndex, NodeIndex))> = open
        .into_iter()
        .map(|(e, a, b)| {
            let tightness = choices[a.index()].min(choices[b.index()]);
            let closes = terminal(a).max(terminal(b));
            ((tightness, closes, a.index(), b.index(), e.index()), (e, a, b))
        })
        .collect();
    keyed.sort_unstable_by_key(|&(key, _)| key);
    keyed.into_iter().map(|(_, bond)| bond).collect()
}
