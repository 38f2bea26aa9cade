use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Mol;
use crate::traits::{HasBondOrder, HasBondOrderMut, HasFormalChargeMut};

use super::ledger::{raise_bond, sorted_bonds, Ledger};
use super::rules::{charge_rule, propose_charge};
use super::UnresolvedAtom;

/// Let satisfied atoms with higher allowed valences (S, P, Se, ...) take
/// extra bonds from deficient neighbours, e.g. the two S=O of a sulfonate.
///
/// An atom only expands when enough deficient neighbours exist to land it
/// exactly on its next allowed valence.
pub(crate) fn expand_hypervalent<A, B>(mol: &mut Mol<A, B>, ledger: &mut Ledger) -> usize
where
    B: HasBondOrder + HasBondOrderMut,
{
    let mut raised = 0;
    let atoms: Vec<NodeIndex> = mol.atoms().collect();
    for hub in atoms {
        while ledger.is_satisfied(hub) {
            let Some(next) = ledger.next_valence(hub) else {
                break;
            };
            let needed = usize::from(next - ledger.valence(hub));
            let partners: Vec<EdgeIndex> = sorted_bonds(mol, hub)
                .into_iter()
                .filter(|&(other, e)| {
                    ledger.deficit(other) > 0 && mol.bond(e).bond_order().raised().is_some()
                })
                .map(|(_, e)| e)
                .take(needed)
                .collect();
            if partners.len() < needed {
                break;
            }
            for edge in partners {
                raise_bond(mol, ledger, edge);
                raised += 1;
            }
        }
    }
    raised
}

/// Give each still-deficient atom a bond from a neutral donor neighbour,
/// which becomes positively charged (C=N+ in amidinium and guanidinium,
/// N+=O in nitro). Returns the donors.
pub(crate) fn donate<A, B>(mol: &mut Mol<A, B>, ledger: &mut Ledger) -> Vec<NodeIndex>
where
    A: HasFormalChargeMut,
    B: HasBondOrder + HasBondOrderMut,
{
    let mut donors = Vec::new();
    let atoms: Vec<NodeIndex> = mol.atoms().collect();
    for acceptor in atoms {
        while ledger.deficit(acceptor) > 0 {
            let donor = sorted_bonds(mol, acceptor).into_iter().find(|&(d, e)| {
                let elem = ledger.element(d);
                charge_rule(elem).donates
                    && ledger.charge(d) == 0
                    && elem.primary_valence() == Some(ledger.valence(d))
                    && elem.charged_valences(1).contains(&(ledger.valence(d) + 1))
                    && mol.bond(e).bond_order().raised().is_some()
            });
            let Some((d, e)) = donor else {
                break;
            };
            raise_bond(mol, ledger, e);
            ledger.set_charge(d, 1);
            *mol.atom_mut(d).formal_charge_mut() = 1;
            log::debug!(
                "atom {} donates a bond to atom {} and becomes cationic",
                d.index(),
                acceptor.index()
            );
            donors.push(d);
        }
    }
    donors
}

/// Charge every atom that is still off an allowed valence, following the
/// per-element rule table. Atoms the table cannot close are returned
/// untouched.
pub(crate) fn assign_charges<A, B>(
    mol: &mut Mol<A, B>,
    ledger: &mut Ledger,
) -> (Vec<NodeIndex>, Vec<UnresolvedAtom>)
where
    A: HasFormalChargeMut,
{
    let mut charged = Vec::new();
    let mut unresolved = Vec::new();
    let atoms: Vec<NodeIndex> = mol.atoms().collect();
    for atom in atoms {
        if ledger.is_satisfied(atom) {
            continue;
        }
        let elem = ledger.element(atom);
        let valence = ledger.valence(atom);
        match propose_charge(elem, valence) {
            Some(charge) if elem.charged_valences(charge).contains(&valence) => {
                ledger.set_charge(atom, charge);
                *mol.atom_mut(atom).formal_charge_mut() = charge;
                log::debug!("atom {} ({elem}) charged {charge:+}", atom.index());
                charged.push(atom);
            }
            _ => unresolved.push(UnresolvedAtom {
                atom,
                element: elem,
                valence,
                formal_charge: ledger.charge(atom),
            }),
        }
    }
    (charged, unresolved)
}
