//! Bond-order and formal-charge inference.
//!
//! Topologies coming from molecular dynamics know which atoms are bonded
//! but not how: every bond is single or unspecified and every formal charge
//! is zero. [`infer_bond_orders_and_charges`] turns such a graph into one
//! where each atom sits on an allowed valence for its element:
//!
//! 1. bonds between two atoms that both lack bonding capacity are raised,
//!    one order per pass, tightest bonds first, until a fixed point;
//! 2. leftover deficient atoms that are not bonded to each other are paired
//!    along alternating paths;
//! 3. atoms with higher allowed valences (S, P) absorb remaining deficits
//!    from their neighbours;
//! 4. remaining deficient atoms take a bond from a neutral amine-type
//!    neighbour, which becomes cationic;
//! 5. whatever is still off-valence is charged from a per-element rule table
//!    (see [`rules`]), or reported in [`InferReport::unresolved`].
//!
//! The result depends only on the graph and its atom order: running the
//! inference on identical inputs gives identical bond orders and charges,
//! and running it again on its own output changes nothing.

mod charge;
mod ledger;
mod repair;
pub mod rules;
mod saturate;

use petgraph::graph::NodeIndex;
use thiserror::Error;

use crate::bond::BondOrder;
use crate::config::InferConfig;
use crate::element::Element;
use crate::mol::Mol;
use crate::traits::{
    HasAtomicNum, HasBondOrder, HasBondOrderMut, HasFormalCharge, HasFormalChargeMut,
    HasHydrogenCount,
};

use ledger::Ledger;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferError {
    #[error("atom {}: no valence model for atomic number {atomic_num}", .atom.index())]
    UnsupportedElement { atom: NodeIndex, atomic_num: u8 },
}

/// An atom inference could not bring to an allowed valence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedAtom {
    pub atom: NodeIndex,
    pub element: Element,
    pub valence: u8,
    pub formal_charge: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InferReport {
    /// Saturation passes run, including the final pass that changed nothing.
    pub passes: usize,
    /// `false` when `max_passes` ran out while bonds could still be raised.
    pub converged: bool,
    /// Single-order increments made by the saturation passes.
    pub raised_bonds: usize,
    /// Alternating paths flipped during repair.
    pub repaired_paths: usize,
    /// Bonds added to hypervalent atoms.
    pub expanded_bonds: usize,
    /// Atoms given a formal charge, in the order they were charged.
    pub charged_atoms: Vec<NodeIndex>,
    /// Atoms left off-valence, in ascending index.
    pub unresolved: Vec<UnresolvedAtom>,
}

impl InferReport {
    pub fn is_resolved(&self) -> bool {
        self.converged && self.unresolved.is_empty()
    }
}

/// Assign bond orders and formal charges in place.
///
/// Fails only when an atom's element has no valence model (transition
/// metals, atomic numbers outside the element table); the
/// molecule is left untouched in that case. Atoms that cannot be resolved
/// are listed in the report and keep their best-effort state.
pub fn infer_bond_orders_and_charges<A, B>(
    mol: &mut Mol<A, B>,
    config: &InferConfig,
) -> Result<InferReport, InferError>
where
    A: HasAtomicNum + HasFormalCharge + HasFormalChargeMut + HasHydrogenCount,
    B: HasBondOrder + HasBondOrderMut,
{
    let mut ledger = Ledger::new(mol)?;

    let saturation = saturate::saturate(mol, &mut ledger, config.max_passes.max(1));
    let repaired_paths = if config.repair {
        repair::repair(mol, &mut ledger)
    } else {
        0
    };
    let expanded_bonds = charge::expand_hypervalent(mol, &mut ledger);
    let mut charged_atoms = charge::donate(mol, &mut ledger);
    let (charged, unresolved) = charge::assign_charges(mol, &mut ledger);
    charged_atoms.extend(charged);

    let bonds: Vec<_> = mol.bonds().collect();
    for edge in bonds {
        let order = mol.bond_mut(edge).bond_order_mut();
        if *order == BondOrder::Unspecified {
            *order = BondOrder::Single;
        }
    }

    if !saturation.converged {
        log::warn!(
            "bond-order inference stopped after {} passes without reaching a fixed point",
            saturation.passes
        );
    }
    if !unresolved.is_empty() {
        let atoms: Vec<usize> = unresolved.iter().map(|u| u.atom.index()).collect();
        log::warn!(
            "{} atom(s) left with unresolved valence after bond-order inference: {atoms:?}",
            unresolved.len()
        );
    }

    Ok(InferReport {
        passes: saturation.passes,
        converged: saturation.converged,
        raised_bonds: saturation.raised,
        repaired_paths,
        expanded_bonds,
        charged_atoms,
        unresolved,
    })
}
