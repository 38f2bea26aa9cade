//! Conversion of MD atom groups into molecular graphs.
//!
//! An [`AtomGroup`] carries what a trajectory library knows about a set of
//! atoms: names, residues, elements, coordinates and, usually, which atoms
//! are bonded. [`convert`] turns it into a [`Mol<MdAtom, Bond>`], guessing
//! bonds from coordinates when the group has none, and by default runs
//! [`infer_bond_orders_and_charges`] on the result.

mod guess;
mod md_atom;
mod record;

use petgraph::graph::NodeIndex;
use thiserror::Error;

use crate::bond::Bond;
use crate::config::{ConfigError, ConvertConfig};
use crate::element::Element;
use crate::infer::{infer_bond_orders_and_charges, InferError, InferReport};
use crate::mol::Mol;

pub use guess::{guess_bonds, GuessedBonds};
pub use md_atom::{format_pdb_name, MdAtom, MdProperties, PdbResidueInfo};
pub use record::{AtomGroup, AtomRecord};

#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("an element is required for every atom; {} atom(s) have none: {}", .atoms.len(), preview(.atoms))]
    MissingElements { atoms: Vec<usize> },
    #[error("atom {atom}: unknown element symbol {symbol:?}")]
    UnknownElement { atom: usize, symbol: String },
    #[error("bond ({}, {}) refers to an atom outside a group of {atoms}", .bond.0, .bond.1)]
    BondOutOfRange { bond: (usize, usize), atoms: usize },
    #[error("bond from atom {atom} to itself")]
    SelfBond { atom: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Infer(#[from] InferError),
}

fn preview(atoms: &[usize]) -> String {
    const SHOWN: usize = 10;
    let shown: Vec<String> = atoms.iter().take(SHOWN).map(|a| a.to_string()).collect();
    if atoms.len() > SHOWN {
        format!("{}, ...", shown.join(", "))
    } else {
        shown.join(", ")
    }
}

/// A converted molecule, with the inference report when inference ran.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    pub mol: Mol<MdAtom, Bond>,
    pub report: Option<InferReport>,
}

/// Build a molecular graph from `group`.
///
/// Atoms keep the group's order and carry no implicit hydrogens. Bonds come
/// from the group when it has any; otherwise they are guessed from
/// coordinates with [`guess_bonds`] and a warning is logged.
///
/// # Errors
///
/// Fails when a record has no element or an unknown one, when a bond points
/// outside the group or joins an atom to itself, when `config` is invalid, or when inference meets an
/// element it has no valence model for.
pub fn convert(group: &AtomGroup, config: &ConvertConfig) -> Result<Converted, ConvertError> {
    config.validate()?;

    let records = group.records();
    let missing: Vec<usize> = records
        .iter()
        .filter(|r| r.element.as_deref().map_or(true, |e| e.trim().is_empty()))
        .map(|r| r.index)
        .collect();
    if !missing.is_empty() {
        return Err(ConvertError::MissingElements { atoms: missing });
    }

    let mut mol = Mol::with_capacity(records.len(), group.bonds().len());
    for record in records {
        let symbol = record.element.as_deref().unwrap_or_default();
        let element = Element::parse(symbol).ok_or_else(|| ConvertError::UnknownElement {
            atom: record.index,
            symbol: symbol.to_string(),
        })?;
        mol.add_atom(MdAtom::from_record(record, element.atomic_num()));
    }

    if group.bonds().is_empty() && records.len() > 1 {
        log::warn!("No bonds in this atom group, guessing bonds from coordinates");
        let guessed = guess_bonds(&mol, config.bond_radius_factor);
        if !guessed.skipped.is_empty() {
            let skipped: Vec<usize> = guessed
                .skipped
                .iter()
                .map(|&idx| mol.atom(idx).props.index)
                .collect();
            log::warn!(
                "no position or van der Waals radius for {} atom(s), no bonds guessed for them: {}",
                skipped.len(),
                preview(&skipped)
            );
        }
        for (a, b) in guessed.bonds {
            mol.add_bond(a, b, Bond::unspecified());
        }
    } else {
        for &(a, b) in group.bonds() {
            if a >= records.len() || b >= records.len() {
                return Err(ConvertError::BondOutOfRange {
                    bond: (a, b),
                    atoms: records.len(),
                });
            }
            if a == b {
                return Err(ConvertError::SelfBond { atom: a });
            }
            mol.add_bond(NodeIndex::new(a), NodeIndex::new(b), Bond::unspecified());
        }
    }
    log::debug!(
        "converted {} atoms and {} bonds",
        mol.atom_count(),
        mol.bond_count()
    );

    let report = if config.infer_bond_orders {
        Some(infer_bond_orders_and_charges(&mut mol, &config.infer)?)
    } else {
        None
    };
    Ok(Converted { mol, report })
}
