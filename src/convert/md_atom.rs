use crate::atom::Atom;
use crate::traits::*;

use super::record::AtomRecord;

/// PDB-style residue information attached to a converted atom.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PdbResidueInfo {
    /// Atom name laid out PDB-style, see [`format_pdb_name`].
    pub name: String,
    pub alt_loc: String,
    pub chain_id: String,
    pub insertion_code: String,
    pub occupancy: f64,
    pub residue_name: String,
    pub residue_number: i32,
    pub segment_number: usize,
    pub temp_factor: f64,
}

impl PdbResidueInfo {
    pub fn from_record(record: &AtomRecord) -> Self {
        Self {
            name: format_pdb_name(&record.name),
            alt_loc: record.alt_loc.clone(),
            chain_id: record.chain_id.clone(),
            insertion_code: record.icode.clone(),
            occupancy: record.occupancy,
            residue_name: record.resname.clone(),
            residue_number: record.resid,
            segment_number: record.segindex,
            temp_factor: record.tempfactor,
        }
    }
}

/// MD bookkeeping with no PDB column of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MdProperties {
    pub charge: f64,
    pub segid: String,
    pub atom_type: String,
    /// Index of the atom in the topology it was selected from.
    pub index: usize,
}

impl MdProperties {
    pub fn from_record(record: &AtomRecord) -> Self {
        Self {
            charge: record.charge,
            segid: record.segid.clone(),
            atom_type: record.atom_type.clone(),
            index: record.index,
        }
    }
}

/// A converted MD atom: the inference-facing [`Atom`] plus residue info,
/// MD properties and coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MdAtom {
    pub inner: Atom,
    pub residue: PdbResidueInfo,
    pub props: MdProperties,
    pub position: Option<[f64; 3]>,
}

impl MdAtom {
    pub fn from_record(record: &AtomRecord, atomic_num: u8) -> Self {
        Self {
            inner: Atom::new(atomic_num),
            residue: PdbResidueInfo::from_record(record),
            props: MdProperties::from_record(record),
            position: record.position,
        }
    }
}

macro_rules! delegate_trait {
    ($trait:ident, $method:ident, $ret:ty) => {
        impl $trait for MdAtom {
            fn $method(&self) -> $ret {
                self.inner.$method()
            }
        }
    };
}

delegate_trait!(HasAtomicNum, atomic_num, u8);
delegate_trait!(HasFormalCharge, formal_charge, i8);
delegate_trait!(HasHydrogenCount, hydrogen_count, u8);

impl HasFormalChargeMut for MdAtom {
    fn formal_charge_mut(&mut self) -> &mut i8 {
        self.inner.formal_charge_mut()
    }
}

impl HasPosition3D for MdAtom {
    fn position_3d(&self) -> Option<[f64; 3]> {
        self.position
    }
}

/// Lay an atom name out over the four PDB name columns, element symbol
/// first so that one-letter elements start in column 14.
///
/// A name made of letters followed by digits is split there: the letters
/// are right-aligned in two columns and the digits left-aligned in two,
/// each truncated to two characters. A one-letter symbol followed by more
/// than two digits cannot be split that way and is kept whole. A name with
/// no digits gets one leading space and no padding; other names are kept
/// whole.
pub fn format_pdb_name(name: &str) -> String {
    let name = name.trim();
    let split = name
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(name.len());
    let (symbol, digits) = name.split_at(split);
    let shaped =
        !symbol.is_empty() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit());

    if shaped {
        if symbol.len() == 1 && digits.len() > 2 {
            return name.to_string();
        }
        let symbol = &symbol[..symbol.len().min(2)];
        let digits = &digits[..digits.len().min(2)];
        return format!("{symbol:>2}{digits:<2}");
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        name.to_string()
    } else {
        format!(" {name}")
    }
}
