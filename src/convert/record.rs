use serde::{Deserialize, Serialize};

/// One atom of an MD topology, as a trajectory library exposes it.
///
/// Only `element` is required for conversion; every other field is copied
/// onto the converted atom untouched. Missing fields deserialize to empty
/// strings and zeros.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomRecord {
    /// Index of the atom in the full topology, kept through selections.
    pub index: usize,
    pub name: String,
    #[serde(rename = "type")]
    pub atom_type: String,
    pub element: Option<String>,
    pub resname: String,
    pub resid: i32,
    pub chain_id: String,
    pub segid: String,
    pub segindex: usize,
    pub alt_loc: String,
    pub icode: String,
    pub occupancy: f64,
    pub tempfactor: f64,
    /// Partial charge from the force field, not a formal charge.
    pub charge: f64,
    pub position: Option<[f64; 3]>,
}

impl AtomRecord {
    pub fn new(index: usize, name: &str, element: &str) -> Self {
        Self {
            index,
            name: name.to_string(),
            element: Some(element.to_string()),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: [f64; 3]) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_residue(mut self, resname: &str, resid: i32) -> Self {
        self.resname = resname.to_string();
        self.resid = resid;
        self
    }
}

/// An ordered set of atom records and the bonds between them.
///
/// Bonds refer to positions in `records`, not to [`AtomRecord::index`].
/// A group without bonds has its bonds guessed from coordinates on
/// conversion.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomGroup {
    records: Vec<AtomRecord>,
    bonds: Vec<(usize, usize)>,
}

impl AtomGroup {
    pub fn new(records: Vec<AtomRecord>, bonds: Vec<(usize, usize)>) -> Self {
        Self { records, bonds }
    }

    pub fn records(&self) -> &[AtomRecord] {
        &self.records
    }

    pub fn bonds(&self) -> &[(usize, usize)] {
        &self.bonds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep the records matching `predicate`, in order, together with the
    /// bonds whose two ends are both kept.
    pub fn select<F>(&self, predicate: F) -> AtomGroup
    where
        F: Fn(&AtomRecord) -> bool,
    {
        let mut position_map = vec![None; self.records.len()];
        let mut records = Vec::new();
        for (pos, record) in self.records.iter().enumerate() {
            if predicate(record) {
                position_map[pos] = Some(records.len());
                records.push(record.clone());
            }
        }
        let bonds = self
            .bonds
            .iter()
            .filter_map(|&(a, b)| {
                let a = (*position_map.get(a)?)?;
                let b = (*position_map.get(b)?)?;
                Some((a, b))
            })
            .collect();
        AtomGroup { records, bonds }
    }
}
