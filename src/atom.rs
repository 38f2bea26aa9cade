/// Default atom type for a molecular graph node.
///
/// `Atom` stores the properties bond-order inference reads and writes.
/// [`MdAtom`](crate::convert::MdAtom) wraps an `Atom` together with residue
/// names and coordinates.
///
/// # Examples
///
/// ```
/// use bondcrab::Atom;
///
/// let oxygen = Atom {
///     atomic_num: 8,
///     formal_charge: 0,
///     hydrogen_count: 1,
/// };
/// assert_eq!(oxygen.atomic_num, 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units (e.g. −1 for a carboxylate oxygen).
    pub formal_charge: i8,
    /// Number of hydrogens implied on this atom rather than present as graph
    /// nodes. Counts toward valence exactly like single bonds.
    pub hydrogen_count: u8,
}

impl Atom {
    pub fn new(atomic_num: u8) -> Self {
        Self {
            atomic_num,
            ..Self::default()
        }
    }

    pub fn with_hydrogens(atomic_num: u8, hydrogen_count: u8) -> Self {
        Self {
            atomic_num,
            hydrogen_count,
            ..Self::default()
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasFormalChargeMut for Atom {
    fn formal_charge_mut(&mut self) -> &mut i8 {
        &mut self.formal_charge
    }
}

impl crate::traits::HasHydrogenCount for Atom {
    fn hydrogen_count(&self) -> u8 {
        self.hydrogen_count
    }
}
