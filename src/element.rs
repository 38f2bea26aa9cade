//! Element data needed for valence accounting and bond guessing.
//!
//! The table covers hydrogen through xenon. Heavier elements do not occur in
//! the organic/biomolecular systems this crate converts; symbols outside the
//! table are rejected by [`Element::parse`].

use std::fmt;

struct ElementData {
    symbol: &'static str,
    outer_electrons: u8,
    valences: &'static [u8],
    vdw_radius: Option<f64>,
}

const fn data(
    symbol: &'static str,
    outer_electrons: u8,
    valences: &'static [u8],
    vdw_radius: Option<f64>,
) -> ElementData {
    ElementData {
        symbol,
        outer_electrons,
        valences,
        vdw_radius,
    }
}

#[rustfmt::skip]
static ELEMENTS: [ElementData; 54] = [
    data("H",  1,  &[1],       Some(1.10)),
    data("He", 2,  &[0],       Some(1.40)),
    data("Li", 1,  &[1],       Some(1.82)),
    data("Be", 2,  &[2],       Some(1.53)),
    data("B",  3,  &[3],       Some(1.92)),
    data("C",  4,  &[4],       Some(1.70)),
    data("N",  5,  &[3],       Some(1.55)),
    data("O",  6,  &[2],       Some(1.52)),
    data("F",  7,  &[1],       Some(1.47)),
    data("Ne", 8,  &[0],       Some(1.54)),
    data("Na", 1,  &[1],       Some(2.27)),
    data("Mg", 2,  &[2],       Some(1.73)),
    data("Al", 3,  &[3],       Some(1.84)),
    data("Si", 4,  &[4],       Some(2.10)),
    data("P",  5,  &[3, 5],    Some(1.80)),
    data("S",  6,  &[2, 4, 6], Some(1.80)),
    data("Cl", 7,  &[1],       Some(1.75)),
    data("Ar", 8,  &[0],       Some(1.88)),
    data("K",  1,  &[1],       Some(2.75)),
    data("Ca", 2,  &[2],       Some(2.31)),
    data("Sc", 3,  &[],        None),
    data("Ti", 4,  &[],        None),
    data("V",  5,  &[],        None),
    data("Cr", 6,  &[],        None),
    data("Mn", 7,  &[],        None),
    data("Fe", 8,  &[],        None),
    data("Co", 9,  &[],        None),
    data("Ni", 10, &[],        Some(1.63)),
    data("Cu", 11, &[],        Some(1.40)),
    data("Zn", 12, &[],        Some(1.39)),
    data("Ga", 3,  &[3],       Some(1.87)),
    data("Ge", 4,  &[4],       Some(2.11)),
    data("As", 5,  &[3, 5],    Some(1.85)),
    data("Se", 6,  &[2, 4, 6], Some(1.90)),
    data("Br", 7,  &[1],       Some(1.85)),
    data("Kr", 8,  &[0],       Some(2.02)),
    data("Rb", 1,  &[1],       Some(3.03)),
    data("Sr", 2,  &[2],       Some(2.49)),
    data("Y",  3,  &[],        None),
    data("Zr", 4,  &[],        None),
    data("Nb", 5,  &[],        None),
    data("Mo", 6,  &[],        None),
    data("Tc", 7,  &[],        None),
    data("Ru", 8,  &[],        None),
    data("Rh", 9,  &[],        None),
    data("Pd", 10, &[],        Some(1.63)),
    data("Ag", 11, &[],        Some(1.72)),
    data("Cd", 12, &[],        Some(1.58)),
    data("In", 3,  &[3],       Some(1.93)),
    data("Sn", 4,  &[2, 4],    Some(2.17)),
    data("Sb", 5,  &[3, 5],    Some(2.06)),
    data("Te", 6,  &[2, 4, 6], Some(2.06)),
    data("I",  7,  &[1, 3, 5], Some(1.98)),
    data("Xe", 8,  &[0],       Some(2.16)),
];

/// A chemical element, hydrogen (1) through xenon (54).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Sc,
    Ti,
    V,
    Cr,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr,
    Rb,
    Sr,
    Y,
    Zr,
    Nb,
    Mo,
    Tc,
    Ru,
    Rh,
    Pd,
    Ag,
    Cd,
    In,
    Sn,
    Sb,
    Te,
    I,
    Xe,
}

#[rustfmt::skip]
const ALL: [Element; 54] = {
    use Element::*;
    [
        H, He, Li, Be, B, C, N, O, F, Ne, Na, Mg, Al, Si, P, S, Cl, Ar,
        K, Ca, Sc, Ti, V, Cr, Mn, Fe, Co, Ni, Cu, Zn, Ga, Ge, As, Se, Br, Kr,
        Rb, Sr, Y, Zr, Nb, Mo, Tc, Ru, Rh, Pd, Ag, Cd, In, Sn, Sb, Te, I, Xe,
    ]
};

impl Element {
    fn data(self) -> &'static ElementData {
        &ELEMENTS[self as usize - 1]
    }

    pub fn from_atomic_num(n: u8) -> Option<Element> {
        ALL.get((n as usize).checked_sub(1)?).copied()
    }

    /// Exact, case-sensitive symbol lookup (`"Cl"`, not `"CL"`).
    pub fn from_symbol(s: &str) -> Option<Element> {
        ALL.iter().copied().find(|e| e.symbol() == s)
    }

    /// Lenient lookup for symbols coming out of MD topologies, which are
    /// often upper-cased or padded (`" CL"`, `"ZN"`).
    pub fn parse(s: &str) -> Option<Element> {
        let s = s.trim();
        let mut chars = s.chars();
        let first = chars.next()?;
        let normalized: String = std::iter::once(first.to_ascii_uppercase())
            .chain(chars.map(|c| c.to_ascii_lowercase()))
            .collect();
        Self::from_symbol(&normalized)
    }

    pub fn atomic_num(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        self.data().symbol
    }

    pub fn outer_shell_electrons(self) -> u8 {
        self.data().outer_electrons
    }

    /// Allowed valences of the neutral atom, lowest first. Empty for
    /// transition metals, which have no valence model here.
    pub fn default_valences(self) -> &'static [u8] {
        self.data().valences
    }

    /// The lowest neutral valence, e.g. 3 for nitrogen and phosphorus.
    pub fn primary_valence(self) -> Option<u8> {
        self.default_valences().first().copied()
    }

    pub fn vdw_radius(self) -> Option<f64> {
        self.data().vdw_radius
    }

    /// Allowed valences when the atom carries `formal_charge`.
    ///
    /// A charged atom behaves like its isoelectronic neutral neighbour: N+
    /// bonds like C (4), O- like F (1), C+ like B (3), B- like C (4). The
    /// whole neutral list is shifted by the same amount as the primary
    /// valence, so S+ allows 3, 5 and 7.
    pub fn charged_valences(self, formal_charge: i8) -> Vec<u8> {
        let valences = self.default_valences();
        if valences.is_empty() {
            return Vec::new();
        }
        let neutral = shell_valence(self, self.outer_shell_electrons() as i16);
        let shifted = shell_valence(self, self.outer_shell_electrons() as i16 - formal_charge as i16);
        let (Some(neutral), Some(shifted)) = (neutral, shifted) else {
            return Vec::new();
        };
        let delta = shifted - neutral;
        valences
            .iter()
            .filter_map(|&v| u8::try_from(v as i16 + delta).ok())
            .collect()
    }
}

/// Bonding capacity of an atom with `electrons` valence electrons: the duet
/// rule for the first period, the octet rule elsewhere.
fn shell_valence(element: Element, electrons: i16) -> Option<i16> {
    if element.atomic_num() <= 2 {
        return match electrons {
            0..=1 => Some(electrons),
            2 => Some(0),
            _ => None,
        };
    }
    match electrons {
        0..=3 => Some(electrons),
        4..=8 => Some(8 - electrons),
        _ => None,
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
