//! Which sign of formal charge an element takes when bond orders alone
//! cannot bring it to an allowed valence.
//!
//! There is no formula for this: a bare oxygen becomes an alkoxide, a
//! four-bonded nitrogen an ammonium, a four-bonded boron a borate. The
//! table lists each supported element explicitly; anything marked
//! [`ChargeSign::Unresolved`] is reported back to the caller instead of
//! being charged.

use phf::{phf_map, Map};

use crate::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeSign {
    Negative,
    Positive,
    Unresolved,
}

impl ChargeSign {
    /// Formal charge of magnitude `n` with this sign.
    pub fn apply(self, n: u8) -> Option<i8> {
        let n = i8::try_from(n).ok()?;
        match self {
            ChargeSign::Negative => Some(-n),
            ChargeSign::Positive => Some(n),
            ChargeSign::Unresolved => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeRule {
    /// Sign used when the atom is below its primary valence.
    pub shortfall: ChargeSign,
    /// Sign used when the atom is above its primary valence but not on an
    /// allowed one.
    pub excess: ChargeSign,
    /// A neutral atom at its primary valence may take a positive charge to
    /// give a deficient neighbour one more bond (iminium, guanidinium, nitro).
    pub donates: bool,
}

const fn rule(shortfall: ChargeSign, excess: ChargeSign, donates: bool) -> ChargeRule {
    ChargeRule {
        shortfall,
        excess,
        donates,
    }
}

const UNRESOLVED: ChargeRule = rule(ChargeSign::Unresolved, ChargeSign::Unresolved, false);
const ANION: ChargeRule = rule(ChargeSign::Negative, ChargeSign::Unresolved, false);
const ANION_OR_ONIUM: ChargeRule = rule(ChargeSign::Negative, ChargeSign::Positive, false);
const AMINE: ChargeRule = rule(ChargeSign::Negative, ChargeSign::Positive, true);
const ATE_COMPLEX: ChargeRule = rule(ChargeSign::Unresolved, ChargeSign::Negative, false);
const CATION: ChargeRule = rule(ChargeSign::Positive, ChargeSign::Unresolved, false);

#[rustfmt::skip]
static CHARGE_RULES: Map<&'static str, ChargeRule> = phf_map! {
    "H"  => UNRESOLVED,
    "B"  => ATE_COMPLEX,
    "Al" => ATE_COMPLEX,
    "C"  => ANION, "Si" => ANION, "Ge" => ANION, "Sn" => ANION,
    "N"  => AMINE, "P"  => ANION_OR_ONIUM, "As" => ANION_OR_ONIUM, "Sb" => ANION_OR_ONIUM,
    "O"  => ANION_OR_ONIUM, "S"  => ANION_OR_ONIUM, "Se" => ANION_OR_ONIUM, "Te" => ANION_OR_ONIUM,
    "F"  => ANION, "Cl" => ANION, "Br" => ANION,
    "I"  => ANION_OR_ONIUM,
    "Li" => CATION, "Na" => CATION, "K"  => CATION, "Rb" => CATION,
    "Be" => CATION, "Mg" => CATION, "Ca" => CATION, "Sr" => CATION,
    "Ga" => CATION, "In" => CATION,
};

/// The charge rule for `element`; elements without an entry are never
/// charged.
pub fn charge_rule(element: Element) -> ChargeRule {
    CHARGE_RULES
        .get(element.symbol())
        .copied()
        .unwrap_or(UNRESOLVED)
}

/// Formal charge that the rule table proposes for `element` sitting at
/// `valence` with no charge. `None` when the table has no answer or the
/// valence is already allowed.
pub fn propose_charge(element: Element, valence: u8) -> Option<i8> {
    let valences = element.default_valences();
    if valences.contains(&valence) {
        return None;
    }
    let primary = *valences.first()?;
    let rule = charge_rule(element);
    if valence < primary {
        rule.shortfall.apply(primary - valence)
    } else {
        let below = valences.iter().rev().find(|&&v| v < valence)?;
        rule.excess.apply(valence - below)
    }
}
