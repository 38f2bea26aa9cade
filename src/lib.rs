pub mod atom;
pub mod bond;
pub mod config;
pub mod convert;
pub mod element;
pub mod graph_ops;
pub mod infer;
pub mod mol;
pub mod traits;
pub mod valence;

pub use atom::Atom;
pub use bond::{Bond, BondOrder};
pub use config::{ConfigError, ConvertConfig, ConvertConfigBuilder, InferConfig};
pub use convert::{
    convert, format_pdb_name, guess_bonds, AtomGroup, AtomRecord, ConvertError, Converted,
    MdAtom, MdProperties, PdbResidueInfo,
};
pub use element::Element;
pub use graph_ops::{fragments, num_fragments, split_fragments};
pub use infer::{infer_bond_orders_and_charges, InferError, InferReport, UnresolvedAtom};
pub use mol::Mol;
pub use traits::{
    HasAtomicNum, HasBondOrder, HasBondOrderMut, HasFormalCharge, HasFormalChargeMut,
    HasHydrogenCount, HasPosition3D,
};
pub use valence::{check_valence, total_valence, ValenceError};
