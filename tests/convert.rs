use petgraph::graph::NodeIndex;

use bondcrab::{
    convert, fragments, AtomGroup, AtomRecord, BondOrder, ConvertConfig, HasFormalCharge,
    HasPosition3D,
};

fn glycine() -> AtomGroup {
    serde_json::from_str(include_str!("approval_data/glycine_group.json")).unwrap()
}

fn n(i: usize) -> NodeIndex {
    NodeIndex::new(i)
}

#[test]
fn glycine_zwitterion_from_topology() {
    let group = glycine();
    let converted = convert(&group, &ConvertConfig::default()).unwrap();
    let mol = &converted.mol;

    assert_eq!(mol.atom_count(), 10);
    assert_eq!(mol.bond_count(), 9);
    assert!(converted.report.as_ref().unwrap().is_resolved());

    let carbonyl = mol.bond_between(n(7), n(8)).unwrap();
    assert_eq!(mol.bond(carbonyl).order, BondOrder::Double);
    assert_eq!(mol.atom(n(0)).formal_charge(), 1);
    assert_eq!(mol.atom(n(9)).formal_charge(), -1);
    let net: i32 = mol.atoms().map(|a| mol.atom(a).formal_charge() as i32).sum();
    assert_eq!(net, 0);
}

#[test]
fn residue_info_and_properties() {
    let converted = convert(&glycine(), &ConvertConfig::default()).unwrap();
    let mol = &converted.mol;

    let names: Vec<&str> = mol
        .atoms()
        .map(|a| mol.atom(a).residue.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![" N", " H1 ", " H2 ", " H3 ", " CA", "HA1 ", "HA2 ", " C", " O", " OXT"]
    );

    let ca = mol.atom(n(4));
    assert_eq!(ca.residue.residue_name, "GLY");
    assert_eq!(ca.residue.residue_number, 5);
    assert_eq!(ca.residue.chain_id, "A");
    assert_eq!(ca.residue.occupancy, 1.0);
    assert_eq!(ca.residue.temp_factor, 12.5);
    assert_eq!(ca.props.segid, "PROA");
    assert_eq!(ca.props.atom_type, "CT1");
    assert_eq!(ca.props.charge, 0.13);
    assert_eq!(ca.props.index, 44);
}

#[test]
fn selection_keeps_topology_indices() {
    let backbone = glycine().select(|r| matches!(r.name.as_str(), "N" | "CA" | "C" | "O"));
    let config = ConvertConfig::builder()
        .infer_bond_orders(false)
        .build()
        .unwrap();
    let converted = convert(&backbone, &config).unwrap();
    let indices: Vec<usize> = converted
        .mol
        .atoms()
        .map(|a| converted.mol.atom(a).props.index)
        .collect();
    assert_eq!(indices, vec![40, 44, 47, 48]);
    assert_eq!(converted.mol.bond_count(), 3);
    assert_eq!(fragments(&converted.mol).len(), 1);
}

#[test]
fn selection_splitting_a_residue_gives_fragments() {
    let no_alpha = glycine().select(|r| r.name != "CA");
    let config = ConvertConfig::builder()
        .infer_bond_orders(false)
        .build()
        .unwrap();
    let converted = convert(&no_alpha, &config).unwrap();
    // NH3, two HA, and the carboxylate
    assert_eq!(fragments(&converted.mol).len(), 4);
}

#[test]
fn water_bonds_guessed_from_coordinates() {
    let records = vec![
        AtomRecord::new(0, "OW", "O").with_position([0.0, 0.0, 0.0]),
        AtomRecord::new(1, "HW1", "H").with_position([0.9572, 0.0, 0.0]),
        AtomRecord::new(2, "HW2", "H").with_position([-0.24, 0.9266, 0.0]),
        AtomRecord::new(3, "OW", "O").with_position([3.0, 0.0, 0.0]),
        AtomRecord::new(4, "HW1", "H").with_position([3.9572, 0.0, 0.0]),
        AtomRecord::new(5, "HW2", "H").with_position([2.76, 0.9266, 0.0]),
    ];
    let group = AtomGroup::new(records, Vec::new());
    let converted = convert(&group, &ConvertConfig::default()).unwrap();
    let mol = &converted.mol;

    assert_eq!(mol.bond_count(), 4);
    assert_eq!(
        fragments(mol),
        vec![vec![n(0), n(1), n(2)], vec![n(3), n(4), n(5)]]
    );
    assert!(converted.report.unwrap().is_resolved());
    assert_eq!(mol.atom(n(4)).position_3d(), Some([3.9572, 0.0, 0.0]));
}

#[test]
fn config_from_toml() {
    let config = ConvertConfig::from_toml_str(
        r#"
        infer_bond_orders = false
        bond_radius_factor = 0.6
        "#,
    )
    .unwrap();
    let converted = convert(&glycine(), &config).unwrap();
    assert!(converted.report.is_none());
}
