use super::*;

/// Every opcode this crate defines, for exhaustive classification checks.
const ALL: [Opcode; 10] = [
    Opcode::ConstantTrue,
    Opcode::ConstantFalse,
    Opcode::Constant,
    Opcode::ConstantComposite,
    Opcode::ConstantSampler,
    Opcode::ConstantNull,
    Opcode::SpecConstantTrue,
    Opcode::SpecConstantFalse,
    Opcode::SpecConstant,
    Opcode::SpecConstantComposite,
];

#[test]
fn opcode_values_match_format() {
    use pretty_assertions::assert_eq;

    let values: Vec<u16> = ALL.iter().map(|op| op.value()).collect();
    assert_eq!(values, vec![41, 42, 43, 44, 45, 46, 48, 49, 50, 51]);
}

#[test]
fn boolean_classification() {
    for op in ALL {
        let expected = matches!(
            op,
            Opcode::ConstantTrue
                | Opcode::ConstantFalse
                | Opcode::SpecConstantTrue
                | Opcode::SpecConstantFalse
        );
        assert_eq!(op.is_boolean(), expected, "{op}");
    }
}

#[test]
fn numerical_classification() {
    for op in ALL {
        let expected = matches!(op, Opcode::Constant | Opcode::SpecConstant);
        assert_eq!(op.is_numerical(), expected, "{op}");
    }
}

#[test]
fn composite_classification() {
    for op in ALL {
        let expected = matches!(op, Opcode::ConstantComposite | Opcode::SpecConstantComposite);
        assert_eq!(op.is_composite(), expected, "{op}");
    }
}

#[test]
fn spec_classification_matches_value_range() {
    // Specialization opcodes occupy 48-51; plain ones 41-46.
    for op in ALL {
        assert_eq!(op.is_spec(), op.value() >= 48, "{op}");
    }
}

#[test]
fn classifications_are_disjoint() {
    for op in ALL {
        let hits = usize::from(op.is_boolean())
            + usize::from(op.is_numerical())
            + usize::from(op.is_composite());
        assert!(hits <= 1, "{op} matched multiple classes");
    }
}

#[test]
fn names_follow_format_spelling() {
    assert_eq!(Opcode::ConstantTrue.name(), "OpConstantTrue");
    assert_eq!(Opcode::SpecConstantComposite.name(), "OpSpecConstantComposite");
    assert_eq!(format!("{:?}", Opcode::ConstantNull), "Opcode::OpConstantNull");
}
