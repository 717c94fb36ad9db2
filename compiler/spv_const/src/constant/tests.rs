use pretty_assertions::assert_eq;
use spv_ir::{header_opcode_value, header_word_count};

use super::*;

fn ty(raw: u32) -> TypeId {
    TypeId::from_raw(raw)
}

fn dec(raw: u32) -> DecorationId {
    DecorationId::from_raw(raw)
}

#[test]
fn boolean_true_encodes_to_three_words() {
    let constant = Constant::new(Opcode::ConstantTrue, ty(7), &[], &[]);
    let words = constant.with_result_id(ResultId::from_raw(9));

    assert_eq!(words, vec![op_header(3, Opcode::ConstantTrue), 7, 9]);
}

#[test]
fn sampler_encodes_to_six_words() {
    // addressing mode, parameter, filter mode — in that order
    let constant = Constant::new(Opcode::ConstantSampler, ty(4), &[2, 0, 1], &[]);
    let words = constant.with_result_id(ResultId::from_raw(12));

    assert_eq!(words.len(), 6);
    assert_eq!(words[3..], [2, 0, 1]);
}

#[test]
fn composite_tail_is_constituents_verbatim() {
    let constituents = [8, 3, 8, 5];
    let constant = Constant::new(Opcode::ConstantComposite, ty(2), &constituents, &[]);
    let words = constant.with_result_id(ResultId::from_raw(20));

    assert_eq!(words.len(), 3 + constituents.len());
    assert_eq!(words[3..], constituents);
}

#[test]
fn header_word_decodes_to_length_and_opcode() {
    let constant = Constant::new(Opcode::Constant, ty(1), &[0xDEAD_BEEF], &[]);
    let words = constant.with_result_id(ResultId::from_raw(2));

    assert_eq!(usize::from(header_word_count(words[0])), words.len());
    assert_eq!(header_opcode_value(words[0]), Opcode::Constant.value());
}

#[test]
fn type_and_result_ids_occupy_words_one_and_two() {
    let constant = Constant::new(Opcode::ConstantNull, ty(31), &[], &[]);
    let words = constant.with_result_id(ResultId::from_raw(99));

    assert_eq!(words[1], 31);
    assert_eq!(words[2], 99);
}

#[test]
fn equality_is_structural() {
    let a = Constant::new(Opcode::Constant, ty(1), &[5], &[]);
    let b = Constant::new(Opcode::Constant, ty(1), &[5], &[]);
    assert_eq!(a, b);

    // Any differing component breaks equality.
    assert_ne!(a, Constant::new(Opcode::SpecConstant, ty(1), &[5], &[]));
    assert_ne!(a, Constant::new(Opcode::Constant, ty(2), &[5], &[]));
    assert_ne!(a, Constant::new(Opcode::Constant, ty(1), &[6], &[]));
    assert_ne!(a, Constant::new(Opcode::Constant, ty(1), &[5, 0], &[]));
    assert_ne!(a, Constant::new(Opcode::Constant, ty(1), &[5], &[dec(0)]));
}

#[test]
fn equality_ignores_decoration_order() {
    let ab = Constant::new(Opcode::Constant, ty(1), &[5], &[dec(0), dec(1)]);
    let ba = Constant::new(Opcode::Constant, ty(1), &[5], &[dec(1), dec(0)]);
    assert_eq!(ab, ba);
}

#[test]
fn equal_constants_hash_equal() {
    use std::hash::{BuildHasher, RandomState};

    let state = RandomState::new();
    let ab = Constant::new(Opcode::Constant, ty(1), &[5], &[dec(0), dec(1)]);
    let ba = Constant::new(Opcode::Constant, ty(1), &[5], &[dec(1), dec(0)]);
    assert_eq!(state.hash_one(&ab), state.hash_one(&ba));

    // Same structural key, different decorations: same bucket by design.
    let plain = Constant::new(Opcode::Constant, ty(1), &[5], &[]);
    assert_eq!(state.hash_one(&ab), state.hash_one(&plain));
    assert_ne!(ab, plain);
}

#[test]
fn has_decoration_and_classification() {
    let constant = Constant::new(Opcode::SpecConstantTrue, ty(3), &[], &[dec(2)]);

    assert!(constant.has_decoration(dec(2)));
    assert!(!constant.has_decoration(dec(4)));

    assert!(constant.is_boolean());
    assert!(constant.is_spec());
    assert!(!constant.is_numerical());
    assert!(!constant.is_composite());
}
