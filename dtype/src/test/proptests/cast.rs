use proptest::prelude::*;

use super::generators::*;
use crate::DType;

proptest! {
    #[test]
    fn match_kinds_equal_types_is_identity(dtype in vector_generator()) {
        prop_assert_eq!(DType::match_kinds(dtype, dtype), Some((dtype, dtype)));
    }

    #[test]
    fn match_kinds_yields_a_single_type(lhs in numeric_generator(), rhs in numeric_generator()) {
        if let Some((l, r)) = DType::match_kinds(lhs, rhs) {
            prop_assert_eq!(l, r);
            prop_assert!(l.bits() >= lhs.bits().min(rhs.bits()));
        }
    }

    #[test]
    fn match_kinds_type_is_symmetric(lhs in numeric_generator(), rhs in numeric_generator()) {
        let forward = DType::match_kinds(lhs, rhs).map(|(l, _)| l);
        let backward = DType::match_kinds(rhs, lhs).map(|(l, _)| l);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn mixed_signedness_is_signed(lhs in int_dtype(), rhs in uint_dtype()) {
        let (l, r) = DType::match_kinds(lhs, rhs).unwrap();
        prop_assert!(l.is_int() && r.is_int());
        prop_assert_eq!(l.bits(), lhs.bits().max(rhs.bits()));
    }

    #[test]
    fn bool_never_matches_integers(int in prop_oneof![int_dtype(), uint_dtype()]) {
        prop_assert_eq!(DType::match_kinds(DType::Bool, int), None);
        prop_assert_eq!(DType::match_kinds(int, DType::Bool), None);
    }
}
