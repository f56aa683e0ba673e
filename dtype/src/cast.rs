use super::*;

impl DType {
    /// Reconcile the kind and width of two types with equal lane counts.
    ///
    /// Returns the type each side must be cast to, or `None` when the pair has
    /// no common type. Rules, in order:
    ///
    /// - equal types are returned unchanged;
    /// - float against a non-float casts the non-float side to the float type;
    /// - int/int and uint/uint widen the narrower side, the right side on a tie;
    /// - int against uint casts both sides to a signed int of the larger width.
    ///
    /// Everything else (two floats of different width, bool against an
    /// integer, unequal lane counts) has no common type.
    pub fn match_kinds(lhs: Self, rhs: Self) -> Option<(Self, Self)> {
        if lhs == rhs {
            return Some((lhs, rhs));
        }
        if lhs.lanes != rhs.lanes {
            return None;
        }

        match (lhs.kind, rhs.kind) {
            (l, TypeKind::Float) if l != TypeKind::Float => Some((rhs, rhs)),
            (TypeKind::Float, r) if r != TypeKind::Float => Some((lhs, lhs)),
            (TypeKind::Int, TypeKind::Int) | (TypeKind::UInt, TypeKind::UInt) => {
                if lhs.bits < rhs.bits {
                    Some((rhs, rhs))
                } else {
                    Some((lhs, lhs))
                }
            }
            (TypeKind::Int, TypeKind::UInt) | (TypeKind::UInt, TypeKind::Int) => {
                // Mixed signedness resolves to signed, never unsigned.
                let bits = lhs.bits.max(rhs.bits);
                Some((Self::int(bits).with_lanes(lhs.lanes), Self::int(bits).with_lanes(rhs.lanes)))
            }
            _ => None,
        }
    }

    /// Of two types, the one with the larger bit width (the left one on a tie).
    pub fn wider(lhs: Self, rhs: Self) -> Self {
        if lhs.bits >= rhs.bits { lhs } else { rhs }
    }
}
