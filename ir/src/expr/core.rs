//! Core Expr struct and fundamental operations.

use std::collections::HashSet;
use std::sync::Arc;

use smallvec::SmallVec;
use tessera_dtype::DType;

use crate::op::Op;
use crate::types::ConstValue;

/// Typed node of the expression DAG.
///
/// Nodes are immutable and hash-consed: building the same operator over the
/// same children twice yields the same allocation, so `Arc::ptr_eq` is a
/// structural equality test.
#[derive(Debug)]
pub struct Expr {
    /// Stable id, never reused.
    pub id: u64,
    pub(crate) op: Op,
    pub(crate) dtype: DType,
}

impl Expr {
    pub fn op(&self) -> &Op {
        &self.op
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Literal value, if this node is a scalar literal.
    ///
    /// Broadcast literals are not literals: folding only applies to scalars.
    pub fn as_const(&self) -> Option<ConstValue> {
        match &self.op {
            Op::Const(value) => Some(value.0),
            _ => None,
        }
    }

    pub fn is_const(&self) -> bool {
        matches!(self.op, Op::Const(_))
    }

    pub fn children(&self) -> SmallVec<[&Arc<Self>; 4]> {
        self.op.children()
    }

    /// Nodes reachable from `self`, children before parents.
    pub fn toposort(self: &Arc<Self>) -> Vec<Arc<Self>> {
        let mut visited = HashSet::new();
        let mut result = Vec::new();
        let mut stack = vec![(self.clone(), false)];

        while let Some((node, processed)) = stack.pop() {
            if visited.contains(&node.id) {
                continue;
            }

            if processed {
                visited.insert(node.id);
                result.push(node);
            } else {
                stack.push((node.clone(), true));
                for child in node.op.children().into_iter().rev() {
                    if !visited.contains(&child.id) {
                        stack.push((child.clone(), false));
                    }
                }
            }
        }

        result
    }
}
