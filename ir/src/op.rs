//! Operation enum and the aggregate nodes it refers to.
//!
//! The [`Op`] enum defines every node kind of the expression IR. Children are
//! held as `Arc<Expr>` so the IR is a shared DAG.

use std::sync::Arc;

use smallvec::SmallVec;
use tessera_dtype::DType;

use crate::expr::Expr;
use crate::types::*;

/// Operation type with typed operands.
///
/// Note: PartialEq, Eq, and Hash are NOT derived because Op contains Arc<Expr>.
/// Hash consing keys nodes by the stable ids of their children instead.
#[derive(Debug, Clone)]
pub enum Op {
    /// Scalar literal.
    Const(ConstValueHash),
    /// Free variable. `unique` separates variables that share a name.
    Var { name: String, unique: u64 },

    Binary(BinaryOp, Arc<Expr>, Arc<Expr>),
    Not(Arc<Expr>),

    Cast {
        src: Arc<Expr>,
        dtype: DType,
    },
    /// Replicate a scalar across `lanes` lanes.
    Broadcast {
        src: Arc<Expr>,
        lanes: u16,
    },
    Select {
        condition: Arc<Expr>,
        true_val: Arc<Expr>,
        false_val: Arc<Expr>,
    },
    Call {
        intrinsic: Intrinsic,
        args: SmallVec<[Arc<Expr>; 3]>,
    },
    Reduce {
        combiner: Arc<CommReducer>,
        sources: SmallVec<[Arc<Expr>; 1]>,
        domain: Vec<IterVar>,
        predicate: Arc<Expr>,
        value_index: usize,
    },
}

impl Op {
    /// Get all direct child expressions.
    ///
    /// A reduction's children are its sources, its predicate and the bounds of
    /// its domain. The combiner is a closed expression over its own formals and
    /// is not part of the enclosing graph.
    pub fn children(&self) -> SmallVec<[&Arc<Expr>; 4]> {
        match self {
            Self::Const(_) | Self::Var { .. } => SmallVec::new(),
            Self::Binary(_, a, b) => SmallVec::from_slice(&[a, b]),
            Self::Not(x) => SmallVec::from_slice(&[x]),
            Self::Cast { src, .. } | Self::Broadcast { src, .. } => SmallVec::from_slice(&[src]),
            Self::Select { condition, true_val, false_val } => SmallVec::from_slice(&[condition, true_val, false_val]),
            Self::Call { args, .. } => args.iter().collect(),
            Self::Reduce { sources, domain, predicate, .. } => {
                let mut children: SmallVec<[&Arc<Expr>; 4]> = sources.iter().collect();
                children.push(predicate);
                for iv in domain {
                    children.extend([&iv.var, &iv.min, &iv.extent]);
                }
                children
            }
        }
    }

    /// Get all direct child expressions as owned Arc references.
    pub fn sources(&self) -> SmallVec<[Arc<Expr>; 4]> {
        self.children().into_iter().cloned().collect()
    }

    /// Short operator name used by diagnostics and tree rendering.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Const(_) => "const",
            Self::Var { .. } => "var",
            Self::Binary(op, ..) => op.name(),
            Self::Not(_) => "not",
            Self::Cast { .. } => "cast",
            Self::Broadcast { .. } => "broadcast",
            Self::Select { .. } => "select",
            Self::Call { intrinsic, .. } => intrinsic.name(),
            Self::Reduce { .. } => "reduce",
        }
    }
}

/// Commutative reducer: `result` combines the formals `lhs` and `rhs`, and
/// `identity` is the value a reduction over an empty domain produces.
///
/// All four expressions share one type.
#[derive(Debug)]
pub struct CommReducer {
    pub kind: Option<ReduceOp>,
    pub lhs: Arc<Expr>,
    pub rhs: Arc<Expr>,
    pub result: Arc<Expr>,
    pub identity: Arc<Expr>,
}

impl CommReducer {
    pub fn dtype(&self) -> DType {
        self.lhs.dtype()
    }
}

/// Iteration variable bound over `[min, min + extent)`.
#[derive(Debug, Clone)]
pub struct IterVar {
    pub var: Arc<Expr>,
    pub min: Arc<Expr>,
    pub extent: Arc<Expr>,
}
