//! Reducers, iteration variables and reduction nodes.

use std::sync::Arc;

use smallvec::SmallVec;
use snafu::ensure;

use crate::error::{ReducerTypeMismatchSnafu, ValueIndexOutOfRangeSnafu};
use crate::expr::Expr;
use crate::op::{CommReducer, IterVar, Op};
use crate::types::ReduceOp;
use crate::Result;

impl CommReducer {
    /// Create a reducer from its formals, combining expression and identity.
    pub fn new(lhs: Arc<Expr>, rhs: Arc<Expr>, result: Arc<Expr>, identity: Arc<Expr>) -> Result<Arc<Self>> {
        Self::with_kind(None, lhs, rhs, result, identity)
    }

    pub(crate) fn with_kind(
        kind: Option<ReduceOp>,
        lhs: Arc<Expr>,
        rhs: Arc<Expr>,
        result: Arc<Expr>,
        identity: Arc<Expr>,
    ) -> Result<Arc<Self>> {
        let reducer = lhs.dtype();
        for other in [&rhs, &result, &identity] {
            ensure!(other.dtype() == reducer, ReducerTypeMismatchSnafu { reducer, value: other.dtype() });
        }
        Ok(Arc::new(Self { kind, lhs, rhs, result, identity }))
    }
}

impl IterVar {
    /// Create an iteration variable over `[min, min + extent)`.
    pub fn new(name: impl Into<String>, min: Arc<Expr>, extent: Arc<Expr>) -> Result<Self> {
        Expr::check_same_dtype("iter_var", &min, &extent)?;
        let var = Expr::var(name, min.dtype());
        Ok(Self { var, min, extent })
    }
}

impl Expr {
    /// Create a reduction node.
    ///
    /// Every source must have the reducer's type and the predicate must be a
    /// scalar bool. The node takes the type of the selected source.
    pub fn reduce_node(
        combiner: Arc<CommReducer>,
        sources: SmallVec<[Arc<Self>; 1]>,
        domain: Vec<IterVar>,
        predicate: Arc<Self>,
        value_index: usize,
    ) -> Result<Arc<Self>> {
        let Some(selected) = sources.get(value_index) else {
            return ValueIndexOutOfRangeSnafu { value_index, count: sources.len() }.fail();
        };
        let dtype = selected.dtype;

        let reducer = combiner.dtype();
        for source in &sources {
            ensure!(source.dtype == reducer, ReducerTypeMismatchSnafu { reducer, value: source.dtype });
        }
        Self::check_condition(&predicate, dtype.element_of())?;

        Ok(Self::new(Op::Reduce { combiner, sources, domain, predicate, value_index }, dtype))
    }
}
