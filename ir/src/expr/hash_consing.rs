//! Hash consing for Expr deduplication.
//!
//! Structurally identical nodes share one allocation. The cache is a global
//! lock-free map (papaya) from a structural key to a `Weak<Expr>`, so building
//! the same node on two threads yields the same `Arc`, and nodes are freed as
//! soon as the last strong reference outside the cache goes away. Dead
//! entries are replaced on the next insert of the same key or swept by
//! [`gc_dead_refs`].

use std::mem::discriminant;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, Weak};

use papaya::HashMap;
use smallvec::SmallVec;
use tessera_dtype::DType;

use crate::expr::Expr;
use crate::op::Op;
use crate::types::*;

static EXPR_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

pub(crate) fn next_expr_id() -> u64 {
    EXPR_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

static VAR_UNIQUE_COUNTER: AtomicU64 = AtomicU64::new(0);

pub(crate) fn next_var_unique() -> u64 {
    VAR_UNIQUE_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Cache key for hash consing.
///
/// Children are identified by stable id, which keeps hashing shallow.
#[derive(Eq, PartialEq, Hash, Clone)]
struct NodeKey {
    op_discriminant: std::mem::Discriminant<Op>,
    dtype: DType,
    src_ids: SmallVec<[u64; 4]>,
    op_data: OpData,
}

/// Non-child payload of an Op variant.
#[derive(Eq, PartialEq, Hash, Clone)]
enum OpData {
    Const(ConstValueHash),
    Var(String, u64),
    Binary(BinaryOp),
    Cast(DType),
    Broadcast(u16),
    Call(Intrinsic),
    /// (combiner lhs formal id, value index, source count, domain length)
    Reduce(u64, usize, usize, usize),
    None,
}

impl NodeKey {
    fn new(op: &Op, dtype: DType) -> Self {
        let op_data = match op {
            Op::Const(c) => OpData::Const(*c),
            Op::Var { name, unique } => OpData::Var(name.clone(), *unique),
            Op::Binary(binary_op, ..) => OpData::Binary(*binary_op),
            Op::Cast { dtype, .. } => OpData::Cast(*dtype),
            Op::Broadcast { lanes, .. } => OpData::Broadcast(*lanes),
            Op::Call { intrinsic, .. } => OpData::Call(*intrinsic),
            Op::Reduce { combiner, sources, domain, value_index, .. } => {
                OpData::Reduce(combiner.lhs.id, *value_index, sources.len(), domain.len())
            }
            Op::Not(_) | Op::Select { .. } => OpData::None,
        };

        Self {
            op_discriminant: discriminant(op),
            dtype,
            src_ids: op.children().into_iter().map(|child| child.id).collect(),
            op_data,
        }
    }
}

static EXPRS: OnceLock<HashMap<NodeKey, Weak<Expr>>> = OnceLock::new();

fn exprs() -> &'static HashMap<NodeKey, Weak<Expr>> {
    EXPRS.get_or_init(HashMap::new)
}

/// Remove dead weak references from the cache.
pub fn gc_dead_refs() {
    let map = exprs();
    let guard = map.guard();

    let dead: Vec<NodeKey> =
        map.iter(&guard).filter(|(_, weak)| weak.strong_count() == 0).map(|(key, _)| key.clone()).collect();

    for key in dead {
        map.remove(&key, &guard);
    }
}

impl Expr {
    /// Create a node with hash consing.
    ///
    /// Returns the live node with the same structure if there is one. This is
    /// the unchecked allocator: callers go through the validated factories in
    /// [`crate::expr::constructors`].
    pub(crate) fn new(op: Op, dtype: DType) -> Arc<Self> {
        use papaya::{Compute, Operation};

        let key = NodeKey::new(&op, dtype);
        let guard = exprs().guard();

        if let Some(weak) = exprs().get(&key, &guard)
            && let Some(existing) = weak.upgrade()
        {
            return existing;
        }

        let new_arc = Arc::new(Self { id: next_expr_id(), op, dtype });
        let new_weak = Arc::downgrade(&new_arc);

        // Another thread may have inserted the same key since the lookup.
        let result = exprs().compute(
            key,
            |entry| match entry.and_then(|(_, existing)| existing.upgrade()) {
                Some(existing) => Operation::Abort(existing),
                None => Operation::Insert(new_weak.clone()),
            },
            &guard,
        );

        match result {
            Compute::Aborted(existing) => existing,
            _ => new_arc,
        }
    }
}
