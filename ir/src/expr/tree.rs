//! Tree visualization for expression graphs.

use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::rc::Rc;
use std::sync::Arc;

use ptree::{Style, TreeItem};

use crate::expr::Expr;
use crate::op::Op;

/// Compact renderer: a node reached a second time prints as a back-reference.
#[derive(Clone)]
pub struct ExprTreeCompact {
    expr: Arc<Expr>,
    visited: Rc<RefCell<HashSet<u64>>>,
    is_backref: RefCell<bool>,
}

impl ExprTreeCompact {
    pub fn new(expr: &Arc<Expr>) -> Self {
        Self { expr: expr.clone(), visited: Rc::new(RefCell::new(HashSet::new())), is_backref: RefCell::new(false) }
    }

    fn from_child(expr: Arc<Expr>, visited: Rc<RefCell<HashSet<u64>>>) -> Self {
        Self { expr, visited, is_backref: RefCell::new(false) }
    }
}

impl TreeItem for ExprTreeCompact {
    type Child = ExprTreeCompact;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &Style) -> io::Result<()> {
        let mut visited = self.visited.borrow_mut();
        if !visited.insert(self.expr.id) {
            *self.is_backref.borrow_mut() = true;
            write!(f, "[{}] → (see above)", self.expr.id)
        } else {
            write!(f, "{}", format_node(&self.expr))
        }
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        if *self.is_backref.borrow() {
            return Cow::Borrowed(&[]);
        }
        let children =
            self.expr.op().sources().into_iter().map(|src| Self::from_child(src, self.visited.clone())).collect();
        Cow::Owned(children)
    }
}

/// Full renderer: shared nodes are expanded at every occurrence.
#[derive(Clone)]
pub struct ExprTreeFull {
    expr: Arc<Expr>,
}

impl ExprTreeFull {
    pub fn new(expr: &Arc<Expr>) -> Self {
        Self { expr: expr.clone() }
    }
}

impl TreeItem for ExprTreeFull {
    type Child = ExprTreeFull;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &Style) -> io::Result<()> {
        write!(f, "{}", format_node(&self.expr))
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Owned(self.expr.op().sources().into_iter().map(|expr| Self { expr }).collect())
    }
}

/// Format: `[id] OP : dtype`
fn format_node(expr: &Arc<Expr>) -> String {
    let op_str = match expr.op() {
        Op::Const(value) => format!("CONST({:?})", value.0),
        Op::Var { name, unique } => format!("VAR('{name}', #{unique})"),
        Op::Broadcast { lanes, .. } => format!("BROADCAST(x{lanes})"),
        Op::Call { intrinsic, .. } => format!("CALL({})", intrinsic.name()),
        Op::Reduce { combiner, domain, value_index, .. } => {
            let kind = combiner.kind.map_or("custom", <&'static str>::from);
            format!("REDUCE({kind}, axes={}, value_index={value_index})", domain.len())
        }
        op => op.name().to_uppercase(),
    };

    format!("[{}] {} : {}", expr.id, op_str, expr.dtype())
}

fn render(tree: &impl TreeItem) -> String {
    let mut buf = Vec::new();
    match ptree::write_tree(tree, &mut buf) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(err) => format!("<tree rendering failed: {err}>"),
    }
}

impl Expr {
    /// Render the graph rooted here as an ASCII tree, shared nodes once.
    pub fn tree(self: &Arc<Self>) -> String {
        render(&ExprTreeCompact::new(self))
    }

    /// Render the graph rooted here, expanding shared nodes every time.
    pub fn tree_full(self: &Arc<Self>) -> String {
        render(&ExprTreeFull::new(self))
    }
}
