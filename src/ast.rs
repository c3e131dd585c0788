use crate::error::AstError;
use crate::id::{IdGen, NodeId};

pub mod display;
pub mod printer;
pub mod visit;

/// Element type of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Float32,
    Float16,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Float32 => "FLOAT32",
            DataType::Float16 => "FLOAT16",
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage shape of a variable: a single value or an n-d array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableKind {
    Scalar,
    Tensor,
}

impl VariableKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableKind::Scalar => "SCALAR",
            VariableKind::Tensor => "TENSOR",
        }
    }
}

impl std::fmt::Display for VariableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a kernel is an entry point or a device-side subroutine.
///
/// GLOBAL kernels are externally invocable; DEVICE kernels are only
/// reachable through a `KernelCall` in another kernel's body. That
/// reachability rule is enforced by later semantic passes, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KernelScope {
    Global,
    Device,
}

impl KernelScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            KernelScope::Global => "GLOBAL",
            KernelScope::Device => "DEVICE",
        }
    }

    /// Lowercase form used in signature rendering.
    pub fn keyword(&self) -> &'static str {
        match self {
            KernelScope::Global => "global",
            KernelScope::Device => "device",
        }
    }
}

impl std::fmt::Display for KernelScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named single-value storage location.
#[derive(Clone, Debug)]
pub struct Scalar {
    pub id: NodeId,
    pub dtype: DataType,
    pub name: String,
}

impl Scalar {
    pub fn new(ids: &IdGen, dtype: DataType, name: impl Into<String>) -> Self {
        Self {
            id: ids.next_id(),
            dtype,
            name: name.into(),
        }
    }
}

/// A named n-dimensional array with a fixed shape.
#[derive(Clone, Debug)]
pub struct Tensor {
    pub id: NodeId,
    pub dtype: DataType,
    pub name: String,
    pub shape: Vec<u64>,
}

impl Tensor {
    /// Rejects empty shapes: a tensor always has rank >= 1.
    pub fn new(
        ids: &IdGen,
        dtype: DataType,
        name: impl Into<String>,
        shape: Vec<u64>,
    ) -> Result<Self, AstError> {
        let name = name.into();
        if shape.is_empty() {
            return Err(AstError::EmptyTensorShape { name });
        }
        Ok(Self {
            id: ids.next_id(),
            dtype,
            name,
            shape,
        })
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }
}

/// A declared variable: scalar or tensor.
///
/// Name uniqueness within a declaring scope is the builder's contract;
/// the node itself does not enforce it.
#[derive(Clone, Debug)]
pub enum Variable {
    Scalar(Scalar),
    Tensor(Tensor),
}

impl Variable {
    pub fn id(&self) -> NodeId {
        match self {
            Variable::Scalar(s) => s.id,
            Variable::Tensor(t) => t.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Variable::Scalar(s) => &s.name,
            Variable::Tensor(t) => &t.name,
        }
    }

    pub fn dtype(&self) -> DataType {
        match self {
            Variable::Scalar(s) => s.dtype,
            Variable::Tensor(t) => t.dtype,
        }
    }

    pub fn kind(&self) -> VariableKind {
        match self {
            Variable::Scalar(_) => VariableKind::Scalar,
            Variable::Tensor(_) => VariableKind::Tensor,
        }
    }
}

impl From<Scalar> for Variable {
    fn from(node: Scalar) -> Self {
        Variable::Scalar(node)
    }
}

impl From<Tensor> for Variable {
    fn from(node: Tensor) -> Self {
        Variable::Tensor(node)
    }
}

/// A named, schedulable unit of computation.
///
/// Constructed with an empty body; the builder pushes statements in
/// execution order afterwards. `return_value == None` means void.
#[derive(Clone, Debug)]
pub struct Kernel {
    pub id: NodeId,
    pub name: String,
    pub scope: KernelScope,
    pub arguments: Vec<Variable>,
    pub return_value: Option<Variable>,
    pub body: Vec<Node>,
}

impl Kernel {
    pub fn new(
        ids: &IdGen,
        name: impl Into<String>,
        scope: KernelScope,
        arguments: Vec<Variable>,
        return_value: Option<Variable>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            name: name.into(),
            scope,
            arguments,
            return_value,
            body: Vec::new(),
        }
    }
}

/// Non-owning handle to a kernel.
///
/// Kernels live in a program-level registry outside this core; a call
/// site refers to its callee by id and name rather than owning it.
#[derive(Clone, Debug)]
pub struct KernelRef {
    pub id: NodeId,
    pub name: String,
}

impl KernelRef {
    pub fn to(kernel: &Kernel) -> Self {
        Self {
            id: kernel.id,
            name: kernel.name.clone(),
        }
    }
}

/// A call to another kernel from within a kernel body.
///
/// Argument arity and element/kind compatibility with the target's
/// declaration is a later semantic pass's obligation.
#[derive(Clone, Debug)]
pub struct KernelCall {
    pub id: NodeId,
    pub target: KernelRef,
    pub arguments: Vec<Variable>,
}

impl KernelCall {
    pub fn new(ids: &IdGen, target: KernelRef, arguments: Vec<Variable>) -> Self {
        Self {
            id: ids.next_id(),
            target,
            arguments,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// A two-operand arithmetic expression.
///
/// Pure structural tagging; shape compatibility and broadcasting are
/// a later pass's concern.
#[derive(Clone, Debug)]
pub struct Binary {
    pub id: NodeId,
    pub op: BinaryOp,
    pub lhs: Box<Node>,
    pub rhs: Box<Node>,
}

impl Binary {
    pub fn new(ids: &IdGen, op: BinaryOp, lhs: Node, rhs: Node) -> Self {
        Self {
            id: ids.next_id(),
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn add(ids: &IdGen, lhs: Node, rhs: Node) -> Self {
        Self::new(ids, BinaryOp::Add, lhs, rhs)
    }

    pub fn sub(ids: &IdGen, lhs: Node, rhs: Node) -> Self {
        Self::new(ids, BinaryOp::Sub, lhs, rhs)
    }

    pub fn mul(ids: &IdGen, lhs: Node, rhs: Node) -> Self {
        Self::new(ids, BinaryOp::Mul, lhs, rhs)
    }

    pub fn div(ids: &IdGen, lhs: Node, rhs: Node) -> Self {
        Self::new(ids, BinaryOp::Div, lhs, rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Sqrt,
    Log2,
    Exp2,
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Log2 => "log2",
            UnaryOp::Exp2 => "exp2",
        }
    }
}

/// A one-operand intrinsic expression.
#[derive(Clone, Debug)]
pub struct Unary {
    pub id: NodeId,
    pub op: UnaryOp,
    pub operand: Box<Node>,
}

impl Unary {
    pub fn new(ids: &IdGen, op: UnaryOp, operand: Node) -> Self {
        Self {
            id: ids.next_id(),
            op,
            operand: Box::new(operand),
        }
    }

    pub fn sqrt(ids: &IdGen, operand: Node) -> Self {
        Self::new(ids, UnaryOp::Sqrt, operand)
    }

    pub fn log2(ids: &IdGen, operand: Node) -> Self {
        Self::new(ids, UnaryOp::Log2, operand)
    }

    pub fn exp2(ids: &IdGen, operand: Node) -> Self {
        Self::new(ids, UnaryOp::Exp2, operand)
    }
}

/// `target = source`.
#[derive(Clone, Debug)]
pub struct Assignment {
    pub id: NodeId,
    pub target: Box<Node>,
    pub source: Box<Node>,
}

impl Assignment {
    pub fn new(ids: &IdGen, target: Node, source: Node) -> Self {
        Self {
            id: ids.next_id(),
            target: Box::new(target),
            source: Box::new(source),
        }
    }
}

/// An alternate name for an existing value, without a copy.
#[derive(Clone, Debug)]
pub struct Alias {
    pub id: NodeId,
    pub source: Box<Node>,
}

impl Alias {
    pub fn new(ids: &IdGen, source: Node) -> Self {
        Self {
            id: ids.next_id(),
            source: Box::new(source),
        }
    }
}

/// A kernel's result expression.
#[derive(Clone, Debug)]
pub struct Return {
    pub id: NodeId,
    pub value: Box<Node>,
}

impl Return {
    pub fn new(ids: &IdGen, value: Node) -> Self {
        Self {
            id: ids.next_id(),
            value: Box::new(value),
        }
    }
}

/// The closed set of AST node variants.
///
/// Composite variants exclusively own their children; the only
/// non-owning edge in the tree is `KernelCall::target`.
#[derive(Clone, Debug)]
pub enum Node {
    Scalar(Scalar),
    Tensor(Tensor),
    Kernel(Kernel),
    KernelCall(KernelCall),
    Binary(Binary),
    Unary(Unary),
    Assignment(Assignment),
    Alias(Alias),
    Return(Return),
}

impl Node {
    pub fn id(&self) -> NodeId {
        match self {
            Node::Scalar(n) => n.id,
            Node::Tensor(n) => n.id,
            Node::Kernel(n) => n.id,
            Node::KernelCall(n) => n.id,
            Node::Binary(n) => n.id,
            Node::Unary(n) => n.id,
            Node::Assignment(n) => n.id,
            Node::Alias(n) => n.id,
            Node::Return(n) => n.id,
        }
    }
}

impl From<Variable> for Node {
    fn from(var: Variable) -> Self {
        match var {
            Variable::Scalar(s) => Node::Scalar(s),
            Variable::Tensor(t) => Node::Tensor(t),
        }
    }
}
