//! AST core for a small GPU-kernel description language.
//!
//! A front end (parser or test harness) builds kernel trees bottom-up
//! through the constructors in [`ast`], stamping every node with a
//! unique [`id::NodeId`]. Consumers walk a tree through the
//! double-dispatch protocol in [`ast::visit`]; the reference consumer
//! is the shallow trace printer in [`ast::printer`]. Later passes
//! (type-checking, lowering, codegen) plug into the same protocol.

pub mod ast;
pub mod error;
pub mod id;

pub use ast::display::{format_kernel_signature, format_variable, format_variable_type};
pub use ast::printer::AstPrinter;
pub use ast::visit::AstVisitor;
pub use ast::{
    Alias, Assignment, Binary, BinaryOp, DataType, Kernel, KernelCall, KernelRef, KernelScope,
    Node, Return, Scalar, Tensor, Unary, UnaryOp, Variable, VariableKind,
};
pub use error::AstError;
pub use id::{IdGen, NodeId};
