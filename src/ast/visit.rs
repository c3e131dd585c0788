//! Double-dispatch traversal over the node taxonomy.
//!
//! Operations on the tree (printing, type-checking, lowering) implement
//! [`AstVisitor`] and enter through [`Node::dispatch`], which routes to
//! exactly the handling for the node's concrete variant. The protocol
//! never recurses on its own; whether a visitor descends into a node's
//! children is that visitor's policy.

use super::{
    Alias, Assignment, Binary, BinaryOp, Kernel, KernelCall, Node, Return, Scalar, Tensor, Unary,
    UnaryOp, Variable,
};

/// One handling method per concrete node variant.
///
/// Every method is required. A visitor that misses a variant does not
/// compile, so there is no runtime "unhandled node" fault; a visitor
/// that intentionally ignores a variant writes an empty body.
pub trait AstVisitor {
    fn visit_scalar(&mut self, node: &Scalar);
    fn visit_tensor(&mut self, node: &Tensor);
    fn visit_kernel(&mut self, node: &Kernel);
    fn visit_kernel_call(&mut self, node: &KernelCall);
    fn visit_add(&mut self, node: &Binary);
    fn visit_sub(&mut self, node: &Binary);
    fn visit_mul(&mut self, node: &Binary);
    fn visit_div(&mut self, node: &Binary);
    fn visit_sqrt(&mut self, node: &Unary);
    fn visit_log2(&mut self, node: &Unary);
    fn visit_exp2(&mut self, node: &Unary);
    fn visit_assignment(&mut self, node: &Assignment);
    fn visit_alias(&mut self, node: &Alias);
    fn visit_return(&mut self, node: &Return);
}

impl Node {
    /// Invoke the visitor handling matching this node's concrete
    /// variant. Binary and unary nodes route further on their op tag,
    /// so each arithmetic operator gets its own handling.
    pub fn dispatch(&self, visitor: &mut dyn AstVisitor) {
        match self {
            Node::Scalar(n) => visitor.visit_scalar(n),
            Node::Tensor(n) => visitor.visit_tensor(n),
            Node::Kernel(n) => visitor.visit_kernel(n),
            Node::KernelCall(n) => visitor.visit_kernel_call(n),
            Node::Binary(n) => match n.op {
                BinaryOp::Add => visitor.visit_add(n),
                BinaryOp::Sub => visitor.visit_sub(n),
                BinaryOp::Mul => visitor.visit_mul(n),
                BinaryOp::Div => visitor.visit_div(n),
            },
            Node::Unary(n) => match n.op {
                UnaryOp::Sqrt => visitor.visit_sqrt(n),
                UnaryOp::Log2 => visitor.visit_log2(n),
                UnaryOp::Exp2 => visitor.visit_exp2(n),
            },
            Node::Assignment(n) => visitor.visit_assignment(n),
            Node::Alias(n) => visitor.visit_alias(n),
            Node::Return(n) => visitor.visit_return(n),
        }
    }
}

impl Variable {
    pub fn dispatch(&self, visitor: &mut dyn AstVisitor) {
        match self {
            Variable::Scalar(n) => visitor.visit_scalar(n),
            Variable::Tensor(n) => visitor.visit_tensor(n),
        }
    }
}

impl Kernel {
    /// Entry point for visiting from a typed kernel root.
    pub fn dispatch(&self, visitor: &mut dyn AstVisitor) {
        visitor.visit_kernel(self);
    }
}
