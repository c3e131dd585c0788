//! Shallow diagnostic trace of a kernel tree.
//!
//! The printer emits one record per kernel it visits: the kernel's own
//! id, name and scope, plus the ids of its arguments, return slot and
//! body statements. Every other variant is a deliberate no-op, so the
//! trace stays a flat summary rather than a full tree dump.

use std::io;
use std::path::Path;

use super::visit::AstVisitor;
use super::{Alias, Assignment, Binary, Kernel, KernelCall, Return, Scalar, Tensor, Unary};

/// Reference visitor: accumulates a human-readable trace buffer.
#[derive(Debug, Default)]
pub struct AstPrinter {
    trace: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The trace accumulated so far.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Clear the buffer; a subsequent trace starts from scratch.
    pub fn reset(&mut self) {
        self.trace.clear();
    }

    /// Write the buffer to `path`, overwriting any existing content.
    /// Failures surface to the caller; nothing is retried.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        std::fs::write(path, &self.trace)
    }
}

impl AstVisitor for AstPrinter {
    fn visit_kernel(&mut self, node: &Kernel) {
        let args: Vec<String> = node.arguments.iter().map(|a| a.id().to_string()).collect();
        let body: Vec<String> = node.body.iter().map(|s| s.id().to_string()).collect();

        self.trace.push_str("-- Kernel\n");
        self.trace.push_str(&format!("  id:    {}\n", node.id));
        self.trace.push_str(&format!("  name:  {}\n", node.name));
        self.trace.push_str(&format!("  scope: {}\n", node.scope));
        self.trace.push_str(&format!("  args:  {}\n", args.join(", ")));
        match &node.return_value {
            Some(ret) => self.trace.push_str(&format!("  ret:   {}\n", ret.id())),
            None => self.trace.push_str("  ret:   void\n"),
        }
        self.trace.push_str(&format!("  body:  {}\n", body.join(", ")));

        // Descend into the kernel's children. The return slot may be
        // absent (void kernel), so it is only dispatched when present.
        for arg in &node.arguments {
            arg.dispatch(self);
        }
        if let Some(ret) = &node.return_value {
            ret.dispatch(self);
        }
        for stmt in &node.body {
            stmt.dispatch(self);
        }
    }

    // Shallow trace: everything below a kernel's immediate children is
    // intentionally silent.
    fn visit_scalar(&mut self, _node: &Scalar) {}
    fn visit_tensor(&mut self, _node: &Tensor) {}
    fn visit_kernel_call(&mut self, _node: &KernelCall) {}
    fn visit_add(&mut self, _node: &Binary) {}
    fn visit_sub(&mut self, _node: &Binary) {}
    fn visit_mul(&mut self, _node: &Binary) {}
    fn visit_div(&mut self, _node: &Binary) {}
    fn visit_sqrt(&mut self, _node: &Unary) {}
    fn visit_log2(&mut self, _node: &Unary) {}
    fn visit_exp2(&mut self, _node: &Unary) {}
    fn visit_assignment(&mut self, _node: &Assignment) {}
    fn visit_alias(&mut self, _node: &Alias) {}
    fn visit_return(&mut self, _node: &Return) {}
}
