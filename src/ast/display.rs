//! Display helpers for AST nodes.
//!
//! Single source of truth for rendering variables and kernel
//! signatures as display strings (diagnostics, documentation).

use super::{Kernel, Variable};

/// Format a variable's type for display, e.g. `FLOAT32[1024]`.
pub fn format_variable_type(var: &Variable) -> String {
    match var {
        Variable::Scalar(s) => s.dtype.to_string(),
        Variable::Tensor(t) => {
            let dims: Vec<String> = t.shape.iter().map(u64::to_string).collect();
            format!("{}[{}]", t.dtype, dims.join(", "))
        }
    }
}

/// Format a variable declaration for display, e.g. `a: FLOAT32[1024]`.
pub fn format_variable(var: &Variable) -> String {
    format!("{}: {}", var.name(), format_variable_type(var))
}

/// Format a kernel signature for display, e.g.
/// `global kernel add_vectors(a: FLOAT32[1024]) -> FLOAT32[1024]`.
pub fn format_kernel_signature(kernel: &Kernel) -> String {
    let mut sig = String::new();
    sig.push_str(kernel.scope.keyword());
    sig.push_str(" kernel ");
    sig.push_str(&kernel.name);

    sig.push('(');
    let args: Vec<String> = kernel.arguments.iter().map(format_variable).collect();
    sig.push_str(&args.join(", "));
    sig.push(')');

    if let Some(ret) = &kernel.return_value {
        sig.push_str(&format!(" -> {}", format_variable_type(ret)));
    }

    sig
}
