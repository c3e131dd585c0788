//! End-to-end trace scenarios: build kernel trees bottom-up the way a
//! parser would, run the trace printer over them, and check the
//! emitted records.

use kernelang::{
    Alias, Assignment, AstPrinter, Binary, DataType, IdGen, Kernel, KernelScope, Node, Tensor,
    Variable,
};

fn vec1024(ids: &IdGen, name: &str) -> Tensor {
    Tensor::new(ids, DataType::Float32, name, vec![1024]).expect("non-empty shape")
}

/// `global kernel add_vectors(a, b) -> out { out = a + b }`
fn build_add_vectors(ids: &IdGen) -> Kernel {
    let a: Variable = vec1024(ids, "a").into();
    let b: Variable = vec1024(ids, "b").into();
    let out: Variable = vec1024(ids, "out").into();

    let sum = Binary::add(
        ids,
        Node::Tensor(vec1024(ids, "a")),
        Node::Tensor(vec1024(ids, "b")),
    );
    let assign = Assignment::new(ids, Node::Tensor(vec1024(ids, "out")), Node::Binary(sum));

    let mut kernel = Kernel::new(
        ids,
        "add_vectors",
        KernelScope::Global,
        vec![a, b],
        Some(out),
    );
    kernel.body.push(Node::Assignment(assign));
    kernel
}

#[test]
fn test_add_vectors_trace_has_exactly_one_record() {
    let ids = IdGen::new();
    let kernel = build_add_vectors(&ids);

    let mut printer = AstPrinter::new();
    kernel.dispatch(&mut printer);

    // One record despite the tree holding several nodes: every variant
    // below the kernel terminates the trace.
    assert_eq!(printer.trace().matches("-- Kernel").count(), 1);
}

#[test]
fn test_add_vectors_trace_contents() {
    let ids = IdGen::new();
    let kernel = build_add_vectors(&ids);

    let mut printer = AstPrinter::new();
    kernel.dispatch(&mut printer);

    let arg_a = kernel.arguments[0].id();
    let arg_b = kernel.arguments[1].id();
    let ret = kernel.return_value.as_ref().unwrap().id();
    let stmt = kernel.body[0].id();

    let expected = format!(
        "-- Kernel\n  id:    {id}\n  name:  add_vectors\n  scope: GLOBAL\n  args:  {arg_a}, {arg_b}\n  ret:   {ret}\n  body:  {stmt}\n",
        id = kernel.id
    );
    assert_eq!(printer.trace(), expected);
}

#[test]
fn test_deterministic_ids_from_fresh_generator() {
    let ids = IdGen::new();
    let kernel = build_add_vectors(&ids);

    // Construction order above: a, b, out, then the operand and target
    // tensors, the add, the assignment, and finally the kernel itself.
    assert_eq!(kernel.arguments[0].id().as_u64(), 0);
    assert_eq!(kernel.arguments[1].id().as_u64(), 1);
    assert_eq!(kernel.return_value.as_ref().unwrap().id().as_u64(), 2);
    assert_eq!(kernel.body[0].id().as_u64(), 7);
    assert_eq!(kernel.id.as_u64(), 8);
}

#[test]
fn test_void_kernel_emits_void_marker() {
    let ids = IdGen::new();
    let x: Variable = vec1024(&ids, "x").into();
    let mut kernel = Kernel::new(&ids, "consume", KernelScope::Global, vec![x], None);
    let view = Alias::new(&ids, Node::Tensor(vec1024(&ids, "x")));
    kernel.body.push(Node::Alias(view));

    let mut printer = AstPrinter::new();
    kernel.dispatch(&mut printer);

    assert!(printer.trace().contains("  ret:   void\n"));
    assert_eq!(printer.trace().matches("-- Kernel").count(), 1);
}

#[test]
fn test_kernel_call_statement_is_listed_but_not_expanded() {
    let ids = IdGen::new();
    let helper = Kernel::new(&ids, "helper", KernelScope::Device, vec![], None);

    let arg: Variable = vec1024(&ids, "x").into();
    let call = kernelang::KernelCall::new(
        &ids,
        kernelang::KernelRef::to(&helper),
        vec![vec1024(&ids, "x").into()],
    );
    let mut caller = Kernel::new(&ids, "entry", KernelScope::Global, vec![arg], None);
    caller.body.push(Node::KernelCall(call));

    let mut printer = AstPrinter::new();
    caller.dispatch(&mut printer);

    // The call shows up as a body id in the caller's record, but the
    // callee kernel is never traced: the edge is a non-owning ref.
    assert_eq!(printer.trace().matches("-- Kernel").count(), 1);
    assert!(printer.trace().contains("  name:  entry\n"));
    assert!(!printer.trace().contains("helper"));
    assert!(printer
        .trace()
        .contains(&format!("  body:  {}\n", caller.body[0].id())));
}

#[test]
fn test_trace_survives_save_round_trip() {
    let ids = IdGen::new();
    let kernel = build_add_vectors(&ids);

    let mut printer = AstPrinter::new();
    kernel.dispatch(&mut printer);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("add_vectors.trace");
    printer.save(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), printer.trace());
}

#[test]
fn test_reset_then_retrace_is_byte_identical() {
    let ids = IdGen::new();
    let kernel = build_add_vectors(&ids);

    let mut printer = AstPrinter::new();
    kernel.dispatch(&mut printer);
    let first = printer.trace().to_string();

    printer.reset();
    assert!(printer.trace().is_empty());
    kernel.dispatch(&mut printer);

    assert_eq!(printer.trace(), first);
}
