//! Instruction model: the closed set of instruction kinds in two parallel
//! representations.
//!
//! The *family* representation is a bare trait with four unrelated sibling
//! implementations. Retrieving the discriminant is itself a virtual call,
//! and a caller that wants the concrete variant must either branch on the
//! tag and downcast, probe the concrete type directly, or stay behind the
//! trait and let object identity resolve the call.
//!
//! The *sealed* representation is one enum whose tag stores the
//! discriminant exactly once; `kind` is a plain non-virtual read and
//! `observe` is resolved by an exhaustive match. Both representations are
//! benchmarked separately and must stay distinct.
//!
//! Accessors deliberately return fixed constants. The payload content is
//! immaterial to the experiment; only the shape of the dispatch is measured.

use std::any::Any;
use std::fmt;

use crate::dispatch::error::DispatchError;
use crate::dispatch::sink::Sink;

/// Discriminant of an instruction variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrKind {
    Foo,
    Bar,
    Baz,
    FooBar,
}

impl InstrKind {
    pub const ALL: [InstrKind; 4] = [
        InstrKind::Foo,
        InstrKind::Bar,
        InstrKind::Baz,
        InstrKind::FooBar,
    ];
}

impl fmt::Display for InstrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstrKind::Foo => "foo",
            InstrKind::Bar => "bar",
            InstrKind::Baz => "baz",
            InstrKind::FooBar => "foobar",
        };
        f.write_str(name)
    }
}

/// The shared capability of the family representation.
pub trait Instruction {
    /// The discriminant. Always agrees with the concrete type for
    /// well-formed instructions.
    fn kind(&self) -> InstrKind;

    fn as_any(&self) -> &dyn Any;

    /// Invoke the variant's accessor and forward its result to the sink,
    /// resolved entirely through the trait object.
    fn observe(&self, sink: &mut dyn Sink);
}

/// Implemented by the four concrete instruction types; ties each to its
/// discriminant so checked downcasts can report which tag was violated.
pub trait Concrete: Instruction + Sized + 'static {
    const KIND: InstrKind;
}

/// Checked downcast from the family capability to a concrete variant.
/// Failure means the discriminant lied about the concrete type.
pub fn downcast<T: Concrete>(instr: &dyn Instruction) -> Result<&T, DispatchError> {
    instr
        .as_any()
        .downcast_ref::<T>()
        .ok_or(DispatchError::TagMismatch { tag: T::KIND })
}

#[derive(Debug)]
pub struct Foo;
#[derive(Debug)]
pub struct Bar;
#[derive(Debug)]
pub struct Baz;
#[derive(Debug)]
pub struct FooBar;

impl Foo {
    pub fn value(&self) -> i32 {
        0
    }
}

impl Bar {
    pub fn label(&self) -> &'static str {
        ""
    }
}

impl Baz {
    pub fn scale(&self) -> f64 {
        0.0
    }
}

impl FooBar {
    pub fn blend(&self) -> f32 {
        0.0
    }
}

impl Instruction for Foo {
    fn kind(&self) -> InstrKind {
        InstrKind::Foo
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn observe(&self, sink: &mut dyn Sink) {
        sink.int(self.value());
    }
}

impl Instruction for Bar {
    fn kind(&self) -> InstrKind {
        InstrKind::Bar
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn observe(&self, sink: &mut dyn Sink) {
        sink.text(self.label());
    }
}

impl Instruction for Baz {
    fn kind(&self) -> InstrKind {
        InstrKind::Baz
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn observe(&self, sink: &mut dyn Sink) {
        sink.double(self.scale());
    }
}

impl Instruction for FooBar {
    fn kind(&self) -> InstrKind {
        InstrKind::FooBar
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn observe(&self, sink: &mut dyn Sink) {
        sink.float(self.blend());
    }
}

impl Concrete for Foo {
    const KIND: InstrKind = InstrKind::Foo;
}

impl Concrete for Bar {
    const KIND: InstrKind = InstrKind::Bar;
}

impl Concrete for Baz {
    const KIND: InstrKind = InstrKind::Baz;
}

impl Concrete for FooBar {
    const KIND: InstrKind = InstrKind::FooBar;
}

/// The sealed representation: one closed enum, discriminant stored once in
/// the tag.
pub enum SealedInstr {
    Foo(Foo),
    Bar(Bar),
    Baz(Baz),
    FooBar(FooBar),
}

impl SealedInstr {
    pub fn kind(&self) -> InstrKind {
        match self {
            SealedInstr::Foo(_) => InstrKind::Foo,
            SealedInstr::Bar(_) => InstrKind::Bar,
            SealedInstr::Baz(_) => InstrKind::Baz,
            SealedInstr::FooBar(_) => InstrKind::FooBar,
        }
    }

    pub fn observe(&self, sink: &mut dyn Sink) {
        match self {
            SealedInstr::Foo(foo) => sink.int(foo.value()),
            SealedInstr::Bar(bar) => sink.text(bar.label()),
            SealedInstr::Baz(baz) => sink.double(baz.scale()),
            SealedInstr::FooBar(foobar) => sink.float(foobar.blend()),
        }
    }
}
