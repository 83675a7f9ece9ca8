//! Extension contracts: the polymorphism boundary of the compiler.
//!
//! Publish, deploy, and notification backends live outside this crate.
//! The compiler holds only these capability references, so backends can
//! be added without touching it. All three are object safe.

use drydock_core::Section;

use crate::context::RunContext;
use crate::sink::InstructionSink;

/// Capability of the publish phase: appends the instructions that publish
/// the build artifact.
///
/// `write` may only append to the given sink. It must not mutate the
/// manifest or other extensions. Writing nothing is legal. There is no
/// error channel: a backend resolves its failures before compile time or
/// emits instructions that fail at execution time.
pub trait Publishable {
    fn write(&self, sink: &mut dyn InstructionSink);
}

/// Capability of the deploy phase.
///
/// Structurally identical to [`Publishable`], but kept distinct: publish
/// and deploy are separate pipeline phases, and the compiler guarantees
/// publish instructions precede deploy instructions.
pub trait Deployable {
    fn write(&self, sink: &mut dyn InstructionSink);
}

/// Capability of the notification phase.
///
/// Consumes a [`RunContext`] to decide and trigger a notification once a
/// run has finished. Never touches the instruction sink, and the compiler
/// never invokes it; the executor does, after execution.
pub trait Notifiable {
    fn notify(&self, context: &dyn RunContext);
}

impl<T: Publishable + ?Sized> Publishable for Box<T> {
    fn write(&self, sink: &mut dyn InstructionSink) {
        (**self).write(sink);
    }
}

impl<T: Deployable + ?Sized> Deployable for Box<T> {
    fn write(&self, sink: &mut dyn InstructionSink) {
        (**self).write(sink);
    }
}

impl<T: Notifiable + ?Sized> Notifiable for Box<T> {
    fn notify(&self, context: &dyn RunContext) {
        (**self).notify(context);
    }
}

// A raw section that no backend has been bound to contributes nothing.
impl Publishable for Section {
    fn write(&self, _sink: &mut dyn InstructionSink) {}
}

impl Deployable for Section {
    fn write(&self, _sink: &mut dyn InstructionSink) {}
}

impl Notifiable for Section {
    fn notify(&self, _context: &dyn RunContext) {}
}
