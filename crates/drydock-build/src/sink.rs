/// Ordered instruction-accepting target the compiler writes to.
///
/// Environment bindings and commands form a single combined instruction
/// stream: implementations must preserve call order across both methods.
/// A sink is exclusively owned by one compilation; parallel compiles each
/// need their own sink.
pub trait InstructionSink {
    /// Record one environment binding.
    fn write_env(&mut self, key: &str, value: &str);

    /// Record one command. Empty commands are passed through unchanged;
    /// rejecting them is the sink's decision.
    fn write_cmd(&mut self, command: &str);
}

impl<S: InstructionSink + ?Sized> InstructionSink for &mut S {
    fn write_env(&mut self, key: &str, value: &str) {
        (**self).write_env(key, value);
    }

    fn write_cmd(&mut self, command: &str) {
        (**self).write_cmd(command);
    }
}
