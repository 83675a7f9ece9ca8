/// Read-only metadata about one build run.
///
/// Constructed by the executor once per run, independent of the manifest's
/// compile-time life, and handed to [`Notifiable`](crate::Notifiable) at
/// notification time. The compiler never creates or consumes one.
pub trait RunContext {
    /// Hostname of the system coordinating the run.
    fn host(&self) -> &str;

    /// Repository owner.
    fn owner(&self) -> &str;

    /// Repository name.
    fn name(&self) -> &str;

    /// Branch the run was triggered on.
    fn branch(&self) -> &str;

    /// Revision hash being built.
    fn hash(&self) -> &str;

    /// Outcome of the run, e.g. `Success` or `Failure`.
    fn status(&self) -> &str;

    /// Commit message.
    fn message(&self) -> &str;

    /// Commit author.
    fn author(&self) -> &str;

    /// Reference to the author's avatar image.
    fn avatar(&self) -> &str;

    /// Run duration in seconds.
    fn duration(&self) -> u64;

    /// Run duration formatted for humans, e.g. `1m30s`.
    fn human_duration(&self) -> String;
}
