/// Specifies a computational quota for a piece of work.
/// The main purpose is to allow to stop a computation in reaction to external events such
/// as a deadline, user cancellation, etc.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}
