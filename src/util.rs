/// Numeric conversion helpers.
///
/// The emitter's target machine only holds integers, so number tokens are
/// narrowed from `f64` here with well-defined behavior for every input.
pub mod num;
/// Token formatting for reports.
///
/// Renders token sequences the way the command-line shell prints them.
pub mod format;
