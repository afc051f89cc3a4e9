/// Stack depth used by [`Limits::fixed`].
pub const FIXED_STACK_DEPTH: usize = 256;
/// Output length used by [`Limits::fixed`].
pub const FIXED_OUTPUT_LEN: usize = 510;

/// Optional ceilings on the buffers used while converting and evaluating.
///
/// Capacity is configuration, not semantics: the default is unbounded and every
/// buffer grows with its input. A ceiling only turns unusually large inputs
/// into a `CapacityExceeded` error.
///
/// # Example
/// ```
/// use rpncalc::config::Limits;
///
/// let limits = Limits::default().with_stack_depth(8);
/// assert_eq!(limits.max_stack_depth, Some(8));
/// assert_eq!(limits.max_output_len, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Ceiling for the converter's operator stack and the evaluator's operand
    /// stack.
    pub max_stack_depth: Option<usize>,
    /// Ceiling for the converter's postfix output.
    pub max_output_len:  Option<usize>,
}

impl Limits {
    /// Fixed-size buffers: 256 stack entries and 510 postfix tokens.
    #[must_use]
    pub const fn fixed() -> Self {
        Self { max_stack_depth: Some(FIXED_STACK_DEPTH),
               max_output_len:  Some(FIXED_OUTPUT_LEN), }
    }

    /// Caps both the operator stack and the operand stack at `depth` entries.
    #[must_use]
    pub const fn with_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = Some(depth);
        self
    }

    /// Caps the postfix output at `len` tokens.
    #[must_use]
    pub const fn with_output_len(mut self, len: usize) -> Self {
        self.max_output_len = Some(len);
        self
    }
}
