use crate::error::{ConvertError, EvalError, LexError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The first failure of any stage, which aborts the whole expression.
pub enum PipelineError {
    /// Tokenization failed.
    Lex(LexError),
    /// Infix-to-postfix conversion failed.
    Convert(ConvertError),
    /// Postfix evaluation failed.
    Eval(EvalError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Convert(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Convert(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}

impl From<LexError> for PipelineError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ConvertError> for PipelineError {
    fn from(e: ConvertError) -> Self {
        Self::Convert(e)
    }
}

impl From<EvalError> for PipelineError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
