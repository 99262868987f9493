use crate::error::CommonError;

/// Result of file-system and configuration helpers
pub type CommonResult<T> = Result<T, CommonError>;
