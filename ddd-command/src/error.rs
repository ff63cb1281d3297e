#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("authorization: {0}")]
    Authorization(String),

    #[error("infra: {0}")]
    Infra(String),

    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("rejected by interceptor: interceptor={interceptor}, reason={reason}")]
    Rejected { interceptor: String, reason: String },
}

impl AppError {
    /// 拦截器在 `before` 阶段否决本次分发时使用
    pub fn rejected(interceptor: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Rejected {
            interceptor: interceptor.into(),
            reason: reason.into(),
        }
    }
}
