//! 单次分发上下文（DispatchContext）
//!
//! 一次命令分发对应一个上下文，状态只有两个阶段：
//! - `Pending`：处理器尚未执行，拦截器的 `before` 只能读取命令；
//! - 已决：`Succeeded`（携带返回值）或 `Failed`（携带错误），`after` 观察该阶段。
//!
//! 阶段转换只由拦截器链完成（crate 内可见的 `&mut` 接口），
//! 拦截器拿到的是 `&DispatchContext`，只能读取。
//!
use crate::{
    command::DynCommand, command_output::CommandOutput, context::AppContext, error::AppError,
};
use std::fmt;

/// 分发结果的只读视图
#[derive(Clone, Copy)]
pub enum Outcome<'a> {
    /// 处理器尚未执行
    Pending,
    /// 处理器成功返回（返回值可能是 `void` 或 `null`）
    Succeeded(&'a dyn CommandOutput),
    /// 处理器返回错误
    Failed(&'a AppError),
}

impl fmt::Debug for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pending => f.write_str("Pending"),
            Outcome::Succeeded(output) => {
                f.debug_tuple("Succeeded").field(&output.marker()).finish()
            }
            Outcome::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}

pub struct DispatchContext<'a> {
    app: &'a AppContext,
    command: &'a dyn DynCommand,
    outcome: Outcome<'a>,
}

impl<'a> DispatchContext<'a> {
    pub(crate) fn new(app: &'a AppContext, command: &'a dyn DynCommand) -> Self {
        Self {
            app,
            command,
            outcome: Outcome::Pending,
        }
    }

    /// 记录处理器的执行结果（每次分发仅调用一次）
    pub(crate) fn resolve<O: CommandOutput>(&mut self, result: &'a Result<O, AppError>) {
        debug_assert!(
            matches!(self.outcome, Outcome::Pending),
            "dispatch context resolved twice"
        );

        self.outcome = match result {
            Ok(output) => Outcome::Succeeded(output),
            Err(err) => Outcome::Failed(err),
        };
    }

    pub fn command(&self) -> &'a dyn DynCommand {
        self.command
    }

    pub fn app_context(&self) -> &'a AppContext {
        self.app
    }

    pub fn outcome(&self) -> Outcome<'a> {
        self.outcome
    }

    /// 处理器执行前为 `None`，执行后为权威结果
    pub fn is_successful(&self) -> Option<bool> {
        match self.outcome {
            Outcome::Pending => None,
            Outcome::Succeeded(_) => Some(true),
            Outcome::Failed(_) => Some(false),
        }
    }

    /// 仅在成功时有值
    pub fn result(&self) -> Option<&'a dyn CommandOutput> {
        match self.outcome {
            Outcome::Succeeded(output) => Some(output),
            _ => None,
        }
    }

    /// 仅在失败时有值
    pub fn exception(&self) -> Option<&'a AppError> {
        match self.outcome {
            Outcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_output::OutputMarker;
    use ddd_command_macros::Command;

    #[derive(Debug, Command)]
    #[command(output = Option<u32>)]
    struct Ping;

    #[test]
    fn pending_before_resolution() {
        let app = AppContext::default();
        let ctx = DispatchContext::new(&app, &Ping);

        assert_eq!(ctx.command().name(), "Ping");
        assert_eq!(ctx.is_successful(), None);
        assert!(ctx.result().is_none());
        assert!(ctx.exception().is_none());
        assert!(matches!(ctx.outcome(), Outcome::Pending));
    }

    #[test]
    fn resolved_success_exposes_result_only() {
        let app = AppContext::default();
        let result: Result<Option<u32>, AppError> = Ok(None);
        let mut ctx = DispatchContext::new(&app, &Ping);
        ctx.resolve(&result);

        assert_eq!(ctx.is_successful(), Some(true));
        assert_eq!(ctx.result().map(|r| r.marker()), Some(OutputMarker::Null));
        assert!(ctx.exception().is_none());
    }

    #[test]
    fn resolved_failure_exposes_exception_only() {
        let app = AppContext::default();
        let result: Result<Option<u32>, AppError> = Err(AppError::Infra("down".into()));
        let mut ctx = DispatchContext::new(&app, &Ping);
        ctx.resolve(&result);

        assert_eq!(ctx.is_successful(), Some(false));
        assert!(ctx.result().is_none());
        assert!(matches!(ctx.exception(), Some(AppError::Infra(reason)) if reason == "down"));
    }

    #[test]
    fn command_can_be_downcast() {
        let app = AppContext::default();
        let ctx = DispatchContext::new(&app, &Ping);

        assert!(ctx.command().as_any().downcast_ref::<Ping>().is_some());
        assert_eq!(format!("{:?}", ctx.command()), "Ping");
    }
}
