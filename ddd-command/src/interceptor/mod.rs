//! 命令拦截器（interceptor）
//!
//! 拦截器在处理器执行前后被调用，用于观察或否决一次命令分发：
//! - `CommandInterceptor`：`before`/`after` 两个钩子；
//! - `InterceptorChain`：按注册顺序编排钩子，并记录处理结果；
//! - `LoggingInterceptor`：记录命令进入与退出的诊断日志；
//! - `LogSink`：诊断日志的输出端，默认实现基于 `tracing`。
//!
use crate::{
    command_handler::HandlerDescriptor, dispatch_context::DispatchContext, error::AppError,
};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

pub mod chain;
pub mod logging;
pub mod sink;

pub use chain::InterceptorChain;
pub use logging::{LoggingConfig, LoggingInterceptor};
pub use sink::{LogSink, TracingSink};

/// 命令拦截器
///
/// 注册一次、调用多次；不同命令的分发可能并发进行，因此要求 `Send + Sync`。
pub trait CommandInterceptor: Send + Sync {
    /// 拦截器名称（用于诊断与否决错误）
    fn name(&self) -> &str {
        "interceptor"
    }

    /// 处理器执行前调用，此时结果尚未确定。
    ///
    /// 返回错误将中止分发：后续拦截器的 `before`、处理器本身，
    /// 以及所有拦截器（包括已执行过 `before` 的）的 `after` 都不会被调用，
    /// 错误原样返回给调用方。
    fn before(
        &self,
        _ctx: &DispatchContext<'_>,
        _handler: &HandlerDescriptor,
    ) -> Result<(), AppError> {
        Ok(())
    }

    /// 处理器执行后调用（成功或失败），此时结果已确定。
    fn after(&self, _ctx: &DispatchContext<'_>, _handler: &HandlerDescriptor) {}
}

/// 在 panic 隔离中执行诊断代码；panic 时返回其消息
pub(crate) fn isolate(f: impl FnOnce()) -> Result<(), String> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .map_err(|payload| panic_message(payload.as_ref()).to_owned())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}
