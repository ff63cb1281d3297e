//! 拦截器链（InterceptorChain）
//!
//! 一次分发的完整流程：
//! 1. 创建 `Pending` 状态的 `DispatchContext`；
//! 2. 按注册顺序调用 `before`，任一失败立即返回该错误（不执行处理器，也不调用任何 `after`）；
//! 3. 执行处理器并将结果记录进上下文；
//! 4. 按同样的注册顺序（而非逆序）调用 `after`；
//! 5. 把处理器的原始结果交还调用方。
//!
use super::{CommandInterceptor, isolate};
use crate::{
    command::DynCommand, command_handler::HandlerDescriptor, command_output::CommandOutput,
    context::AppContext, dispatch_context::DispatchContext, error::AppError,
};
use std::future::Future;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn CommandInterceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加拦截器（注册顺序即调用顺序）
    pub fn with(mut self, interceptor: Arc<dyn CommandInterceptor>) -> Self {
        self.push(interceptor);
        self
    }

    pub fn push(&mut self, interceptor: Arc<dyn CommandInterceptor>) {
        self.interceptors.push(interceptor);
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// 已注册拦截器的名称（按调用顺序）
    pub fn names(&self) -> Vec<&str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// 在拦截器链中执行一次分发
    ///
    /// `invoke` 是尚未轮询的处理器 future，只有全部 `before` 通过后才会被 await。
    pub async fn proceed<O, F>(
        &self,
        app: &AppContext,
        command: &dyn DynCommand,
        handler: &HandlerDescriptor,
        invoke: F,
    ) -> Result<O, AppError>
    where
        O: CommandOutput,
        F: Future<Output = Result<O, AppError>>,
    {
        let mut ctx = DispatchContext::new(app, command);

        self.before_handling(&ctx, handler)?;

        let result = invoke.await;
        ctx.resolve(&result);

        self.after_handling(&ctx, handler);

        result
    }

    fn before_handling(
        &self,
        ctx: &DispatchContext<'_>,
        handler: &HandlerDescriptor,
    ) -> Result<(), AppError> {
        for interceptor in &self.interceptors {
            if let Err(err) = interceptor.before(ctx, handler) {
                tracing::debug!(
                    interceptor = interceptor.name(),
                    command = ctx.command().name(),
                    error = %err,
                    "dispatch aborted before handling"
                );
                return Err(err);
            }
        }

        Ok(())
    }

    // after 钩子的 panic 被隔离在诊断路径内，不影响命令结果
    fn after_handling(&self, ctx: &DispatchContext<'_>, handler: &HandlerDescriptor) {
        for interceptor in &self.interceptors {
            if let Err(panic) = isolate(|| interceptor.after(ctx, handler)) {
                tracing::error!(
                    interceptor = interceptor.name(),
                    command = ctx.command().name(),
                    panic = %panic,
                    "interceptor panicked after handling"
                );
            }
        }
    }
}
