use crate::{
    command::Command,
    command_bus::CommandBus,
    command_handler::{CommandHandler, HandlerDescriptor},
    context::AppContext,
    error::AppError,
    interceptor::{CommandInterceptor, InterceptorChain},
};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, TypeId};
use std::sync::Arc;

#[derive(Clone)]
struct Registration {
    command: &'static str,
    descriptor: HandlerDescriptor,
    // 实际类型为 `Arc<dyn CommandHandler<C>>`，键与值同一泛型 C
    handler: Arc<dyn Any + Send + Sync>,
}

/// 基于内存的 CommandBus 实现
/// - 通过 TypeId 注册不同 Command 对应的 Handler
/// - 每次分发都经过拦截器链，拦截器在构建总线时一次性装配
pub struct InMemoryCommandBus {
    handlers: DashMap<TypeId, Registration>,
    interceptors: InterceptorChain,
}

impl Default for InMemoryCommandBus {
    fn default() -> Self {
        Self {
            handlers: DashMap::new(),
            interceptors: InterceptorChain::new(),
        }
    }
}

impl InMemoryCommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定拦截器链创建总线
    pub fn with_chain(interceptors: InterceptorChain) -> Self {
        Self {
            handlers: DashMap::new(),
            interceptors,
        }
    }

    /// 追加拦截器（注册顺序即调用顺序）
    pub fn with_interceptor(mut self, interceptor: Arc<dyn CommandInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn interceptors(&self) -> &InterceptorChain {
        &self.interceptors
    }

    /// 注册命令处理器
    pub fn register<C, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let descriptor = HandlerDescriptor::of::<H>();
        let handler: Arc<dyn CommandHandler<C>> = handler;

        match self.handlers.entry(TypeId::of::<C>()) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegisteredCommand { command: C::NAME }),
            Entry::Vacant(slot) => {
                tracing::debug!(
                    command = C::NAME,
                    handler = descriptor.name(),
                    "command handler registered"
                );
                slot.insert(Registration {
                    command: C::NAME,
                    descriptor,
                    handler: Arc::new(handler),
                });
                Ok(())
            }
        }
    }

    /// 获取已注册的命令名列表（只读视图）
    pub fn registered_commands(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| e.value().command).collect()
    }

    fn handler_for<C: Command>(
        &self,
    ) -> Result<(HandlerDescriptor, Arc<dyn CommandHandler<C>>), AppError> {
        // 克隆后立即释放 DashMap 的读锁，避免跨 await 持有
        let Some(registration) = self.handlers.get(&TypeId::of::<C>()).map(|r| r.clone()) else {
            return Err(AppError::HandlerNotFound(C::NAME));
        };

        let handler = registration
            .handler
            .downcast_ref::<Arc<dyn CommandHandler<C>>>()
            .cloned()
            .ok_or(AppError::TypeMismatch {
                expected: C::NAME,
                found: registration.command,
            })?;

        Ok((registration.descriptor, handler))
    }
}

#[async_trait]
impl CommandBus for InMemoryCommandBus {
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError>
    where
        C: Command,
    {
        let (descriptor, handler) = self.handler_for::<C>()?;

        self.interceptors
            .proceed(ctx, &cmd, &descriptor, handler.handle(ctx, &cmd))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch_context::DispatchContext;
    use ddd_command_macros::Command;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::task::JoinSet;

    #[derive(Debug, Command)]
    #[command(output = usize)]
    struct Increment;

    #[derive(Debug, Command)]
    struct Unregistered;

    struct IncrementHandler {
        counter: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CommandHandler<Increment> for IncrementHandler {
        async fn handle(&self, _ctx: &AppContext, _cmd: &Increment) -> Result<usize, AppError> {
            Ok(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
        }
    }

    #[derive(Default)]
    struct Counting {
        before: AtomicUsize,
        after: AtomicUsize,
    }

    impl CommandInterceptor for Counting {
        fn before(
            &self,
            _ctx: &DispatchContext<'_>,
            _handler: &HandlerDescriptor,
        ) -> Result<(), AppError> {
            self.before.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn after(&self, _ctx: &DispatchContext<'_>, _handler: &HandlerDescriptor) {
            self.after.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn increment_handler() -> Arc<IncrementHandler> {
        Arc::new(IncrementHandler {
            counter: Arc::new(AtomicUsize::new(0)),
        })
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn register_and_dispatch_works() {
        let bus = InMemoryCommandBus::new();
        bus.register::<Increment, _>(increment_handler()).unwrap();

        let ctx = AppContext::default();
        assert_eq!(bus.dispatch(&ctx, Increment).await.unwrap(), 1);
        assert_eq!(bus.dispatch(&ctx, Increment).await.unwrap(), 2);
        assert_eq!(bus.registered_commands(), vec!["Increment"]);
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let bus = InMemoryCommandBus::new();
        bus.register::<Increment, _>(increment_handler()).unwrap();

        let err = bus
            .register::<Increment, _>(increment_handler())
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::AlreadyRegisteredCommand {
                command: "Increment"
            }
        ));
    }

    #[tokio::test]
    async fn not_found_error_when_unregistered() {
        let interceptor = Arc::new(Counting::default());
        let bus = InMemoryCommandBus::new().with_interceptor(interceptor.clone());

        let err = bus
            .dispatch(&AppContext::default(), Unregistered)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::HandlerNotFound("Unregistered")));
        assert_eq!(interceptor.before.load(Ordering::SeqCst), 0);
        assert_eq!(interceptor.after.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_dispatch_is_safe() {
        let interceptor = Arc::new(Counting::default());
        let bus = Arc::new(InMemoryCommandBus::new().with_interceptor(interceptor.clone()));
        bus.register::<Increment, _>(increment_handler()).unwrap();

        let mut set = JoinSet::new();
        let ctx = AppContext::default();
        for _ in 0..100 {
            let bus = bus.clone();
            let ctx = ctx.clone();
            set.spawn(async move { bus.dispatch(&ctx, Increment).await.unwrap() });
        }
        let mut results = Vec::new();
        while let Some(res) = set.join_next().await {
            results.push(res.unwrap());
        }
        results.sort_unstable();

        assert_eq!(results.len(), 100);
        assert_eq!(results[0], 1);
        assert_eq!(results[99], 100);
        assert_eq!(interceptor.before.load(Ordering::SeqCst), 100);
        assert_eq!(interceptor.after.load(Ordering::SeqCst), 100);
    }
}
