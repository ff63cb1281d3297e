use async_trait::async_trait;
use ddd_command::interceptor::{LoggingConfig, LoggingInterceptor};
use ddd_command::{
    AppContext, AppError, Command, CommandBus, CommandHandler, CommandInterceptor, CommandOutput,
    DispatchContext, HandlerDescriptor, InMemoryCommandBus,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Command)]
#[command(output = Option<OrderConfirmation>)]
struct PlaceOrder {
    sku: String,
    quantity: u32,
}

#[derive(Debug, CommandOutput)]
struct OrderConfirmation {
    order_no: u64,
}

#[derive(Debug, Command)]
struct CancelOrder {
    order_no: u64,
}

struct PlaceOrderHandler;

#[async_trait]
impl CommandHandler<PlaceOrder> for PlaceOrderHandler {
    async fn handle(
        &self,
        _ctx: &AppContext,
        cmd: &PlaceOrder,
    ) -> Result<Option<OrderConfirmation>, AppError> {
        if cmd.quantity == 0 {
            return Err(AppError::Validation(format!("empty order: sku={}", cmd.sku)));
        }
        Ok(Some(OrderConfirmation { order_no: 1001 }))
    }
}

struct CancelOrderHandler;

#[async_trait]
impl CommandHandler<CancelOrder> for CancelOrderHandler {
    async fn handle(&self, _ctx: &AppContext, cmd: &CancelOrder) -> Result<(), AppError> {
        println!("CancelOrder: order_no={}", cmd.order_no);
        Ok(())
    }
}

/// 只允许带执行者的调用
struct RequireActor;

impl CommandInterceptor for RequireActor {
    fn name(&self) -> &str {
        "require-actor"
    }

    fn before(
        &self,
        ctx: &DispatchContext<'_>,
        _handler: &HandlerDescriptor,
    ) -> Result<(), AppError> {
        ctx.app_context()
            .actor_id()
            .map(|_| ())
            .ok_or_else(|| AppError::rejected(self.name(), "anonymous caller"))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=ddd_command=info cargo run --example logging_interceptor
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = LoggingConfig {
        sink_name: Some("orders.audit".into()),
    };
    let bus = InMemoryCommandBus::new()
        .with_interceptor(Arc::new(RequireActor))
        .with_interceptor(Arc::new(LoggingInterceptor::from_config(&config)));
    bus.register::<PlaceOrder, _>(Arc::new(PlaceOrderHandler))?;
    bus.register::<CancelOrder, _>(Arc::new(CancelOrderHandler))?;

    let ctx = AppContext::builder()
        .correlation_id("cor-1".into())
        .actor_type("user".into())
        .actor_id("u-1".into())
        .build();

    let confirmation = bus
        .dispatch(
            &ctx,
            PlaceOrder {
                sku: "sku-42".into(),
                quantity: 2,
            },
        )
        .await?;
    if let Some(confirmation) = confirmation {
        println!("order placed: {}", confirmation.order_no);
    }

    bus.dispatch(&ctx, CancelOrder { order_no: 1001 }).await?;

    // 处理器失败 -> 记录 warn 日志，错误原样返回
    if let Err(err) = bus
        .dispatch(
            &ctx,
            PlaceOrder {
                sku: "sku-42".into(),
                quantity: 0,
            },
        )
        .await
    {
        eprintln!("failed as expected: {err}");
    }

    // 匿名调用 -> 被拦截器否决，处理器与日志均不执行
    if let Err(AppError::Rejected {
        interceptor,
        reason,
    }) = bus
        .dispatch(&AppContext::default(), CancelOrder { order_no: 7 })
        .await
    {
        eprintln!("rejected by {interceptor}: {reason}");
    }

    Ok(())
}
