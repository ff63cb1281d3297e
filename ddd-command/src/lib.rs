//! 应用层命令分发（ddd-command）
//!
//! 在进程内按类型把命令路由到处理器，并在处理器前后执行拦截器链：
//! - 命令与返回值（`command`、`command_output`）：以静态名称参与日志与路由；
//! - 处理器与总线（`command_handler`、`command_bus`、`inmemory_command_bus`）；
//! - 单次分发上下文（`dispatch_context`）：`Pending` → `Succeeded | Failed` 两阶段状态；
//! - 拦截器（`interceptor`）：`before`/`after` 钩子、拦截器链与日志拦截器。
//!
//! 典型用法：
//! ```rust
//! use ddd_command::{AppContext, AppError, Command, CommandBus, CommandHandler, InMemoryCommandBus};
//! use ddd_command::interceptor::LoggingInterceptor;
//! use std::sync::Arc;
//!
//! #[derive(Debug, Command)]
//! #[command(output = u64)]
//! struct Add(u64, u64);
//!
//! struct AddHandler;
//!
//! #[async_trait::async_trait]
//! impl CommandHandler<Add> for AddHandler {
//!     async fn handle(&self, _ctx: &AppContext, cmd: &Add) -> Result<u64, AppError> {
//!         Ok(cmd.0 + cmd.1)
//!     }
//! }
//!
//! # tokio_test_block_on(async {
//! let bus = InMemoryCommandBus::new().with_interceptor(Arc::new(LoggingInterceptor::new()));
//! bus.register::<Add, _>(Arc::new(AddHandler))?;
//!
//! let sum = bus.dispatch(&AppContext::default(), Add(1, 2)).await?;
//! assert_eq!(sum, 3);
//! # Ok::<(), AppError>(())
//! # }).unwrap();
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```
//!
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod command_output;
pub mod context;
pub mod dispatch_context;
pub mod error;
pub mod inmemory_command_bus;
pub mod interceptor;

pub use command::Command;
pub use command_bus::CommandBus;
pub use command_handler::{CommandHandler, HandlerDescriptor};
pub use command_output::{CommandOutput, OutputMarker};
pub use context::AppContext;
pub use dispatch_context::{DispatchContext, Outcome};
pub use error::AppError;
pub use inmemory_command_bus::InMemoryCommandBus;
pub use interceptor::{CommandInterceptor, InterceptorChain};

pub use ddd_command_macros::{Command, CommandOutput};

// 允许在本 crate 内部通过 ::ddd_command 进行自引用，
// 以便派生宏在本 crate 的单元测试中也能解析到 ::ddd_command 路径。
extern crate self as ddd_command;
