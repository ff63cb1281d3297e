//! 日志拦截器（LoggingInterceptor）
//!
//! 每次分发记录一条进入日志与至多一条退出日志：
//! - 进入：`Incoming command: [CommandName]`（info）；
//! - 成功：`[CommandName] executed successfully with a [marker] return value`（info），
//!   marker 为 `null`、`void` 或返回值类型的简单名；
//! - 失败：`[CommandName] failed`（warn，附带错误）。
//!
//! info 日志先探测级别，未开启时不构造任何消息；失败日志不受该探测影响，总会输出。
//! 输出端（包括级别探测）抛出的 panic 被捕获并以 `tracing::error!` 报告，分发照常进行。
//!
use super::{CommandInterceptor, isolate};
use super::sink::{LogSink, TracingSink};
use crate::{
    command_handler::HandlerDescriptor,
    dispatch_context::{DispatchContext, Outcome},
    error::AppError,
};
use serde::Deserialize;
use std::any::type_name;
use std::sync::Arc;

/// 日志拦截器配置
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// 输出端名称；缺省时使用拦截器自身的类型路径
    pub sink_name: Option<String>,
}

pub struct LoggingInterceptor {
    sink: Arc<dyn LogSink>,
}

impl Default for LoggingInterceptor {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingInterceptor {
    pub fn new() -> Self {
        Self::with_sink_name(type_name::<Self>())
    }

    pub fn with_sink_name(name: impl Into<String>) -> Self {
        Self::with_sink(Arc::new(TracingSink::new(name)))
    }

    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    pub fn from_config(config: &LoggingConfig) -> Self {
        match &config.sink_name {
            Some(name) => Self::with_sink_name(name.clone()),
            None => Self::new(),
        }
    }

    pub fn sink_name(&self) -> &str {
        self.sink.name()
    }
}

impl LoggingInterceptor {
    // 输出端的任何 panic 都留在诊断路径内，不影响分发
    fn guarded(&self, command: &str, emit: impl FnOnce()) {
        if let Err(panic) = isolate(emit) {
            tracing::error!(
                sink = self.sink.name(),
                command,
                panic = %panic,
                "log sink panicked"
            );
        }
    }
}

impl CommandInterceptor for LoggingInterceptor {
    fn name(&self) -> &str {
        "logging"
    }

    fn before(
        &self,
        ctx: &DispatchContext<'_>,
        _handler: &HandlerDescriptor,
    ) -> Result<(), AppError> {
        let command = ctx.command();

        self.guarded(command.name(), || {
            if !self.sink.is_info_enabled() {
                return;
            }
            self.sink
                .info(&format!("Incoming command: [{}]", command.name()), &command);
        });

        Ok(())
    }

    fn after(&self, ctx: &DispatchContext<'_>, _handler: &HandlerDescriptor) {
        let command = ctx.command();
        let outcome = ctx.outcome();
        debug_assert!(
            !matches!(outcome, Outcome::Pending),
            "after called on an unresolved dispatch"
        );

        self.guarded(command.name(), || {
            let info_enabled = self.sink.is_info_enabled();

            match outcome {
                Outcome::Succeeded(output) => {
                    if info_enabled {
                        self.sink.info(
                            &format!(
                                "[{}] executed successfully with a [{}] return value",
                                command.name(),
                                output.marker()
                            ),
                            &command,
                        );
                    }
                }
                Outcome::Failed(err) => {
                    self.sink.warn(&format!("[{}] failed", command.name()), err);
                }
                Outcome::Pending => {}
            }
        });
    }
}
