use std::error::Error;
use std::fmt;

/// `TracingSink` 输出事件所使用的 target
pub const TARGET: &str = "ddd_command::interceptor";

/// 诊断日志输出端
///
/// 实现方自行保证线程安全；拦截器只持有共享引用，不额外加锁。
pub trait LogSink: Send + Sync {
    /// 输出端名称
    fn name(&self) -> &str;

    /// 开销很小的级别探测，决定是否值得构造消息
    fn is_info_enabled(&self) -> bool;

    fn info(&self, message: &str, attachment: &dyn fmt::Debug);

    fn warn(&self, message: &str, cause: &(dyn Error + 'static));
}

/// 基于 `tracing` 的输出端
///
/// 探测与输出都在名为 `sink`、携带 `name` 字段的 span 内进行，
/// 因此每个命名输出端可以单独设定级别，例如：
/// `warn,ddd_command::interceptor[sink{name=audit.commands}]=info`。
#[derive(Clone, Debug)]
pub struct TracingSink {
    name: String,
}

impl TracingSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    // 每次调用时创建，使其遵循当前生效的订阅者
    fn span(&self) -> tracing::Span {
        tracing::info_span!(target: TARGET, "sink", name = %self.name)
    }
}

impl LogSink for TracingSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_info_enabled(&self) -> bool {
        self.span()
            .in_scope(|| tracing::enabled!(target: TARGET, tracing::Level::INFO))
    }

    fn info(&self, message: &str, attachment: &dyn fmt::Debug) {
        self.span().in_scope(|| {
            tracing::info!(target: TARGET, detail = ?attachment, "{message}");
        });
    }

    fn warn(&self, message: &str, cause: &(dyn Error + 'static)) {
        self.span().in_scope(|| {
            tracing::warn!(target: TARGET, error = %cause, "{message}");
        });
    }
}
