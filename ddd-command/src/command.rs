use crate::command_output::CommandOutput;
use std::any::Any;
use std::fmt;

/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，通常会修改领域状态。
/// - 建议保持语义化的“动宾结构”命名，如 `CreateUser`、`CloseOrder`；
/// - 一般通过 `#[derive(Command)]` 实现，`NAME` 默认取类型的简单名。
///
/// 关联项：
/// - `NAME`：命令的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
/// - `Output`：处理器的返回值类型；无返回值的命令使用 `()`。
pub trait Command: fmt::Debug + Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 处理器返回值
    type Output: CommandOutput;
}

/// 类型擦除后的命令视图
///
/// 拦截器对所有命令类型通用，只能通过该视图读取命令：
/// 名称、`Debug` 渲染，以及按需向下转型。
pub trait DynCommand: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

impl<C: Command> DynCommand for C {
    fn name(&self) -> &'static str {
        C::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
