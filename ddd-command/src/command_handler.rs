use crate::{command::Command, context::AppContext, error::AppError};
use async_trait::async_trait;
use std::any::type_name;

#[async_trait]
pub trait CommandHandler<C>: Send + Sync
where
    C: Command,
{
    async fn handle(&self, ctx: &AppContext, cmd: &C) -> Result<C::Output, AppError>;
}

/// 处理器描述（注册时生成）
///
/// 拦截器只会拿到描述而不是处理器本身，因此无法绕过总线直接调用处理器。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerDescriptor {
    name: &'static str,
}

impl HandlerDescriptor {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// 以处理器类型路径作为名称
    pub fn of<H: ?Sized>() -> Self {
        Self::new(type_name::<H>())
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
