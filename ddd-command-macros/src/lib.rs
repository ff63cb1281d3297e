//! ddd-command 派生宏
//!
//! 为命令与命令返回值提供“静态显示名”能力，避免在日志中依赖 `type_name::<T>()`：
//! - `#[derive(Command)]`：实现 `::ddd_command::command::Command`，`NAME` 默认取类型名；
//! - `#[derive(CommandOutput)]`：实现 `::ddd_command::command_output::CommandOutput`，
//!   返回值标记默认取类型名。
//!
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod command;
mod command_output;
mod utils;

/// 命令派生宏
///
/// 支持参数：
/// - `#[command(name = "...")]` 覆写命令名（默认使用类型的简单名）
/// - `#[command(output = Type)]` 指定处理器返回值类型（默认 `()`）
#[proc_macro_derive(Command, attributes(command))]
pub fn derive_command(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    command::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// 命令返回值派生宏
///
/// 支持参数：`#[command_output(name = "...")]` 覆写显示名（默认使用类型的简单名）
#[proc_macro_derive(CommandOutput, attributes(command_output))]
pub fn derive_command_output(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    command_output::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
