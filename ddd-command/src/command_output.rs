use std::fmt;

/// 返回值在诊断信息中的显示标记
///
/// `Void` 与 `Null` 互不混淆：前者表示处理器没有返回值（`()`），
/// 后者表示处理器显式返回了空值（`None`）。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMarker {
    Void,
    Null,
    Named(&'static str),
}

impl fmt::Display for OutputMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMarker::Void => f.write_str("void"),
            OutputMarker::Null => f.write_str("null"),
            OutputMarker::Named(name) => f.write_str(name),
        }
    }
}

/// 命令处理器的返回值
///
/// 自定义类型通过 `#[derive(CommandOutput)]` 实现，标记为类型的简单名。
pub trait CommandOutput: Send + Sync + 'static {
    fn marker(&self) -> OutputMarker;
}

impl CommandOutput for () {
    fn marker(&self) -> OutputMarker {
        OutputMarker::Void
    }
}

impl<T: CommandOutput> CommandOutput for Option<T> {
    fn marker(&self) -> OutputMarker {
        match self {
            Some(value) => value.marker(),
            None => OutputMarker::Null,
        }
    }
}

impl<T: Send + Sync + 'static> CommandOutput for Vec<T> {
    fn marker(&self) -> OutputMarker {
        OutputMarker::Named("Vec")
    }
}

macro_rules! named_output {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl CommandOutput for $ty {
                fn marker(&self) -> OutputMarker {
                    OutputMarker::Named($name)
                }
            }
        )*
    };
}

named_output! {
    bool => "bool",
    char => "char",
    String => "String",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
}
