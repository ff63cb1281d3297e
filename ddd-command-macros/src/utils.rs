use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, LitStr, Result, Token, Type, parse::Parse, parse::ParseStream};

/// 派生宏属性中的单个键值对：`name = "..."` 或 `output = Type`
pub(crate) enum AttrElem {
    Name(LitStr),
    Output(Type),
}

impl Parse for AttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        match key.to_string().as_str() {
            "name" => Ok(AttrElem::Name(input.parse()?)),
            "output" => Ok(AttrElem::Output(input.parse()?)),
            other => Err(syn::Error::new(
                key.span(),
                format!("unknown key `{other}`, expected `name` or `output`"),
            )),
        }
    }
}

// 收集所有同名属性（如多个 #[command(...)]）中的键值对
pub(crate) fn parse_attr_elems(attrs: &[Attribute], ident: &str) -> Result<Vec<AttrElem>> {
    let mut elems = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident(ident)) {
        let list = attr.parse_args_with(Punctuated::<AttrElem, Token![,]>::parse_terminated)?;
        elems.extend(list);
    }
    Ok(elems)
}

// 显示名：优先使用属性覆写，否则取类型的简单名
pub(crate) fn display_name(ident: &Ident, overridden: Option<LitStr>) -> LitStr {
    overridden.unwrap_or_else(|| LitStr::new(&ident.to_string(), ident.span()))
}
