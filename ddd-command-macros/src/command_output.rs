use crate::utils::{AttrElem, display_name, parse_attr_elems};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result, spanned::Spanned};

/// #[derive(CommandOutput)] 宏实现
/// 生成的 `marker()` 总是返回 `OutputMarker::Named(..)`；
/// `null`/`void` 两种标记由 `Option<T>` 与 `()` 的内置实现负责。
pub(crate) fn expand(input: DeriveInput) -> Result<TokenStream> {
    let mut name = None;

    for elem in parse_attr_elems(&input.attrs, "command_output")? {
        match elem {
            AttrElem::Name(lit) => name = Some(lit),
            AttrElem::Output(ty) => {
                return Err(syn::Error::new(
                    ty.span(),
                    "`output` is only supported on #[command(...)]",
                ));
            }
        }
    }

    let ident = &input.ident;
    let name = display_name(ident, name);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ddd_command::command_output::CommandOutput for #ident #ty_generics #where_clause {
            fn marker(&self) -> ::ddd_command::command_output::OutputMarker {
                ::ddd_command::command_output::OutputMarker::Named(#name)
            }
        }
    })
}
