use crate::utils::{AttrElem, display_name, parse_attr_elems};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

/// #[derive(Command)] 宏实现
/// - `NAME` 取自 `#[command(name = "...")]` 或类型简单名
/// - `Output` 取自 `#[command(output = Type)]`，缺省为 `()`
pub(crate) fn expand(input: DeriveInput) -> Result<TokenStream> {
    let mut name = None;
    let mut output = None;

    for elem in parse_attr_elems(&input.attrs, "command")? {
        match elem {
            AttrElem::Name(lit) => name = Some(lit),
            AttrElem::Output(ty) => output = Some(ty),
        }
    }

    let ident = &input.ident;
    let name = display_name(ident, name);
    let output = output.unwrap_or_else(|| syn::parse_quote! { () });
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ddd_command::command::Command for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            type Output = #output;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::ToTokens;
    use syn::{ImplItem, ItemImpl, parse_quote};

    fn expand_impl(input: DeriveInput) -> ItemImpl {
        syn::parse2(expand(input).unwrap()).unwrap()
    }

    fn const_name(item: &ItemImpl) -> String {
        item.items
            .iter()
            .find_map(|i| match i {
                ImplItem::Const(c) => Some(c.expr.to_token_stream().to_string()),
                _ => None,
            })
            .unwrap()
    }

    fn output_type(item: &ItemImpl) -> String {
        item.items
            .iter()
            .find_map(|i| match i {
                ImplItem::Type(t) => Some(t.ty.to_token_stream().to_string().replace(' ', "")),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn defaults_to_simple_name_and_unit_output() {
        let item = expand_impl(parse_quote! {
            #[derive(Debug)]
            struct CreateUser { name: String }
        });

        assert_eq!(const_name(&item), "\"CreateUser\"");
        assert_eq!(output_type(&item), "()");
    }

    #[test]
    fn attributes_override_name_and_output() {
        let item = expand_impl(parse_quote! {
            #[command(name = "orders.place")]
            #[command(output = Option<Receipt>)]
            struct PlaceOrder;
        });

        assert_eq!(const_name(&item), "\"orders.place\"");
        assert_eq!(output_type(&item), "Option<Receipt>");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = expand(parse_quote! {
            #[command(label = "x")]
            struct Tagged;
        })
        .unwrap_err();

        assert!(err.to_string().contains("unknown key `label`"));
    }
}
