extern crate proc_macro;
use proc_macro::TokenStream;

use quote::{format_ident, quote, ToTokens};

use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote, Attribute, DeriveInput, ExprClosure, Ident, ReturnType, Token,
    Type, TypeBareFn, Visibility,
};

/*
 * One `options!{}` line:
 *
 *   vis ctor_name: AliasName;                      -- flag over ()
 *   vis ctor_name: AliasName = Type;               -- plain value
 *   vis ctor_name: AliasName = Type where |v| ..;  -- checked value
 *   vis ctor_name: AliasName = fn(Args..) -> Ret;  -- callable
 */
enum OptionKind {
    Flag,
    Value(Type),
    Checked(Type, ExprClosure),
    Callable(TypeBareFn),
}

struct OptionDecl {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ctor: Ident,
    alias: Ident,
    kind: OptionKind,
}

impl Parse for OptionDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        let ctor: Ident = input.parse()?;
        input.parse::<Token![:]>()?;
        let alias: Ident = input.parse()?;
        let kind = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            if input.peek(Token![fn]) {
                OptionKind::Callable(input.parse()?)
            } else {
                let ty: Type = input.parse()?;
                if input.peek(Token![where]) {
                    input.parse::<Token![where]>()?;
                    OptionKind::Checked(ty, input.parse()?)
                } else {
                    OptionKind::Value(ty)
                }
            }
        } else {
            OptionKind::Flag
        };
        input.parse::<Token![;]>()?;
        Ok(OptionDecl {
            attrs,
            vis,
            ctor,
            alias,
            kind,
        })
    }
}

struct OptionsInput {
    decls: Vec<OptionDecl>,
}

impl Parse for OptionsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut decls = Vec::new();
        while !input.is_empty() {
            decls.push(input.parse()?);
        }
        Ok(OptionsInput { decls })
    }
}

/// Declares named option types: a tag, a type alias, and a constructor per
/// declaration.
#[proc_macro]
pub fn options(input: TokenStream) -> TokenStream {
    let OptionsInput { decls } = parse_macro_input!(input as OptionsInput);
    let items = decls.into_iter().map(expand_decl);
    quote!( #( #items )* ).into()
}

fn expand_decl(decl: OptionDecl) -> proc_macro2::TokenStream {
    let OptionDecl {
        attrs,
        vis,
        ctor,
        alias,
        kind,
    } = decl;
    let tag = format_ident!("{}Tag", alias);

    match kind {
        OptionKind::Flag => quote! {
            #vis enum #tag {}
            #( #attrs )*
            #vis type #alias = ::kwargs::Named<#tag, ()>;
            #vis fn #ctor() -> #alias {
                ::kwargs::Named::new(())
            }
        },
        OptionKind::Value(ty) => quote! {
            #vis enum #tag {}
            #( #attrs )*
            #vis type #alias = ::kwargs::Named<#tag, #ty>;
            #vis fn #ctor(value: #ty) -> #alias {
                ::kwargs::Named::new(value)
            }
        },
        OptionKind::Checked(ty, closure) => {
            let check = format_ident!("{}Check", alias);
            let predicate = closure.to_token_stream().to_string();
            quote! {
                #vis enum #tag {}
                #[doc(hidden)]
                #vis enum #check {}
                impl ::kwargs::Check<#ty> for #check {
                    fn check(value: &#ty) -> ::core::result::Result<(), ::std::string::String> {
                        fn pin_predicate(f: impl ::core::ops::Fn(&#ty) -> bool) -> impl ::core::ops::Fn(&#ty) -> bool { f }
                        let accept = pin_predicate(#closure);
                        if accept(value) {
                            Ok(())
                        } else {
                            Err(::std::format!("rejected by `{}`", #predicate))
                        }
                    }
                }
                #( #attrs )*
                #vis type #alias = ::kwargs::Checked<#tag, #ty, #check>;
                #vis fn #ctor(value: #ty) -> ::core::result::Result<#alias, ::kwargs::Error> {
                    #alias::new(value)
                }
            }
        }
        OptionKind::Callable(bare_fn) => {
            let inputs: Vec<Type> = bare_fn.inputs.iter().map(|arg| arg.ty.clone()).collect();
            let output = match &bare_fn.output {
                ReturnType::Default => quote!(()),
                ReturnType::Type(_, ty) => ty.to_token_stream(),
            };
            let params: Vec<Ident> = (0..inputs.len())
                .map(|nth| format_ident!("arg{}", nth))
                .collect();
            let args_ty = match inputs.len() {
                0 => quote!(()),
                1 => {
                    let ty = &inputs[0];
                    quote!(#ty)
                }
                _ => quote!(( #( #inputs ),* )),
            };
            let adapter = match inputs.len() {
                0 => quote!(move |()| func()),
                1 => quote!(func),
                _ => quote!(move |( #( #params ),* )| func( #( #params ),* )),
            };
            quote! {
                #vis enum #tag {}
                #( #attrs )*
                #vis type #alias = ::kwargs::Callback<#tag, #args_ty, #output>;
                #vis fn #ctor(
                    func: impl ::core::ops::Fn( #( #inputs ),* ) -> #output + 'static,
                ) -> #alias {
                    ::kwargs::Callback::new(#adapter)
                }
            }
        }
    }
}

/// Marks a struct as directly usable as an option slot.
#[proc_macro_derive(Slot)]
pub fn derive_slot(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;
    let mut generics = input.generics;
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    quote! {
        impl #impl_generics ::kwargs::Slot for #name #ty_generics #where_clause {
            type Value = Self;
        }
    }
    .into()
}
