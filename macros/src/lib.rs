use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model view: a plain struct with one public
/// `Component` field per channel, a `new` constructor, array conversions and
/// a per-channel `map`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Models must use named fields, one for each channel of the color.")
        }
        .into();
    }

    if !(3..=4).contains(&input.fields.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each channel of the color.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_count = field_names.len();

    // Channels are always readable from the outside.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = match syn::Attribute::parse_outer.parse2(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let indices = (0..field_count).map(syn::Index::from).collect::<Vec<_>>();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new view from its channel values.
            pub const fn new(#(#field_names: crate::color::Component),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the channels in declaration order.
            pub fn to_array(&self) -> [crate::color::Component; #field_count] {
                [#(self.#field_names),*]
            }

            /// Return a new view with each channel mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(crate::color::Component) -> crate::color::Component) -> Self {
                Self { #(#field_names: f(self.#field_names)),* }
            }
        }

        impl From<[crate::color::Component; #field_count]> for #struct_name {
            fn from(value: [crate::color::Component; #field_count]) -> Self {
                Self { #(#field_names: value[#indices]),* }
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
