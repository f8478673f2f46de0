use proc_macro::TokenStream;
use quote::quote;

/// Generate a channel model: a struct holding one normalized component per
/// slider of a color model.
#[proc_macro]
pub fn gen_channels(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !(3..=4).contains(&input.fields.len()) {
        return quote! {
            compile_error!("Channel models must have 3 or 4 fields, one for each slider.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Channel models can not be generic.")
        }
        .into();
    }

    let Some(field_names) = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Option<Vec<_>>>()
    else {
        return quote! {
            compile_error!("Channel models must use named fields.")
        }
        .into();
    };

    // Components are always accessible from the outside.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    let labels = field_names.iter().map(|name| {
        let name = name.to_string();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        }
    });

    let count = field_names.len();
    let struct_name = input.ident.clone();

    let impls = quote! {
        impl #struct_name {
            /// Create a new model from normalized components.
            pub const fn new(#(#field_names: crate::Component),*) -> Self {
                Self { #(#field_names),* }
            }

            /// Return the components in channel order.
            pub fn to_array(&self) -> [crate::Component; #count] {
                [#(self.#field_names),*]
            }

            /// Return a new model with each component mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(crate::Component) -> crate::Component) -> Self {
                Self::new(#(f(self.#field_names)),*)
            }
        }

        impl From<[crate::Component; #count]> for #struct_name {
            fn from(value: [crate::Component; #count]) -> Self {
                let [#(#field_names),*] = value;
                Self::new(#(#field_names),*)
            }
        }

        impl crate::models::Channels for #struct_name {
            const LABELS: &'static [&'static str] = &[#(#labels),*];

            fn components(&self) -> Vec<crate::Component> {
                self.to_array().to_vec()
            }

            fn from_components(components: &[crate::Component]) -> Self {
                let mut values: [crate::Component; #count] = [0.0; #count];
                values
                    .iter_mut()
                    .zip(components)
                    .for_each(|(value, component)| *value = *component);
                Self::from(values)
            }
        }
    };

    quote! {
        #input
        #impls
    }
    .into()
}
