use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse2,
    token::Comma,
    Ident, LitStr, Result,
};

struct EmojiMain {
    id: Ident,
    registry_path: String,
}

impl Parse for EmojiMain {
    fn parse(input: ParseStream) -> Result<Self> {
        let registry_path: LitStr = input.parse()?;
        let _comma: Comma = input.parse()?;
        let id = input.parse()?;

        Ok(Self {
            id,
            registry_path: registry_path.value(),
        })
    }
}

fn emoji_main_impl(input: TokenStream) -> TokenStream {
    let EmojiMain { id, registry_path } = parse2(input).expect("did not encounter Ident");

    quote! {
        #[cfg(target_arch = "wasm32")]
        use wasm_bindgen::prelude::*;

        #[cfg(target_arch = "wasm32")]
        #[wasm_bindgen(js_name = "emojiMain")]
        pub fn emoji_main() {
            let registry_src = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), #registry_path));
            emotext::emoji_main(registry_src, #id::default());
        }

        #[cfg(not(target_arch = "wasm32"))]
        pub fn emoji_main() {
            let registry_src = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), #registry_path));
            emotext::emoji_main(registry_src, #id::default());
        }
    }
}

// Macro parameters:
//   str literal containing path to registry TOML (concat'd to CARGO_MANIFEST_DIR)
//   identifier literal which is the name of the feed struct type
#[proc_macro]
pub fn emoji_main(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    emoji_main_impl(input.into()).into()
}
