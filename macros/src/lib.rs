//! Proc macros for gilt-html: `view!` RSX composition.
//!
//! This crate is not meant to be used directly; enable the `macros` feature on `gilt-html`.

use proc_macro::TokenStream;

mod view_macro;

/// RSX-style component composition macro.
///
/// Transforms JSX-like syntax into gilt-html builder API calls and evaluates
/// to a `gilt_html::Component`.
///
/// # Syntax
///
/// - `<Tag />`: self-closing element (no children)
/// - `<Tag attr="val"> ... </Tag>`: element with children
/// - `"text"` child: a `Text` node
/// - `{expr}` child: any value convertible into a `Component`
///
/// # Attributes
///
/// - `name="value"` or `name={expr}` becomes `.with_name(value)`
/// - bare `name` becomes `.name(true)`; `name=false` becomes `.name(false)`
/// - `content` on `Text` becomes the `::new()` argument
///
/// Several root elements produce a `Component::group`.
///
/// # Example
///
/// ```ignore
/// view! {
///     <Div class="plans">
///         <Label for="plan-premium">"Premium"</Label>
///         <Radio name="plan" value="premium" id="plan-premium" checked required />
///     </Div>
/// }
/// ```
#[proc_macro]
pub fn view(input: TokenStream) -> TokenStream {
    view_macro::view_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
