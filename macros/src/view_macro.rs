//! RSX view! macro: parse JSX-like syntax and generate gilt-html builder code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{braced, token, Error, Expr, Ident, LitBool, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// The right-hand side of an attribute.
#[derive(Clone)]
pub(crate) enum AttrValue {
    /// `name="value"`
    Str(LitStr),
    /// `name=true` / `name=false`
    Bool(LitBool),
    /// `name={expr}`
    Expr(Expr),
    /// bare `name`
    Flag,
}

/// A parsed RSX attribute.
#[derive(Clone)]
pub(crate) struct Attribute {
    pub name: Ident,
    pub value: AttrValue,
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match &self.value {
            AttrValue::Str(lit) => format!("{:?}", lit.value()),
            AttrValue::Bool(lit) => lit.value.to_string(),
            AttrValue::Expr(expr) => format!("{{{}}}", quote!(#expr)),
            AttrValue::Flag => "<flag>".to_owned(),
        };
        f.debug_struct("Attribute")
            .field("name", &self.name.to_string())
            .field("value", &value)
            .finish()
    }
}

/// Content between an element's opening and closing tags.
#[derive(Clone)]
pub(crate) enum Child {
    /// A nested element.
    Element(Element),
    /// A string literal, rendered as text.
    Text(LitStr),
    /// `{expr}`, any value convertible into a component.
    Expr(Expr),
}

impl std::fmt::Debug for Child {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Child::Element(elem) => elem.fmt(f),
            Child::Text(lit) => f.debug_tuple("Text").field(&lit.value()).finish(),
            Child::Expr(expr) => f.debug_tuple("Expr").field(&quote!(#expr).to_string()).finish(),
        }
    }
}

/// A parsed RSX element: `<Tag attrs... />` or `<Tag attrs...> children </Tag>`.
#[derive(Clone)]
pub(crate) struct Element {
    pub tag: Ident,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Child>,
    pub self_closing: bool,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag.to_string())
            .field("attrs", &self.attrs)
            .field("children", &self.children)
            .field("self_closing", &self.self_closing)
            .finish()
    }
}

/// The top-level view! input: a sequence of elements.
#[derive(Debug)]
struct ViewInput {
    elements: Vec<Element>,
}

// ---------------------------------------------------------------------------
// Constructor argument attributes
// ---------------------------------------------------------------------------

/// Attributes whose value becomes the `::new()` constructor argument.
const CONSTRUCTOR_ATTRS: &[&str] = &["content"];

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for ViewInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut elements = Vec::new();
        while !input.is_empty() {
            elements.push(parse_element(input)?);
        }
        Ok(ViewInput { elements })
    }
}

/// Parse one attribute: `name`, `name="v"`, `name=true`, or `name={expr}`.
fn parse_attribute(input: ParseStream) -> Result<Attribute> {
    // `for` is a keyword but a valid attribute name.
    let name = Ident::parse_any(input)?;
    if !input.peek(Token![=]) {
        return Ok(Attribute {
            name,
            value: AttrValue::Flag,
        });
    }
    input.parse::<Token![=]>()?;

    let value = if input.peek(LitStr) {
        AttrValue::Str(input.parse()?)
    } else if input.peek(LitBool) {
        AttrValue::Bool(input.parse()?)
    } else if input.peek(token::Brace) {
        let content;
        braced!(content in input);
        AttrValue::Expr(content.parse()?)
    } else {
        return Err(input.error("expected a string literal, `true`/`false`, or `{expression}`"));
    };
    Ok(Attribute { name, value })
}

/// Parse a single RSX element from the token stream.
pub(crate) fn parse_element(input: ParseStream) -> Result<Element> {
    // Expect `<`
    input.parse::<Token![<]>()?;

    // Parse tag name
    let tag: Ident = input.parse()?;

    // Parse attributes until we hit `/>` or `>`
    let mut attrs = Vec::new();
    loop {
        // Check for self-closing `/>`.
        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            input.parse::<Token![>]>()?;
            return Ok(Element {
                tag,
                attrs,
                children: Vec::new(),
                self_closing: true,
            });
        }

        // Check for open tag close `>`.
        if input.peek(Token![>]) {
            input.parse::<Token![>]>()?;
            break;
        }

        attrs.push(parse_attribute(input)?);
    }

    // Parse children until closing tag `</Tag>`.
    let mut children = Vec::new();
    loop {
        // Check for closing tag: `</`
        if input.peek(Token![<]) && input.peek2(Token![/]) {
            input.parse::<Token![<]>()?;
            input.parse::<Token![/]>()?;
            let closing_tag: Ident = input.parse()?;
            if closing_tag != tag {
                return Err(Error::new(
                    closing_tag.span(),
                    format!(
                        "mismatched closing tag: expected `</{}>`, found `</{}>`",
                        tag, closing_tag
                    ),
                ));
            }
            input.parse::<Token![>]>()?;
            break;
        }

        if input.peek(Token![<]) {
            children.push(Child::Element(parse_element(input)?));
        } else if input.peek(LitStr) {
            children.push(Child::Text(input.parse()?));
        } else if input.peek(token::Brace) {
            let content;
            braced!(content in input);
            children.push(Child::Expr(content.parse()?));
        } else {
            return Err(input.error(
                "expected a child element, a string literal, `{expression}`, or `</` to close the parent",
            ));
        }
    }

    Ok(Element {
        tag,
        attrs,
        children,
        self_closing: false,
    })
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate code for a child.
fn generate_child(child: &Child) -> TokenStream {
    match child {
        Child::Element(elem) => generate_element(elem),
        Child::Text(lit) => quote! { gilt_html::elements::Text::new(#lit) },
        Child::Expr(expr) => quote! { #expr },
    }
}

/// Generate code for a single element.
fn generate_element(elem: &Element) -> TokenStream {
    let tag = &elem.tag;

    // Find the constructor argument (first constructor-type attribute with a value).
    let ctor_attr = elem.attrs.iter().find(|a| {
        CONSTRUCTOR_ATTRS.contains(&a.name.to_string().as_str())
            && matches!(a.value, AttrValue::Str(_) | AttrValue::Expr(_))
    });

    // Generate the initial constructor call.
    let constructor = match ctor_attr.map(|a| &a.value) {
        Some(AttrValue::Str(val)) => quote! { gilt_html::elements::#tag::new(#val) },
        Some(AttrValue::Expr(expr)) => quote! { gilt_html::elements::#tag::new(#expr) },
        _ => quote! { gilt_html::elements::#tag::new() },
    };

    // Build up the chain of builder calls.
    let mut builder_calls = Vec::new();

    for attr in &elem.attrs {
        // Skip the attribute we already used as the constructor argument.
        if let Some(ctor) = ctor_attr {
            if attr.name == ctor.name {
                continue;
            }
        }

        let attr_name_str = attr.name.unraw().to_string();
        match &attr.value {
            // `name="v"` / `name={expr}` become `with_<name>(..)`.
            AttrValue::Str(val) => {
                let method_name = Ident::new(&format!("with_{}", attr_name_str), attr.name.span());
                builder_calls.push(quote! { .#method_name(#val) });
            }
            AttrValue::Expr(expr) => {
                let method_name = Ident::new(&format!("with_{}", attr_name_str), attr.name.span());
                builder_calls.push(quote! { .#method_name(#expr) });
            }
            // Flags call the same-named setter with a bool.
            AttrValue::Bool(val) => {
                let method_name = Ident::new(&attr_name_str, attr.name.span());
                builder_calls.push(quote! { .#method_name(#val) });
            }
            AttrValue::Flag => {
                let method_name = Ident::new(&attr_name_str, attr.name.span());
                builder_calls.push(quote! { .#method_name(true) });
            }
        }
    }

    for child in &elem.children {
        let child_code = generate_child(child);
        builder_calls.push(quote! { .with_child(#child_code) });
    }

    quote! {
        #constructor #(#builder_calls)*
    }
}

/// Entry point: generate code for the entire view! macro.
pub(crate) fn view_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: ViewInput = syn::parse2(input)?;

    if parsed.elements.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "view! macro requires at least one element",
        ));
    }

    let element_exprs: Vec<TokenStream> = parsed
        .elements
        .iter()
        .map(|elem| {
            let code = generate_element(elem);
            quote! { gilt_html::component::Component::from(#code) }
        })
        .collect();

    if let [single] = element_exprs.as_slice() {
        return Ok(single.clone());
    }

    Ok(quote! {
        gilt_html::component::Component::group(::std::vec![#(#element_exprs),*])
    })
}

// ===========================================================================
// Tests
// ===========================================================================
