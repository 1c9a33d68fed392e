//! Reserved-keyword resolution.
//!
//! Length-bucketed lookup: the identifier's byte length first narrows the
//! candidate set to a single `match` arm, then the full text is compared
//! against the (small) set of keywords of that length. All 70 keywords from
//! spec.md §4.7's table are reachable here; anything else falls through to
//! `None` and the caller relabels the fragment as a plain identifier.

use ember_lexer_core::TokenKind;

#[must_use]
pub fn lookup(text: &str) -> Option<TokenKind> {
    use TokenKind as T;
    match text.len() {
        2 => match text {
            "i8" => Some(T::keyword_i8),
            "u8" => Some(T::keyword_u8),
            "as" => Some(T::keyword_as),
            "do" => Some(T::keyword_do),
            "if" => Some(T::keyword_if),
            "is" => Some(T::keyword_is),
            _ => None,
        },
        3 => match text {
            "i16" => Some(T::keyword_i16),
            "i32" => Some(T::keyword_i32),
            "i64" => Some(T::keyword_i64),
            "u16" => Some(T::keyword_u16),
            "u32" => Some(T::keyword_u32),
            "u64" => Some(T::keyword_u64),
            "let" => Some(T::keyword_let),
            "mut" => Some(T::keyword_mut),
            "use" => Some(T::keyword_use),
            "for" => Some(T::keyword_for),
            "bit" => Some(T::keyword_bit),
            "new" => Some(T::keyword_new),
            _ => None,
        },
        4 => match text {
            "auto" => Some(T::keyword_auto),
            "void" => Some(T::keyword_void),
            "bool" => Some(T::keyword_bool),
            "char" => Some(T::keyword_char),
            "func" => Some(T::keyword_func),
            "enum" => Some(T::keyword_enum),
            "else" => Some(T::keyword_else),
            "goto" => Some(T::keyword_goto),
            "type" => Some(T::keyword_type),
            "open" => Some(T::keyword_open),
            "this" => Some(T::keyword_this),
            "true" => Some(T::keyword_true),
            _ => None,
        },
        5 => match text {
            "immut" => Some(T::keyword_immut),
            "const" => Some(T::keyword_const),
            "class" => Some(T::keyword_class),
            "union" => Some(T::keyword_union),
            "macro" => Some(T::keyword_macro),
            "panic" => Some(T::keyword_panic),
            "while" => Some(T::keyword_while),
            "match" => Some(T::keyword_match),
            "break" => Some(T::keyword_break),
            "super" => Some(T::keyword_super),
            "async" => Some(T::keyword_async),
            "await" => Some(T::keyword_await),
            "false" => Some(T::keyword_false),
            _ => None,
        },
        6 => match text {
            "char16" => Some(T::keyword_char16),
            "char32" => Some(T::keyword_char32),
            "module" => Some(T::keyword_module),
            "domain" => Some(T::keyword_domain),
            "inline" => Some(T::keyword_inline),
            "public" => Some(T::keyword_public),
            "return" => Some(T::keyword_return),
            "extern" => Some(T::keyword_extern),
            "unsafe" => Some(T::keyword_unsafe),
            "static" => Some(T::keyword_static),
            "delete" => Some(T::keyword_delete),
            "typeid" => Some(T::keyword_typeid),
            _ => None,
        },
        7 => match text {
            "private" => Some(T::keyword_private),
            "default" => Some(T::keyword_default),
            "concept" => Some(T::keyword_concept),
            "virtual" => Some(T::keyword_virtual),
            "nullptr" => Some(T::keyword_nullptr),
            _ => None,
        },
        8 => match text {
            "internal" => Some(T::keyword_internal),
            "continue" => Some(T::keyword_continue),
            "template" => Some(T::keyword_template),
            "abstract" => Some(T::keyword_abstract),
            _ => None,
        },
        9 => match text {
            "protected" => Some(T::keyword_protected),
            _ => None,
        },
        10 => match text {
            "const_cast" => Some(T::keyword_const_cast),
            _ => None,
        },
        11 => match text {
            "static_cast" => Some(T::keyword_static_cast),
            _ => None,
        },
        12 => match text {
            "dynamic_cast" => Some(T::keyword_dynamic_cast),
            _ => None,
        },
        13 => match text {
            "static_assert" => Some(T::keyword_static_assert),
            _ => None,
        },
        16 => match text {
            "reinterpret_cast" => Some(T::keyword_reinterpret_cast),
            _ => None,
        },
        _ => None,
    }
}
