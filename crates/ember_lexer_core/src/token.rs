//! The token kind enum (spec.md §4.6–§4.7, ~130 variants) and the `Token`
//! struct whose fields borrow from a Source's owned buffers.

/// Every kind of token the lexer can produce, grouped exactly as spec.md
/// groups them. `to_string()`/`Display` yield the variant's own spelling
/// (`keyword_auto`, `bit_shift_left_assign`, …), matching the original
/// `to_string(token_type)` behaviour: a bare identifier rendering, not
/// surface syntax.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    /// Uninitialised sentinel; never appears in a finished token vector.
    none,
    /// Sub-pass A placeholder for a coalesced whitespace run; removed by
    /// sub-pass B.
    whitespace,
    /// Sub-pass A placeholder for an unclassified fragment; relabeled to a
    /// numeric/identifier/keyword kind by sub-pass B.
    none_hm,

    identifier,

    integer_bin,
    integer_oct,
    integer_dec,
    integer_hex,
    decimal,

    character,
    string,

    // Single-character punctuation/operators (never extend).
    bit_not,
    dollar,
    paren_left,
    paren_right,
    brace_left,
    brace_right,
    big_paren_left,
    big_paren_right,
    colon,
    semicolon,
    comma,
    dot,
    question,

    // Operators that may extend.
    exclamation,
    equal_not,
    modulo,
    modulo_assign,
    bit_xor,
    bit_xor_assign,
    bit_and,
    bit_and_assign,
    logic_and,
    multiply,
    multiply_assign,
    exp,
    exp_assign,
    minus,
    decrement,
    minus_assign,
    rightwards_arrow,
    plus,
    increment,
    plus_assign,
    rightwards_double_arrow,
    assign,
    equal,
    bit_or,
    bit_or_assign,
    logic_or,
    less,
    bit_shift_left,
    bit_shift_left_assign,
    greater,
    bit_shift_right,
    bit_shift_right_assign,
    divide,
    divide_assign,

    // Keywords.
    keyword_auto,
    keyword_void,
    keyword_bool,
    keyword_char,
    keyword_char16,
    keyword_char32,
    keyword_i8,
    keyword_i16,
    keyword_i32,
    keyword_i64,
    keyword_u8,
    keyword_u16,
    keyword_u32,
    keyword_u64,
    keyword_let,
    keyword_immut,
    keyword_mut,
    keyword_const,
    keyword_func,
    keyword_class,
    keyword_union,
    keyword_module,
    keyword_domain,
    keyword_inline,
    keyword_enum,
    keyword_public,
    keyword_internal,
    keyword_protected,
    keyword_private,
    keyword_use,
    keyword_as,
    keyword_default,
    keyword_macro,
    keyword_panic,
    keyword_for,
    keyword_do,
    keyword_while,
    keyword_match,
    keyword_if,
    keyword_else,
    keyword_goto,
    keyword_break,
    keyword_continue,
    keyword_return,
    keyword_extern,
    keyword_template,
    keyword_type,
    keyword_concept,
    keyword_unsafe,
    keyword_virtual,
    keyword_abstract,
    keyword_open,
    keyword_this,
    keyword_super,
    keyword_static,
    keyword_async,
    keyword_await,
    keyword_bit,
    keyword_new,
    keyword_delete,
    keyword_nullptr,
    keyword_static_cast,
    keyword_dynamic_cast,
    keyword_const_cast,
    keyword_reinterpret_cast,
    keyword_is,
    keyword_typeid,
    keyword_static_assert,
    keyword_true,
    keyword_false,
}

impl TokenKind {
    /// Whether this operator kind is single-character-only and must never
    /// be greedily extended (spec.md §4.6: `~ $ ( ) { [ } ] : ; , . ?`).
    #[must_use]
    pub fn is_single_char_only(self) -> bool {
        matches!(
            self,
            TokenKind::bit_not
                | TokenKind::dollar
                | TokenKind::paren_left
                | TokenKind::paren_right
                | TokenKind::brace_left
                | TokenKind::brace_right
                | TokenKind::big_paren_left
                | TokenKind::big_paren_right
                | TokenKind::colon
                | TokenKind::semicolon
                | TokenKind::comma
                | TokenKind::dot
                | TokenKind::question
        )
    }

    /// Bare variant spelling, matching the original's `to_string(token_type)`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::none => "none",
            TokenKind::whitespace => "whitespace",
            TokenKind::none_hm => "none_hm",
            TokenKind::identifier => "identifier",
            TokenKind::integer_bin => "integer_bin",
            TokenKind::integer_oct => "integer_oct",
            TokenKind::integer_dec => "integer_dec",
            TokenKind::integer_hex => "integer_hex",
            TokenKind::decimal => "decimal",
            TokenKind::character => "character",
            TokenKind::string => "string",
            TokenKind::bit_not => "bit_not",
            TokenKind::dollar => "dollar",
            TokenKind::paren_left => "paren_left",
            TokenKind::paren_right => "paren_right",
            TokenKind::brace_left => "brace_left",
            TokenKind::brace_right => "brace_right",
            TokenKind::big_paren_left => "big_paren_left",
            TokenKind::big_paren_right => "big_paren_right",
            TokenKind::colon => "colon",
            TokenKind::semicolon => "semicolon",
            TokenKind::comma => "comma",
            TokenKind::dot => "dot",
            TokenKind::question => "question",
            TokenKind::exclamation => "exclamation",
            TokenKind::equal_not => "equal_not",
            TokenKind::modulo => "modulo",
            TokenKind::modulo_assign => "modulo_assign",
            TokenKind::bit_xor => "bit_xor",
            TokenKind::bit_xor_assign => "bit_xor_assign",
            TokenKind::bit_and => "bit_and",
            TokenKind::bit_and_assign => "bit_and_assign",
            TokenKind::logic_and => "logic_and",
            TokenKind::multiply => "multiply",
            TokenKind::multiply_assign => "multiply_assign",
            TokenKind::exp => "exp",
            TokenKind::exp_assign => "exp_assign",
            TokenKind::minus => "minus",
            TokenKind::decrement => "decrement",
            TokenKind::minus_assign => "minus_assign",
            TokenKind::rightwards_arrow => "rightwards_arrow",
            TokenKind::plus => "plus",
            TokenKind::increment => "increment",
            TokenKind::plus_assign => "plus_assign",
            TokenKind::rightwards_double_arrow => "rightwards_double_arrow",
            TokenKind::assign => "assign",
            TokenKind::equal => "equal",
            TokenKind::bit_or => "bit_or",
            TokenKind::bit_or_assign => "bit_or_assign",
            TokenKind::logic_or => "logic_or",
            TokenKind::less => "less",
            TokenKind::bit_shift_left => "bit_shift_left",
            TokenKind::bit_shift_left_assign => "bit_shift_left_assign",
            TokenKind::greater => "greater",
            TokenKind::bit_shift_right => "bit_shift_right",
            TokenKind::bit_shift_right_assign => "bit_shift_right_assign",
            TokenKind::divide => "divide",
            TokenKind::divide_assign => "divide_assign",
            TokenKind::keyword_auto => "keyword_auto",
            TokenKind::keyword_void => "keyword_void",
            TokenKind::keyword_bool => "keyword_bool",
            TokenKind::keyword_char => "keyword_char",
            TokenKind::keyword_char16 => "keyword_char16",
            TokenKind::keyword_char32 => "keyword_char32",
            TokenKind::keyword_i8 => "keyword_i8",
            TokenKind::keyword_i16 => "keyword_i16",
            TokenKind::keyword_i32 => "keyword_i32",
            TokenKind::keyword_i64 => "keyword_i64",
            TokenKind::keyword_u8 => "keyword_u8",
            TokenKind::keyword_u16 => "keyword_u16",
            TokenKind::keyword_u32 => "keyword_u32",
            TokenKind::keyword_u64 => "keyword_u64",
            TokenKind::keyword_let => "keyword_let",
            TokenKind::keyword_immut => "keyword_immut",
            TokenKind::keyword_mut => "keyword_mut",
            TokenKind::keyword_const => "keyword_const",
            TokenKind::keyword_func => "keyword_func",
            TokenKind::keyword_class => "keyword_class",
            TokenKind::keyword_union => "keyword_union",
            TokenKind::keyword_module => "keyword_module",
            TokenKind::keyword_domain => "keyword_domain",
            TokenKind::keyword_inline => "keyword_inline",
            TokenKind::keyword_enum => "keyword_enum",
            TokenKind::keyword_public => "keyword_public",
            TokenKind::keyword_internal => "keyword_internal",
            TokenKind::keyword_protected => "keyword_protected",
            TokenKind::keyword_private => "keyword_private",
            TokenKind::keyword_use => "keyword_use",
            TokenKind::keyword_as => "keyword_as",
            TokenKind::keyword_default => "keyword_default",
            TokenKind::keyword_macro => "keyword_macro",
            TokenKind::keyword_panic => "keyword_panic",
            TokenKind::keyword_for => "keyword_for",
            TokenKind::keyword_do => "keyword_do",
            TokenKind::keyword_while => "keyword_while",
            TokenKind::keyword_match => "keyword_match",
            TokenKind::keyword_if => "keyword_if",
            TokenKind::keyword_else => "keyword_else",
            TokenKind::keyword_goto => "keyword_goto",
            TokenKind::keyword_break => "keyword_break",
            TokenKind::keyword_continue => "keyword_continue",
            TokenKind::keyword_return => "keyword_return",
            TokenKind::keyword_extern => "keyword_extern",
            TokenKind::keyword_template => "keyword_template",
            TokenKind::keyword_type => "keyword_type",
            TokenKind::keyword_concept => "keyword_concept",
            TokenKind::keyword_unsafe => "keyword_unsafe",
            TokenKind::keyword_virtual => "keyword_virtual",
            TokenKind::keyword_abstract => "keyword_abstract",
            TokenKind::keyword_open => "keyword_open",
            TokenKind::keyword_this => "keyword_this",
            TokenKind::keyword_super => "keyword_super",
            TokenKind::keyword_static => "keyword_static",
            TokenKind::keyword_async => "keyword_async",
            TokenKind::keyword_await => "keyword_await",
            TokenKind::keyword_bit => "keyword_bit",
            TokenKind::keyword_new => "keyword_new",
            TokenKind::keyword_delete => "keyword_delete",
            TokenKind::keyword_nullptr => "keyword_nullptr",
            TokenKind::keyword_static_cast => "keyword_static_cast",
            TokenKind::keyword_dynamic_cast => "keyword_dynamic_cast",
            TokenKind::keyword_const_cast => "keyword_const_cast",
            TokenKind::keyword_reinterpret_cast => "keyword_reinterpret_cast",
            TokenKind::keyword_is => "keyword_is",
            TokenKind::keyword_typeid => "keyword_typeid",
            TokenKind::keyword_static_assert => "keyword_static_assert",
            TokenKind::keyword_true => "keyword_true",
            TokenKind::keyword_false => "keyword_false",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexed token. `data`, `line_data`, `prefix_literal`, and
/// `postfix_literal` are borrowed views into the owning `Source`'s buffers
/// (spec.md §3, §9 "Borrowed string views"): the Source must outlive every
/// `Token` produced from it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// 1-based physical line number.
    pub line: u32,
    /// 0-based byte offset of `data` within `line_data`.
    pub column: usize,
    pub data: &'src str,
    /// The entire physical line containing this token, for diagnostics.
    pub line_data: &'src str,
    pub prefix_literal: &'src str,
    pub postfix_literal: &'src str,
}

impl<'src> Token<'src> {
    #[must_use]
    pub fn new(kind: TokenKind, line: u32, column: usize, data: &'src str, line_data: &'src str) -> Self {
        Self {
            kind,
            line,
            column,
            data,
            line_data,
            prefix_literal: "",
            postfix_literal: "",
        }
    }

    #[must_use]
    pub fn with_postfix(mut self, postfix: &'src str) -> Self {
        self.postfix_literal = postfix;
        self
    }
}
