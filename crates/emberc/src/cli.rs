//! Hand-rolled CLI argument parsing, per spec.md §9's explicit "deep set of
//! command helpers" redesign flag: a plain `OptionSpec` table plus one
//! `parse` routine, the same way `oric/src/main.rs` hand-rolls
//! `std::env::args()` matching rather than pulling in a derive-based parser
//! (confirmed: no `clap` anywhere in the teacher's dependency graph).

use crate::error::CliError;

/// Which surface forms an option accepts, spec.md §6: "separated (`-j 4`),
/// assigned (`-j=4`), and attached (`-j4`) forms" (and subsets thereof for
/// `-D`/`-finput-encoding`).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct FormMask(u8);

impl FormMask {
    pub(crate) const SEPARATED: FormMask = FormMask(1 << 0);
    pub(crate) const ASSIGNED: FormMask = FormMask(1 << 1);
    pub(crate) const ATTACHED: FormMask = FormMask(1 << 2);

    const fn union(self, other: FormMask) -> FormMask {
        FormMask(self.0 | other.0)
    }

    fn contains(self, bit: FormMask) -> bool {
        self.0 & bit.0 != 0
    }
}

impl std::ops::BitOr for FormMask {
    type Output = FormMask;
    fn bitor(self, rhs: FormMask) -> FormMask {
        self.union(rhs)
    }
}

/// The shape of the value an option expects once a form has matched.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum ParamKind {
    Str,
    Int,
}

/// Which field of [`ParsedArgs`] a matched option feeds.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum OptionId {
    Threads,
    Output,
    Macro,
    Encoding,
}

pub(crate) struct OptionSpec {
    pub(crate) id: OptionId,
    /// The flag text excluding any value, e.g. `"-j"`, `"-finput-encoding"`.
    pub(crate) prefix: &'static str,
    pub(crate) forms: FormMask,
    pub(crate) param: ParamKind,
}

const OPTIONS: &[OptionSpec] = &[
    OptionSpec {
        id: OptionId::Threads,
        prefix: "-j",
        forms: FormMask::SEPARATED.union(FormMask::ASSIGNED).union(FormMask::ATTACHED),
        param: ParamKind::Int,
    },
    OptionSpec {
        id: OptionId::Output,
        prefix: "-o",
        forms: FormMask::SEPARATED.union(FormMask::ASSIGNED).union(FormMask::ATTACHED),
        param: ParamKind::Str,
    },
    OptionSpec {
        id: OptionId::Macro,
        prefix: "-D",
        forms: FormMask::SEPARATED.union(FormMask::ATTACHED),
        param: ParamKind::Str,
    },
    OptionSpec {
        id: OptionId::Encoding,
        prefix: "-finput-encoding",
        forms: FormMask::SEPARATED.union(FormMask::ASSIGNED),
        param: ParamKind::Str,
    },
];

/// The raw result of parsing `std::env::args()` (or an equivalent slice),
/// before validation against `CompilerOptions`'s invariants (duplicate
/// inputs, macro-name well-formedness, encoding spelling) — see
/// `options_builder`.
#[derive(Default, Debug, Clone)]
pub struct ParsedArgs {
    pub help: bool,
    pub version: bool,
    pub thread_count: Option<u32>,
    pub output_file: Option<String>,
    /// `(name, value)` pairs in the order given; `value` is `None` for a
    /// bare `-D NAME` with no `=`.
    pub macro_definitions: Vec<(String, Option<String>)>,
    pub forced_encoding: Option<String>,
    pub inputs: Vec<String>,
}

/// Parses a full argument list (typically `std::env::args().skip(1)`)
/// against the [`OPTIONS`] table. Positional (non-flag) arguments become
/// input files in the order they appear.
pub fn parse<I, S>(args: I) -> Result<ParsedArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let mut out = ParsedArgs::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();

        if arg == "--help" {
            out.help = true;
            i += 1;
            continue;
        }
        if arg == "--version" {
            out.version = true;
            i += 1;
            continue;
        }

        if let Some((spec, value, consumed)) = match_option(&args, i)? {
            apply(&mut out, spec, value)?;
            i += consumed;
            continue;
        }

        if arg.starts_with('-') && arg.len() > 1 {
            return Err(CliError::UnknownFlag(arg.to_string()));
        }

        out.inputs.push(arg.to_string());
        i += 1;
    }
    Ok(out)
}

/// Tries every table entry against `args[i]`, returning the matched spec,
/// its resolved value string, and how many argv slots it consumed (1, or 2
/// for a separated form that also consumes `args[i + 1]`).
fn match_option(args: &[String], i: usize) -> Result<Option<(&'static OptionSpec, String, usize)>, CliError> {
    let arg = args[i].as_str();
    for spec in OPTIONS {
        if arg == spec.prefix && spec.forms.contains(FormMask::SEPARATED) {
            let value = args.get(i + 1).ok_or(CliError::MissingValue(spec.prefix))?;
            return Ok(Some((spec, value.clone(), 2)));
        }
        if spec.forms.contains(FormMask::ASSIGNED) {
            let assigned_prefix = format!("{}=", spec.prefix);
            if let Some(rest) = arg.strip_prefix(assigned_prefix.as_str()) {
                return Ok(Some((spec, rest.to_string(), 1)));
            }
        }
        if spec.forms.contains(FormMask::ATTACHED) {
            if let Some(rest) = arg.strip_prefix(spec.prefix) {
                if !rest.is_empty() && !rest.starts_with('=') {
                    return Ok(Some((spec, rest.to_string(), 1)));
                }
            }
        }
    }
    Ok(None)
}

fn apply(out: &mut ParsedArgs, spec: &OptionSpec, value: String) -> Result<(), CliError> {
    match spec.param {
        ParamKind::Int => {
            let parsed = value.parse::<u32>().map_err(|_| CliError::InvalidInt {
                flag: spec.prefix,
                value: value.clone(),
            })?;
            debug_assert_eq!(spec.id, OptionId::Threads);
            out.thread_count = Some(parsed);
        }
        ParamKind::Str => match spec.id {
            OptionId::Output => out.output_file = Some(value),
            OptionId::Macro => {
                let (name, macro_value) = match value.split_once('=') {
                    Some((name, value)) => (name.to_string(), Some(value.to_string())),
                    None => (value, None),
                };
                out.macro_definitions.push((name, macro_value));
            }
            OptionId::Encoding => out.forced_encoding = Some(value),
            OptionId::Threads => unreachable!("-j is declared with ParamKind::Int"),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(args: &[&str]) -> ParsedArgs {
        parse(args).unwrap()
    }

    #[test]
    fn help_and_version_flags() {
        let parsed = parse_str(&["--help"]);
        assert!(parsed.help);
        let parsed = parse_str(&["--version"]);
        assert!(parsed.version);
    }

    #[test]
    fn thread_count_all_three_forms() {
        assert_eq!(parse_str(&["-j", "4"]).thread_count, Some(4));
        assert_eq!(parse_str(&["-j=4"]).thread_count, Some(4));
        assert_eq!(parse_str(&["-j4"]).thread_count, Some(4));
    }

    #[test]
    fn output_path_all_three_forms() {
        assert_eq!(parse_str(&["-o", "a.out"]).output_file, Some("a.out".to_string()));
        assert_eq!(parse_str(&["-o=a.out"]).output_file, Some("a.out".to_string()));
        assert_eq!(parse_str(&["-oa.out"]).output_file, Some("a.out".to_string()));
    }

    #[test]
    fn macro_definition_separated_and_attached_with_and_without_value() {
        let parsed = parse_str(&["-D", "FOO", "-DBAR=1"]);
        assert_eq!(
            parsed.macro_definitions,
            vec![("FOO".to_string(), None), ("BAR".to_string(), Some("1".to_string()))]
        );
    }

    #[test]
    fn forced_encoding_separated_and_assigned_only() {
        assert_eq!(parse_str(&["-finput-encoding", "utf8"]).forced_encoding, Some("utf8".to_string()));
        assert_eq!(parse_str(&["-finput-encoding=utf8"]).forced_encoding, Some("utf8".to_string()));
        // Attached (no '=') is not an accepted form for this flag: it falls
        // through to being treated as an unknown flag.
        assert!(parse(["-finput-encodingutf8"]).is_err());
    }

    #[test]
    fn positional_arguments_become_inputs_in_order() {
        let parsed = parse_str(&["a.ember", "-j4", "b.ember"]);
        assert_eq!(parsed.inputs, vec!["a.ember".to_string(), "b.ember".to_string()]);
    }

    #[test]
    fn missing_value_for_separated_form_is_an_error() {
        let err = parse(["-j"]).unwrap_err();
        assert!(matches!(err, CliError::MissingValue("-j")));
    }

    #[test]
    fn non_integer_thread_count_is_an_error() {
        let err = parse(["-j=abc"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidInt { .. }));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(["--bogus"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownFlag(_)));
    }
}
