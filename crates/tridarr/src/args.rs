//! Command-line argument resolution.
//!
//! The program takes exactly three positional size arguments. Each is a
//! base-10 non-negative integer that must fit in a `usize`: leading
//! whitespace and a single `+` are accepted, a leading `-` is rejected
//! outright, and anything after the digits is an error.

use std::ffi::{OsStr, OsString};

use smallvec::SmallVec;
use tridarr_core::{ArgError, ArgName, Dims};

use crate::error::RunError;

/// Shown in the usage message when the invocation name is unavailable.
pub const PROGRAM_PLACEHOLDER: &str = "<program>";

/// Program name plus `x`, `y`, `z`.
const EXPECTED_ARGS: usize = 4;

/// Resolve the full argument vector (program name first) into dimensions.
pub fn resolve<I>(args: I) -> Result<Dims, RunError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let args: SmallVec<[OsString; EXPECTED_ARGS]> = args.into_iter().map(Into::into).collect();
    if args.len() != EXPECTED_ARGS {
        return Err(RunError::Usage {
            program: program_name(args.first().map(OsString::as_os_str)),
        });
    }

    let [x, y, z] = ArgName::ALL;
    Ok(Dims::new(
        parse_dimension(&args[1], x)?,
        parse_dimension(&args[2], y)?,
        parse_dimension(&args[3], z)?,
    ))
}

/// The name to print in the usage message.
pub fn program_name(arg0: Option<&OsStr>) -> String {
    match arg0 {
        Some(name) if !name.is_empty() => name.to_string_lossy().into_owned(),
        _ => PROGRAM_PLACEHOLDER.to_owned(),
    }
}

/// Parse one size argument.
///
/// Text that is not valid UTF-8 can never be all digits, so it is decoded
/// lossily and rejected by the digit check.
pub fn parse_dimension(arg: &OsStr, name: ArgName) -> Result<usize, ArgError> {
    parse_dimension_str(&arg.to_string_lossy(), name)
}

/// Parse one size argument given as text.
pub fn parse_dimension_str(text: &str, name: ArgName) -> Result<usize, ArgError> {
    let text = text.trim_start_matches(is_c_space);
    if text.starts_with('-') {
        return Err(ArgError::Negative { name });
    }
    let digits = text.strip_prefix('+').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ArgError::Unparseable { name });
    }
    // Only overflow is left once the text is known to be all digits.
    digits.parse().map_err(|_| ArgError::TooLarge { name })
}

/// Whitespace as the C locale defines it, vertical tab included.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    fn parse(text: &str) -> Result<usize, ArgError> {
        parse_dimension_str(text, ArgName::X)
    }

    #[test]
    fn resolves_three_sizes() {
        let dims = resolve(argv(&["tridarr", "2", "3", "4"])).unwrap();
        assert_eq!(dims, Dims::new(2, 3, 4));
    }

    #[test]
    fn wrong_count_is_usage_error_with_program_name() {
        for items in [
            &["tridarr"][..],
            &["tridarr", "1", "2"][..],
            &["tridarr", "1", "2", "3", "4"][..],
        ] {
            match resolve(argv(items)) {
                Err(RunError::Usage { program }) => assert_eq!(program, "tridarr"),
                other => panic!("expected usage error, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_or_empty_program_name_uses_placeholder() {
        assert!(matches!(
            resolve(Vec::<OsString>::new()),
            Err(RunError::Usage { program }) if program == PROGRAM_PLACEHOLDER
        ));
        assert!(matches!(
            resolve(argv(&["", "1"])),
            Err(RunError::Usage { program }) if program == PROGRAM_PLACEHOLDER
        ));
    }

    #[test]
    fn accepts_plain_and_decorated_numbers() {
        assert_eq!(parse("0"), Ok(0));
        assert_eq!(parse("42"), Ok(42));
        assert_eq!(parse("007"), Ok(7));
        assert_eq!(parse("+5"), Ok(5));
        assert_eq!(parse("  \t12"), Ok(12));
        assert_eq!(parse("\x0b\x0c3"), Ok(3));
    }

    #[test]
    fn rejects_negative() {
        let negative = Err(ArgError::Negative { name: ArgName::X });
        assert_eq!(parse("-5"), negative);
        assert_eq!(parse("-0"), negative);
        assert_eq!(parse("-"), negative);
        assert_eq!(parse("  -3"), negative);
        assert_eq!(parse("-abc"), negative);
    }

    #[test]
    fn rejects_malformed() {
        let bad = Err(ArgError::Unparseable { name: ArgName::X });
        for text in ["", " ", "abc", "12x", "5 ", "+", "++5", "+-5", "0x10", "1.5", "١٢"] {
            assert_eq!(parse(text), bad, "{text:?}");
        }
    }

    #[test]
    fn rejects_overflow() {
        let too_large = Err(ArgError::TooLarge { name: ArgName::X });
        assert_eq!(parse("99999999999999999999999999"), too_large);
        let just_over = format!("{}0", usize::MAX);
        assert_eq!(parse(&just_over), too_large);
        assert_eq!(parse(&usize::MAX.to_string()), Ok(usize::MAX));
    }

    #[test]
    fn trailing_garbage_beats_overflow() {
        assert_eq!(
            parse("99999999999999999999999999x"),
            Err(ArgError::Unparseable { name: ArgName::X })
        );
    }

    #[test]
    fn first_bad_argument_wins() {
        let err = resolve(argv(&["tridarr", "1", "-2", "abc"])).unwrap_err();
        assert!(matches!(
            err,
            RunError::Arg(ArgError::Negative { name: ArgName::Y })
        ));
        let err = resolve(argv(&["tridarr", "1", "2", "3x"])).unwrap_err();
        assert_eq!(err.to_string(), "failed to parse argument z");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_unparseable() {
        use std::os::unix::ffi::OsStringExt;
        let raw = OsString::from_vec(vec![b'1', 0xff]);
        assert_eq!(
            parse_dimension(&raw, ArgName::Z),
            Err(ArgError::Unparseable { name: ArgName::Z })
        );
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_usize_round_trips(n in any::<usize>()) {
                prop_assert_eq!(parse(&n.to_string()), Ok(n));
            }

            #[test]
            fn minus_prefix_always_negative(rest in "[0-9a-z ]{0,8}") {
                let text = format!("-{rest}");
                prop_assert_eq!(parse(&text), Err(ArgError::Negative { name: ArgName::X }));
            }
        }
    }
}
