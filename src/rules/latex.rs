//! LaTeX suppression: command names and reference-like arguments

use once_cell::sync::Lazy;
use regex::Regex;

/// Commands whose bracket/brace arguments take identifiers, not prose
const ARG_COMMANDS: &str =
    "documentclass|usepackage|begin|end|cite|ref|includegraphics|input|include";

/// `\comma` — inside a command name, nothing has ended the token yet
static COMMAND_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\[^{\[\s]*$").unwrap());

/// `\begin{...}[partial` — inside a bracket argument
static BRACKET_ARG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\\({})(\{{[^}}]*\}})?\[[^\]]*$", ARG_COMMANDS)).unwrap()
});

/// `\begin[...]{partial` — inside a brace argument
static BRACE_ARG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\\({})(\[[^\]]*\])?\{{[^}}]*$", ARG_COMMANDS)).unwrap()
});

/// Cursor inside a command name or a listed command's argument
pub fn in_command_or_argument(line_before: &str) -> bool {
    COMMAND_NAME.is_match(line_before)
        || BRACKET_ARG.is_match(line_before)
        || BRACE_ARG.is_match(line_before)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_command_name() {
        assert!(in_command_or_argument(r"\comma"));
        assert!(in_command_or_argument(r"text \use"));
        assert!(in_command_or_argument(r"\"));
    }

    #[test]
    fn test_command_token_ended_by_space() {
        assert!(!in_command_or_argument(r"\alpha te"));
    }

    #[test]
    fn test_inside_brace_argument() {
        assert!(in_command_or_argument(r"\cite{Sm"));
        assert!(in_command_or_argument(r"\begin{itemi"));
        assert!(in_command_or_argument(r"\begin[t]{itemi"));
        assert!(in_command_or_argument(r"\includegraphics{fig"));
        assert!(in_command_or_argument(r"\input{chap"));
    }

    #[test]
    fn test_inside_bracket_argument() {
        assert!(in_command_or_argument(r"\documentclass[a4"));
        assert!(in_command_or_argument(r"\begin{figure}[h"));
        assert!(in_command_or_argument(r"\usepackage[utf"));
    }

    #[test]
    fn test_after_closed_argument() {
        assert!(!in_command_or_argument(r"\begin{itemize} te"));
        assert!(!in_command_or_argument(r"\cite{Smith2020} sa"));
    }

    #[test]
    fn test_unlisted_command_argument_completes() {
        // Only the listed commands suppress inside their braces
        assert!(!in_command_or_argument(r"\textbf{bo"));
    }
}
