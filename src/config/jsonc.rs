//! Comment stripping for JSON-with-comments lint configuration files.
//!
//! Cloned repositories ship `.oxlintrc.json`-style files with `//` and
//! `/* */` comments. A regex substitution would corrupt string literals that
//! contain comment-looking sequences, so this is a small streaming scanner
//! that tracks string and escape state.

/// Scanner state while walking the input.
#[derive(Clone, Copy)]
enum State {
    Code,
    Str { escaped: bool },
    LineComment,
    BlockComment,
}

/// Strip `//` and `/* */` comments, leaving string contents untouched.
///
/// Line comments keep their terminating newline so line numbers in
/// subsequent parse errors stay meaningful. Block comment bytes are dropped
/// entirely, including unterminated ones at end of input.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut state = State::Code;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = State::BlockComment;
                }
                '"' => {
                    out.push(c);
                    state = State::Str { escaped: false };
                }
                _ => out.push(c),
            },
            State::Str { escaped } => {
                out.push(c);
                state = match (escaped, c) {
                    (false, '\\') => State::Str { escaped: true },
                    (false, '"') => State::Code,
                    _ => State::Str { escaped: false },
                };
            }
            State::LineComment => {
                if c == '\n' {
                    out.push(c);
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                }
            }
        }
    }

    out
}
