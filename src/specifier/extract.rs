//! Lint config path extraction from shell command strings.
//!
//! Matrix entries carry free-form shell command lines. The only parts this
//! harness interprets are `-c <arg>` / `--config <arg>` pairs and the skip
//! convention; everything else is passed through to the shell untouched.

/// Token marking a deliberately-disabled matrix entry.
pub const SKIP_WORD: &str = "skip";

/// Whether the command contains the standalone skip word.
///
/// Matches whole tokens after trimming surrounding quotes, so
/// `echo "skip"` disables an entry but `--skip-rules` does not.
pub fn contains_skip_word(command: &str) -> bool {
    command
        .split_whitespace()
        .any(|token| token.trim_matches(|c| c == '"' || c == '\'') == SKIP_WORD)
}

/// Extract every `-c`/`--config` argument from a command string.
///
/// Arguments may be single-quoted, double-quoted, or bare; quoted arguments
/// preserve embedded whitespace verbatim.
pub fn config_paths_from_command(command: &str) -> Vec<String> {
    let tokens = tokenize(command);
    let mut paths = Vec::new();
    let mut iter = tokens.into_iter();
    while let Some(token) = iter.next() {
        if token == "-c" || token == "--config" {
            if let Some(path) = iter.next() {
                paths.push(path);
            }
        }
    }
    paths
}

/// Split a shell-style command into tokens, honoring quotes.
fn tokenize(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in command.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
}
