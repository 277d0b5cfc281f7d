use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    lintmatrix completions bash > ~/.bash_completion.d/lintmatrix\n\n\
                  Generate zsh completions:\n    lintmatrix completions zsh > ~/.zfunc/_lintmatrix\n\n\
                  Generate fish completions:\n    lintmatrix completions fish > ~/.config/fish/completions/lintmatrix.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
