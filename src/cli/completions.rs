use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug, Clone)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    artifacts-launcher completions bash > ~/.bash_completion.d/artifacts-launcher\n\n\
                  Generate zsh completions:\n    artifacts-launcher completions zsh > ~/.zfunc/_artifacts-launcher\n\n\
                  Generate fish completions:\n    artifacts-launcher completions fish > ~/.config/fish/completions/artifacts-launcher.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
