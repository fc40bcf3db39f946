use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    depremap completions bash > ~/.bash_completion.d/depremap\n\n\
                  Generate zsh completions:\n    depremap completions zsh > ~/.zfunc/_depremap\n\n\
                  Generate fish completions:\n    depremap completions fish > ~/.config/fish/completions/depremap.fish\n\n\
                  Generate PowerShell completions:\n    depremap completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
