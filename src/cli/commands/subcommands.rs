use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum DefaultsCommands {
    /// Show saved poem defaults
    Show,
    /// Forget all saved poem defaults
    Clear,
}
