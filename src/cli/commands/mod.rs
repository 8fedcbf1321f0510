use crate::composer::GenerationRequest;
use clap::{Args, Parser, Subcommand};

mod subcommands;

pub use subcommands::DefaultsCommands;

/// `Versecraft` - compose poems line by line with a language model.
#[derive(Parser, Debug)]
#[command(name = "versecraft")]
#[command(version)]
#[command(about = "Compose poems one line at a time with a language model.", long_about = None)]
pub struct Cli {
    /// Log generation requests and decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose a poem
    Compose(ComposeArgs),

    /// List the models a provider offers
    Models {
        /// Provider to query (ollama, openai, openrouter, groq, ...)
        #[arg(short, long)]
        provider: Option<String>,
    },

    /// Manage poem defaults saved with `compose --save`
    Defaults {
        #[command(subcommand)]
        defaults_command: DefaultsCommands,
    },
}

#[derive(Args, Debug, Default)]
pub struct ComposeArgs {
    /// Poem title (generated when omitted)
    #[arg(long)]
    pub title: Option<String>,

    /// First line of the poem (generated when omitted)
    #[arg(long)]
    pub seed_line: Option<String>,

    /// What the poem is about ("random" for no constraint)
    #[arg(long)]
    pub theme: Option<String>,

    /// Poetic form: haiku, limerick, sonnet, free verse, or any other name
    #[arg(long)]
    pub style: Option<String>,

    /// Free-form instructions, e.g. "make it 8 lines long"
    #[arg(short, long)]
    pub guidance: Option<String>,

    /// File describing whose perspective the poem is written from
    #[arg(long)]
    pub persona: Option<String>,

    /// Provider to use (ollama, openai, openrouter, groq, ...)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Model to use (auto-selected when omitted)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Temperature (0.0 - 2.0)
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Number each line in the transcript
    #[arg(long)]
    pub numbered: bool,

    /// Save title, seed line, theme and style as defaults for later runs
    #[arg(long)]
    pub save: bool,
}

impl ComposeArgs {
    /// Poem fields given on the command line. Persona text is loaded
    /// separately from the `--persona` file.
    pub fn explicit_request(&self) -> GenerationRequest {
        GenerationRequest {
            title: self.title.clone(),
            seed_line: self.seed_line.clone(),
            theme: self.theme.clone(),
            style: self.style.clone(),
            user_bio: None,
            guidance: self.guidance.clone(),
        }
    }
}
