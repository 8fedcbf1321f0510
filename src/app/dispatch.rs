use crate::cli::commands::{Cli, Commands, ComposeArgs, DefaultsCommands};
use crate::composer::{GenerationSettings, PoemComposer};
use crate::config::{Config, PoemDefaults};
use crate::error::LlmError;
use crate::persona::{load_bio, resolve_bio_path};
use crate::providers::{Provider, create_provider, known_providers, select_model};
use crate::ui::{ConsoleTranscript, style};
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Compose(args) => run_compose(&args, &config).await,
        Commands::Models { provider } => run_models(provider.as_deref(), &config).await,
        Commands::Defaults { defaults_command } => run_defaults(&defaults_command, &config),
    }
}

async fn run_compose(args: &ComposeArgs, config: &Config) -> Result<()> {
    let temperature = args.temperature.unwrap_or(config.default_temperature);
    if !(0.0..=2.0).contains(&temperature) {
        bail!("temperature must be within 0.0..=2.0, got {temperature}");
    }

    let provider = provider_for(args.provider.as_deref(), config)?;
    let model = resolve_model(provider.as_ref(), args.model.as_deref(), config).await?;

    let explicit = args.explicit_request();
    let mut request = config.poem.merge(explicit.clone());
    if let Some(path) = resolve_bio_path(args.persona.as_deref(), config) {
        request.user_bio = load_bio(&path)?;
        info!(path = %path.display(), loaded = request.user_bio.is_some(), "persona file read");
    }

    if args.save {
        let mut stored = Config::load_from(&config.config_path)?;
        stored.poem.remember(&explicit);
        stored.save().context("Failed to save poem defaults")?;
        info!(path = %stored.config_path.display(), "poem defaults saved");
    }

    let composer = PoemComposer::new(provider, GenerationSettings { model, temperature })?;
    let mut transcript = ConsoleTranscript::new(args.numbered);
    composer.compose(&request, &mut transcript).await?;
    Ok(())
}

async fn run_models(provider_override: Option<&str>, config: &Config) -> Result<()> {
    let provider = provider_for(provider_override, config)?;
    let models = provider
        .list_models()
        .await
        .with_context(|| format!("Failed to list models from {}", provider.name()))?;

    if models.is_empty() {
        println!("{}", style::yellow(format!("{} reports no models.", provider.name())));
        return Ok(());
    }

    let selected = select_model(&models, config.default_model.as_deref());
    println!("{}", style::header(format!("Models from {}", provider.name())));
    for model in &models {
        if selected.as_deref() == Some(model.as_str()) {
            println!("  {} {}", style::value(model), style::dim("(selected)"));
        } else {
            println!("  {model}");
        }
    }
    Ok(())
}

fn run_defaults(command: &DefaultsCommands, config: &Config) -> Result<()> {
    match command {
        DefaultsCommands::Show => {
            if config.poem.is_empty() {
                println!("{}", style::dim("No saved poem defaults."));
                return Ok(());
            }
            let fields = [
                ("title", &config.poem.title),
                ("seed line", &config.poem.seed_line),
                ("theme", &config.poem.theme),
                ("style", &config.poem.style),
            ];
            for (label, value) in fields {
                if let Some(value) = value {
                    println!("{} {}", style::cyan(format!("{label:>9}:")), style::value(value));
                }
            }
            Ok(())
        }
        DefaultsCommands::Clear => {
            // Re-read the file so environment overrides are not persisted.
            let mut stored = Config::load_from(&config.config_path)?;
            stored.poem = PoemDefaults::default();
            stored.save()?;
            println!("Saved poem defaults cleared.");
            Ok(())
        }
    }
}

fn provider_for(name_override: Option<&str>, config: &Config) -> Result<Arc<dyn Provider>> {
    let name = name_override.unwrap_or(&config.default_provider);
    create_provider(name, config.api_key.as_deref(), config.provider_url.as_deref())
        .with_context(|| format!("known providers: {}", known_providers().join(", ")))
}

/// `--model` > configured default > auto-selection from the provider's list.
async fn resolve_model(
    provider: &dyn Provider,
    explicit: Option<&str>,
    config: &Config,
) -> Result<String> {
    if let Some(model) = explicit
        .or(config.default_model.as_deref())
        .map(str::trim)
        .filter(|m| !m.is_empty())
    {
        return Ok(model.to_string());
    }

    let models = match provider.list_models().await {
        Ok(models) => models,
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "model listing failed");
            return Err(e.context("No model configured and the provider could not list models"));
        }
    };

    let model = select_model(&models, None).ok_or_else(|| LlmError::NoModels {
        provider: provider.name().to_string(),
    })?;
    info!(provider = provider.name(), %model, "auto-selected model");
    Ok(model)
}
