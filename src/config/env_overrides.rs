use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("VERSECRAFT_API_KEY")
            && !key.is_empty()
        {
            self.api_key = Some(key);
        }

        if let Ok(provider) = std::env::var("VERSECRAFT_PROVIDER")
            && !provider.is_empty()
        {
            self.default_provider = provider;
        }

        if let Ok(model) = std::env::var("VERSECRAFT_MODEL")
            && !model.is_empty()
        {
            self.default_model = Some(model);
        }

        if let Ok(url) = std::env::var("VERSECRAFT_PROVIDER_URL")
            && !url.is_empty()
        {
            self.provider_url = Some(url);
        }

        if let Ok(temp_str) = std::env::var("VERSECRAFT_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.default_temperature = temp;
        }

        if let Ok(path) = std::env::var("VERSECRAFT_PERSONA")
            && !path.is_empty()
        {
            self.persona.bio_path = Some(path);
        }
    }
}
