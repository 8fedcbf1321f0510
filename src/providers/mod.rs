pub mod compatible;
pub mod factory;
pub mod http_client;
pub mod ollama;
pub mod scrub;
pub mod selection;
pub mod traits;

pub use factory::{create_provider, known_providers, resolve_api_key};
pub use scrub::{api_error, sanitize_api_error, scrub_secret_patterns};
pub use selection::select_model;
pub use traits::Provider;
