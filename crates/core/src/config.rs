use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub extractor: ExtractorConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub api_key: Option<SecretString>,
    pub base_url: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
}

#[derive(Clone, Debug)]
pub struct ExtractorConfig {
    pub kind: ExtractorKind,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProvider {
    OpenAi,
    Anthropic,
    Ollama,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Ollama => "ollama",
        }
    }

    /// Base URL used when `llm.base_url` is not configured. All three
    /// providers are addressed through their OpenAI-compatible surface.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Anthropic => "https://api.anthropic.com/v1",
            Self::Ollama => "http://localhost:11434/v1",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    /// Deterministic digit-run scan (the production default).
    DigitRun,
    /// LLM-backed extraction behind the same contract.
    Llm,
}

impl ExtractorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DigitRun => "digit_run",
            Self::Llm => "llm",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub llm_provider: Option<LlmProvider>,
    pub llm_api_key: Option<String>,
    pub llm_model: Option<String>,
    pub extractor_kind: Option<ExtractorKind>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig { bind_address: "127.0.0.1".to_string(), port: 8080 },
            llm: LlmConfig {
                provider: LlmProvider::Ollama,
                api_key: None,
                base_url: None,
                model: "llama3.1".to_string(),
                timeout_secs: 30,
                max_retries: 2,
            },
            extractor: ExtractorConfig { kind: ExtractorKind::DigitRun },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

fn secret_value(value: String) -> SecretString {
    value.into()
}

impl std::str::FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            "ollama" => Ok(Self::Ollama),
            other => Err(ConfigError::Validation(format!(
                "unsupported llm provider `{other}` (expected openai|anthropic|ollama)"
            ))),
        }
    }
}

impl std::str::FromStr for ExtractorKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "digit_run" => Ok(Self::DigitRun),
            "llm" => Ok(Self::Llm),
            other => Err(ConfigError::Validation(format!(
                "unsupported extractor kind `{other}` (expected digit_run|llm)"
            ))),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    server: Option<ServerPatch>,
    llm: Option<LlmPatch>,
    extractor: Option<ExtractorPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct ServerPatch {
    bind_address: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
struct LlmPatch {
    provider: Option<LlmProvider>,
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    timeout_secs: Option<u64>,
    max_retries: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct ExtractorPatch {
    kind: Option<ExtractorKind>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("pricey.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(server) = patch.server {
            if let Some(bind_address) = server.bind_address {
                self.server.bind_address = bind_address;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
        }

        if let Some(llm) = patch.llm {
            if let Some(provider) = llm.provider {
                self.llm.provider = provider;
            }
            if let Some(llm_api_key_value) = llm.api_key {
                self.llm.api_key = Some(secret_value(llm_api_key_value));
            }
            if let Some(base_url) = llm.base_url {
                self.llm.base_url = Some(base_url);
            }
            if let Some(model) = llm.model {
                self.llm.model = model;
            }
            if let Some(timeout_secs) = llm.timeout_secs {
                self.llm.timeout_secs = timeout_secs;
            }
            if let Some(max_retries) = llm.max_retries {
                self.llm.max_retries = max_retries;
            }
        }

        if let Some(extractor) = patch.extractor {
            if let Some(kind) = extractor.kind {
                self.extractor.kind = kind;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("PRICEY_SERVER_BIND_ADDRESS") {
            self.server.bind_address = value;
        }
        if let Some(value) = read_env("PRICEY_SERVER_PORT") {
            self.server.port = parse_u16("PRICEY_SERVER_PORT", &value)?;
        }

        if let Some(value) = read_env("PRICEY_LLM_PROVIDER") {
            self.llm.provider = value.parse()?;
        }
        if let Some(value) = read_env("PRICEY_LLM_API_KEY") {
            self.llm.api_key = Some(secret_value(value));
        }
        if let Some(value) = read_env("PRICEY_LLM_BASE_URL") {
            self.llm.base_url = Some(value);
        }
        if let Some(value) = read_env("PRICEY_LLM_MODEL") {
            self.llm.model = value;
        }
        if let Some(value) = read_env("PRICEY_LLM_TIMEOUT_SECS") {
            self.llm.timeout_secs = parse_u64("PRICEY_LLM_TIMEOUT_SECS", &value)?;
        }
        if let Some(value) = read_env("PRICEY_LLM_MAX_RETRIES") {
            self.llm.max_retries = parse_u32("PRICEY_LLM_MAX_RETRIES", &value)?;
        }

        if let Some(value) = read_env("PRICEY_EXTRACTOR_KIND") {
            self.extractor.kind = value.parse()?;
        }

        let log_level = read_env("PRICEY_LOGGING_LEVEL").or_else(|| read_env("PRICEY_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("PRICEY_LOGGING_FORMAT").or_else(|| read_env("PRICEY_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(bind_address) = overrides.bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
        if let Some(llm_provider) = overrides.llm_provider {
            self.llm.provider = llm_provider;
        }
        if let Some(llm_api_key) = overrides.llm_api_key {
            self.llm.api_key = Some(secret_value(llm_api_key));
        }
        if let Some(llm_model) = overrides.llm_model {
            self.llm.model = llm_model;
        }
        if let Some(extractor_kind) = overrides.extractor_kind {
            self.extractor.kind = extractor_kind;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_server(&self.server)?;
        validate_llm(&self.llm, self.extractor.kind)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("pricey.toml"), PathBuf::from("config/pricey.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.bind_address.trim().is_empty() {
        return Err(ConfigError::Validation("server.bind_address must not be empty".to_string()));
    }

    if server.port == 0 {
        return Err(ConfigError::Validation("server.port must be greater than zero".to_string()));
    }

    Ok(())
}

fn validate_llm(llm: &LlmConfig, extractor_kind: ExtractorKind) -> Result<(), ConfigError> {
    if llm.timeout_secs == 0 || llm.timeout_secs > 300 {
        return Err(ConfigError::Validation(
            "llm.timeout_secs must be in range 1..=300".to_string(),
        ));
    }

    if llm.model.trim().is_empty() {
        return Err(ConfigError::Validation("llm.model must not be empty".to_string()));
    }

    // The LLM section only has to be usable when the llm extractor is on;
    // with the digit_run extractor it is inert configuration.
    if extractor_kind == ExtractorKind::Llm {
        if let LlmProvider::OpenAi | LlmProvider::Anthropic = llm.provider {
            let missing = llm
                .api_key
                .as_ref()
                .map(|value| value.expose_secret().trim().is_empty())
                .unwrap_or(true);
            if missing {
                return Err(ConfigError::Validation(
                    "llm.api_key is required for openai/anthropic providers when extractor.kind is `llm`"
                        .to_string(),
                ));
            }
        }
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    let known = matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error");
    if !known {
        return Err(ConfigError::Validation(format!(
            "logging.level `{}` is not one of trace|debug|info|warn|error",
            logging.level
        )));
    }

    Ok(())
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

fn parse_u16(key: &str, value: &str) -> Result<u16, ConfigError> {
    value
        .parse::<u16>()
        .map_err(|_| ConfigError::InvalidEnvOverride { key: key.to_string(), value: value.into() })
}

fn parse_u32(key: &str, value: &str) -> Result<u32, ConfigError> {
    value
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidEnvOverride { key: key.to_string(), value: value.into() })
}

fn parse_u64(key: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidEnvOverride { key: key.to_string(), value: value.into() })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use secrecy::ExposeSecret;

    use super::{
        AppConfig, ConfigError, ConfigOverrides, ExtractorKind, LlmProvider, LoadOptions, LogFormat,
    };

    fn load_with_overrides(overrides: ConfigOverrides) -> Result<AppConfig, ConfigError> {
        AppConfig::load(LoadOptions {
            config_path: Some(std::path::PathBuf::from("does-not-exist.toml")),
            overrides,
            ..LoadOptions::default()
        })
    }

    #[test]
    fn defaults_are_valid() {
        let config = load_with_overrides(ConfigOverrides::default()).expect("defaults load");

        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.extractor.kind, ExtractorKind::DigitRun);
        assert_eq!(config.llm.provider, LlmProvider::Ollama);
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn patch_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[server]\nport = 9090\n\n[extractor]\nkind = \"llm\"\n\n[llm]\nprovider = \"ollama\"\nmodel = \"qwen2.5\"\n\n[logging]\nformat = \"json\"\n"
        )
        .expect("write patch");

        let config = AppConfig::load(LoadOptions {
            config_path: Some(file.path().to_path_buf()),
            require_file: true,
            ..LoadOptions::default()
        })
        .expect("patched config loads");

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.extractor.kind, ExtractorKind::Llm);
        assert_eq!(config.llm.model, "qwen2.5");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn required_missing_file_is_an_error() {
        let result = AppConfig::load(LoadOptions {
            config_path: Some(std::path::PathBuf::from("missing/pricey.toml")),
            require_file: true,
            ..LoadOptions::default()
        });

        assert!(matches!(result, Err(ConfigError::MissingConfigFile(_))));
    }

    #[test]
    fn malformed_patch_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[server\nport = 9090").expect("write patch");

        let result = AppConfig::load(LoadOptions {
            config_path: Some(file.path().to_path_buf()),
            require_file: true,
            ..LoadOptions::default()
        });

        assert!(matches!(result, Err(ConfigError::ParseFile { .. })));
    }

    #[test]
    fn interpolation_reads_environment_values() {
        std::env::set_var("PRICEY_TEST_INTERP_MODEL", "phi3");

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[llm]\nmodel = \"${{PRICEY_TEST_INTERP_MODEL}}\"").expect("write patch");

        let config = AppConfig::load(LoadOptions {
            config_path: Some(file.path().to_path_buf()),
            require_file: true,
            ..LoadOptions::default()
        })
        .expect("interpolated config loads");

        assert_eq!(config.llm.model, "phi3");
        std::env::remove_var("PRICEY_TEST_INTERP_MODEL");
    }

    #[test]
    fn unterminated_interpolation_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[llm]\nmodel = \"${{PRICEY_TEST_UNTERMINATED").expect("write patch");

        let result = AppConfig::load(LoadOptions {
            config_path: Some(file.path().to_path_buf()),
            require_file: true,
            ..LoadOptions::default()
        });

        assert!(matches!(result, Err(ConfigError::UnterminatedInterpolation)));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = load_with_overrides(ConfigOverrides {
            port: Some(9999),
            llm_model: Some("gpt-4o-mini".to_string()),
            llm_provider: Some(LlmProvider::OpenAi),
            llm_api_key: Some("sk-test".to_string()),
            extractor_kind: Some(ExtractorKind::Llm),
            ..ConfigOverrides::default()
        })
        .expect("overridden config loads");

        assert_eq!(config.server.port, 9999);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.provider, LlmProvider::OpenAi);
        assert_eq!(
            config.llm.api_key.as_ref().map(|key| key.expose_secret().to_string()),
            Some("sk-test".to_string())
        );
        assert_eq!(config.extractor.kind, ExtractorKind::Llm);
    }

    #[test]
    fn llm_extractor_without_api_key_fails_validation_for_openai() {
        let result = load_with_overrides(ConfigOverrides {
            llm_provider: Some(LlmProvider::OpenAi),
            extractor_kind: Some(ExtractorKind::Llm),
            ..ConfigOverrides::default()
        });

        let message = result.err().expect("validation error").to_string();
        assert!(message.contains("llm.api_key"));
    }

    #[test]
    fn digit_run_extractor_does_not_require_llm_credentials() {
        let config = load_with_overrides(ConfigOverrides {
            llm_provider: Some(LlmProvider::OpenAi),
            ..ConfigOverrides::default()
        })
        .expect("digit_run config loads without credentials");

        assert_eq!(config.extractor.kind, ExtractorKind::DigitRun);
    }

    #[test]
    fn unknown_logging_level_fails_validation() {
        let result = load_with_overrides(ConfigOverrides {
            log_level: Some("loud".to_string()),
            ..ConfigOverrides::default()
        });

        let message = result.err().expect("validation error").to_string();
        assert!(message.contains("logging.level"));
    }

    #[test]
    fn setting_enums_parse_from_strings() {
        assert_eq!("openai".parse::<LlmProvider>().expect("provider"), LlmProvider::OpenAi);
        assert_eq!("LLM".parse::<ExtractorKind>().expect("kind"), ExtractorKind::Llm);
        assert_eq!("pretty".parse::<LogFormat>().expect("format"), LogFormat::Pretty);
        assert!("sometimes".parse::<LogFormat>().is_err());
    }

    #[test]
    fn provider_default_base_urls_are_openai_compatible() {
        assert!(LlmProvider::OpenAi.default_base_url().starts_with("https://"));
        assert!(LlmProvider::Ollama.default_base_url().contains("11434"));
    }
}
