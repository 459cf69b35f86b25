use crate::error::CliError;
use std::{collections::HashMap, fs, path::Path};

/// Environment variable manager that loads from the system and .env files.
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn new() -> Self {
        let vars = std::env::vars().collect();
        Self { vars }
    }

    /// Load variables from a .env file.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;
        self.parse_env_content(&content)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some(eq_pos) = line.find('=') else {
                return Err(CliError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };
            let key = line[..eq_pos].trim();
            let value = Self::unquote_value(line[eq_pos + 1..].trim());
            if key.is_empty() {
                return Err(CliError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    line_num + 1
                )));
            }
            self.vars.insert(key.to_string(), value);
        }
        Ok(())
    }

    fn unquote_value(value: &str) -> String {
        let value = value.trim();
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            return value[1..value.len() - 1].to_string();
        }
        value.to_string()
    }
}

/// Resolve the connection string: an explicit argument wins, then the
/// process environment (with a .env file overlay when present).
pub fn database_url(cli_arg: Option<String>) -> Result<String, CliError> {
    if let Some(url) = cli_arg {
        return Ok(url);
    }

    let mut env = EnvManager::new();
    if Path::new(".env").is_file() {
        env.load_from_file(".env")?;
    }

    env.get("FLEXIMART_DATABASE_URL")
        .or_else(|| env.get("DATABASE_URL"))
        .map(str::to_string)
        .ok_or(CliError::MissingDatabaseUrl)
}
