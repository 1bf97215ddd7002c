#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    SerializeError(toml::ser::Error),
    InvalidRule(String),
    InvalidStore(String),
    InvalidLogLevel(String),
}
