use std::fs::File;
use std::io::Write;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::intercept_mode::InterceptMode;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::store_config::StoreConfig;
use crate::pages::structs::cache_key_builder::CacheKeyBuilder;
use crate::pages::structs::page_rules::PageRules;

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            prefix: None,
            use_host_prefix: false,
            version: None,
            mode: InterceptMode::precomputed,
            ssr: true,
            pages: vec![],
            store: StoreConfig {
                ttl: Some(600),
                ..StoreConfig::memory()
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new("will not create configuration file automatically"));
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init()
                    .to_toml()
                    .map_err(|e| CustomError::new(&e.to_string()))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new("created configuration file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new("could not create configuration file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE CONFIG] {}", error);
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.log_level_filter()?;
        self.store.validate()?;
        self.page_rules()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<log::LevelFilter, ConfigurationError> {
        match self.log_level.as_str() {
            "off" => Ok(log::LevelFilter::Off),
            "trace" => Ok(log::LevelFilter::Trace),
            "debug" => Ok(log::LevelFilter::Debug),
            "info" => Ok(log::LevelFilter::Info),
            "warn" => Ok(log::LevelFilter::Warn),
            "error" => Ok(log::LevelFilter::Error),
            other => Err(ConfigurationError::InvalidLogLevel(other.to_string())),
        }
    }

    pub fn page_rules(&self) -> Result<PageRules, ConfigurationError> {
        PageRules::from_config(&self.pages)
    }

    pub fn key_builder(&self) -> CacheKeyBuilder {
        CacheKeyBuilder::new(self.prefix.clone(), self.use_host_prefix)
    }
}
