use std::fs::File;
use std::io::Write;
use log::{info, warn};
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::ssl::enums::client_verification::ClientVerification;
use crate::ssl::structs::tls_context_config::TlsContextConfig;

impl Configuration {
    pub fn init() -> Configuration {
        let mut context = TlsContextConfig::default();
        context.set_certificate("/etc/ssl/example.com.pem", "/etc/ssl/example.com.key", "");
        context.set_next_protocols(["h2", "http/1.1"]);
        context.client_verification = ClientVerification::none;
        context.is_default = true;
        context.domains = vec![String::from("example.com"), String::from("*.example.com")];
        Configuration {
            log_level: String::from("info"),
            contexts: vec![context]
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                let config_toml = match Configuration::init().to_toml() {
                    Ok(data) => data,
                    Err(e) => {
                        eprintln!("{e}");
                        return Err(CustomError::new("could not serialize the starter configuration"));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };
        Ok(config)
    }

    /// Rejects structurally invalid contexts and logs states that are
    /// accepted but likely unintended.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }

        let defaults = self.contexts.iter().filter(|context| context.is_default).count();
        if defaults > 1 {
            warn!("[VALIDATE CONFIG] {} contexts are marked as SNI default, the first one wins", defaults);
        }

        for (index, context) in self.contexts.iter().enumerate() {
            let errors = context.validate();
            if let Some(error) = errors.first() {
                return Err(ConfigurationError::ValidationError(format!(
                    "context #{} ({}): {}{}",
                    index,
                    context.display_name(),
                    error,
                    if errors.len() > 1 { format!(" (and {} more)", errors.len() - 1) } else { String::new() }
                )));
            }
            for (position, certificate) in context.certificates.iter().enumerate() {
                if certificate.has_empty_locator() {
                    warn!("[VALIDATE CONFIG] Context #{} ({}) certificate #{} has an empty certificate or key locator", index, context.display_name(), position);
                }
            }
            for (position, credential) in context.delegated_credentials.iter().enumerate() {
                if credential.combined_cert_locator().is_empty() {
                    warn!("[VALIDATE CONFIG] Context #{} ({}) delegated credential #{} has an empty locator", index, context.display_name(), position);
                }
            }
            if context.certificates.is_empty() && context.offload_disabled {
                warn!("[VALIDATE CONFIG] Context #{} ({}) has no certificates and offload is disabled", index, context.display_name());
            }
            if context.client_verification.requires_certificate() && !context.has_client_trust() {
                warn!("[VALIDATE CONFIG] Context #{} ({}) always verifies client certificates but has no trusted CA files", index, context.display_name());
            }
            if !context.offload_disabled && context.key_offload.is_inert() {
                warn!("[VALIDATE CONFIG] Context #{} ({}) enables offload but offloads neither certificates nor key types", index, context.display_name());
            }
        }

        info!("[VALIDATE CONFIG] {} TLS context(s) validated", self.contexts.len());
        Ok(())
    }
}
