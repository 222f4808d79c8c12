#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::structs::configuration::Configuration;
        use crate::ssl::enums::client_verification::ClientVerification;
        use crate::ssl::enums::issuer_preference::IssuerPreference;
        use crate::ssl::enums::tls_version::TlsVersion;
        use crate::ssl::structs::security_baseline::SecurityBaseline;

        #[test]
        fn test_init_is_valid() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.contexts.len(), 1);
            assert!(config.contexts[0].is_default);
            assert_eq!(config.contexts[0].certificates.len(), 1);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_init_toml_round_trip() {
            let config = Configuration::init();
            let data = config.to_toml().unwrap();
            let parsed = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(parsed.contexts.len(), 1);
            let context = &parsed.contexts[0];
            assert_eq!(context.domains, vec!["example.com".to_string(), "*.example.com".to_string()]);
            assert_eq!(context.certificates.as_slice(), config.contexts[0].certificates.as_slice());
            assert_eq!(context.next_protocols, config.contexts[0].next_protocols);
            assert_eq!(context.client_verification, ClientVerification::none);
        }

        #[test]
        fn test_minimal_context_takes_defaults() {
            let data = br#"
log_level = "debug"

[[contexts]]
domains = ["example.org"]
"#;
            let config = Configuration::load(data).unwrap();
            let context = &config.contexts[0];
            let baseline = SecurityBaseline::process();
            assert_eq!(context.ssl_ciphers, baseline.ciphers());
            assert_eq!(context.ssl_ciphersuites, baseline.ciphersuites());
            assert_eq!(context.sig_algs, baseline.sigalgs());
            assert_eq!(context.ssl_version, TlsVersion::Tls12);
            assert_eq!(context.ecc_curve_name, "prime256v1");
            assert!(context.offload_disabled);
            assert_eq!(context.key_offload.service_id, "default");
            assert_eq!(context.issuer_preference, IssuerPreference::public_ca);
            assert!(context.certificates.is_empty());
        }

        #[test]
        fn test_full_context_parsing() {
            let data = br#"
log_level = "info"

[[contexts]]
domains = ["api.example.com", "*.api.example.com"]
ssl_version = "TLSv1.3"
is_default = true
client_ca_file = "/etc/ssl/ca.pem"
client_ca_files = ["/etc/ssl/ca2.pem", "/etc/ssl/ca3.pem"]
client_verification = "if_presented"
offload_disabled = false
issuer_preference = "public_to_prod_ca"
prefer_prod_ca_issued_cert = true
session_context = "api"
ssl_ciphers = "ECDHE-ECDSA-AES128-GCM-SHA256"

[[contexts.certificates]]
cert_locator = "/etc/ssl/api.pem"
key_locator = "/etc/ssl/api.key"
password_locator = "/etc/ssl/api.pass"

[[contexts.certificates]]
cert_locator = "/etc/ssl/api-ec.pem"
key_locator = "/etc/ssl/api-ec.key"

[[contexts.delegated_credentials]]
combined_cert_locator = "/etc/ssl/api-dc.pem"

[[contexts.next_protocols]]
weight = 1
protocols = ["h2", "http/1.1"]

[contexts.key_offload]
offload_key_types = ["rsa"]
service_id = "signer"
"#;
            let config = Configuration::load(data).unwrap();
            let context = &config.contexts[0];
            assert_eq!(context.ssl_version, TlsVersion::Tls13);
            assert_eq!(context.certificates.len(), 2);
            assert!(context.certificates.first().unwrap().has_password());
            assert_eq!(context.certificates.last().unwrap().cert_locator(), "/etc/ssl/api-ec.pem");
            assert_eq!(context.delegated_credentials.first().unwrap().combined_cert_locator(), "/etc/ssl/api-dc.pem");
            assert!(context.next_protocols_enabled());
            assert_eq!(context.client_ca_files_all(), vec!["/etc/ssl/ca.pem", "/etc/ssl/ca2.pem", "/etc/ssl/ca3.pem"]);
            assert_eq!(context.client_verification, ClientVerification::if_presented);
            assert_eq!(context.key_offload_decision("rsa").service_id(), Some("signer"));
            assert!(!context.key_offload.cert_offload_enabled);
            assert_eq!(context.session_context_or("vip"), "api");
            assert!(context.prefer_prod_ca_issued_cert);
            assert_eq!(context.ssl_ciphers, "ECDHE-ECDSA-AES128-GCM-SHA256");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_unknown_log_level_rejected() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_invalid_context_rejected() {
            let mut config = Configuration::init();
            config.contexts[0].domains.push(String::from("not a domain"));
            config.contexts[0].ssl_ciphers.clear();
            match config.validate() {
                Err(ConfigurationError::ValidationError(message)) => {
                    assert!(message.contains("context #0 (example.com)"));
                    assert!(message.contains("not a domain"));
                    assert!(message.contains("and 1 more"));
                }
                other => panic!("expected a validation error, got {:?}", other),
            }
        }

        #[test]
        fn test_verification_without_trust_files_is_accepted() {
            let mut config = Configuration::init();
            config.contexts[0].client_verification = ClientVerification::always;
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_ssl_version_any_case() {
            let data = br#"
log_level = "info"

[[contexts]]
domains = ["a.example.com"]
ssl_version = "tlsv1.3"

[[contexts]]
domains = ["b.example.com"]
ssl_version = "TLS1.2"
"#;
            let config = Configuration::load(data).unwrap();
            assert_eq!(config.contexts[0].ssl_version, TlsVersion::Tls13);
            assert_eq!(config.contexts[1].ssl_version, TlsVersion::Tls12);
            assert!(config.to_toml().unwrap().contains("ssl_version = \"TLSv1.3\""));
        }

        #[test]
        fn test_unknown_ssl_version_rejected() {
            let data = br#"
log_level = "info"

[[contexts]]
ssl_version = "SSLv3"
"#;
            assert!(Configuration::load(data).is_err());
        }

        #[test]
        fn test_empty_locators_are_accepted() {
            let mut config = Configuration::init();
            config.contexts[0].add_delegated_credential("");
            config.contexts[0].add_certificate("", "", "");
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_parse_error() {
            let result = Configuration::load(b"log_level = ");
            assert!(result.is_err());
        }

        #[test]
        fn test_configuration_error_display() {
            let error = ConfigurationError::ValidationError(String::from("context #0"));
            assert_eq!(format!("{}", error), "validation failed: context #0");
            let error = ConfigurationError::IOError(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
            assert_eq!(format!("{}", error), "missing");
        }
    }
}
