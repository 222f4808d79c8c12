use std::process::exit;
use clap::Parser;
use log::{error, info};
use tls_context_config::common::common::setup_logging;
use tls_context_config::config::structs::configuration::Configuration;
use tls_context_config::structs::Cli;

fn main()
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {}", e);
        exit(101);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!("[VALIDATE CONFIG] {}", e);
        exit(102);
    }

    for (index, context) in config.contexts.iter().enumerate() {
        info!(
            "[TLS CONTEXT] #{} {} - domains: [{}] - certificates: {} - delegated credentials: {} - default: {} - min version: {} - client verification: {} - offload rsa: {} - offload ec: {}",
            index,
            context.display_name(),
            context.domains.join(", "),
            context.certificates.len(),
            context.delegated_credentials.len(),
            context.is_default,
            context.ssl_version,
            context.client_verification,
            context.key_offload_decision("rsa"),
            context.key_offload_decision("ec")
        );
    }
}
