use crate::ssl::enums::context_config_error::ContextConfigError;
use crate::ssl::ssl::{join_names, PROCESS_BASELINE, SERVER_CIPHERS, SERVER_CIPHERSUITES, SERVER_SIGALGS};
use crate::ssl::structs::security_baseline::SecurityBaseline;
use std::sync::Arc;

impl SecurityBaseline {
    /// The baseline shared by the whole process, computed on first use.
    pub fn process() -> Arc<SecurityBaseline> {
        Arc::clone(&PROCESS_BASELINE)
    }

    pub(crate) fn canonical() -> Self {
        Self {
            ciphers: join_names(SERVER_CIPHERS),
            ciphersuites: join_names(SERVER_CIPHERSUITES),
            sigalgs: join_names(SERVER_SIGALGS),
        }
    }

    /// Builds a baseline from explicit name lists, e.g. for a hardened
    /// deployment or for tests. None of the lists may be empty.
    pub fn from_lists(
        ciphers: &[&str],
        ciphersuites: &[&str],
        sigalgs: &[&str],
    ) -> Result<Self, ContextConfigError> {
        if ciphers.is_empty() {
            return Err(ContextConfigError::EmptyPolicyString("cipher"));
        }
        if ciphersuites.is_empty() {
            return Err(ContextConfigError::EmptyPolicyString("ciphersuite"));
        }
        if sigalgs.is_empty() {
            return Err(ContextConfigError::EmptyPolicyString("sigalg"));
        }
        Ok(Self {
            ciphers: join_names(ciphers),
            ciphersuites: join_names(ciphersuites),
            sigalgs: join_names(sigalgs),
        })
    }

    pub fn ciphers(&self) -> &str {
        &self.ciphers
    }

    pub fn ciphersuites(&self) -> &str {
        &self.ciphersuites
    }

    pub fn sigalgs(&self) -> &str {
        &self.sigalgs
    }
}
