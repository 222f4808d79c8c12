use crate::ssl::enums::issuer_preference::IssuerPreference;
use std::fmt;

impl fmt::Display for IssuerPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssuerPreference::public_ca => write!(f, "public_ca"),
            IssuerPreference::prod_ca => write!(f, "prod_ca"),
            IssuerPreference::public_to_prod_ca => write!(f, "public_to_prod_ca"),
        }
    }
}
