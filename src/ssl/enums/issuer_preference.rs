use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum IssuerPreference {
    #[default]
    public_ca,
    prod_ca,
    public_to_prod_ca,
}
