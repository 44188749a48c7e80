use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum RegistryError {
    Unauthorized(String),
    SaleInactive(String),
    InvalidAmount(String),
    SupplyExceeded(String),
    GiveawayCapExceeded(String),
    InsufficientPayment(String),
    NotFound(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::SaleInactive(msg) => write!(f, "Sale inactive: {}", msg),
            Self::InvalidAmount(msg) => write!(f, "Invalid amount: {}", msg),
            Self::SupplyExceeded(msg) => write!(f, "Supply exceeded: {}", msg),
            Self::GiveawayCapExceeded(msg) => write!(f, "Giveaway cap exceeded: {}", msg),
            Self::InsufficientPayment(msg) => write!(f, "Insufficient payment: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl RegistryError {
    pub fn only_owner() -> Self {
        Self::Unauthorized("Only the registry owner can perform this action".into())
    }
    pub fn token_not_found(token_id: u64) -> Self {
        Self::NotFound(format!("Token {} does not exist", token_id))
    }
}
