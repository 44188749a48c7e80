use near_sdk::json_types::U128;
use near_sdk::serde_json::{json, Map, Value};
use near_sdk::{env, AccountId};

pub(crate) const STANDARD: &str = "issuance-registry";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const REGISTRY: &str = "REGISTRY_UPDATE";

/// Assembles a NEP-297 `EVENT_JSON` log line with a single data entry.
pub(crate) struct EventBuilder {
    event: &'static str,
    data: Map<String, Value>,
}

impl EventBuilder {
    pub(crate) fn new(event: &'static str, op: &str, actor_id: &AccountId) -> Self {
        let mut data = Map::new();
        data.insert("type".into(), json!(op));
        data.insert("actor_id".into(), json!(actor_id));
        Self { event, data }
    }

    pub(crate) fn field(mut self, key: &str, value: impl serde::Serialize) -> Self {
        self.data.insert(key.into(), json!(value));
        self
    }

    pub(crate) fn emit(self) {
        let payload = json!({
            "standard": STANDARD,
            "version": VERSION,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", PREFIX, payload));
    }
}

pub fn emit_token_minted(buyer_id: &AccountId, token_id: u64, price: u128) {
    EventBuilder::new(REGISTRY, "token_minted", buyer_id)
        .field("token_id", token_id)
        .field("price", U128(price))
        .emit();
}

pub fn emit_token_given_away(owner_id: &AccountId, receiver_id: &AccountId, token_id: u64) {
    EventBuilder::new(REGISTRY, "token_given_away", owner_id)
        .field("receiver_id", receiver_id)
        .field("token_id", token_id)
        .emit();
}

pub fn emit_price_updated(owner_id: &AccountId, old_price: u128, new_price: u128) {
    EventBuilder::new(REGISTRY, "price_updated", owner_id)
        .field("old_price", U128(old_price))
        .field("new_price", U128(new_price))
        .emit();
}

pub fn emit_base_uri_updated(owner_id: &AccountId, base_uri: &str) {
    EventBuilder::new(REGISTRY, "base_uri_updated", owner_id)
        .field("base_uri", base_uri)
        .emit();
}

pub fn emit_provenance_hash_updated(owner_id: &AccountId, provenance_hash: &str) {
    EventBuilder::new(REGISTRY, "provenance_hash_updated", owner_id)
        .field("provenance_hash", provenance_hash)
        .emit();
}

pub fn emit_sale_status_toggled(owner_id: &AccountId, is_sale_active: bool) {
    EventBuilder::new(REGISTRY, "sale_status_toggled", owner_id)
        .field("is_sale_active", is_sale_active)
        .emit();
}

pub fn emit_withdrawal(owner_id: &AccountId, amount: u128) {
    EventBuilder::new(REGISTRY, "withdrawal", owner_id)
        .field("amount", U128(amount))
        .emit();
}
