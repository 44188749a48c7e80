use crate::tests::test_utils::*;
use crate::*;

// --- Supply ---

#[test]
fn total_supply_starts_at_zero() {
    let contract = new_registry();

    assert_eq!(contract.total_supply(), 0);
}

#[test]
fn total_supply_counts_both_channels() {
    let mut contract = new_active_registry();
    contract.giveaway_tokens(&owner(), &owner(), 2).unwrap();
    contract.mint_tokens(&buyer(), 1, PRICE).unwrap();

    assert_eq!(contract.total_supply(), 3);
}

// --- Identifier ordering ---

#[test]
fn identifiers_are_dense_across_channels() {
    let mut contract = new_active_registry();
    contract.giveaway_tokens(&owner(), &owner(), 2).unwrap();
    contract.mint_tokens(&buyer(), 1, PRICE).unwrap();
    contract.giveaway_tokens(&owner(), &collector(), 1).unwrap();
    contract.mint_tokens(&buyer(), 2, 2 * PRICE).unwrap();

    assert_eq!(contract.total_supply(), 6);
    for token_id in 0..6 {
        assert!(contract.token_exists(token_id));
        assert!(contract.owner_of(token_id).is_ok());
    }
    assert!(!contract.token_exists(6));
}

// --- wallet_of_owner ---

#[test]
fn wallet_of_owner_is_empty_without_tokens() {
    let contract = new_registry();

    assert!(contract.wallet_of_owner(owner()).is_empty());
}

#[test]
fn wallet_of_owner_lists_ids_in_ascending_order() {
    let mut contract = new_registry();
    contract.giveaway_tokens(&owner(), &owner(), 2).unwrap();
    contract.toggle_sale_status().unwrap();
    contract.mint_tokens(&buyer(), 1, PRICE).unwrap();
    contract.mint_tokens(&collector(), 2, 2 * PRICE).unwrap();

    assert_eq!(contract.wallet_of_owner(owner()), vec![0, 1]);
    assert_eq!(contract.wallet_of_owner(buyer()), vec![2]);
    assert_eq!(contract.wallet_of_owner(collector()), vec![3, 4]);
}

#[test]
fn wallet_of_owner_spans_interleaved_issuance() {
    let mut contract = new_active_registry();
    contract.mint_tokens(&buyer(), 1, PRICE).unwrap();
    contract.giveaway_tokens(&owner(), &buyer(), 1).unwrap();
    contract.mint_tokens(&collector(), 1, PRICE).unwrap();
    contract.mint_tokens(&buyer(), 1, PRICE).unwrap();

    assert_eq!(contract.wallet_of_owner(buyer()), vec![0, 1, 3]);
    assert_eq!(contract.wallet_of_owner(collector()), vec![2]);
}

// --- token_uri ---

#[test]
fn token_uri_concatenates_base_and_id() {
    let mut contract = new_active_registry();
    contract.mint_tokens(&buyer(), 2, 2 * PRICE).unwrap();

    assert_eq!(
        contract.token_uri(0).unwrap(),
        format!("{}{}", BASE_URI, 0)
    );
    assert_eq!(
        contract.token_uri(1).unwrap(),
        format!("{}{}", BASE_URI, 1)
    );
}

#[test]
fn token_uri_reflects_base_uri_updates() {
    let mut contract = new_active_registry();
    contract.mint_tokens(&buyer(), 1, PRICE).unwrap();
    contract
        .set_base_uri("https://new-base-uri.com/".to_string())
        .unwrap();

    assert_eq!(contract.token_uri(0).unwrap(), "https://new-base-uri.com/0");
}

#[test]
fn token_uri_for_unissued_id_fails() {
    let contract = new_registry();

    let err = contract.token_uri(0).unwrap_err();

    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[test]
fn token_uri_just_past_the_end_fails() {
    let mut contract = new_active_registry();
    contract.mint_tokens(&buyer(), 2, 2 * PRICE).unwrap();

    let err = contract.token_uri(2).unwrap_err();

    assert!(matches!(err, RegistryError::NotFound(_)));
}

// --- owner_of / token_exists ---

#[test]
fn owner_of_unissued_id_fails() {
    let contract = new_registry();

    let err = contract.owner_of(5).unwrap_err();

    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[test]
fn token_exists_tracks_the_issued_range() {
    let mut contract = new_active_registry();
    assert!(!contract.token_exists(0));

    contract.mint_tokens(&buyer(), 1, PRICE).unwrap();

    assert!(contract.token_exists(0));
    assert!(!contract.token_exists(1));
}
