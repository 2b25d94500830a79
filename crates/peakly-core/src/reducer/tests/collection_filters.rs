use super::*;
use pretty_assertions::assert_eq;

fn card_names(state: &SessionState) -> Vec<&'static str> {
    state
        .collection
        .visible_cards()
        .into_iter()
        .map(|card| card.name)
        .collect()
}

#[test]
fn collection_filters_apply_in_declaration_order() {
    let mut state = state();
    let effects = run(&mut state, CollectionAction::SetOwnership(Ownership::Obtained));
    assert_eq!(effects, vec![SessionEffect::RequestFrame]);
    assert_eq!(
        card_names(&state),
        vec!["Mount Rainier", "Half Dome", "Mount Hood", "Mailbox Peak"]
    );

    run(&mut state, CollectionAction::SetRarity(Some(Rarity::Legendary)));
    assert_eq!(card_names(&state), vec!["Mount Rainier"]);

    run(&mut state, CollectionAction::SetRarity(None));
    run(&mut state, CollectionAction::SetOwnership(Ownership::All));
    assert_eq!(card_names(&state).len(), 6);
}

#[test]
fn unchanged_collection_filter_requests_no_frame() {
    let mut state = state();
    let effects = run(&mut state, CollectionAction::SetOwnership(Ownership::All));
    assert!(effects.is_empty());
}
