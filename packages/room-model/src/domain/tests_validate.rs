use test_support::unique_user_id;

use crate::domain::test_state_helpers::{make_game, make_user};
use crate::domain::validate::validate_room;
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn consistent_active_state_validates() {
    let me = unique_user_id();
    let opponent = unique_user_id();
    let game = make_game(1, Some(&me), &[&me, &opponent]);
    let users = vec![make_user(&me), make_user(&opponent)];

    assert_eq!(validate_room(Some(&game), &users), Ok(()));
}

#[test]
fn lobby_state_validates_without_a_game() {
    let users = vec![make_user("u1"), make_user("u2")];
    assert_eq!(validate_room(None, &users), Ok(()));
}

#[test]
fn duplicate_seat_ids_are_reported() {
    let game = make_game(1, None, &["a", "a"]);

    let err = validate_room(Some(&game), &[]).unwrap_err();
    match err {
        DomainError::Validation(ValidationKind::DuplicateSeat, msg) => {
            assert!(msg.contains('a'), "unexpected error message: {msg}");
        }
        other => panic!("expected DuplicateSeat validation error, got: {other:?}"),
    }
}

#[test]
fn duplicate_user_ids_are_reported() {
    let users = vec![make_user("u1"), make_user("u1")];

    let err = validate_room(None, &users).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::DuplicateUser, _)
    ));
}

#[test]
fn current_player_without_a_seat_is_reported() {
    let game = make_game(1, Some("ghost"), &["a", "b"]);

    let err = validate_room(Some(&game), &[]).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnknownCurrentPlayer, _)
    ));
}

// The diagnostic is advisory: the same bad state still derives absence
// values instead of failing.
#[test]
fn resolvers_degrade_even_when_validation_fails() {
    let mut room = crate::domain::room::Room::default();
    room.set_users(vec![make_user("a"), make_user("b")]);
    room.set_client_users(vec!["a".to_owned()]);
    room.set_game(Some(make_game(2, Some("ghost"), &["a", "b"])));

    assert!(room.validate().is_err());
    assert_eq!(room.current_player(), None);
    assert!(!room.is_my_turn());
    assert_eq!(room.this_player().unwrap().id, "a");
}
