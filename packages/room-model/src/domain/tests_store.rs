use std::cell::RefCell;
use std::rc::Rc;

use test_support::unique_user_id;

use crate::domain::factory::DefaultPlayerFactory;
use crate::domain::notify::{NotificationSink, RoomChange};
use crate::domain::room::{Room, RoomUpdate};
use crate::domain::test_state_helpers::{make_game, make_user};

struct RecordingSink(Rc<RefCell<Vec<RoomChange>>>);

impl NotificationSink for RecordingSink {
    fn room_changed(&self, change: RoomChange) {
        self.0.borrow_mut().push(change);
    }
}

fn recording_room() -> (Room, Rc<RefCell<Vec<RoomChange>>>) {
    test_support::logging::init();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let room = Room::new(
        Box::new(DefaultPlayerFactory),
        Box::new(RecordingSink(Rc::clone(&changes))),
    );
    (room, changes)
}

#[test]
fn each_setter_bumps_version_and_notifies_once() {
    let (mut room, changes) = recording_room();
    assert_eq!(room.version(), 0);

    room.set_users(vec![make_user("u1")]);
    room.set_client_users(vec!["u1".to_owned()]);
    room.set_game(Some(make_game(1, None, &["u1"])));

    assert_eq!(room.version(), 3);
    assert_eq!(
        *changes.borrow(),
        [RoomChange::Users, RoomChange::ClientUsers, RoomChange::Game]
    );
}

#[test]
fn apply_replaces_all_fields_with_one_bump_and_one_notification() {
    let (mut room, changes) = recording_room();
    let me = unique_user_id();
    let opponent = unique_user_id();

    room.apply(RoomUpdate {
        game: Some(make_game(2, Some(&opponent), &[&me, &opponent])),
        users: vec![make_user(&me), make_user(&opponent)],
        client_users: vec![me.clone()],
    });

    assert_eq!(room.version(), 1);
    assert_eq!(*changes.borrow(), [RoomChange::Replaced]);
    assert_eq!(room.turn(), 2);
    assert_eq!(room.this_player().unwrap().id, me);
    assert_eq!(room.current_player().unwrap().id, opponent);
}

#[test]
fn requery_after_apply_reflects_only_the_new_snapshot() {
    let (mut room, _changes) = recording_room();
    room.apply(RoomUpdate {
        game: Some(make_game(1, Some("old"), &["old"])),
        users: vec![make_user("old")],
        client_users: vec!["old".to_owned()],
    });
    assert!(room.is_my_turn());

    room.apply(RoomUpdate {
        game: Some(make_game(3, Some("new2"), &["new1", "new2"])),
        users: vec![make_user("new1"), make_user("new2")],
        client_users: vec!["new1".to_owned()],
    });

    let players = room.players();
    assert!(players.iter().all(|p| p.id != "old"));
    assert_eq!(players[0].username, "new1-name");
    assert_eq!(room.turn(), 3);
    assert_eq!(room.this_player().unwrap().id, "new1");
    assert!(!room.is_my_turn());
}

#[test]
fn stored_field_reads_return_what_was_set() {
    let (mut room, _changes) = recording_room();
    assert!(room.game().is_none());
    assert!(room.users().is_empty());
    assert!(room.client_users().is_empty());

    let game = make_game(4, None, &["a"]);
    room.set_game(Some(game.clone()));
    room.set_users(vec![make_user("a")]);
    room.set_client_users(vec!["a".to_owned()]);

    assert_eq!(room.game(), Some(&game));
    assert_eq!(room.users(), [make_user("a")]);
    assert_eq!(room.client_users(), ["a".to_owned()]);
}
