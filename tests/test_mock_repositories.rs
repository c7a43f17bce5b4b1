mod mocks;

use contact_book::domain::{Name, PhoneNumber};
use contact_book::models::Record;
use contact_book::repositories::RecordRepository;
use contact_book::{Dispatcher, Outcome};
use mocks::MockRecordRepository;

fn sample_record(name: &str, phone: &str) -> Record {
    Record::new(Name::new(name).unwrap()).with_phone(PhoneNumber::new(phone).unwrap())
}

fn reply(outcome: Outcome) -> String {
    match outcome {
        Outcome::Reply(text) => text,
        other => panic!("Expected a reply, got: {:?}", other),
    }
}

#[test]
fn test_mock_repository_overwrites_by_name() {
    let mut repo = MockRecordRepository::new();
    assert!(repo.add_record(sample_record("dima", "0975323736")).is_none());
    let replaced = repo.add_record(sample_record("dima", "0501234567"));

    assert_eq!(replaced, Some(sample_record("dima", "0975323736")));
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get_call_count("add_record"), 2);
}

#[test]
fn test_add_goes_through_repository() {
    let mut dispatcher = Dispatcher::with_repository(MockRecordRepository::new());

    let text = reply(dispatcher.dispatch("add dima 0975323736 25.05.2004"));
    assert_eq!(text, "Contact dima has been added");

    let repo = dispatcher.repository();
    assert_eq!(repo.get_call_count("add_record"), 1);
    assert_eq!(repo.len(), 1);
}

#[test]
fn test_rejected_add_never_touches_repository() {
    let mut dispatcher = Dispatcher::with_repository(MockRecordRepository::new());

    reply(dispatcher.dispatch("add dima 123"));
    reply(dispatcher.dispatch("add dima 0975323736 2004-05-25"));
    reply(dispatcher.dispatch("add dima"));

    assert_eq!(dispatcher.repository().get_call_count("add_record"), 0);
    assert!(dispatcher.repository().is_empty());
}

#[test]
fn test_lookup_commands_use_get() {
    let repo = MockRecordRepository::with_records(vec![sample_record("dima", "0975323736")]);
    let mut dispatcher = Dispatcher::with_repository(repo);

    assert_eq!(reply(dispatcher.dispatch("phone dima")), "0975323736");
    assert_eq!(
        reply(dispatcher.dispatch("phone bob")),
        "This contact not found try again"
    );
    assert_eq!(dispatcher.repository().get_call_count("get"), 2);
}

#[test]
fn test_change_uses_get_mut_only_after_validation() {
    let repo = MockRecordRepository::with_records(vec![sample_record("dima", "0975323736")]);
    let mut dispatcher = Dispatcher::with_repository(repo);

    // invalid new phone: rejected before any lookup
    assert_eq!(
        reply(dispatcher.dispatch("change dima 0975323736 12")),
        "Incorrect value try again"
    );
    assert_eq!(dispatcher.repository().get_call_count("get_mut"), 0);

    assert_eq!(
        reply(dispatcher.dispatch("change dima 0975323736 0501234567")),
        "Phone number has been changed"
    );
    assert_eq!(dispatcher.repository().get_call_count("get_mut"), 1);
    assert_eq!(
        dispatcher.repository().get("dima").unwrap().phones_display(),
        "0501234567"
    );
}

#[test]
fn test_records_iterates_repository_once_per_request() {
    let repo = MockRecordRepository::with_records(vec![
        sample_record("dima", "0975323736"),
        sample_record("bob", "0501234567"),
    ]);
    let mut dispatcher = Dispatcher::with_repository(repo);

    assert_eq!(reply(dispatcher.dispatch("records 1")), "dima [0975323736]");
    assert_eq!(
        reply(dispatcher.dispatch("records 2")),
        "dima [0975323736]\nbob [0501234567]\nThat's all"
    );
    assert_eq!(dispatcher.repository().get_call_count("records"), 2);
}
