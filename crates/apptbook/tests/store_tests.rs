//! Tests for the shared store and range queries.

use apptbook::{between, ApptError, Appointment, Owner, Store};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::sync::Arc;
use std::thread;

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn appt(desc: &str, begin: NaiveDateTime, minutes: i64) -> Appointment {
    Appointment::new(desc, begin, begin + Duration::minutes(minutes)).unwrap()
}

fn owner(name: &str) -> Owner {
    Owner::new(name).unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Store
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn upsert_get_remove_all() {
    let store = Store::new();
    assert!(store.is_empty());

    let a = appt("Dentist", at(25, 9, 0), 60);
    store.upsert(&owner("Bob"), a.clone());

    let book = store.get("Bob").expect("Bob should have a book");
    assert_eq!(book.owner().as_str(), "Bob");
    assert_eq!(book.appointments(), std::slice::from_ref(&a));

    store.remove_all();
    assert!(store.get("Bob").is_none());
    assert!(store.is_empty());
}

#[test]
fn get_never_creates_a_book() {
    let store = Store::new();
    assert!(store.get("Nobody").is_none());
    assert_eq!(store.len(), 0);
}

#[test]
fn one_book_per_owner() {
    let store = Store::new();
    store.upsert(&owner("Bob"), appt("A", at(25, 9, 0), 30));
    store.upsert(&owner("Bob"), appt("B", at(24, 9, 0), 30));
    store.upsert(&owner("Alice"), appt("C", at(25, 9, 0), 30));

    assert_eq!(store.len(), 2);
    let bob = store.get("Bob").unwrap();
    let names: Vec<&str> = bob.appointments().iter().map(|a| a.description()).collect();
    assert_eq!(names, ["B", "A"]);
}

#[test]
fn books_are_listed_by_owner() {
    let store = Store::new();
    store.upsert(&owner("Zed"), appt("A", at(25, 9, 0), 30));
    store.upsert(&owner("Amy"), appt("B", at(25, 9, 0), 30));

    let owners: Vec<String> = store
        .books()
        .iter()
        .map(|b| b.owner().to_string())
        .collect();
    assert_eq!(owners, ["Amy", "Zed"]);
}

#[test]
fn get_returns_a_snapshot() {
    let store = Store::new();
    store.upsert(&owner("Bob"), appt("A", at(25, 9, 0), 30));
    let snapshot = store.get("Bob").unwrap();
    store.upsert(&owner("Bob"), appt("B", at(25, 10, 0), 30));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.get("Bob").unwrap().len(), 2);
}

#[test]
fn concurrent_upserts_lose_nothing() {
    let store = Arc::new(Store::new());
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let who = owner(if t % 2 == 0 { "Even" } else { "Odd" });
                for i in 0..per_thread {
                    let begin = at(1, 0, 0) + Duration::minutes((t * per_thread + i) as i64);
                    store.upsert(&who, appt(&format!("t{t}-{i}"), begin, 15));
                    // Interleave reads with the writes.
                    let _ = store.get(who.as_str());
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let even = store.get("Even").unwrap();
    let odd = store.get("Odd").unwrap();
    assert_eq!(even.len() + odd.len(), threads * per_thread);
    assert!(even.appointments().windows(2).all(|w| w[0] <= w[1]));
    assert!(odd.appointments().windows(2).all(|w| w[0] <= w[1]));
}

// ─────────────────────────────────────────────────────────────────────────────
// Range query
// ─────────────────────────────────────────────────────────────────────────────

fn tanya_store() -> Store {
    let store = Store::new();
    let tanya = owner("Tanya");
    store.upsert(&tanya, appt("Early", at(25, 8, 59), 30));
    store.upsert(&tanya, appt("Start", at(25, 9, 0), 30));
    store.upsert(&tanya, appt("AllDay", at(25, 10, 0), 600));
    store.upsert(&tanya, appt("End", at(25, 17, 0), 30));
    store.upsert(&tanya, appt("Late", at(25, 17, 1), 30));
    store
}

#[test]
fn range_is_inclusive_on_both_bounds() {
    let store = tanya_store();
    let hits = between(&store, "Tanya", at(25, 9, 0), at(25, 17, 0)).unwrap();
    let names: Vec<&str> = hits.appointments().iter().map(|a| a.description()).collect();
    assert_eq!(names, ["Start", "AllDay", "End"]);
    assert_eq!(hits.owner().as_str(), "Tanya");
}

#[test]
fn range_ignores_end_times() {
    let store = tanya_store();
    // "Early" runs into the window but began a minute before it.
    let hits = between(&store, "Tanya", at(25, 9, 0), at(25, 9, 0)).unwrap();
    let names: Vec<&str> = hits.appointments().iter().map(|a| a.description()).collect();
    assert_eq!(names, ["Start"]);
}

#[test]
fn range_with_no_matches_is_empty_not_an_error() {
    let store = tanya_store();
    let hits = between(&store, "Tanya", at(1, 0, 0), at(2, 0, 0)).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn inverted_range_matches_nothing() {
    let store = tanya_store();
    let hits = between(&store, "Tanya", at(25, 17, 0), at(25, 9, 0)).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn range_for_unknown_owner_fails() {
    let store = tanya_store();
    let err = between(&store, "Bob", at(25, 9, 0), at(25, 17, 0)).unwrap_err();
    assert!(matches!(err, ApptError::UnknownOwner(ref o) if o == "Bob"), "got {err:?}");
}

#[test]
fn range_does_not_touch_the_stored_book() {
    let store = tanya_store();
    let _ = between(&store, "Tanya", at(25, 9, 0), at(25, 9, 0)).unwrap();
    assert_eq!(store.get("Tanya").unwrap().len(), 5);
}
