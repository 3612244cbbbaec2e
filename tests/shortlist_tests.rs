// Integration tests for the membership-set core
// Covers toggle semantics, the comparison capacity, and storage behavior

use anyhow::Result;
use homefront::shortlist::{
    PropertyId, RejectReason, Shortlist, Toggle, COMPARE_KEY, COMPARE_LIMIT, FAVORITES_KEY,
};
use homefront::store::{FileStore, KeyValueStore, MemoryStore};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

fn ids(raw: &[&str]) -> Vec<PropertyId> {
    raw.iter().map(|id| PropertyId::from(*id)).collect()
}

#[test]
fn toggle_parity_determines_membership() {
    let mut favorites = Shortlist::favorites(MemoryStore::new());

    // P1 toggled three times, P2 twice, P3 once
    for id in ["P1", "P2", "P3", "P1", "P2", "P1"] {
        favorites.toggle(&PropertyId::from(id));
    }

    // Odd toggle counts stay members
    assert_eq!(favorites.members(), ids(&["P3", "P1"]));
}

#[test]
fn add_then_remove_round_trips() {
    let mut favorites = Shortlist::favorites(MemoryStore::new());
    favorites.toggle(&PropertyId::from("P1"));

    let before = favorites.members();
    assert_eq!(favorites.toggle(&PropertyId::from("P9")), Toggle::Added);
    assert!(favorites.contains(&PropertyId::from("P9")));
    assert_eq!(favorites.toggle(&PropertyId::from("P9")), Toggle::Removed);
    assert_eq!(favorites.members(), before);
}

#[test]
fn members_keep_insertion_order() {
    let mut favorites = Shortlist::favorites(MemoryStore::new());
    for id in ["C", "A", "B"] {
        favorites.toggle(&PropertyId::from(id));
    }
    assert_eq!(favorites.members(), ids(&["C", "A", "B"]));
}

#[test]
fn comparison_capacity_is_enforced() {
    let mut comparison = Shortlist::comparison(MemoryStore::new());

    for id in ["A", "B", "C", "D"] {
        assert_eq!(comparison.toggle(&PropertyId::from(id)), Toggle::Added);
    }

    // The fifth distinct add is refused without mutating the set
    let outcome = comparison.toggle(&PropertyId::from("E"));
    assert_eq!(
        outcome,
        Toggle::Rejected(RejectReason::CapacityReached {
            limit: COMPARE_LIMIT
        })
    );
    assert_eq!(comparison.members(), ids(&["A", "B", "C", "D"]));
    assert!(comparison.len() <= COMPARE_LIMIT);

    // Removal at capacity is unconditional
    assert_eq!(comparison.toggle(&PropertyId::from("B")), Toggle::Removed);
    assert_eq!(comparison.toggle(&PropertyId::from("E")), Toggle::Added);
    assert_eq!(comparison.members(), ids(&["A", "C", "D", "E"]));
}

#[test]
fn favorites_have_no_capacity() {
    let mut favorites = Shortlist::favorites(MemoryStore::new());
    for n in 0..20 {
        assert_eq!(
            favorites.toggle(&PropertyId::from(format!("P{}", n).as_str())),
            Toggle::Added
        );
    }
    assert_eq!(favorites.len(), 20);
}

#[test]
fn malformed_stored_data_reads_as_empty() {
    let storage = MemoryStore::new().with_entry(FAVORITES_KEY, "not json at all");
    let mut favorites = Shortlist::favorites(storage);

    assert!(favorites.is_empty());

    // The next toggle starts over from the empty set
    favorites.toggle(&PropertyId::from("P1"));
    assert_eq!(favorites.members(), ids(&["P1"]));
}

#[test]
fn stored_numeric_ids_are_accepted() {
    // Page markup can feed numeric ids into the stored array
    let storage = MemoryStore::new().with_entry(COMPARE_KEY, r#"[12, "34"]"#);
    let comparison = Shortlist::comparison(storage);

    assert_eq!(comparison.members(), ids(&["12", "34"]));
    assert!(comparison.contains(&PropertyId::from(12)));
}

#[test]
fn clear_empties_the_shortlist() {
    let mut favorites = Shortlist::favorites(MemoryStore::new());
    favorites.toggle(&PropertyId::from("P1"));
    favorites.toggle(&PropertyId::from("P2"));

    favorites.clear();
    assert!(favorites.is_empty());
}

#[test]
fn subscribers_see_every_outcome() {
    let seen: Rc<RefCell<Vec<(String, Toggle, usize)>>> = Rc::default();
    let sink = Rc::clone(&seen);

    let mut comparison = Shortlist::comparison(MemoryStore::new());
    comparison.subscribe(move |event| {
        sink.borrow_mut()
            .push((event.id.to_string(), event.outcome.clone(), event.count));
    });

    for id in ["A", "B", "C", "D", "E"] {
        comparison.toggle(&PropertyId::from(id));
    }
    comparison.toggle(&PropertyId::from("A"));

    let seen = seen.borrow();
    assert_eq!(seen.len(), 6);
    assert_eq!(seen[0], ("A".to_string(), Toggle::Added, 1));
    assert_eq!(
        seen[4],
        (
            "E".to_string(),
            Toggle::Rejected(RejectReason::CapacityReached {
                limit: COMPARE_LIMIT
            }),
            4
        )
    );
    assert_eq!(seen[5], ("A".to_string(), Toggle::Removed, 3));
}

#[test]
fn file_store_persists_across_reopen() -> Result<()> {
    let temp = TempDir::new()?;
    let store_path = temp.path().join("store.json");

    {
        let mut favorites = Shortlist::favorites(FileStore::new(store_path.clone()));
        favorites.toggle(&PropertyId::from("P1"));
        favorites.toggle(&PropertyId::from("P2"));
    }

    let favorites = Shortlist::favorites(FileStore::new(store_path));
    assert_eq!(favorites.members(), ids(&["P1", "P2"]));

    Ok(())
}

#[test]
fn shortlists_share_a_store_file_without_clobbering() -> Result<()> {
    let temp = TempDir::new()?;
    let store_path = temp.path().join("store.json");

    let mut favorites = Shortlist::favorites(FileStore::new(store_path.clone()));
    let mut comparison = Shortlist::comparison(FileStore::new(store_path.clone()));

    favorites.toggle(&PropertyId::from("P1"));
    comparison.toggle(&PropertyId::from("P2"));
    favorites.toggle(&PropertyId::from("P3"));

    assert_eq!(favorites.members(), ids(&["P1", "P3"]));
    assert_eq!(comparison.members(), ids(&["P2"]));

    // Both keys live in the same flat file
    let store = FileStore::new(store_path);
    assert!(store.get(FAVORITES_KEY).is_some());
    assert!(store.get(COMPARE_KEY).is_some());

    Ok(())
}

#[test]
fn missing_store_file_reads_as_empty() -> Result<()> {
    let temp = TempDir::new()?;
    let favorites = Shortlist::favorites(FileStore::new(temp.path().join("absent.json")));
    assert!(favorites.is_empty());
    Ok(())
}
