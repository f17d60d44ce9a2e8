use contactbook::api::ContactApi;
use contactbook::error::ContactError;
use contactbook::store::memory::InMemoryStore;

fn setup() -> ContactApi<InMemoryStore> {
    let mut api = ContactApi::open(InMemoryStore::new(), false).unwrap();
    for line in [
        "add n/John Smith p/80000001 e/john1@example.com c/Acme t/friends",
        "add n/John Smith p/80000002 e/john2@example.com c/Initech",
        "add n/Jane Doe p/80000003 e/jane@example.com c/Acme t/sales",
    ] {
        api.interpret(line).unwrap();
    }
    api
}

fn view_phones(api: &ContactApi<InMemoryStore>) -> Vec<String> {
    api.view()
        .iter()
        .map(|dc| dc.contact.phone().as_str().to_string())
        .collect()
}

#[test]
fn test_ambiguous_name_narrows_view() {
    let mut api = setup();
    let before = api.book().contacts().to_vec();

    match api.interpret("delete John   Smith") {
        Err(ContactError::AmbiguousTarget { name, count }) => {
            assert_eq!(name, "John Smith");
            assert_eq!(count, 2);
        }
        other => panic!("expected AmbiguousTarget, got {:?}", other),
    }

    assert_eq!(view_phones(&api), vec!["80000001", "80000002"]);
    assert_eq!(api.book().contacts(), before.as_slice());
}

#[test]
fn test_reissue_with_index_after_ambiguity() {
    let mut api = setup();
    assert!(api.interpret("edit john smith c/Globex").is_err());

    let result = api.interpret("edit 2 c/Globex").unwrap();
    assert!(result.feedback().contains("Company: Globex"));
    assert_eq!(api.book().contacts()[1].company().as_str(), "Globex");
    assert_eq!(api.book().contacts()[0].company().as_str(), "Acme");
    // edit narrows the view to the edited contact
    assert_eq!(view_phones(&api), vec!["80000002"]);
}

#[test]
fn test_unique_name_resolves_directly() {
    let mut api = setup();
    let result = api.interpret("delete JANE doe").unwrap();
    assert!(result.feedback().starts_with("Deleted contact:\nName: Jane Doe;"));
    assert_eq!(api.book().len(), 2);
}

#[test]
fn test_unknown_name() {
    let mut api = setup();
    assert!(matches!(
        api.interpret("delete Nobody"),
        Err(ContactError::NameNotFound(_))
    ));
    assert_eq!(api.view().len(), 3);
}

#[test]
fn test_zero_is_never_a_name() {
    let mut api = setup();
    api.interpret("add n/0 p/80000004 e/zero@example.com c/Zero")
        .unwrap();

    assert!(matches!(
        api.interpret("delete 0"),
        Err(ContactError::InvalidIndex)
    ));
    assert!(matches!(
        api.interpret("edit 0 c/Other"),
        Err(ContactError::InvalidIndex)
    ));
    assert_eq!(api.book().len(), 4);
}

#[test]
fn test_index_addresses_sorted_filtered_view() {
    let mut api = setup();
    api.interpret("filter t/friends t/sales").unwrap();
    api.interpret("sort f/name o/asc").unwrap();
    assert_eq!(view_phones(&api), vec!["80000003", "80000001"]);

    api.interpret("delete 1").unwrap();
    assert_eq!(view_phones(&api), vec!["80000001"]);
    assert!(matches!(
        api.interpret("delete 2"),
        Err(ContactError::InvalidIndex)
    ));
}

#[test]
fn test_edit_into_existing_contact() {
    let mut api = setup();
    assert!(matches!(
        api.interpret("edit Jane Doe n/john smith p/80000001"),
        Err(ContactError::EditWouldCreateDuplicate)
    ));
    assert!(api.interpret("edit Jane Doe e/jane.doe@example.com c/Hooli").is_ok());
}

#[test]
fn test_list_restores_full_view_and_keeps_order() {
    let mut api = setup();
    api.interpret("sort f/tag o/desc").unwrap();
    api.interpret("find jane").unwrap();
    assert_eq!(api.view().len(), 1);

    api.interpret("list").unwrap();
    assert_eq!(view_phones(&api), vec!["80000003", "80000001", "80000002"]);
}

#[test]
fn test_clear_then_add() {
    let mut api = setup();
    api.interpret("clear").unwrap();
    assert!(api.book().is_empty());

    api.interpret("add n/Solo p/123 e/solo@example.com c/Lone").unwrap();
    assert_eq!(api.view().len(), 1);
    assert_eq!(api.store().stored().map(<[_]>::len), Some(1));
}
