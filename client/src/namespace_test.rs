use super::*;

// =============================================================
// extend
// =============================================================

#[test]
fn extend_creates_nested_namespaces() {
    let mut root: Namespace<u32> = Namespace::new(DEFAULT_ROOT);
    root.extend("Page.Elements").insert("app", 1);

    let page = root.child("Page").unwrap();
    assert_eq!(page.name(), "Page");
    assert_eq!(page.child("Elements").unwrap().get("app"), Some(&1));
}

#[test]
fn extend_skips_leading_root_segment() {
    let mut root: Namespace<u32> = Namespace::new("BV");
    root.extend("BV.Services").insert("post", 7);

    assert!(root.child("BV").is_none());
    assert_eq!(root.lookup("Services.post"), Some(&7));
}

#[test]
fn extend_is_idempotent_and_keeps_entries() {
    let mut root: Namespace<&str> = Namespace::new("BV");
    root.extend("Keys").insert("ENTER", "13");
    root.extend("Keys");
    root.extend("BV.Keys");

    assert_eq!(root.lookup("Keys.ENTER"), Some(&"13"));
}

#[test]
fn extend_ignores_empty_segments() {
    let mut root: Namespace<u8> = Namespace::new("BV");
    root.extend("Page..Login.").insert("x", 0);
    assert_eq!(root.lookup("Page.Login.x"), Some(&0));
}

// =============================================================
// resolve / lookup
// =============================================================

#[test]
fn resolve_does_not_create() {
    let root: Namespace<u8> = Namespace::new("BV");
    assert!(root.resolve("Page.Login").is_none());
    assert!(root.child("Page").is_none());
}

#[test]
fn resolve_empty_path_is_root() {
    let root: Namespace<u8> = Namespace::new("BV");
    assert_eq!(root.resolve("").unwrap().name(), "BV");
    assert_eq!(root.resolve("BV").unwrap().name(), "BV");
}

#[test]
fn lookup_without_dot_reads_root_entries() {
    let mut root: Namespace<u8> = Namespace::new("BV");
    root.insert("top", 3);
    assert_eq!(root.lookup("top"), Some(&3));
    assert_eq!(root.lookup("missing.top"), None);
}

#[test]
fn insert_replaces_and_returns_previous_entry() {
    let mut root: Namespace<u8> = Namespace::new("BV");
    let ns = root.extend("Support");
    assert_eq!(ns.insert("name", 1), None);
    assert_eq!(ns.insert("name", 2), Some(1));
    assert_eq!(root.lookup("Support.name"), Some(&2));
}
