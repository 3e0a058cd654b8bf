use super::*;

#[test]
fn support_topics_start_with_unanswered_placeholder() {
    assert_eq!(SUPPORT_TOPICS[0].0, "");
    assert!(SUPPORT_TOPICS[1..].iter().all(|(value, _)| !value.is_empty()));
}

#[test]
fn support_topic_values_are_unique() {
    let mut values: Vec<_> = SUPPORT_TOPICS.iter().map(|(value, _)| *value).collect();
    values.sort_unstable();
    values.dedup();
    assert_eq!(values.len(), SUPPORT_TOPICS.len());
}

#[test]
fn class_reader_outlives_the_borrowed_id() {
    let page = RwSignal::new(PageController::with_default_layout(PageConfig::default()).unwrap());
    let read = {
        let id = ids::message_of(ids::SUPPORT_NAME_CTRL);
        class_of(page, &id)
    };
    assert_eq!(read(), crate::controls::validation_group::MESSAGE_CLASS);

    page.update(|p| p.toggle_support_panel(true));
    let support = class_of(page, ids::SUPPORT);
    assert_eq!(support(), "modal modal--visible");
}
