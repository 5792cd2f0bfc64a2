use chrono::NaiveDate;
use milestone_core::{
    Category, CategoryVisibility, GroupedEvents, LoadState, MilestoneEvent, ViewAction, ViewState,
};
use proptest::prelude::*;

fn event(id: &str, date: &str, category: Category) -> MilestoneEvent {
    MilestoneEvent {
        id: id.to_string(),
        name: id.to_uppercase(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("ngày hợp lệ"),
        description: format!("{id} description"),
        category,
    }
}

fn visibility(model: bool, tool: bool, art: bool) -> CategoryVisibility {
    CategoryVisibility { model, tool, art }
}

#[test]
fn missing_show_enables_everything() {
    assert_eq!(CategoryVisibility::from_query(""), visibility(true, true, true));
    assert_eq!(CategoryVisibility::from_query("?ref=x"), visibility(true, true, true));
}

#[test]
fn show_lists_enabled_categories_then_toggle_clears_query() {
    let mut state = ViewState::from_query("?show=model,art");
    assert_eq!(state.visibility, visibility(true, false, true));
    assert_eq!(state.location_for("/"), "/?show=model,art");

    state.apply(ViewAction::Toggle(Category::Tool));
    assert_eq!(state.visibility, visibility(true, true, true));
    assert_eq!(state.visibility.to_query(), None);
    assert_eq!(state.location_for("/"), "/");
}

#[test]
fn unknown_tokens_are_ignored() {
    assert_eq!(
        CategoryVisibility::from_query("?show=model,bogus"),
        visibility(true, false, false)
    );
    assert_eq!(
        CategoryVisibility::from_query("?show=bogus"),
        visibility(false, false, false)
    );
}

#[test]
fn empty_show_disables_everything_and_round_trips() {
    let hidden = visibility(false, false, false);
    assert_eq!(hidden.to_query().as_deref(), Some("show="));
    assert_eq!(CategoryVisibility::from_query("?show="), hidden);
}

#[test]
fn query_uses_enumeration_order_not_click_order() {
    let mut state = ViewState::from_query("?show=");
    state.apply(ViewAction::Toggle(Category::Art));
    state.apply(ViewAction::Toggle(Category::Model));
    assert_eq!(state.visibility.to_query().as_deref(), Some("show=model,art"));
}

#[test]
fn events_are_write_once() {
    let mut state = ViewState::default();
    assert!(state.events().is_empty());

    let loaded = vec![event("gpt-4", "2023-03-14", Category::Model)];
    assert!(state.apply(ViewAction::LoadSucceeded(loaded.clone())));
    assert!(!state.apply(ViewAction::LoadFailed("late failure".into())));
    assert!(!state.apply(ViewAction::LoadSucceeded(Vec::new())));
    assert_eq!(state.load, LoadState::Loaded(loaded));
}

#[test]
fn failed_load_renders_nothing() {
    let mut state = ViewState::default();
    state.apply(ViewAction::LoadFailed("HTTP 404".into()));
    assert!(state.events().is_empty());
    assert!(state.grouped().is_empty());
    assert_eq!(state.load, LoadState::Failed("HTTP 404".into()));
}

#[test]
fn grouping_sorts_newest_first_and_keeps_ties_stable() {
    let events = vec![
        event("copilot", "2021-06-29", Category::Tool),
        event("gpt-3", "2020-06-11", Category::Model),
        event("tie-a", "2023-03-14", Category::Model),
        event("dalle-2", "2022-04-06", Category::Art),
        event("gpt-4", "2023-03-14", Category::Model),
        event("tie-b", "2023-03-14", Category::Model),
        event("cursor", "2023-03-14", Category::Tool),
    ];

    let grouped = GroupedEvents::from_events(&events);
    let ids = |category| {
        grouped
            .group(category)
            .iter()
            .map(|event| event.id.as_str())
            .collect::<Vec<_>>()
    };

    assert_eq!(ids(Category::Model), ["tie-a", "gpt-4", "tie-b", "gpt-3"]);
    assert_eq!(ids(Category::Tool), ["cursor", "copilot"]);
    assert_eq!(ids(Category::Art), ["dalle-2"]);
    assert_eq!(grouped.len(), events.len());
}

#[test]
fn hidden_sections_are_skipped_in_fixed_order() {
    let events = vec![
        event("midjourney", "2022-07-12", Category::Art),
        event("gpt-4", "2023-03-14", Category::Model),
    ];
    let grouped = GroupedEvents::from_events(&events);
    let shown: Vec<Category> = grouped
        .visible_sections(&visibility(true, false, true))
        .map(|(category, _)| category)
        .collect();

    assert_eq!(shown, [Category::Model, Category::Art]);
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Model), Just(Category::Tool), Just(Category::Art)]
}

fn arb_visibility() -> impl Strategy<Value = CategoryVisibility> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(m, t, a)| visibility(m, t, a))
}

proptest! {
    #[test]
    fn toggling_twice_restores_state_and_url(start in arb_visibility(), category in arb_category()) {
        let mut state = ViewState::new(start);
        let before = state.location_for("/");

        state.apply(ViewAction::Toggle(category));
        prop_assert_ne!(state.visibility, start);
        state.apply(ViewAction::Toggle(category));

        prop_assert_eq!(state.visibility, start);
        prop_assert_eq!(state.location_for("/"), before);
    }

    #[test]
    fn serialized_query_parses_back(start in arb_visibility()) {
        let search = start.location_for("/").trim_start_matches('/').to_string();
        prop_assert_eq!(CategoryVisibility::from_query(&search), start);
    }

    #[test]
    fn enabling_everything_clears_query(
        start in arb_visibility(),
        order in Just(Category::ALL.to_vec()).prop_shuffle(),
    ) {
        let mut state = ViewState::new(start);
        for category in order {
            if !state.visibility.is_visible(category) {
                state.apply(ViewAction::Toggle(category));
            }
        }
        prop_assert_eq!(state.visibility.to_query(), None);
    }
}
