use super::*;

type Machine = FilterMachine<&'static str>;

fn mounted(query: &str) -> (Machine, FetchTicket) {
    let mut machine = Machine::new();
    let effects = machine.observe_url(query);
    (machine, single_fetch(&effects).0)
}

fn single_fetch(effects: &[Effect]) -> (FetchTicket, FilterQuery) {
    let fetches: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::Fetch { ticket, query } => Some((*ticket, query.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(fetches.len(), 1, "expected exactly one fetch in {:?}", effects);
    fetches[0].clone()
}

fn url_writes(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::ReplaceUrl(query) => Some(query.clone()),
            _ => None,
        })
        .collect()
}

fn debounce_token(effects: &[Effect]) -> DebounceToken {
    match effects {
        [Effect::ScheduleDebounce { token, delay }] => {
            assert_eq!(*delay, DEBOUNCE);
            *token
        },
        other => panic!("expected a single debounce, got {:?}", other),
    }
}

#[test]
fn test_mount_hydrates_from_url_without_writing_it() {
    let mut machine = Machine::new();
    let effects = machine.observe_url("?q=milk&categoryId=dairy");

    assert!(machine.is_initialized());
    assert_eq!(machine.committed(), &FilterQuery::new("milk", "dairy"));
    assert!(url_writes(&effects).is_empty());
    let (_, query) = single_fetch(&effects);
    assert_eq!(query, FilterQuery::new("milk", "dairy"));
    assert!(machine.loading());
}

#[test]
fn test_padded_url_is_rewritten_trimmed() {
    let mut machine = Machine::new();
    let effects = machine.observe_url("?q=+milk+&categoryId=+dairy&page=2");

    assert_eq!(url_writes(&effects), vec!["q=milk&categoryId=dairy&page=2".to_string()]);
    assert!(matches!(effects.first(), Some(Effect::ReplaceUrl(_))));
    let (_, query) = single_fetch(&effects);
    assert_eq!(query, FilterQuery::new("milk", "dairy"));
    assert_eq!(machine.last_written(), "q=milk&categoryId=dairy&page=2");

    // The rewrite echoes back without another hydration
    assert!(machine.observe_url("?q=milk&categoryId=dairy&page=2").is_empty());
}

#[test]
fn test_external_padded_url_is_rewritten() {
    let (mut machine, _) = mounted("q=milk");
    let effects = machine.observe_url("q=eggs+");

    assert_eq!(url_writes(&effects), vec!["q=eggs".to_string()]);
    assert_eq!(single_fetch(&effects).1, FilterQuery::new("eggs", ""));
}

#[test]
fn test_burst_of_edits_settles_once_with_final_text() {
    let (mut machine, _) = mounted("");

    let tokens: Vec<_> = ["m", "mi", "mil", "milk"]
        .iter()
        .map(|text| debounce_token(&machine.edit_search_text(*text)))
        .collect();

    // Superseded timers fire first and do nothing
    for token in &tokens[..3] {
        assert!(machine.debounce_elapsed(*token).is_empty());
    }
    assert_eq!(machine.effective(), Some(&FilterQuery::default()));

    let effects = machine.debounce_elapsed(tokens[3]);
    let (_, query) = single_fetch(&effects);
    assert_eq!(query.search_text, "milk");
    assert_eq!(url_writes(&effects), vec!["q=milk".to_string()]);

    // Firing the same timer again is a no-op
    assert!(machine.debounce_elapsed(tokens[3]).is_empty());
}

#[test]
fn test_stale_fetch_does_not_overwrite_newer_results() {
    let (mut machine, _) = mounted("");
    let (ticket_a, _) = single_fetch(&machine.select_category("dairy"));
    let (ticket_b, _) = single_fetch(&machine.select_category("bakery"));

    assert!(machine.fetch_finished(ticket_b, Ok(vec!["bread"])));
    assert!(!machine.fetch_finished(ticket_a, Ok(vec!["milk"])));

    assert_eq!(machine.results(), &["bread"]);
    assert!(!machine.loading());
}

#[test]
fn test_url_round_trip() {
    let (mut machine, _) = mounted("");
    let token = debounce_token(&machine.edit_search_text("milk"));
    machine.debounce_elapsed(token);
    let effects = machine.select_category("dairy");

    assert_eq!(url_writes(&effects), vec!["q=milk&categoryId=dairy".to_string()]);
    assert_eq!(machine.last_written(), "q=milk&categoryId=dairy");

    let mut reloaded = Machine::new();
    reloaded.observe_url("?q=milk&categoryId=dairy");
    assert_eq!(reloaded.committed(), machine.committed());
}

#[test]
fn test_same_filter_twice_is_idempotent() {
    let (mut machine, _) = mounted("");
    assert_eq!(url_writes(&machine.select_category("dairy")).len(), 1);
    assert!(machine.select_category("dairy").is_empty());

    // Text edited back to the settled value: no fetch, no write
    let token = debounce_token(&machine.edit_search_text(" "));
    assert!(machine.debounce_elapsed(token).is_empty());
}

#[test]
fn test_own_write_is_not_treated_as_external() {
    let (mut machine, _) = mounted("");
    let written = url_writes(&machine.select_category("dairy")).remove(0);
    machine.edit_search_text("typing");

    // The router echoes our own write back
    assert!(machine.observe_url(&format!("?{}", written)).is_empty());
    assert_eq!(machine.committed().search_text, "typing");
    assert!(machine.debounce_pending());
}

#[test]
fn test_external_navigation_rehydrates_and_cancels_debounce() {
    let (mut machine, _) = mounted("categoryId=dairy");
    let token = debounce_token(&machine.edit_search_text("bre"));

    let effects = machine.observe_url("q=eggs");
    let (_, query) = single_fetch(&effects);
    assert_eq!(query, FilterQuery::new("eggs", ""));
    assert!(url_writes(&effects).is_empty());
    assert_eq!(machine.committed(), &FilterQuery::new("eggs", ""));
    assert_eq!(machine.last_written(), "q=eggs");

    assert!(machine.debounce_elapsed(token).is_empty());
    assert_eq!(machine.effective(), Some(&FilterQuery::new("eggs", "")));
}

#[test]
fn test_clearing_filter_removes_params() {
    let (mut machine, _) = mounted("q=milk&categoryId=dairy");
    let token = debounce_token(&machine.edit_search_text(""));
    let effects = machine.debounce_elapsed(token);
    assert_eq!(url_writes(&effects), vec!["categoryId=dairy".to_string()]);

    let effects = machine.select_category("");
    assert_eq!(url_writes(&effects), vec![String::new()]);
    let (_, query) = single_fetch(&effects);
    assert!(query.is_empty());
}

#[test]
fn test_category_switch_keeps_pending_debounce() {
    let (mut machine, _) = mounted("");
    let token = debounce_token(&machine.edit_search_text("milk"));

    let effects = machine.select_category("dairy");
    let (_, query) = single_fetch(&effects);
    assert_eq!(query, FilterQuery::new("", "dairy"));
    assert_eq!(url_writes(&effects), vec!["categoryId=dairy".to_string()]);
    assert!(machine.debounce_pending());

    let effects = machine.debounce_elapsed(token);
    let (_, query) = single_fetch(&effects);
    assert_eq!(query, FilterQuery::new("milk", "dairy"));
    assert_eq!(url_writes(&effects), vec!["q=milk&categoryId=dairy".to_string()]);
}

#[test]
fn test_foreign_params_survive_writes() {
    let (mut machine, _) = mounted("page=3");
    let effects = machine.select_category("dairy");
    assert_eq!(url_writes(&effects), vec!["categoryId=dairy&page=3".to_string()]);
}

#[test]
fn test_failure_for_current_filter_surfaces_error() {
    let (mut machine, first) = mounted("");
    assert!(machine.fetch_finished(first, Ok(vec!["milk", "bread"])));

    let (ticket, _) = single_fetch(&machine.select_category("dairy"));
    assert!(machine.error().is_none());
    assert!(machine.fetch_finished(ticket, Err("HTTP 500".to_string())));

    assert_eq!(machine.error(), Some("HTTP 500"));
    assert!(machine.results().is_empty());
    assert!(!machine.loading());
}

#[test]
fn test_failure_for_stale_filter_is_dropped() {
    let (mut machine, first) = mounted("");
    machine.fetch_finished(first, Ok(vec!["milk"]));
    let (stale, _) = single_fetch(&machine.select_category("dairy"));
    single_fetch(&machine.select_category("bakery"));

    assert!(!machine.fetch_finished(stale, Err("boom".to_string())));
    assert!(machine.error().is_none());
    assert_eq!(machine.results(), &["milk"]);
    assert!(machine.loading());
}

#[test]
fn test_unmount_makes_everything_stale() {
    let (mut machine, ticket) = mounted("");
    let token = debounce_token(&machine.edit_search_text("milk"));
    machine.unmount();

    assert!(!machine.fetch_finished(ticket, Ok(vec!["milk"])));
    assert!(machine.debounce_elapsed(token).is_empty());
    assert!(machine.select_category("dairy").is_empty());
    assert!(machine.observe_url("q=x").is_empty());
    assert!(machine.results().is_empty());
    assert!(!machine.loading());
}

#[test]
fn test_url_wins_over_edits_before_mount() {
    let mut machine = Machine::new();
    let token = debounce_token(&machine.edit_search_text("early"));
    assert!(machine.select_category("early-cat").is_empty());

    let effects = machine.observe_url("q=milk");
    single_fetch(&effects);
    assert_eq!(machine.committed(), &FilterQuery::new("milk", ""));
    assert!(machine.debounce_elapsed(token).is_empty());
}

#[test]
fn test_view_snapshot() {
    let (mut machine, ticket) = mounted("q=milk");
    machine.fetch_finished(ticket, Ok(vec!["milk"]));

    let view = machine.view();
    assert_eq!(view.committed, FilterQuery::new("milk", ""));
    assert_eq!(view.effective, Some(FilterQuery::new("milk", "")));
    assert_eq!(view.results, vec!["milk"]);
    assert!(!view.loading);
}
