mod common;

use std::sync::Arc;

use common::{dates, ids, init_logging, model, six_posts};
use pretty_assertions::assert_eq;
use showcase_core::{
    ConfigError, DatePolicy, FilterPolicy, Post, PostListViewModel, SortDirection, ViewConfig,
    ViewError,
};

#[test]
fn initial_view_reveals_first_page_of_latest() {
    init_logging();
    let vm = model(3);
    let view = vm.view();

    assert_eq!(
        dates(&view.visible),
        vec!["2024-01-15", "2024-01-10", "2024-01-05"]
    );
    assert_eq!(view.filtered.len(), 6);
    assert_eq!(view.total, 6);
    assert!(view.has_more);
}

#[test]
fn reveal_more_grows_to_end_and_then_stops() {
    init_logging();
    let mut vm = model(3);

    assert!(vm.reveal_more());
    let view = vm.view();
    assert_eq!(view.visible.len(), 6);
    assert!(!view.has_more);

    assert!(!vm.reveal_more());
    assert_eq!(vm.view().visible.len(), 6);
    assert_eq!(vm.state().reveal_count(), 6);
}

#[test]
fn oldest_sort_reverses_and_resets_reveal_count() {
    init_logging();
    let mut vm = model(3);
    vm.reveal_more();
    vm.set_sort_direction_str("oldest").unwrap();

    let view = vm.view();
    assert_eq!(
        dates(&view.visible),
        vec!["2023-12-15", "2023-12-20", "2023-12-28"]
    );
    assert_eq!(view.reveal_count, 3);
    assert_eq!(vm.state().sort_direction(), SortDirection::Oldest);
}

#[test]
fn unknown_sort_direction_is_rejected_without_side_effects() {
    init_logging();
    let mut vm = model(3);
    vm.reveal_more();

    let err = vm.set_sort_direction_str("newest").unwrap_err();
    assert_eq!(err, ViewError::InvalidSortDirection("newest".to_string()));
    assert_eq!(vm.state().sort_direction(), SortDirection::Latest);
    assert_eq!(vm.state().reveal_count(), 6);
}

#[test]
fn search_matches_title_or_description_case_insensitively() {
    init_logging();
    let mut vm = model(3);
    vm.set_search_query("REACT");

    let view = vm.view();
    assert_eq!(ids(&view.filtered), vec!["1", "3"]);
    assert_eq!(view.visible.len(), 2);
    assert!(!view.has_more);
    assert_eq!(vm.state().search_query(), "REACT");
}

#[test]
fn search_does_not_trim_or_look_at_category() {
    init_logging();
    let mut vm = model(3);

    vm.set_search_query(" react");
    assert_eq!(ids(&vm.view().filtered), vec!["1"]);

    vm.set_search_query("typescript");
    assert_eq!(ids(&vm.view().filtered), vec!["4"]);

    vm.set_search_query("web development");
    assert!(vm.view().is_empty());
}

#[test]
fn empty_search_restores_everything() {
    init_logging();
    let mut vm = model(3);
    vm.set_search_query("cloud");
    assert_eq!(vm.view().filtered.len(), 1);

    vm.set_search_query("");
    assert_eq!(vm.view().filtered.len(), 6);
    assert_eq!(vm.state().reveal_count(), 3);
}

#[test]
fn category_and_search_are_conjunctive() {
    init_logging();
    let mut vm = model(3);
    vm.set_category_filter("Web Development").unwrap();
    assert_eq!(ids(&vm.view().filtered), vec!["1", "3"]);

    vm.set_search_query("performance");
    assert_eq!(ids(&vm.view().filtered), vec!["3"]);

    vm.set_category_filter("AI & ML").unwrap();
    assert!(vm.view().is_empty());
}

#[test]
fn category_options_keep_first_seen_order() {
    init_logging();
    let vm = model(3);
    assert_eq!(
        vm.category_options(),
        &[
            "All",
            "Web Development",
            "AI & ML",
            "TypeScript",
            "Cloud Computing",
            "UI/UX"
        ]
    );
}

#[test]
fn all_sentinel_is_case_insensitive() {
    init_logging();
    let mut vm = model(3);
    vm.set_category_filter("TypeScript").unwrap();
    assert_eq!(vm.view().filtered.len(), 1);

    vm.set_category_filter("all").unwrap();
    assert_eq!(vm.view().filtered.len(), 6);
    assert_eq!(vm.state().category_filter().label(), "All");
}

#[test]
fn permissive_unknown_category_yields_empty_view() {
    init_logging();
    let mut vm = model(3);
    vm.set_category_filter("NonexistentCategory").unwrap();

    let view = vm.view();
    assert!(view.filtered.is_empty());
    assert!(view.visible.is_empty());
    assert!(!view.has_more);
    assert_eq!(view.reveal_count, 0);
}

#[test]
fn strict_unknown_category_is_rejected_and_state_kept() {
    init_logging();
    let config = ViewConfig::new(3).with_filter_policy(FilterPolicy::Strict);
    let mut vm = PostListViewModel::new(six_posts(), config).unwrap();
    vm.set_category_filter("TypeScript").unwrap();

    let err = vm.set_category_filter("NonexistentCategory").unwrap_err();
    assert_eq!(
        err,
        ViewError::InvalidFilterValue("NonexistentCategory".to_string())
    );
    assert_eq!(ids(&vm.view().filtered), vec!["4"]);
}

#[test]
fn setters_reset_reveal_count_to_page_size() {
    init_logging();
    let mut vm = model(2);
    vm.reveal_more();
    vm.reveal_more();
    assert_eq!(vm.state().reveal_count(), 6);

    vm.set_category_filter("All").unwrap();
    assert_eq!(vm.state().reveal_count(), 2);
    vm.reveal_more();
    vm.set_search_query("");
    assert_eq!(vm.state().reveal_count(), 2);
    vm.reveal_more();
    vm.set_sort_direction(SortDirection::Latest);
    assert_eq!(vm.state().reveal_count(), 2);
}

#[test]
fn zero_page_size_fails_construction() {
    init_logging();
    let err = PostListViewModel::new(six_posts(), ViewConfig::new(0)).unwrap_err();
    assert_eq!(err, ViewError::Config(ConfigError::ZeroPageSize));
}

#[test]
fn duplicate_ids_fail_construction() {
    init_logging();
    let posts: Arc<[Post]> = vec![
        Post::new("a", "One", "", "2024-01-01"),
        Post::new("a", "Two", "", "2024-01-02"),
    ]
    .into();
    let err = PostListViewModel::new(posts, ViewConfig::new(3)).unwrap_err();
    assert_eq!(
        err,
        ViewError::Config(ConfigError::DuplicatePostId("a".into()))
    );
}

#[test]
fn empty_source_is_a_normal_empty_view() {
    init_logging();
    let posts: Arc<[Post]> = Vec::<Post>::new().into();
    let mut vm = PostListViewModel::new(posts, ViewConfig::new(3)).unwrap();
    assert_eq!(vm.category_options(), &["All"]);
    assert!(!vm.reveal_more());
    let view = vm.view();
    assert!(view.visible.is_empty());
    assert!(!view.has_more);
}

fn mixed_dates() -> Arc<[Post]> {
    vec![
        Post::new("a", "A", "", "2024-01-02"),
        Post::new("b", "B", "", "not a date"),
        Post::new("c", "C", "", "1/1/2024"),
        Post::new("d", "D", "", "2024-01-03T08:00:00Z"),
    ]
    .into()
}

#[test]
fn unparseable_dates_sort_as_minimum_by_default() {
    init_logging();
    let mut vm = PostListViewModel::new(mixed_dates(), ViewConfig::new(10)).unwrap();
    assert_eq!(ids(&vm.view().filtered), vec!["d", "a", "c", "b"]);

    vm.set_sort_direction(SortDirection::Oldest);
    assert_eq!(ids(&vm.view().filtered), vec!["b", "c", "a", "d"]);
}

#[test]
fn unparseable_dates_fail_construction_under_reject_policy() {
    init_logging();
    let config = ViewConfig::new(10).with_date_policy(DatePolicy::Reject);
    let err = PostListViewModel::new(mixed_dates(), config).unwrap_err();
    assert_eq!(
        err,
        ViewError::InvalidDateFormat {
            id: "b".into(),
            raw: "not a date".to_string(),
        }
    );
}

#[test]
fn posts_without_category_only_match_all() {
    init_logging();
    let posts: Arc<[Post]> = vec![
        Post::new("a", "Git tags", "", "12/31/2025").with_tags(["git"]),
        Post::new("b", "Monorepos", "", "1/7/2026"),
    ]
    .into();
    let mut vm = PostListViewModel::new(posts, ViewConfig::new(1)).unwrap();
    assert_eq!(vm.category_options(), &["All"]);
    assert_eq!(ids(&vm.view().visible), vec!["b"]);

    vm.set_category_filter("git").unwrap();
    assert!(vm.view().is_empty());
}

#[test]
fn catalog_category_named_like_the_sentinel_is_not_offered() {
    init_logging();
    let posts: Arc<[Post]> = vec![
        Post::new("a", "Everything", "", "2024-02-01").with_category("All"),
        Post::new("b", "Ownership", "", "2024-01-01").with_category("Rust"),
        Post::new("c", "Lifetimes", "", "2023-12-01").with_category("all"),
    ]
    .into();
    let mut vm = PostListViewModel::new(posts, ViewConfig::new(3)).unwrap();
    assert_eq!(vm.category_options(), &["All", "Rust"]);

    vm.set_category_filter("Rust").unwrap();
    assert_eq!(ids(&vm.view().filtered), vec!["b"]);
    vm.set_category_filter("All").unwrap();
    assert_eq!(vm.view().filtered.len(), 3);
}

#[test]
fn repeated_reads_are_consistent() {
    init_logging();
    let mut vm = model(4);
    vm.set_search_query("a");
    assert_eq!(vm.view(), vm.view());
}
