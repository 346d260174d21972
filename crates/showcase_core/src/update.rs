use showcase_logging::showcase_debug;

use crate::{Effect, Msg, ShowcaseState, ViewError};

/// Pure update function: applies a message to state and returns any effects.
///
/// Each message is handled to completion, including the reveal-count reset
/// and controller re-arm that follow a filter, search or sort change.
pub fn update(mut state: ShowcaseState, msg: Msg) -> (ShowcaseState, Vec<Effect>) {
    let effects = match msg {
        Msg::CategorySelected(raw) => match state.posts.set_category_filter(&raw) {
            Ok(()) => after_filter_change(&mut state),
            Err(err) => rejected(err),
        },
        Msg::SearchChanged(text) => {
            state.posts.set_search_query(text);
            after_filter_change(&mut state)
        }
        Msg::SortSelected(raw) => match state.posts.set_sort_direction_str(&raw) {
            Ok(()) => after_filter_change(&mut state),
            Err(err) => rejected(err),
        },
        Msg::AnchorAttached => state.reveal.anchor_attached(&state.posts),
        Msg::AnchorDetached => state.reveal.anchor_detached(),
        Msg::AnchorVisibility {
            generation,
            visible,
        } => {
            let before = state.posts.state().reveal_count();
            let effects = state
                .reveal
                .visibility_changed(generation, visible, &mut state.posts);
            if state.posts.state().reveal_count() != before {
                state.mark_dirty();
            }
            effects
        }
        Msg::LoadMoreClicked => {
            let before = state.posts.state().reveal_count();
            let effects = state.reveal.load_more_clicked(&mut state.posts);
            if state.posts.state().reveal_count() != before {
                state.mark_dirty();
            }
            effects
        }
        Msg::Teardown => {
            state.mark_dirty();
            state.reveal.release()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn after_filter_change(state: &mut ShowcaseState) -> Vec<Effect> {
    state.mark_dirty();
    state.reveal.rearm(&state.posts)
}

fn rejected(err: ViewError) -> Vec<Effect> {
    showcase_debug!("Rejected input: {}", err);
    vec![Effect::Rejected(err)]
}
