#![allow(dead_code)]

use std::sync::{Arc, Once};

use showcase_core::{
    Post, PostListViewModel, ShowcaseState, ViewConfig, VisibilitySupport,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(showcase_logging::initialize_for_tests);
}

fn link(id: u64) -> url::Url {
    url::Url::parse(&format!(
        "https://www.linkedin.com/embed/feed/update/urn:li:ugcPost:{}",
        7416126955407843327 + id
    ))
    .unwrap()
}

/// Six posts already in descending chronological order.
pub fn six_posts() -> Arc<[Post]> {
    let posts = vec![
        Post::new(
            1u64,
            "Building Scalable Web Applications",
            "Best practices for maintainable web applications built with React and modern tooling.",
            "2024-01-15",
        )
        .with_category("Web Development")
        .with_link("post", link(1)),
        Post::new(
            2u64,
            "The Future of AI in Development",
            "How artificial intelligence is transforming the way we write code.",
            "2024-01-10",
        )
        .with_category("AI & ML")
        .with_link("post", link(2)),
        Post::new(
            3u64,
            "React Performance Optimization",
            "Tips and tricks for optimizing applications for better user experience.",
            "2024-01-05",
        )
        .with_category("Web Development")
        .with_link("post", link(3)),
        Post::new(
            4u64,
            "Understanding TypeScript Generics",
            "Deep dive into generics and how they improve code reusability.",
            "2023-12-28",
        )
        .with_category("TypeScript")
        .with_link("post", link(4)),
        Post::new(
            5u64,
            "Cloud Architecture Patterns",
            "Common patterns for designing cloud-native applications.",
            "2023-12-20",
        )
        .with_category("Cloud Computing")
        .with_link("post", link(5)),
        Post::new(
            6u64,
            "Mobile-First Design Principles",
            "Why mobile-first design is crucial in a multi-device world.",
            "2023-12-15",
        )
        .with_category("UI/UX")
        .with_link("post", link(6)),
    ];
    posts.into()
}

pub fn model(page_size: usize) -> PostListViewModel {
    PostListViewModel::new(six_posts(), ViewConfig::new(page_size)).unwrap()
}

pub fn ids(posts: &[&Post]) -> Vec<String> {
    posts.iter().map(|post| post.id.to_string()).collect()
}

pub fn dates(posts: &[&Post]) -> Vec<String> {
    posts.iter().map(|post| post.date.clone()).collect()
}

pub fn showcase(page_size: usize, support: VisibilitySupport) -> ShowcaseState {
    let (state, _effects) =
        ShowcaseState::new(six_posts(), ViewConfig::new(page_size), support).unwrap();
    state
}
