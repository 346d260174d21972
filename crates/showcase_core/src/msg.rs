#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked an entry of the category selector.
    CategorySelected(String),
    /// User edited the search box.
    SearchChanged(String),
    /// User picked an entry of the sort selector.
    SortSelected(String),
    /// The presentation layer mounted the end-of-list anchor.
    AnchorAttached,
    /// The presentation layer removed the anchor.
    AnchorDetached,
    /// Host visibility primitive reported on the anchor.
    AnchorVisibility { generation: u64, visible: bool },
    /// User clicked the "load more" fallback.
    LoadMoreClicked,
    /// The hosting view is going away.
    Teardown,
    NoOp,
}
