/// Rows above the first post card.
pub const HEADER_ROWS: usize = 4;
/// Rows taken by one post card, including its trailing blank line.
pub const CARD_ROWS: usize = 5;
pub const DEFAULT_VIEWPORT_ROWS: usize = 18;
/// Cards longer than this are clamped with an ellipsis.
pub const DESCRIPTION_LIMIT: usize = 160;

pub const ANCHOR_TEXT: &str = "        ... loading more ...";
pub const LOAD_MORE_TEXT: &str = "        [more] load more posts";
pub const NO_RESULTS_TEXT: &str = "No posts match the current filters.";

pub const HELP_TEXT: &str = "\
commands:
  category <name>     filter by category (\"All\" clears)
  search <text>       case-insensitive search in title and description
  sort latest|oldest  change the date order
  down [rows]         scroll down (empty line scrolls one card)
  up [rows]           scroll up
  top                 jump to the top
  more                reveal the next page
  help                show this text
  quit                exit";
