//! Widget components for the TUI

mod button;
mod carousel;
mod empty_state;
pub mod filter_badge;
pub mod filter_dropdown;
pub mod footer;
pub mod header;
mod link_list;
pub mod popover;
mod profile;
mod search_input;
mod slide_card;
mod stacks;

pub use button::Button;
pub use carousel::Carousel;
pub use empty_state::{EmptyState, CLEAR_FILTERS_LABEL};
pub use filter_badge::FilterBadge;
pub use filter_dropdown::{DropdownOption, FilterDropdown};
pub use footer::Footer;
pub use header::{Header, HeaderAreas};
pub use link_list::LinkList;
pub use profile::Profile;
pub use search_input::SearchInput;
pub use slide_card::SlideCard;
pub use stacks::Stacks;
