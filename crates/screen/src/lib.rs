//! Client-side projection engine for the admin screens: each screen owns the
//! canonical record collection for one entity kind and derives its table page
//! (filter, then sort, then paginate) and, for stations, its map markers from
//! that collection. Mutations are write-through: local state changes only
//! after the server confirmed the operation.

pub mod filter;
pub mod map;
pub mod notify;
pub mod page;
pub mod sort;
pub mod store;
pub mod view;

mod controller;

pub use controller::{AlwaysConfirm, Confirm, Screen};
pub use map::{MapScreen, Marker};
pub use notify::{Notice, ScreenEvent, Severity};
pub use page::Page;
pub use sort::Direction;
pub use view::ViewState;
