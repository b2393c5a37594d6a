pub mod load_list;

pub use load_list::{ListSelection, LoadListUseCase, PASTE_COMMENT};
