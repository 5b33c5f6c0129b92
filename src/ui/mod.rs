/// UI components for the search screen
///
/// Each component is a free `view` function over borrowed state; none of them
/// own state of their own.

pub mod gallery;
pub mod load_more;
pub mod modal;
pub mod searchbar;
pub mod toast;
