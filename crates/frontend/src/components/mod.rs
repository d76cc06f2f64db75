pub mod fact_card;
pub mod menu_bar;
pub mod progress_bar;
pub mod spinner;

pub use fact_card::FactCard;
pub use menu_bar::MenuBar;
pub use progress_bar::ProgressBar;
pub use spinner::LoadingSpinner;
