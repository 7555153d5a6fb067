pub mod colorful_button;
pub mod contrast_bar;

pub use colorful_button::ColorfulButton;
pub use contrast_bar::ContrastBar;
