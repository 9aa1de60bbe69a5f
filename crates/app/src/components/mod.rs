mod logout_button;

pub use logout_button::LogoutButton;
