//! UI Components
//!
//! Leptos components for the console pages and the part master dialogs.

mod delete_confirm_dialog;
mod home;
mod nav_bar;
mod part_form_dialog;
mod part_master;
mod table_browser;
mod toast;

pub use connection_test::ConnectionTest;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use home::Home;
pub use nav_bar::NavBar;
pub use part_form_dialog::PartFormDialog;
pub use part_master::PartMaster;
pub use table_browser::TableBrowser;
pub use toast::Toast;
