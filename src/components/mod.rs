//! UI Components
//!
//! Leptos components for the Modelo page.

mod delete_confirm_button;
mod error_banner;
mod modelo_modal;
mod modelo_table;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use modelo_modal::ModeloModal;
pub use modelo_table::ModeloTable;
