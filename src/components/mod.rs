pub mod card_fields;
pub mod form_field;
pub mod gallery;
pub mod header;
pub mod pager_controls;
pub mod status;

pub use card_fields::CardFields;
pub use form_field::{FilePicker, FormField};
pub use gallery::Gallery;
pub use header::SiteHeader;
pub use pager_controls::{empty_page_message, PagerControls};
pub use status::{EmptyState, ErrorScreen, LoadingScreen};
