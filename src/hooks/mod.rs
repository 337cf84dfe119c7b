pub mod session_context;
pub mod use_airport_lookup;
pub mod use_paged_list;
pub mod use_remote;

pub use session_context::{use_session, SessionHandle, SessionProvider};
pub use use_airport_lookup::{use_airport_lookup, UseAirportLookupHandle};
pub use use_paged_list::{use_paged_list, UsePagedListHandle};
pub use use_remote::{use_remote, RemoteData};
