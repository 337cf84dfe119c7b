pub mod country;
pub mod flight;
pub mod hotel;
pub mod package;
pub mod payment;
pub mod place;
pub mod session;
pub mod user;

pub use country::{CountryDetails, CountrySummary};
pub use flight::Flight;
pub use hotel::{Hotel, HotelFeature, RoomDetails, RoomFeature, StayWindow};
pub use package::{Benefit, PackageDetails, PackageGallery, PackageSummary, Roadmap};
pub use payment::{PaymentErrorBody, PaymentReceipt, PaymentRequest, PaymentResponse, PaymentTarget, ResourceKind};
pub use place::{Airport, PlaceDetails, PlaceMatch, PlaceSummary};
pub use session::{EssentialUser, LoginRequest, LoginResponse, Session};
pub use user::{PasswordReset, RegisterUser, UserDetails, UserDetailsUpdate};
