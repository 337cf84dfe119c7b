mod edit_details_view;
mod login_view;
mod profile_view;
mod register_view;
mod reset_password_view;
mod verification_view;

pub use edit_details_view::EditDetailsView;
pub use login_view::LoginView;
pub use profile_view::ProfileView;
pub use register_view::RegisterView;
pub use reset_password_view::ResetPasswordView;
pub use verification_view::VerificationView;
