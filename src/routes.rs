// ============================================================================
// ROUTES
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::ResourceKind;
use crate::views::auth::{
    EditDetailsView, LoginView, ProfileView, RegisterView, ResetPasswordView, VerificationView,
};
use crate::views::catalog::{CountryView, HeroView, PackageView, PlaceView};
use crate::views::flights::FlightSearchView;
use crate::views::payment::CheckoutView;
use crate::views::shared::NotFoundView;
use crate::views::stays::{HotelsView, RoomView};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/reset-password/:user_id")]
    ResetPassword { user_id: i64 },
    #[at("/profile")]
    Profile,
    #[at("/verification/:email/:token")]
    Verification { email: String, token: String },
    #[at("/edit-user-details/:user_id")]
    EditUserDetails { user_id: i64 },
    #[at("/country/details/:id")]
    CountryDetails { id: i64 },
    #[at("/place/details/:id")]
    PlaceDetails { id: i64 },
    #[at("/package/details/:id")]
    PackageDetails { id: i64 },
    #[at("/hotels/:id")]
    Hotels { id: i64 },
    #[at("/room/details/:id")]
    RoomDetails { id: i64 },
    #[at("/flights/:id")]
    Flights { id: i64 },
    #[at("/payment/hotels/:id/users/:user_id")]
    HotelPayment { id: i64, user_id: i64 },
    #[at("/payment/packages/:id/users/:user_id")]
    PackagePayment { id: i64, user_id: i64 },
    #[at("/payment/flights/:id/users/:user_id")]
    FlightPayment { id: i64, user_id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Checkout route for a resource bought by a user
    pub fn payment(kind: ResourceKind, id: i64, user_id: i64) -> Self {
        match kind {
            ResourceKind::Hotels => Self::HotelPayment { id, user_id },
            ResourceKind::Packages => Self::PackagePayment { id, user_id },
            ResourceKind::Flights => Self::FlightPayment { id, user_id },
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HeroView /> },
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::ResetPassword { user_id } => html! { <ResetPasswordView {user_id} /> },
        Route::Profile => html! { <ProfileView /> },
        Route::Verification { email, token } => html! { <VerificationView {email} {token} /> },
        Route::EditUserDetails { user_id } => html! { <EditDetailsView {user_id} /> },
        Route::CountryDetails { id } => html! { <CountryView {id} /> },
        Route::PlaceDetails { id } => html! { <PlaceView {id} /> },
        Route::PackageDetails { id } => html! { <PackageView {id} /> },
        Route::Hotels { id } => html! { <HotelsView place_id={id} /> },
        Route::RoomDetails { id } => html! { <RoomView hotel_id={id} /> },
        Route::Flights { id } => html! { <FlightSearchView place_id={id} /> },
        Route::HotelPayment { id, user_id } => html! {
            <CheckoutView kind={ResourceKind::Hotels} resource_id={id} {user_id} />
        },
        Route::PackagePayment { id, user_id } => html! {
            <CheckoutView kind={ResourceKind::Packages} resource_id={id} {user_id} />
        },
        Route::FlightPayment { id, user_id } => html! {
            <CheckoutView kind={ResourceKind::Flights} resource_id={id} {user_id} />
        },
        Route::NotFound => html! { <NotFoundView /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Route::Home, "/")]
    #[case(Route::ResetPassword { user_id: 4 }, "/reset-password/4")]
    #[case(Route::Verification { email: "a@b.io".into(), token: "xyz".into() }, "/verification/a@b.io/xyz")]
    #[case(Route::EditUserDetails { user_id: 4 }, "/edit-user-details/4")]
    #[case(Route::CountryDetails { id: 2 }, "/country/details/2")]
    #[case(Route::RoomDetails { id: 8 }, "/room/details/8")]
    #[case(Route::Flights { id: 3 }, "/flights/3")]
    #[case(Route::HotelPayment { id: 8, user_id: 42 }, "/payment/hotels/8/users/42")]
    fn paths_render(#[case] route: Route, #[case] path: &str) {
        assert_eq!(route.to_path(), path);
    }

    #[test]
    fn payment_route_follows_resource_kind() {
        assert_eq!(
            Route::payment(ResourceKind::Packages, 5, 1),
            Route::PackagePayment { id: 5, user_id: 1 }
        );
        assert_eq!(
            Route::payment(ResourceKind::Flights, 11, 42).to_path(),
            "/payment/flights/11/users/42"
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/nowhere/at/all"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/package/details/7"), Some(Route::PackageDetails { id: 7 }));
    }
}
