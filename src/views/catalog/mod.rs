mod country_view;
mod hero_view;
mod package_view;
mod place_view;

pub use country_view::CountryView;
pub use hero_view::HeroView;
pub use package_view::PackageView;
pub use place_view::PlaceView;
