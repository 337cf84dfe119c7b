mod flight_search_view;

pub use flight_search_view::FlightSearchView;
