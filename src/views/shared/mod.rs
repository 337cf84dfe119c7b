mod not_found_view;

pub use not_found_view::NotFoundView;
