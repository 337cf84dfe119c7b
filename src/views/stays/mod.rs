mod hotels_view;
mod room_view;

pub use hotels_view::HotelsView;
pub use room_view::RoomView;
