mod button;

pub use button::button;
