mod point;
mod ring;

#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use ring::Ring;
#[doc(inline)]
pub use ring::shoelace_area;
