//! Board types: heights, sides, cells, streets and the city grid.

mod city;
mod height;
mod side;
pub(crate) mod street;
mod tower;

pub use self::city::City;
pub use self::height::Height;
pub use self::side::Side;
pub(crate) use self::side::StreetId;
pub use self::street::Street;
pub use self::tower::Tower;
