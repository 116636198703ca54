mod airport;
mod camera;
mod cartesian;
mod geo_point;

pub use airport::*;
pub use camera::*;
pub use cartesian::*;
pub use geo_point::*;
