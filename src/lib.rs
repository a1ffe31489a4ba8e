pub mod error;
pub mod float;
pub mod isometry;
pub mod matrix3;
pub mod vector3;

pub use error::{Result, Rigid3Error};
pub use isometry::Isometry;
pub use matrix3::Matrix3;
pub use vector3::Vector3;
