pub mod helpers;
pub mod landing;
pub mod leads;
pub mod plans;
pub mod subscribe;
pub mod system;
