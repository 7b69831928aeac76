mod calendar;
mod error;
mod timeline;


pub use calendar::*;
pub use error::*;
pub use timeline::*;
