mod avatar;
mod ids;
mod message;
mod user;

pub use avatar::*;
pub use ids::*;
pub use message::*;
pub use user::*;
