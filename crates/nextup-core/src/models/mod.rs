mod item;
mod recommendation;
mod request;
mod transition;

pub use item::{Item, ItemId};
pub use recommendation::{Reason, Recommendation};
pub use request::RecommendRequest;
pub use transition::Transition;
