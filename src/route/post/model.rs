pub use crate::model::{Post, PostId};
pub use crate::route::model::Paginate;
