pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{CommandError, ConfigError, ScrollStackError};
pub use events::{Event, EventBus};
pub use id::{new_id, StackId};
pub use types::{Axis, Color, EdgeInsets, PanelId, Point, Rect, Size};

pub type Result<T> = std::result::Result<T, ScrollStackError>;
