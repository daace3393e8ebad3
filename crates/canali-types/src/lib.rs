pub mod forms;
pub mod models;

pub use forms::{ChannelForm, FormError, VideoForm};
pub use models::{Channel, NewChannel, NewVideo, Video};
