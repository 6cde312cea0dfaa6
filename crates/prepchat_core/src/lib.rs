pub mod attachment;
pub mod error;
pub mod session;
pub mod turn;

pub use attachment::{Attachment, MediaType};
pub use error::{PrepchatError, Result};
pub use session::{Session, SessionId};
pub use turn::{Role, Turn};
