mod config;
mod ids;
mod records;
mod session;

pub use self::config::{ClientConfig, ClientState, DEFAULT_BASE_URL};
pub use self::ids::RecordId;
pub use self::records::{Checklist, Envelope, Item};
pub use self::session::Session;
