pub mod session;

pub use session::{Session, initialize_session};
