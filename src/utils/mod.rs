// Utils compartidos

pub mod constants;
pub mod storage;
pub mod clock;
pub mod html;

pub use constants::*;
pub use storage::*;
pub use clock::*;
pub use html::html_escape;
