mod imprint;
mod input;
mod logging;
pub(crate) mod settings;

pub use imprint::{write_footer, write_header};
pub use input::*;
pub use logging::*;
pub use settings::Configuration;
