pub mod util;
pub mod validation;
