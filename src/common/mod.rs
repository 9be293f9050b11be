pub use errors::*;

mod errors;
