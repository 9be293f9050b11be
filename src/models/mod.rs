pub use feature::*;
pub use rich_text::*;

mod feature;
mod rich_text;
