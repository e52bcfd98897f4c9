mod alert;
mod card;
mod document;
mod layout;
mod styles;
mod table;

pub use self::alert::*;
pub use self::card::*;
pub use self::document::*;
pub use self::layout::*;
pub use self::styles::STYLES;
pub use self::table::*;
