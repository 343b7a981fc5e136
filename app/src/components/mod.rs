mod form;
mod icons;
mod results;

pub use form::UrlForm;
pub use icons::{LinkIcon, SearchIcon};
pub use results::{EmptyNotice, ParamsList};
