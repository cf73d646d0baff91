//! Data model types for parsed file names.

mod media_type;
mod name;
mod resolution;

pub use media_type::MediaType;
pub use name::ParsedName;
pub(crate) use name::NameParts;
pub use resolution::Resolution;
