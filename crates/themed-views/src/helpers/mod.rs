//! View helpers: plain Rust functions plus their Tera adapters.

pub mod dates;
pub mod file_size;
pub mod filters;
pub mod http;
pub mod pagination;
pub mod text;

pub use dates::{date_id, date_id_timestamp, second2time};
pub use file_size::{file_size_format, number_format, FileSizeOptions};
pub use filters::{catalog, register_filters, FUNCTION_NAMES};
pub use http::{base_url, download_headers, is_ajax, mime_type};
pub use pagination::{pagination, PageWindow};
pub use text::{excerpt, normalize_path, slugify};
