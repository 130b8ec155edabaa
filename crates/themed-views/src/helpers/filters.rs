//! Tera adapters for the helpers.
//!
//! Filters are always registered. Functions are opt-in through the
//! `functions` config list and looked up in [`catalog`].

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use tera::{Result, Value};

use super::{dates, file_size, pagination, text, FileSizeOptions};
use crate::error::{ViewError, ViewResult};
use crate::loader::SearchPathLoader;

/// Helper names that can be listed under `functions`.
pub const FUNCTION_NAMES: &[&str] = &[
    "pagination",
    "file_size",
    "slugify",
    "excerpt",
    "date_id",
    "second2time",
    "normalize_path",
    "mime_type",
];

/// Register every helper filter.
pub fn register_filters(loader: &mut SearchPathLoader) {
    loader.register_filter("slugify", slugify_filter);
    loader.register_filter("excerpt", excerpt_filter);
    loader.register_filter("file_size", file_size_filter);
    loader.register_filter("date_id", date_id_filter);
    loader.register_filter("second2time", second2time_filter);
    loader.register_filter("normalize_path", normalize_path_filter);
}

/// Register the helper function called `name`.
pub fn catalog(loader: &mut SearchPathLoader, name: &str) -> ViewResult<()> {
    match name {
        "pagination" => loader.register_function(name, pagination_fn),
        "file_size" => loader.register_function(name, file_size_fn),
        "slugify" => loader.register_function(name, slugify_fn),
        "excerpt" => loader.register_function(name, excerpt_fn),
        "date_id" => loader.register_function(name, date_id_fn),
        "second2time" => loader.register_function(name, second2time_fn),
        "normalize_path" => loader.register_function(name, normalize_path_fn),
        "mime_type" => loader.register_function(name, mime_type_fn),
        unknown => {
            return Err(ViewError::configuration(format!(
                "unknown helper function '{unknown}' (available: {})",
                FUNCTION_NAMES.join(", ")
            )))
        }
    }
    Ok(())
}

fn required<T: DeserializeOwned>(args: &HashMap<String, Value>, name: &str, helper: &str) -> Result<T> {
    let value = args
        .get(name)
        .ok_or_else(|| tera::Error::msg(format!("{helper} requires a `{name}` argument")))?;
    tera::from_value(value.clone())
        .map_err(|e| tera::Error::msg(format!("{helper}: invalid `{name}`: {e}")))
}

fn optional<T: DeserializeOwned>(
    args: &HashMap<String, Value>,
    name: &str,
    helper: &str,
) -> Result<Option<T>> {
    match args.get(name) {
        Some(_) => required(args, name, helper).map(Some),
        None => Ok(None),
    }
}

fn as_str<'a>(value: &'a Value, helper: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{helper} expects a string")))
}

fn size_options(args: &HashMap<String, Value>) -> Result<FileSizeOptions> {
    let map: tera::Map<String, Value> = args
        .iter()
        .filter(|(k, _)| k.as_str() != "size")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    tera::from_value(Value::Object(map))
        .map_err(|e| tera::Error::msg(format!("file_size: invalid options: {e}")))
}

fn date_id_value(format: &str, timestamp: i64) -> Result<Value> {
    dates::date_id_timestamp(format, timestamp)
        .map(Value::String)
        .ok_or_else(|| tera::Error::msg(format!("date_id: timestamp {timestamp} out of range")))
}

// Filters

fn slugify_filter(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(text::slugify(as_str(value, "slugify")?)))
}

fn excerpt_filter(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let max_word = optional(args, "max_word", "excerpt")?.unwrap_or(0);
    let max_character = optional(args, "max_character", "excerpt")?.unwrap_or(0);
    Ok(Value::String(text::excerpt(
        as_str(value, "excerpt")?,
        max_word,
        max_character,
    )))
}

fn file_size_filter(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let size = value
        .as_f64()
        .ok_or_else(|| tera::Error::msg("file_size expects a number"))?;
    Ok(Value::String(file_size::file_size_format(
        size,
        &size_options(args)?,
    )))
}

fn date_id_filter(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let timestamp = value
        .as_i64()
        .ok_or_else(|| tera::Error::msg("date_id expects a Unix timestamp"))?;
    let format: String = optional(args, "format", "date_id")?.unwrap_or_else(|| "d F Y".to_string());
    date_id_value(&format, timestamp)
}

fn second2time_filter(value: &Value, args: &HashMap<String, Value>) -> Result<Value> {
    let seconds = value
        .as_u64()
        .ok_or_else(|| tera::Error::msg("second2time expects a non-negative integer"))?;
    let format: String = required(args, "format", "second2time")?;
    Ok(Value::String(dates::second2time(seconds, &format)))
}

fn normalize_path_filter(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    Ok(Value::String(text::normalize_path(as_str(
        value,
        "normalize_path",
    )?)))
}

// Functions

fn pagination_fn(args: &HashMap<String, Value>) -> Result<Value> {
    let current: i64 = required(args, "current", "pagination")?;
    let total: i64 = required(args, "total", "pagination")?;
    tera::to_value(pagination::pagination(current, total))
        .map_err(|e| tera::Error::msg(format!("pagination: {e}")))
}

fn file_size_fn(args: &HashMap<String, Value>) -> Result<Value> {
    let size: f64 = required(args, "size", "file_size")?;
    Ok(Value::String(file_size::file_size_format(
        size,
        &size_options(args)?,
    )))
}

fn slugify_fn(args: &HashMap<String, Value>) -> Result<Value> {
    let input: String = required(args, "text", "slugify")?;
    Ok(Value::String(text::slugify(&input)))
}

fn excerpt_fn(args: &HashMap<String, Value>) -> Result<Value> {
    let input: String = required(args, "text", "excerpt")?;
    let max_word = optional(args, "max_word", "excerpt")?.unwrap_or(0);
    let max_character = optional(args, "max_character", "excerpt")?.unwrap_or(0);
    Ok(Value::String(text::excerpt(&input, max_word, max_character)))
}

fn date_id_fn(args: &HashMap<String, Value>) -> Result<Value> {
    let format: String = required(args, "format", "date_id")?;
    let timestamp = match optional(args, "timestamp", "date_id")? {
        Some(ts) => ts,
        None => chrono::Utc::now().timestamp(),
    };
    date_id_value(&format, timestamp)
}

fn second2time_fn(args: &HashMap<String, Value>) -> Result<Value> {
    let seconds: u64 = required(args, "seconds", "second2time")?;
    let format: String = required(args, "format", "second2time")?;
    Ok(Value::String(dates::second2time(seconds, &format)))
}

fn normalize_path_fn(args: &HashMap<String, Value>) -> Result<Value> {
    let path: String = required(args, "path", "normalize_path")?;
    Ok(Value::String(text::normalize_path(&path)))
}

fn mime_type_fn(args: &HashMap<String, Value>) -> Result<Value> {
    let path: String = required(args, "path", "mime_type")?;
    Ok(Value::String(super::http::mime_type(Path::new(&path))))
}
