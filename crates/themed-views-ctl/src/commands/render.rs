//! `render`: display a template on stdout.

use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};
use themed_views::{RouteInfo, ViewError, ViewResult, ViewsConfig};

#[derive(Debug)]
pub(crate) struct RenderArgs<'a> {
    pub template: &'a str,
    pub theme: Option<&'a str>,
    pub layout: Option<&'a str>,
    pub module: Option<&'a str>,
    pub data: Option<&'a Path>,
    pub set: &'a [String],
    pub route: Option<&'a str>,
    pub base_url: &'a str,
}

pub(crate) fn render(config: ViewsConfig, args: &RenderArgs<'_>) -> ViewResult<()> {
    let mut data = match args.data {
        Some(path) => read_data_file(path)?,
        None => Map::new(),
    };
    for pair in args.set {
        let (key, value) = parse_assignment(pair)?;
        data.insert(key, value);
    }

    let mut views = super::build_views(config, args.theme, args.module)?;
    if let Some(layout) = args.layout {
        views.layout(layout);
    }
    if let Some(route) = args.route {
        views.with_route(RouteInfo::parse(route)?, args.base_url);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    views.display(Some(args.template), &data, &mut out)?;
    writeln!(out)?;
    Ok(())
}

fn read_data_file(path: &Path) -> ViewResult<Map<String, Value>> {
    let contents = std::fs::read_to_string(path)?;
    match serde_json::from_str(&contents) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ViewError::configuration(format!(
            "{} must contain a JSON object",
            path.display()
        ))),
        Err(e) => Err(ViewError::configuration(format!(
            "invalid JSON in {}: {e}",
            path.display()
        ))),
    }
}

/// `key=value`, with `value` parsed as JSON when it is valid JSON.
fn parse_assignment(pair: &str) -> ViewResult<(String, Value)> {
    let (key, raw) = pair
        .split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .ok_or_else(|| ViewError::configuration(format!("expected KEY=VALUE, got '{pair}'")))?;
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.trim().to_string(), value))
}
