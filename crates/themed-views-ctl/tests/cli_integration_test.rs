//! End-to-end tests for `themed-views-ctl`.
//!
//! Each test lays out a small application (themes, base views, modules) in a
//! temp directory with its own `themed-views.toml` and runs the binary there.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn ctl_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_themed-views-ctl"))
}

fn run_ctl(work_dir: &Path, args: &[&str]) -> Output {
    Command::new(ctl_bin())
        .args(args)
        .current_dir(work_dir)
        .env_remove("THEMED_VIEWS_CONFIG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute themed-views-ctl")
}

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Themes `default` and `dark`, base views, and a `blog` module.
fn setup_app() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(
        root,
        "themed-views.toml",
        r#"
module-locations = ["modules/"]
functions = ["pagination"]

[environment]
autoescape = false
"#,
    );
    write(
        root,
        "themes/default/_layouts/index.twig",
        "[{% block content %}{% endblock %}]",
    );
    write(
        root,
        "themes/default/home.twig",
        "{% extends \"_layouts/index.twig\" %}{% block content %}default {{ title }}{% endblock %}",
    );
    write(root, "themes/dark/home.twig", "dark {{ title }}");
    write(root, "views/about.twig", "about {{ _layout }}");
    write(root, "views/urls.twig", "{{ route.controller }} {{ url.theme }}");
    write(
        root,
        "views/pages.twig",
        "{% set w = pagination(current=7, total=20) %}{{ w.start_page }}..{{ w.end_page }}",
    );
    write(root, "modules/blog/views/home.twig", "blog {{ title }}");
    write(root, "modules/blog/views/post.twig", "post {{ title | slugify }}");
    fs::create_dir_all(root.join("modules/shop")).unwrap();

    dir
}

#[test]
fn test_render_uses_default_theme() {
    let dir = setup_app();
    let output = run_ctl(dir.path(), &["render", "home", "--set", "title=Hi"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "[default Hi]");
}

#[test]
fn test_render_with_theme_switch() {
    let dir = setup_app();
    let output = run_ctl(
        dir.path(),
        &["render", "home", "--theme", "dark", "--set", "title=Night"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "dark Night");
}

#[test]
fn test_render_falls_back_to_base_views() {
    let dir = setup_app();
    let output = run_ctl(dir.path(), &["render", "about", "--layout", "wide"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "about _layouts/wide.twig");
}

#[test]
fn test_render_module_template() {
    let dir = setup_app();
    let output = run_ctl(
        dir.path(),
        &["render", "post", "--module", "blog", "--set", "title=Hello World"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "post hello-world");
}

#[test]
fn test_render_with_data_file() {
    let dir = setup_app();
    write(dir.path(), "data.json", r#"{"title": "From file"}"#);

    let output = run_ctl(
        dir.path(),
        &["render", "home", "--theme", "dark", "--data", "data.json"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "dark From file");
}

#[test]
fn test_render_with_route() {
    let dir = setup_app();
    let output = run_ctl(
        dir.path(),
        &[
            "render",
            "urls",
            "--route",
            "blog/posts/show",
            "--base-url",
            "http://example.com",
        ],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim_end(),
        "posts http://example.com/themes/default/"
    );
}

#[test]
fn test_render_configured_function() {
    let dir = setup_app();
    let output = run_ctl(dir.path(), &["render", "pages"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "3..11");
}

#[test]
fn test_render_missing_theme_fails() {
    let dir = setup_app();
    let output = run_ctl(dir.path(), &["render", "home", "--theme", "missing"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Theme 'missing' does not exist"));
}

#[test]
fn test_render_missing_template_fails() {
    let dir = setup_app();
    let output = run_ctl(dir.path(), &["render", "nowhere"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Template not found: nowhere.twig"));
}

#[test]
fn test_paths_order() {
    let dir = setup_app();
    let output = run_ctl(dir.path(), &["paths", "--module", "blog"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    let theme = out.find("themes/default").expect("theme path listed");
    let module = out.find("modules/blog/views").expect("module path listed");
    let base = out.find("views/\n").or_else(|| out.rfind("views")).unwrap();
    assert!(theme < module);
    assert!(module < base);
}

#[test]
fn test_paths_skips_missing_module() {
    let dir = setup_app();
    let output = run_ctl(dir.path(), &["paths", "--module", "shop"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(!out.contains("modules/shop"));
    assert!(out.contains("  2. "));
    assert!(!out.contains("  3. "));
}

#[test]
fn test_themes_lists_directories() {
    let dir = setup_app();
    let output = run_ctl(dir.path(), &["themes"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("dark"));
    assert!(out.contains("default (active)"));
}

#[test]
fn test_modules_lists_directories() {
    let dir = setup_app();
    let output = run_ctl(dir.path(), &["modules"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("blog"));
    assert!(out.contains("shop"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = setup_app();
    write(dir.path(), "themed-views.toml", "default-theme = [");

    let output = run_ctl(dir.path(), &["themes"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Configuration error"));
}

#[test]
fn test_explicit_config_path() {
    let dir = setup_app();
    write(
        dir.path(),
        "alt.toml",
        "default-theme = \"dark\"\n[environment]\nautoescape = false\n",
    );

    let output = run_ctl(
        dir.path(),
        &["--config", "alt.toml", "render", "home", "--set", "title=alt"],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "dark alt");
}
