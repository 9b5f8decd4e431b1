use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use termfolio::core::app::{App, AppOptions};
use termfolio::core::capabilities::{Capabilities, Clipboard, UrlOpener};
use termfolio::core::content::Content;
use termfolio::core::storage::MemoryStore;
use termfolio::core::theme::ThemeName;
use termfolio::ui::renderer::{build_scrollback_lines, wrapped_height};
use termfolio::ui::theme::Theme;

struct NoopBrowser;

impl UrlOpener for NoopBrowser {
    fn open_url(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

struct NoopClipboard;

#[async_trait::async_trait]
impl Clipboard for NoopClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), String> {
        Ok(())
    }
}

fn make_content(projects: usize) -> Content {
    let mut toml = String::from(
        r#"
resume_url = "https://example.com/resume.pdf"

[bio]
name = "Bench"
role = "Engineer"
location = "Lisbon"
about = "Builds things"

[contact]
email = "bench@example.com"
"#,
    );
    for i in 0..projects {
        toml.push_str(&format!(
            r#"
[[projects]]
title = "project-{i}"
description = "A <fast> & calm tool for focused work, number {i}"
tech = ["Rust", "SQLite", "Tauri"]
demo_url = "https://demo.example.com/{i}"
source_url = "https://source.example.com/{i}"
"#
        ));
    }
    match Content::from_toml_str(&toml) {
        Ok(content) => content.with_page_size(10),
        Err(err) => panic!("bench content should parse: {err}"),
    }
}

fn make_app(projects: usize) -> App {
    App::new(
        make_content(projects),
        Capabilities::new(Box::new(NoopBrowser), Box::new(NoopClipboard)),
        Box::new(MemoryStore::new()),
        AppOptions::default(),
    )
}

fn bench_commands(c: &mut Criterion) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => panic!("tokio runtime: {err}"),
    };

    for &projects in &[50usize, 500usize] {
        let mut group = c.benchmark_group(format!("commands_projects{projects}"));
        group.throughput(Throughput::Elements(projects as u64));

        let mut app = make_app(projects);
        group.bench_function(BenchmarkId::new("search", projects), |b| {
            b.iter(|| {
                runtime.block_on(app.submit("search calm rust"));
                runtime.block_on(app.submit("/clear"));
            })
        });
        group.bench_function(BenchmarkId::new("projects_page", projects), |b| {
            b.iter(|| {
                runtime.block_on(app.submit("/projects 3"));
                runtime.block_on(app.submit("/clear"));
            })
        });
        group.finish();
    }
}

fn bench_render(c: &mut Criterion) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => panic!("tokio runtime: {err}"),
    };
    let mut app = make_app(100);
    for page in 1..=10 {
        runtime.block_on(app.submit(&format!("/projects {page}")));
    }
    let theme = Theme::for_name(ThemeName::Dark);

    let mut group = c.benchmark_group("render_scrollback");
    for &width in &[80u16, 120u16] {
        group.bench_function(BenchmarkId::new("build_and_wrap", width), |b| {
            b.iter(|| {
                let lines = build_scrollback_lines(&app.session.scrollback, &theme);
                wrapped_height(&lines, width)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_commands, bench_render);
criterion_main!(benches);
