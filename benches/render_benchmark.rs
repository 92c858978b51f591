//! Performance benchmarks for frame rendering and shell composition
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};
use vyapaar::app::{App, Route, ScreenId};
use vyapaar::startup::AppConfig;
use vyapaar::ui::{self, shell::AdaptiveShell};

fn app_on(screen: ScreenId, width: u16, height: u16) -> App {
    let mut app = App::new(AppConfig::default());
    app.navigate(screen);
    app.update_terminal_dimensions(width, height);
    app
}

/// Full frame render per screen at a desktop size
fn bench_render_screens(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_screen_desktop");

    for screen in ScreenId::ALL {
        let mut app = app_on(screen, 160, 48);
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(screen.as_str()),
            &screen,
            |b, _| {
                b.iter(|| {
                    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Dashboard render across the breakpoint
fn bench_render_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_dashboard_width");

    for columns in [40u16, 99, 100, 200] {
        let mut app = app_on(ScreenId::Dashboard, columns, 40);
        let mut terminal = Terminal::new(TestBackend::new(columns, 40)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(columns), &columns, |b, _| {
            b.iter(|| {
                terminal.draw(|f| ui::render(f, &mut app)).unwrap();
            });
        });
    }

    group.finish();
}

/// Shell composition alone
fn bench_compose_shell(c: &mut Criterion) {
    let shell = AdaptiveShell::default();
    let route = Route::Screen(ScreenId::Alerts);

    c.bench_function("compose_shell_mobile", |b| {
        b.iter(|| black_box(shell.compose(black_box(&route), Some(480))))
    });
    c.bench_function("compose_shell_desktop", |b| {
        b.iter(|| black_box(shell.compose(black_box(&route), Some(1280))))
    });
}

criterion_group!(benches, bench_render_screens, bench_render_widths, bench_compose_shell);
criterion_main!(benches);
