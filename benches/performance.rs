use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rangecal::calendar::{generate, present, Day, Selection, WindowManager, DEFAULT_EDGE_THRESHOLD};
use rangecal::tui::action::{Action, CalendarAction};
use rangecal::tui::layout::GridViewport;
use rangecal::tui::reducer::reduce;
use rangecal::tui::state::{AppState, Screen};

fn day(s: &str) -> Day {
    s.parse().unwrap()
}

/// Benchmark window construction and expansion
fn bench_window(c: &mut Criterion) {
    let today = day("2024-06-15");
    let mut group = c.benchmark_group("window");

    group.bench_function("generate_year", |b| {
        b.iter(|| generate(black_box(day("2024-01-01")), black_box(day("2024-12-31"))))
    });

    group.bench_function("initialize", |b| {
        b.iter(|| {
            let mut manager = WindowManager::new(DEFAULT_EDGE_THRESHOLD);
            manager.initialize(black_box(today));
            manager
        })
    });

    group.bench_function("expand_backward_then_forward", |b| {
        let mut manager = WindowManager::new(DEFAULT_EDGE_THRESHOLD);
        manager.initialize(today);
        b.iter(|| {
            black_box(manager.expand_backward());
            black_box(manager.expand_forward());
        })
    });

    group.finish();
}

/// Benchmark selection clicks and cell presentation over a full window
fn bench_selection(c: &mut Criterion) {
    let today = day("2024-06-15");
    let mut manager = WindowManager::new(DEFAULT_EDGE_THRESHOLD);
    manager.initialize(today);
    let days = manager.window().days().to_vec();
    let selection = Selection::Empty.click(day("2024-05-20")).click(day("2024-07-04"));

    let mut group = c.benchmark_group("selection");

    group.bench_function("click_sequence", |b| {
        b.iter(|| {
            days.iter()
                .step_by(9)
                .fold(Selection::Empty, |selection, &d| selection.click(black_box(d)))
        })
    });

    group.bench_function("present_window", |b| {
        b.iter(|| {
            days.iter()
                .filter(|&&d| present(d, today, black_box(&selection)).is_between)
                .count()
        })
    });

    group.finish();
}

/// Benchmark reducer dispatch for scrolling
fn bench_reducer_dispatch(c: &mut Criterion) {
    let mut state = AppState::default();
    state.screen = Screen::Calendar;
    state.system.today = day("2024-06-15");
    state.calendar.window.initialize(state.system.today);
    let (state, _effect) = reduce(
        state,
        Action::CalendarAction(CalendarAction::GridResized(GridViewport {
            x: 0,
            y: 4,
            width: 77,
            height: 20,
        })),
    );

    let mut group = c.benchmark_group("reducer");

    group.bench_function("scroll_page_down", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::CalendarAction(CalendarAction::ScrollPage(1))),
            );
            new_state
        })
    });

    group.bench_function("scroll_far_backward", |b| {
        b.iter(|| {
            let (new_state, _effect) = reduce(
                black_box(state.clone()),
                black_box(Action::CalendarAction(CalendarAction::ScrollBy(-400))),
            );
            new_state
        })
    });

    group.finish();
}

criterion_group!(benches, bench_window, bench_selection, bench_reducer_dispatch);
criterion_main!(benches);
