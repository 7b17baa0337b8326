// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast engine.
//!
//! Measures the performance of:
//! - Reducing actions over a populated queue
//! - Reconciliation passes (enter, exit, reposition) through a session

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_toasts::config::{Config, OverlayConfig};
use iced_toasts::domain::toast::{Category, Notification, ToastDraft, ToastId};
use iced_toasts::queue::{reduce, Action, SequentialIds};
use iced_toasts::session::OverlaySession;
use std::hint::black_box;
use std::time::Duration;

fn populated_queue(len: usize, ids: &mut SequentialIds) -> Vec<Notification> {
    (0..len).fold(Vec::new(), |queue, i| {
        let category = Category::ALL[i % Category::ALL.len()];
        reduce(
            &queue,
            Action::Push(ToastDraft::new(category, format!("message {}", i % 7))),
            ids,
        )
    })
}

/// Benchmark the pure reducer on queues of increasing size.
fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_queue");

    for len in [4usize, 32, 256] {
        let mut ids = SequentialIds::new();
        let queue = populated_queue(len, &mut ids);

        group.bench_with_input(BenchmarkId::new("push", len), &queue, |b, queue| {
            b.iter(|| {
                black_box(reduce(
                    queue,
                    Action::Push(ToastDraft::info("bench")),
                    &mut ids,
                ))
            });
        });

        group.bench_with_input(
            BenchmarkId::new("distinct_message_push", len),
            &queue,
            |b, queue| {
                b.iter(|| {
                    black_box(reduce(
                        queue,
                        Action::DistinctMessagePush(ToastDraft::info("message 3")),
                        &mut ids,
                    ))
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("hide_by_category", len), &queue, |b, queue| {
            b.iter(|| black_box(reduce(queue, Action::HideByCategory(Category::Error), &mut ids)));
        });
    }

    group.finish();
}

/// Benchmark a push, hide and settle cycle through the overlay session.
fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconciler");
    let config = Config {
        overlay: OverlayConfig {
            allowed_by_default: Some(true),
        },
        ..Config::default()
    };

    group.bench_function("push_hide_settle", |b| {
        b.iter(|| {
            let mut session: OverlaySession =
                OverlaySession::new(&config).with_ids(SequentialIds::new());
            for i in 0..8 {
                let _ = session.dispatch(Action::Push(ToastDraft::info(format!("toast {i}"))));
            }
            let _ = session.dispatch(Action::HideById(ToastId::new("toast-3")));
            let _ = session.report_height(&ToastId::new("toast-5"), 120.0);
            let _ = session.advance_to(Duration::from_secs(2));
            black_box(session.reconciler().tracked_count())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reduce, bench_reconcile);
criterion_main!(benches);
