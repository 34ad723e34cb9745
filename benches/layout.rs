// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use iced_toast::toast::layout::compute_heights;
use iced_toast::toast::{Content, Metrics, ToastStyle};
use iced_toast::ui::design_tokens::DesignTokens;
use iced_toast::ui::platform::DesktopPlatform;
use std::hint::black_box;

const LONG_MESSAGE: &str = "Mars is the fourth planet from the Sun. The surface of Mars is \
orange-red because it is covered in iron oxide dust, giving it the nickname \"the Red Planet\".";

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    let mut platform = DesktopPlatform::new();
    platform.set_window_size(Size::new(390.0, 844.0));
    let style = ToastStyle::mars(&DesignTokens);
    let metrics = Metrics::default();

    group.bench_function("title_and_long_message", |b| {
        let content = Content {
            title: Some("MARS"),
            message: LONG_MESSAGE,
            has_image: false,
        };
        b.iter(|| {
            black_box(compute_heights(
                black_box(content),
                &style,
                &metrics,
                &platform,
                &platform,
            ))
        });
    });

    group.bench_function("short_message_with_image", |b| {
        let content = Content {
            title: None,
            message: "Some message",
            has_image: true,
        };
        b.iter(|| {
            black_box(compute_heights(
                black_box(content),
                &style,
                &metrics,
                &platform,
                &platform,
            ))
        });
    });

    group.finish();
}

criterion_group!(benches, layout_benchmark);
criterion_main!(benches);
