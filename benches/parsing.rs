//! Performance benchmarks for mdpages
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Sample Markdown documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SMALL: &str = r#"# Heading

This is a paragraph with _emphasis_ and **strong** text.

- Item 1
- Item 2
- Item 3

`inline code` and [a link](https://example.com).
"#;

    pub const MEDIUM: &str = r#"# Project README

This is a sample README file that demonstrates the supported Markdown.

## Features

- Fast parsing
- Plain node tree
- No regex

### Code Example

```
fn main() {
    println!("Hello, world!");
}
```

## Performance

The parser achieves **high throughput** on typical documents.

> This is a blockquote with some _emphasized_ text.

### Links

1. [GitHub](https://github.com)
2. [Documentation](https://docs.rs)

## Conclusion

Thank you for reading! ![badge](https://example.com/badge.svg)
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        let section = r#"
## Section Title

This paragraph contains inline elements like _emphasis_, **strong**,
`code`, and [links](https://example.com).

- First bullet point with **bold** text
- Second bullet point with _italic_ text
- Third point with `code`

> A blockquote that spans
> multiple lines.

```
fn example() {
    let x = 42;
}
```
"#;
        let mut doc = String::from("# Large Document\n");
        for _ in 0..100 {
            doc.push_str(section);
        }
        doc
    }
}

fn bench_to_html(c: &mut Criterion) {
    let large = samples::large();
    let inputs = [
        ("tiny", samples::TINY),
        ("small", samples::SMALL),
        ("medium", samples::MEDIUM),
        ("large", large.as_str()),
    ];

    let mut group = c.benchmark_group("to_html");
    for (name, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| mdpages::to_html(black_box(input)))
        });
    }
    group.finish();
}

fn bench_phases(c: &mut Criterion) {
    let large = samples::large();

    let mut group = c.benchmark_group("phases");
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("segment", |b| {
        b.iter(|| mdpages::block::segment(black_box(&large)))
    });
    group.bench_function("classify", |b| {
        let blocks = mdpages::block::segment(&large);
        b.iter(|| {
            for block in &blocks {
                black_box(mdpages::block::classify(block));
            }
        })
    });
    group.bench_function("tokenize", |b| {
        let text = "Inline _emphasis_, **strong**, `code`, [links](https://example.com) and ![images](https://example.com/i.png). ";
        let line = text.repeat(50);
        b.iter(|| mdpages::inline::tokenize(black_box(&line)))
    });
    group.bench_function("extract_title", |b| {
        b.iter(|| mdpages::extract_title(black_box(&large)))
    });
    group.finish();
}

criterion_group!(benches, bench_to_html, bench_phases);
criterion_main!(benches);
