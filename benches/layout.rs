use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use flowcanvas::config::{Config, ResolveConfig};
use flowcanvas::layout::auto_layout;
use flowcanvas::model::{FlowDocument, FlowEdge, FlowNode, Point};
use flowcanvas::resolve_collisions;
use std::hint::black_box;

/// A square grid of nodes whose neighbors overlap by half a node.
fn dense_grid(count: usize) -> Vec<FlowNode> {
    let side = (count as f32).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let col = i % side;
            let row = i / side;
            FlowNode {
                id: format!("n{i}"),
                position: Some(Point {
                    x: col as f32 * 50.0,
                    y: row as f32 * 50.0,
                }),
                width: Some(100.0),
                height: Some(100.0),
                ..Default::default()
            }
        })
        .collect()
}

fn fanout_flow(nodes: usize, extra_edges: usize) -> FlowDocument {
    let mut doc = FlowDocument::default();
    for i in 0..nodes {
        doc.nodes.push(FlowNode {
            id: format!("n{i}"),
            width: Some(150.0),
            height: Some(60.0),
            ..Default::default()
        });
    }
    for i in 0..nodes.saturating_sub(1) {
        doc.edges.push(FlowEdge {
            source: format!("n{i}"),
            target: format!("n{}", i + 1),
            ..Default::default()
        });
    }
    let mut count = 0usize;
    'outer: for i in 0..nodes {
        for j in (i + 2)..nodes {
            if count >= extra_edges {
                break 'outer;
            }
            doc.edges.push(FlowEdge {
                source: format!("n{i}"),
                target: format!("n{j}"),
                ..Default::default()
            });
            count += 1;
        }
    }
    doc
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_collisions");
    let options = ResolveConfig {
        max_iterations: 64,
        overlap_threshold: 0.5,
        margin: 8.0,
    };
    for count in [9usize, 36, 81] {
        let nodes = dense_grid(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &nodes, |b, nodes| {
            b.iter(|| {
                let out = resolve_collisions(black_box(nodes), &options);
                black_box(out.len());
            });
        });
    }
    group.finish();
}

fn bench_auto_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto_layout");
    let config = Config::default();
    for (nodes, extra_edges) in [(20usize, 10usize), (40, 40), (80, 120)] {
        let name = format!("fanout_{nodes}_{extra_edges}");
        let doc = fanout_flow(nodes, extra_edges);
        group.bench_with_input(BenchmarkId::from_parameter(name), &doc, |b, doc| {
            b.iter(|| {
                let out = auto_layout(black_box(doc), &config);
                black_box(out.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_resolve, bench_auto_layout
);
criterion_main!(benches);
