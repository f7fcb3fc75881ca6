//! Layout Generation Benchmark
//!
//! Measures layout-tree construction throughput over synthetic programs of
//! increasing size.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use flowprint_ast::{
    BinaryOp, CallArgument, Expression, ExpressionKind, Identifier, Literal, LiteralValue,
    Pattern, PatternKind, Program, Statement, StatementKind, VariableDeclaration,
    VariableDeclarator, VariableKind,
};
use flowprint_common::{Loc, Position};
use flowprint_layout::program;

fn loc(line: u32) -> Loc {
    Loc::new(None, Position::new(line, 0, line * 40), Position::new(line, 39, line * 40 + 39))
}

fn ident(line: u32, name: &str) -> Expression {
    Expression {
        loc: loc(line),
        kind: ExpressionKind::Identifier(Identifier::new(loc(line), name)),
    }
}

fn number(line: u32, value: f64) -> Expression {
    Expression {
        loc: loc(line),
        kind: ExpressionKind::Literal(Literal {
            loc: loc(line),
            value: LiteralValue::Number(value),
            raw: format!("{value}"),
        }),
    }
}

/// `const x<i> = f(x, i + i);` repeated `size` times.
fn synthetic_program(size: u32) -> Program {
    let body: Vec<Statement> = (0..size)
        .map(|i| {
            let line = i + 1;
            let sum = Expression {
                loc: loc(line),
                kind: ExpressionKind::Binary {
                    operator: BinaryOp::Plus,
                    left: Box::new(number(line, f64::from(i))),
                    right: Box::new(number(line, f64::from(i))),
                },
            };
            let call = Expression {
                loc: loc(line),
                kind: ExpressionKind::Call {
                    callee: Box::new(ident(line, "f")),
                    arguments: vec![
                        CallArgument::Expression(ident(line, "x")),
                        CallArgument::Expression(sum),
                    ],
                },
            };
            Statement {
                loc: loc(line),
                kind: StatementKind::VariableDeclaration(VariableDeclaration {
                    loc: loc(line),
                    kind: VariableKind::Const,
                    declarations: vec![VariableDeclarator {
                        loc: loc(line),
                        id: Pattern {
                            loc: loc(line),
                            kind: PatternKind::Identifier {
                                name: format!("x{i}"),
                                annotation: None,
                                optional: false,
                            },
                        },
                        init: Some(call),
                    }],
                }),
            }
        })
        .collect();
    let end = Position::new(size.max(1), 39, size.max(1) * 40 + 39);
    Program {
        loc: Loc::new(None, Position::new(1, 0, 0), end),
        body,
        comments: vec![],
    }
}

fn bench_layout_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_generation");
    for size in [64u32, 512, 4096] {
        let ast = synthetic_program(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ast, |b, ast| {
            b.iter(|| program(false, None, black_box(ast)).expect("generates"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout_generation);
criterion_main!(benches);
