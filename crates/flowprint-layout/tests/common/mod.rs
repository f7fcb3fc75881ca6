//! Test-only rendering of layout trees.
//!
//! The production printer lives downstream; tests need just enough of an
//! interpreter to turn layouts into strings in both modes. `IfNeeded`
//! sequences stay flat under `print`, and `print_broken` forces them to
//! break, which is how the break-conditional layouts get exercised.

#![allow(dead_code)]

pub mod builders;

use flowprint_layout::{BreakMode, Layout};

#[derive(Clone, Copy, PartialEq)]
pub enum Mode {
    Pretty,
    Ugly,
}

pub fn print(layout: &Layout, mode: Mode) -> String {
    render_with(layout, mode, false)
}

/// Pretty-print with every width-dependent sequence broken.
pub fn print_broken(layout: &Layout) -> String {
    render_with(layout, Mode::Pretty, true)
}

fn render_with(layout: &Layout, mode: Mode, force_breaks: bool) -> String {
    let mut renderer = Renderer {
        mode,
        force_breaks,
        out: String::new(),
        indent: 0,
        pending_indent: None,
    };
    renderer.render(layout, false);
    renderer.out
}

struct Renderer {
    mode: Mode,
    force_breaks: bool,
    out: String,
    indent: u32,
    /// Indentation owed to the next non-empty text on this line.
    pending_indent: Option<u32>,
}

impl Renderer {
    fn render(&mut self, layout: &Layout, in_broken_sequence: bool) {
        match layout {
            Layout::Atom(text) => self.text(text),
            Layout::Identifier(_, name) => self.text(name),
            Layout::SourceLocation(_, inner) => self.render(inner, in_broken_sequence),
            Layout::Empty => {}
            Layout::Fuse(items) => {
                for item in items {
                    self.render(item, in_broken_sequence);
                }
            }
            Layout::IfPretty(pretty, ugly) => {
                let chosen = if self.mode == Mode::Pretty { pretty } else { ugly };
                self.render(chosen, in_broken_sequence);
            }
            Layout::IfBreak(broken, flat) => {
                let chosen = if in_broken_sequence { broken } else { flat };
                self.render(chosen, in_broken_sequence);
            }
            Layout::Sequence(config, children) => {
                if children.is_empty() {
                    return;
                }
                let broken = match config.break_mode {
                    BreakMode::Always => true,
                    BreakMode::IfPretty => self.mode == Mode::Pretty,
                    BreakMode::IfNeeded => self.mode == Mode::Pretty && self.force_breaks,
                    BreakMode::Never => false,
                };
                if !broken {
                    for child in children {
                        self.render(child, false);
                    }
                    return;
                }
                self.indent += config.indent;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 || !config.inline.0 {
                        self.newline();
                    }
                    self.render(child, true);
                }
                self.indent -= config.indent;
                if !config.inline.1 {
                    self.newline();
                }
            }
        }
    }

    fn newline(&mut self) {
        while self.out.ends_with(' ') {
            self.out.pop();
        }
        self.out.push('\n');
        self.pending_indent = Some(self.indent);
    }

    fn text(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if let Some(indent) = self.pending_indent.take() {
            for _ in 0..indent {
                self.out.push(' ');
            }
        }
        self.out.push_str(s);
    }
}
