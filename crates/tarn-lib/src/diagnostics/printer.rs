//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::{TextRange, TextSize};
use serde::Serialize;

use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d [DiagnosticMessage],
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d [DiagnosticMessage]) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// Annotated source snippets, one block per diagnostic.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// One line per diagnostic: `error at line:col: message`.
    /// Offsets are printed when no source is attached.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match self.source {
                Some(source) => {
                    let (line, col) = line_col(source, diag.range().start());
                    let _ = write!(
                        out,
                        "{} at {}:{}: {}",
                        diag.severity(),
                        line,
                        col,
                        diag.message()
                    );
                }
                None => {
                    let _ = write!(out, "{diag}");
                }
            }
        }
        out
    }

    /// Serializable views for machine consumption.
    pub fn views(&self) -> Vec<DiagnosticView<'_>> {
        self.diagnostics
            .iter()
            .map(|diag| {
                let (line, column) = match self.source {
                    Some(source) => line_col(source, diag.range().start()),
                    None => (0, 0),
                };
                DiagnosticView {
                    severity: diag.severity(),
                    kind: diag.kind(),
                    line,
                    column,
                    message: diag.message(),
                }
            })
            .collect()
    }

    fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return w.write_str(&self.render_plain());
        };

        if self.diagnostics.is_empty() {
            return Ok(());
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            let range = adjust_range(diag.range(), source.len());

            let mut snippet = Snippet::source(source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(range));

            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            let level = severity_to_level(diag.severity());
            let report: Vec<Group> = vec![level.primary_title(diag.message()).element(snippet)];

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }
}

/// Serializable projection of a diagnostic. Line and column are 1-based.
#[derive(Debug, Serialize)]
pub struct DiagnosticView<'d> {
    pub severity: Severity,
    pub kind: super::DiagnosticKind,
    pub line: u32,
    pub column: u32,
    pub message: &'d str,
}

/// 1-based line and column of a byte offset.
pub fn line_col(source: &str, offset: TextSize) -> (u32, u32) {
    let offset = usize::from(offset).min(source.len());
    let before = &source[..offset];
    let line = before.bytes().filter(|&b| b == b'\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = (offset - line_start) as u32 + 1;
    (line, col)
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
