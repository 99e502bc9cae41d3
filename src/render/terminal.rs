//! Terminal rendering using crossterm
//!
//! Draws highlighted markup as an ANSI-colored listing with an optional
//! header, badge and line-number gutter. Output goes to any writer so the
//! same code serves stdout and tests.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::Config;
use crate::error::Result;
use crate::syntax::{badge_text, segments, Category, HighlightedMarkup, Style, Theme};

/// Minimum width of the header rule
const MIN_WIDTH: usize = 40;

/// A styled run within one display line
type Run = (Option<Category>, String);

/// Renders highlighted markup to a terminal
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    theme: Theme,
    color: bool,
    line_numbers: bool,
    tab_width: usize,
}

impl TerminalRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            theme: config.theme.clone(),
            color: config.color,
            line_numbers: config.show_line_numbers,
            tab_width: config.tab_width.max(1),
        }
    }

    /// Builder: turn colors on or off
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Render markup, with an optional title in the header
    pub fn render<W: Write>(
        &self,
        out: &mut W,
        markup: &HighlightedMarkup,
        title: Option<&str>,
    ) -> Result<()> {
        let lines = self.layout(markup)?;
        let gutter = if self.line_numbers {
            lines.len().to_string().len()
        } else {
            0
        };
        let content_width = lines
            .iter()
            .map(|line| line.iter().map(|(_, text)| text.width()).sum::<usize>())
            .max()
            .unwrap_or(0);
        let width = (content_width + gutter_width(gutter)).max(MIN_WIDTH);

        let badge = markup.language().map(badge_text);
        if title.is_some() || badge.is_some() {
            self.write_header(out, title, badge.as_deref(), width)?;
        }

        for (idx, line) in lines.iter().enumerate() {
            if self.line_numbers {
                self.write_dim(out, &format!("{:>w$} │ ", idx + 1, w = gutter))?;
            }
            for (category, text) in line {
                match category {
                    Some(category) => self.write_styled(out, text, self.theme.style(*category))?,
                    None => queue!(out, Print(text))?,
                }
            }
            queue!(out, Print("\n"))?;
        }

        out.flush()?;
        Ok(())
    }

    /// Split markup into display lines with tabs expanded
    fn layout(&self, markup: &HighlightedMarkup) -> Result<Vec<Vec<Run>>> {
        let mut lines: Vec<Vec<Run>> = vec![Vec::new()];
        let mut col = 0;

        for segment in segments(markup.as_str())? {
            for (i, piece) in segment.text.split('\n').enumerate() {
                if i > 0 {
                    lines.push(Vec::new());
                    col = 0;
                }
                if piece.is_empty() {
                    continue;
                }
                let mut text = String::with_capacity(piece.len());
                for ch in piece.chars() {
                    if ch == '\t' {
                        let spaces = self.tab_width - col % self.tab_width;
                        text.extend(std::iter::repeat(' ').take(spaces));
                        col += spaces;
                    } else {
                        text.push(ch);
                        col += ch.width().unwrap_or(0);
                    }
                }
                if let Some(line) = lines.last_mut() {
                    line.push((segment.category, text));
                }
            }
        }

        // A trailing newline does not start another visible line
        if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        Ok(lines)
    }

    fn write_header<W: Write>(
        &self,
        out: &mut W,
        title: Option<&str>,
        badge: Option<&str>,
        width: usize,
    ) -> Result<()> {
        let left = title.map(|t| format!("── {} ", t)).unwrap_or_default();
        let right = badge.map(|b| format!(" [{}]", b)).unwrap_or_default();
        let fill = width.saturating_sub(left.width() + right.width());

        queue!(out, Print(&left))?;
        self.write_dim(out, &"─".repeat(fill))?;
        if !right.is_empty() {
            let style = Style::default().with_bold();
            self.write_styled(out, &right, style)?;
        }
        queue!(out, Print("\n"))?;
        Ok(())
    }

    fn write_dim<W: Write>(&self, out: &mut W, text: &str) -> Result<()> {
        if self.color {
            queue!(
                out,
                SetAttribute(Attribute::Dim),
                Print(text),
                SetAttribute(Attribute::NormalIntensity)
            )?;
        } else {
            queue!(out, Print(text))?;
        }
        Ok(())
    }

    fn write_styled<W: Write>(&self, out: &mut W, text: &str, style: Style) -> Result<()> {
        if !self.color || style.is_default() {
            queue!(out, Print(text))?;
            return Ok(());
        }

        if let Some(fg) = style.fg.to_terminal() {
            queue!(out, SetForegroundColor(fg))?;
        }
        if let Some(bg) = style.bg.to_terminal() {
            queue!(out, SetBackgroundColor(bg))?;
        }
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        if style.underline {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        queue!(out, Print(text), SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Columns taken by a gutter with `digits` wide numbers, including " │ "
fn gutter_width(digits: usize) -> usize {
    if digits == 0 {
        0
    } else {
        digits + 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::highlight;
    use pretty_assertions::assert_eq;

    fn plain(config: Config) -> TerminalRenderer {
        TerminalRenderer::new(&config).with_color(false)
    }

    fn render(
        renderer: &TerminalRenderer,
        source: &str,
        language: Option<&str>,
        title: Option<&str>,
    ) -> String {
        let mut out = Vec::new();
        renderer
            .render(&mut out, &highlight(source, language), title)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_with_line_numbers() {
        let renderer = plain(Config::default());
        assert_eq!(
            render(&renderer, "const a = 1;\nreturn a;\n", None, None),
            "1 │ const a = 1;\n2 │ return a;\n"
        );
    }

    #[test]
    fn test_plain_without_line_numbers() {
        let config = Config {
            show_line_numbers: false,
            ..Config::default()
        };
        let renderer = plain(config);
        assert_eq!(render(&renderer, "a\n\nb", None, None), "a\n\nb\n");
    }

    #[test]
    fn test_tabs_expanded() {
        let config = Config {
            show_line_numbers: false,
            tab_width: 4,
            ..Config::default()
        };
        let renderer = plain(config);
        assert_eq!(render(&renderer, "\tx\nab\ty", None, None), "    x\nab  y\n");
    }

    #[test]
    fn test_header_has_title_and_badge() {
        let renderer = plain(Config::default());
        let output = render(&renderer, "let a", Some("typescript"), Some("Singleton"));
        let header = output.lines().next().unwrap();
        assert!(header.starts_with("── Singleton ─"));
        assert!(header.ends_with(" [TypeScript]"));
        assert_eq!(header.width(), MIN_WIDTH);
    }

    #[test]
    fn test_color_output_uses_escapes() {
        let renderer = TerminalRenderer::new(&Config::default()).with_color(true);
        let output = render(&renderer, "return 1", None, None);
        assert!(output.contains("\x1b["));
        assert!(output.contains("return"));
    }

    #[test]
    fn test_empty_source() {
        let renderer = plain(Config::default());
        assert_eq!(render(&renderer, "", None, None), "1 │ \n");
    }
}
