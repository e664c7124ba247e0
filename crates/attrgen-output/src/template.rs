//! A target file seen as literal text interleaved with generator-owned holes.

/// Marks the first line of a generated region.
pub const START_MARKER: &str = "pystart";
/// Marks the last line of a generated region.
pub const END_MARKER: &str = "pyend";
/// A start line must carry this to be filled; bare `pystart` regions are
/// cleared and left empty.
pub const FILL_MARKER: &str = "pystart - ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied through unchanged, sentinel lines included.
    Literal(String),
    /// Generated text goes here. `start_line` is the sentinel line that
    /// opened the region and `line` its 1-based line number.
    Hole { start_line: String, line: usize },
}

/// A region start line with no matching end line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unterminated {
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Split `text` into literals and holes. Whatever sat between the
    /// sentinels before is dropped. Line endings are kept byte for byte.
    pub fn parse(text: &str) -> Result<Self, Unterminated> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut open: Option<usize> = None;

        for (index, line) in text.split_inclusive('\n').enumerate() {
            let number = index + 1;
            if line.contains(START_MARKER) {
                // a start line inside an open region simply opens the next one
                literal.push_str(line);
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
                segments.push(Segment::Hole {
                    start_line: line.to_string(),
                    line: number,
                });
                open = Some(number);
            } else if line.contains(END_MARKER) {
                literal.push_str(line);
                open = None;
            } else if open.is_none() {
                literal.push_str(line);
            }
        }

        if let Some(line) = open {
            return Err(Unterminated { line });
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn hole_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Hole { .. }))
            .count()
    }

    /// Reassemble the file, asking `fill` for the body of each fillable
    /// hole. Holes `fill` declines stay empty.
    pub fn render(&self, mut fill: impl FnMut(&str) -> Option<String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Hole { start_line, .. } => {
                    if start_line.contains(FILL_MARKER)
                        && let Some(body) = fill(start_line)
                    {
                        out.push_str(&body);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\
#pragma once
/* pystart - attribute ids */
#define OLD 1
/* pyend */
int keep;
";

    #[test]
    fn parse_drops_old_region_content() {
        let template = Template::parse(HEADER).unwrap();
        assert_eq!(template.hole_count(), 1);
        assert_eq!(
            template.render(|_| None),
            "#pragma once\n/* pystart - attribute ids */\n/* pyend */\nint keep;\n"
        );
    }

    #[test]
    fn render_fills_tagged_holes() {
        let template = Template::parse(HEADER).unwrap();
        let text = template.render(|line| {
            line.contains("attribute ids")
                .then(|| "#define NEW 2\n".to_string())
        });
        assert_eq!(
            text,
            "#pragma once\n/* pystart - attribute ids */\n#define NEW 2\n/* pyend */\nint keep;\n"
        );
    }

    #[test]
    fn bare_start_marker_is_never_filled() {
        let template = Template::parse("/* pystart */\nold\n/* pyend */\n").unwrap();
        let text = template.render(|_| Some("new\n".to_string()));
        assert_eq!(text, "/* pystart */\n/* pyend */\n");
    }

    #[test]
    fn crlf_and_missing_final_newline_survive() {
        let text = "a\r\n/* pystart - x */\r\nold\r\n/* pyend */\r\nb";
        let template = Template::parse(text).unwrap();
        assert_eq!(
            template.render(|_| None),
            "a\r\n/* pystart - x */\r\n/* pyend */\r\nb"
        );
    }

    #[test]
    fn unterminated_region_reports_its_line() {
        let err = Template::parse("a\nb\n/* pystart - table */\nc\n").unwrap_err();
        assert_eq!(err, Unterminated { line: 3 });
    }

    #[test]
    fn text_without_regions_is_one_literal() {
        let template = Template::parse("plain\n").unwrap();
        assert_eq!(template.segments(), &[Segment::Literal("plain\n".to_string())]);
    }
}
