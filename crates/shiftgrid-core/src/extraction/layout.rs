use crate::extraction::PageContent;
use crate::model::Table;

/// Reconstruct tables from pdftotext -layout output.
///
/// A table is a run of consecutive non-blank lines in which at least one
/// line splits into two or more cells. Cells are separated by gaps of 2+
/// spaces and assigned to columns by horizontal position.
pub fn tables_from_pages(pages: &[PageContent]) -> Vec<Table> {
    pages
        .iter()
        .flat_map(|page| find_table_regions(&page.lines))
        .map(|region| table_from_lines(&region))
        .collect()
}

/// Group lines into blocks separated by blank lines, keeping tabular blocks.
pub fn find_table_regions(lines: &[String]) -> Vec<Vec<&str>> {
    let mut regions = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        if line.trim().is_empty() {
            if !current.is_empty() {
                regions.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(line.as_str());
    }
    if !current.is_empty() {
        regions.push(current);
    }

    regions
        .into_iter()
        .filter(|region| region.iter().any(|l| split_segments(l).len() >= 2))
        .collect()
}

/// A run of text on a layout line and its horizontal span in characters.
#[derive(Debug, Clone, PartialEq)]
struct Segment<'a> {
    start: usize,
    end: usize,
    text: &'a str,
}

impl Segment<'_> {
    fn center(&self) -> f32 {
        (self.start + self.end) as f32 / 2.0
    }
}

/// Split a line by gaps of 2+ whitespace characters, keeping char offsets.
fn split_segments(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    // (byte offset, char column) of the current segment start
    let mut start: Option<(usize, usize)> = None;
    // (byte offset, char column) just past the last non-space char
    let mut last_end = (0, 0);
    let mut space_count = 0;

    for (col, (byte, c)) in line.char_indices().enumerate() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count == 2 {
                if let Some((sb, sc)) = start.take() {
                    segments.push(Segment {
                        start: sc,
                        end: last_end.1,
                        text: &line[sb..last_end.0],
                    });
                }
            }
        } else {
            if start.is_none() {
                start = Some((byte, col));
            }
            space_count = 0;
            last_end = (byte + c.len_utf8(), col + 1);
        }
    }

    if let Some((sb, sc)) = start {
        segments.push(Segment {
            start: sc,
            end: last_end.1,
            text: &line[sb..last_end.0],
        });
    }

    segments
}

/// Lay out a block of lines as a grid.
///
/// The line with the most segments fixes the column anchors; every other
/// segment lands in the column whose anchor center is nearest. Segments
/// meeting in one cell are stacked on separate lines.
fn table_from_lines(lines: &[&str]) -> Table {
    let split: Vec<Vec<Segment>> = lines.iter().map(|l| split_segments(l)).collect();
    let anchors: Vec<f32> = split
        .iter()
        .max_by_key(|segs| segs.len())
        .map(|segs| segs.iter().map(Segment::center).collect())
        .unwrap_or_default();

    let rows = split
        .iter()
        .map(|segs| {
            let mut row = vec![String::new(); anchors.len()];
            for seg in segs {
                let col = nearest(&anchors, seg.center());
                if !row[col].is_empty() {
                    row[col].push('\n');
                }
                row[col].push_str(seg.text);
            }
            row
        })
        .collect();

    Table::new(rows)
}

fn nearest(anchors: &[f32], x: f32) -> usize {
    anchors
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - x).abs().total_cmp(&(*b - x).abs()))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
