//! Synthetic field layout.
//!
//! Neither extractor yields real glyph coordinates (DOCX has none; the PDF
//! path does not attempt per-glyph positions), so preview bounding boxes are
//! synthesized on a deterministic two-column grid instead. The remote
//! provider positions fields from the literal tag locations in the uploaded
//! file; these boxes only drive the local preview.
//!
//! The grid threads an explicit cursor through the ordered field sequence:
//! even-indexed fields go to the left column, odd-indexed to the right, and
//! the `y` cursor advances only after a right-column placement, so the two
//! fields of a row share one `y`. A tall left-column field next to a short
//! right-column one can therefore overlap the following row; that behavior
//! is intentional and must not be "fixed" here.

use crate::field::{FieldArea, FieldDescriptor, FieldType};

/// Left column x position (fraction of page width).
pub const LEFT_COLUMN_X: f64 = 0.10;
/// Right column x position (fraction of page width).
pub const RIGHT_COLUMN_X: f64 = 0.55;
/// Default field height (fraction of page height).
pub const BASE_FIELD_HEIGHT: f64 = 0.04;
/// Default field width (fraction of page width).
pub const BASE_FIELD_WIDTH: f64 = 0.35;
/// Vertical gap between rows (fraction of page height).
pub const VERTICAL_GAP: f64 = 0.015;
/// Bottom of the usable area (fraction of page height).
pub const USABLE_PAGE_HEIGHT: f64 = 0.95;
/// Top margin where each page's cursor starts (fraction of page height).
pub const TOP_MARGIN: f64 = 0.05;

/// Number of fields assumed to fit on one page when estimating a DOCX
/// page count.
pub const FIELDS_PER_ESTIMATED_PAGE: usize = 25;

/// Running placement state, threaded through the field sequence.
///
/// Kept an explicit value (rather than mutable shared state) so single
/// placement steps are testable in isolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    /// Top edge for the current row (fraction of page height)
    pub y: f64,
    /// Current 1-indexed page
    pub page: usize,
}

impl Default for LayoutCursor {
    #[inline]
    fn default() -> Self {
        Self {
            y: TOP_MARGIN,
            page: 1,
        }
    }
}

/// Width and height for a field, by type.
///
/// Signature-like fields get extra height, checkboxes shrink to a square,
/// images get the tallest box; everything else uses the base extent.
#[must_use]
fn field_extent(field_type: &FieldType) -> (f64, f64) {
    match field_type {
        FieldType::Signature | FieldType::Initials => (BASE_FIELD_WIDTH, 0.08),
        FieldType::Checkbox => (0.03, 0.03),
        FieldType::Image => (BASE_FIELD_WIDTH, 0.12),
        _ => (BASE_FIELD_WIDTH, BASE_FIELD_HEIGHT),
    }
}

/// Place one field and return the advanced cursor.
///
/// Overflow is checked before placement: when the candidate box's bottom
/// would cross [`USABLE_PAGE_HEIGHT`], the page increments and `y` resets
/// to [`TOP_MARGIN`]. With `page_clamp` set (the PDF path), the box's page
/// number is clamped so the preview never points past the real last page;
/// the running cursor itself is not clamped.
fn place_field(
    field: &mut FieldDescriptor,
    index: usize,
    mut cursor: LayoutCursor,
    page_clamp: Option<usize>,
) -> LayoutCursor {
    let (w, h) = field_extent(&field.field_type);

    if cursor.y + h > USABLE_PAGE_HEIGHT {
        cursor.page += 1;
        cursor.y = TOP_MARGIN;
    }

    let right_column = index % 2 == 1;
    let x = if right_column {
        RIGHT_COLUMN_X
    } else {
        LEFT_COLUMN_X
    };
    let page = match page_clamp {
        Some(max_page) => cursor.page.min(max_page.max(1)),
        None => cursor.page,
    };

    field.areas = vec![FieldArea {
        x,
        y: cursor.y,
        w,
        h,
        page,
    }];

    if right_column {
        cursor.y += h + VERTICAL_GAP;
    }
    cursor
}

/// Assign one synthetic bounding box to every field, in sequence order.
///
/// Deterministic and idempotent: running it twice over the same ordered
/// sequence produces identical areas. `page_clamp` carries the
/// authoritative page count on the PDF path; pass `None` for DOCX, whose
/// estimated count never constrains placement.
pub fn synthesize(fields: &mut [FieldDescriptor], page_clamp: Option<usize>) {
    let mut cursor = LayoutCursor::default();
    for (index, field) in fields.iter_mut().enumerate() {
        cursor = place_field(field, index, cursor, page_clamp);
    }
}

/// Estimated page count for formats without an authoritative one:
/// `ceil(field_count / 25)`, at least 1.
#[must_use]
pub fn estimated_page_count(field_count: usize) -> usize {
    field_count.div_ceil(FIELDS_PER_ESTIMATED_PAGE).max(1)
}
