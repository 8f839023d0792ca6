use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlyphEditError {
    #[error("point index {index} out of range for contour with {count} points")]
    PointOutOfRange { index: usize, count: usize },

    #[error("segment index {index} out of range for contour with {count} segments")]
    SegmentOutOfRange { index: usize, count: usize },

    #[error("contour index {index} out of range for glyph with {count} contours")]
    ContourOutOfRange { index: usize, count: usize },

    #[error("ill-constructed contour")]
    MalformedContour,
}
