//! Procedural track generation
//!
//! The center line is a sum of two sine waves over track distance. Segments
//! are materialized at a fixed spacing, extended lazily as the car nears the
//! generated horizon, and never mutated afterwards. Because the offset is a
//! pure function of distance, extending the sequence reproduces exactly the
//! segments a from-scratch generation would yield.

use super::{CURVE_AMPLITUDE, CURVE_FREQUENCY, TRACK_WIDTH};

/// Track-space distance between consecutive segments (px)
pub const SEGMENT_SPACING: f32 = 2.0;
/// Segments appended per extension
const EXTEND_BATCH: usize = 50;
/// Keep this much track generated beyond the visible window (px)
const HORIZON_MARGIN: f32 = 200.0;

/// Lateral center-line offset at a given track distance.
pub fn center_offset(distance: f32) -> f32 {
    (distance * CURVE_FREQUENCY).sin() * CURVE_AMPLITUDE
        + (distance * CURVE_FREQUENCY * 0.5).sin() * CURVE_AMPLITUDE * 0.5
}

/// One cross-section of the lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSegment {
    /// Track-space distance of this cross-section
    pub y: f32,
    pub center_x: f32,
    pub left_edge: f32,
    pub right_edge: f32,
}

/// Append-only sequence of segments covering `[0, horizon]`
#[derive(Debug, Clone)]
pub struct Track {
    segments: Vec<TrackSegment>,
    /// Horizontal midline the curve oscillates around (half the viewport)
    mid_x: f32,
}

impl Track {
    /// Generate enough track to fill a viewport of the given size
    pub fn new(viewport_w: f32, viewport_h: f32) -> Self {
        let mut track = Self {
            segments: Vec::new(),
            mid_x: viewport_w / 2.0,
        };
        let count = (viewport_h / SEGMENT_SPACING).ceil() as usize + 100;
        track.append(count);
        track
    }

    fn append(&mut self, count: usize) {
        let start = self.segments.len();
        self.segments.reserve(count);
        for i in start..start + count {
            let y = i as f32 * SEGMENT_SPACING;
            let center_x = self.mid_x + center_offset(y);
            self.segments.push(TrackSegment {
                y,
                center_x,
                left_edge: center_x - TRACK_WIDTH / 2.0,
                right_edge: center_x + TRACK_WIDTH / 2.0,
            });
        }
    }

    /// Track px generated so far
    pub fn horizon(&self) -> f32 {
        self.segments.last().map_or(0.0, |s| s.y)
    }

    /// Extend so the window `[scroll, scroll + viewport_h]` stays behind the
    /// horizon with margin to spare
    pub fn extend_past(&mut self, scroll: f32, viewport_h: f32) {
        while scroll + viewport_h > self.horizon() - HORIZON_MARGIN {
            self.append(EXTEND_BATCH);
        }
    }

    /// Segment covering track-space `y`, if within the generated range
    pub fn segment_at(&self, y: f32) -> Option<&TrackSegment> {
        if y < 0.0 {
            return None;
        }
        self.segments.get((y / SEGMENT_SPACING) as usize)
    }

    pub fn segments(&self) -> &[TrackSegment] {
        &self.segments
    }
}
