//! Depth zoning of the orbit trails (painter's algorithm)
//!
//! Each trail sample is classified against the two star depth planes:
//!
//! ```text
//!   depth grows away from the observer  -->
//!   zone 4 | near star (3) | zone 2 | far star (1) | zone 0
//! ```
//!
//! Painting zones 0 -> 4 in order draws from the back to the front. Zones
//! 0, 2 and 4 hold plain runs of samples; zones 1 and 3 hold the bridges
//! between two consecutive samples that straddle a star's depth plane.
//! A bridge is split at the plane crossing so the star disk can be painted
//! between its two halves.

use super::eclipse::is_behind;
use super::ring::RingBuffer;
use super::states::{NVec2, NVec3, StarId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DepthZone {
    BehindBoth = 0,  // beyond the far star
    FarPlane = 1,    // bridge across the far star's plane
    Between = 2,     // between the two star planes, inclusive
    NearPlane = 3,   // bridge across the near star's plane
    InFrontOfBoth = 4, // closer than the near star
}

impl DepthZone {
    pub const ALL: [DepthZone; 5] = [
        DepthZone::BehindBoth,
        DepthZone::FarPlane,
        DepthZone::Between,
        DepthZone::NearPlane,
        DepthZone::InFrontOfBoth,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<DepthZone> {
        Self::ALL.get(i).copied()
    }

    /// Zones 1 and 3 only ever hold plane-crossing bridges
    pub fn is_bridge(self) -> bool {
        matches!(self, DepthZone::FarPlane | DepthZone::NearPlane)
    }
}

/// The two star depth planes of the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthPlanes {
    pub far: f64,
    pub near: f64,
    pub far_star: StarId,
    pub near_star: StarId,
}

impl DepthPlanes {
    /// Planes from the stars' current depths and radii, indexed by
    /// `StarId::index`. Ties are broken as in the eclipse, see `is_behind`.
    pub fn new(depths: [f64; 2], radii: [f64; 2]) -> Self {
        let far_star = if is_behind(depths[0], radii[0], depths[1], radii[1]) {
            StarId::Primary
        } else {
            StarId::Secondary
        };
        let near_star = far_star.other();
        Self {
            far: depths[far_star.index()],
            near: depths[near_star.index()],
            far_star,
            near_star,
        }
    }

    /// Run zone (0, 2 or 4) of a sample at depth `z`
    pub fn classify(&self, z: f64) -> DepthZone {
        if z > self.far {
            DepthZone::BehindBoth
        } else if z < self.near {
            DepthZone::InFrontOfBoth
        } else {
            DepthZone::Between
        }
    }

    /// Depth and owning star of a bridge zone's plane, `None` for run zones
    fn plane(&self, zone: DepthZone) -> Option<(f64, StarId)> {
        if !zone.is_bridge() {
            return None;
        }
        Some(if zone == DepthZone::FarPlane {
            (self.far, self.far_star)
        } else {
            (self.near, self.near_star)
        })
    }
}

/// A drawable piece of one star's trail: samples `start..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailSegment {
    pub zone: DepthZone,
    pub star: StarId,
    pub start: usize,
    pub end: usize,
}

/// One paint instruction, to be executed in list order
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    /// Polyline in image (x, y), styled as `star`'s trail
    Stroke { star: StarId, points: Vec<NVec2> },
    /// Filled disk of `star` at its current image position
    Disk { star: StarId },
}

/// Sky-plane point where the step `p1 -> p2` crosses depth `depth`
pub fn crossing_point(p1: &NVec3, p2: &NVec3, depth: f64) -> NVec2 {
    let ratio = (depth - p1.z) / (p2.z - p1.z);
    NVec2::new(p1.x + (p2.x - p1.x) * ratio, p1.y + (p2.y - p1.y) * ratio)
}

/// Scan state: zone of the open run and the index it started at
struct Run {
    zone: DepthZone,
    start: usize,
}

/// Zone every sample of both trails and emit the segments, grouped by zone
/// ascending and in chronological order within a zone
pub fn resolve_segments(trails: [&RingBuffer<NVec3>; 2], planes: &DepthPlanes) -> Vec<TrailSegment> {
    let mut by_zone: [Vec<TrailSegment>; 5] = Default::default();

    for star in StarId::BOTH {
        let trail = trails[star.index()];
        let mut run: Option<Run> = None;

        for (tick, sample) in trail.iter().enumerate() {
            let zone = planes.classify(sample.z);
            let Some(open) = run.as_ref() else {
                run = Some(Run { zone, start: tick });
                continue;
            };
            if zone == open.zone {
                continue;
            }

            if open.start < tick - 1 {
                by_zone[open.zone.index()].push(TrailSegment { zone: open.zone, star, start: open.start, end: tick - 1 });
            }
            for bridge in bridges(open.zone, zone) {
                by_zone[bridge.index()].push(TrailSegment { zone: bridge, star, start: tick - 1, end: tick });
            }
            run = Some(Run { zone, start: tick });
        }

        if let Some(open) = run {
            let last = trail.len() - 1;
            if open.start < last {
                by_zone[open.zone.index()].push(TrailSegment { zone: open.zone, star, start: open.start, end: last });
            }
        }
    }

    by_zone.into_iter().flatten().collect()
}

/// Bridges for a run-zone change: the midpoint zone, or both plane zones
/// when the step jumps straight across both stars
fn bridges(from: DepthZone, to: DepthZone) -> Vec<DepthZone> {
    let (lo, hi) = (from.index().min(to.index()), from.index().max(to.index()));
    if hi - lo == 4 {
        return vec![DepthZone::FarPlane, DepthZone::NearPlane];
    }
    DepthZone::from_index((lo + hi) / 2).into_iter().collect()
}

fn xy(p: &NVec3) -> NVec2 {
    NVec2::new(p.x, p.y)
}

/// Paint list for both trails and both star disks. Executing the list in
/// order reproduces the occlusion of the trails by the opaque disks.
pub fn paint_order(trails: [&RingBuffer<NVec3>; 2], planes: &DepthPlanes) -> Vec<PaintOp> {
    let segments = resolve_segments(trails, planes);
    let mut ops = Vec::with_capacity(segments.len() + 2);

    for zone in DepthZone::ALL {
        let in_zone = segments.iter().filter(|s| s.zone == zone);

        let Some((depth, disk_star)) = planes.plane(zone) else {
            for seg in in_zone {
                let trail = trails[seg.star.index()];
                let points = (seg.start..=seg.end).filter_map(|i| trail.get(i)).map(xy).collect();
                ops.push(PaintOp::Stroke { star: seg.star, points });
            }
            continue;
        };

        // split every bridge into the half behind the plane and the half in front
        let mut behind = Vec::new();
        let mut in_front = Vec::new();
        for seg in in_zone {
            let trail = trails[seg.star.index()];
            let (Some(p1), Some(p2)) = (trail.get(seg.start), trail.get(seg.end)) else {
                continue;
            };
            let (back, front) = if p1.z > p2.z { (p1, p2) } else { (p2, p1) };
            let cross = crossing_point(p1, p2, depth);

            match zone {
                DepthZone::FarPlane => {
                    behind.push(PaintOp::Stroke { star: seg.star, points: vec![xy(back), cross] });
                    // clip at the near plane when the step also passes in front of it
                    let end = if front.z < planes.near { crossing_point(p1, p2, planes.near) } else { xy(front) };
                    in_front.push(PaintOp::Stroke { star: seg.star, points: vec![cross, end] });
                }
                _ => {
                    // the middle piece of a double crossing is drawn by its far-plane bridge
                    if back.z <= planes.far {
                        behind.push(PaintOp::Stroke { star: seg.star, points: vec![xy(back), cross] });
                    }
                    in_front.push(PaintOp::Stroke { star: seg.star, points: vec![cross, xy(front)] });
                }
            }
        }

        ops.extend(behind);
        ops.push(PaintOp::Disk { star: disk_star });
        ops.extend(in_front);
    }

    ops
}
