//! Catch and miss resolution
//!
//! Each target gets exactly one verdict per tick: caught (the net's hit zone
//! is within the catch radius of its centre), missed (its right edge has left
//! the screen), or still in flight. Verdicts are collected first and the
//! list is compacted afterwards, so nothing is removed mid-scan.

use glam::Vec2;

use super::entities::{Target, TargetKind};
use crate::consts::CATCH_RADIUS;

/// Whether a hit zone at `hit_zone` catches something centred at `center`
#[inline]
pub fn catches(hit_zone: Vec2, center: Vec2, radius: f32) -> bool {
    hit_zone.distance(center) < radius
}

/// Per-target outcome for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    InFlight,
    Caught,
    Missed,
}

/// Verdict for one target; catch takes precedence over miss
pub fn judge(hit_zone: Option<Vec2>, target: &Target) -> Verdict {
    if let Some(zone) = hit_zone {
        if catches(zone, target.center(), CATCH_RADIUS) {
            return Verdict::Caught;
        }
    }
    if target.is_off_screen() {
        Verdict::Missed
    } else {
        Verdict::InFlight
    }
}

/// A caught target (where, and what it was worth)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catch {
    pub kind: TargetKind,
    pub center: Vec2,
}

/// Everything the resolver removed this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    pub catches: Vec<Catch>,
    pub missed: Vec<TargetKind>,
}

impl CollisionResult {
    /// Points banked by this tick's catches
    pub fn points(&self) -> u64 {
        self.catches.iter().map(|c| c.kind.points()).sum()
    }

    /// Missed targets that carry a penalty
    pub fn primary_misses(&self) -> u32 {
        self.missed.iter().filter(|k| k.is_primary()).count() as u32
    }

    pub fn merge(&mut self, other: CollisionResult) {
        self.catches.extend(other.catches);
        self.missed.extend(other.missed);
    }
}

/// Judge every target, then drop the caught and missed ones
pub fn resolve(hit_zone: Option<Vec2>, targets: &mut Vec<Target>) -> CollisionResult {
    let verdicts: Vec<Verdict> = targets.iter().map(|t| judge(hit_zone, t)).collect();

    let mut result = CollisionResult::default();
    for (target, verdict) in targets.iter().zip(&verdicts) {
        match verdict {
            Verdict::Caught => result.catches.push(Catch {
                kind: target.kind,
                center: target.center(),
            }),
            Verdict::Missed => result.missed.push(target.kind),
            Verdict::InFlight => {}
        }
    }

    let mut verdicts = verdicts.into_iter();
    targets.retain(|_| verdicts.next() == Some(Verdict::InFlight));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper_centred_at(id: u32, center: Vec2) -> Target {
        let kind = TargetKind::Paper;
        Target::new(id, kind, center - kind.size() / 2.0, 0.0)
    }

    #[test]
    fn test_catch_radius_scenario() {
        let zone = Vec2::new(230.0, 240.0);
        assert!(catches(zone, Vec2::new(225.0, 235.0), 30.0));
        assert!(!catches(zone, Vec2::new(300.0, 240.0), 30.0));
        // Boundary is exclusive
        assert!(!catches(zone, Vec2::new(260.0, 240.0), 30.0));
    }

    #[test]
    fn test_resolve_removes_caught_and_missed() {
        let mut targets = vec![
            paper_centred_at(1, Vec2::new(225.0, 235.0)),
            paper_centred_at(2, Vec2::new(300.0, 240.0)),
            paper_centred_at(3, Vec2::new(-20.0, 240.0)),
        ];
        let result = resolve(Some(Vec2::new(230.0, 240.0)), &mut targets);

        assert_eq!(result.catches.len(), 1);
        assert_eq!(result.points(), 10);
        assert_eq!(result.missed, vec![TargetKind::Paper]);
        assert_eq!(result.primary_misses(), 1);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].id, 2);
    }

    #[test]
    fn test_catch_wins_over_miss() {
        // Off screen and inside the hit zone at once
        let mut targets = vec![paper_centred_at(1, Vec2::new(-16.0, 100.0))];
        assert!(targets[0].is_off_screen());
        let result = resolve(Some(Vec2::new(-10.0, 100.0)), &mut targets);
        assert_eq!(result.catches.len(), 1);
        assert!(result.missed.is_empty());
        assert!(targets.is_empty());
    }

    #[test]
    fn test_no_hit_zone_only_misses() {
        let mut targets = vec![paper_centred_at(1, Vec2::new(225.0, 235.0))];
        let result = resolve(None, &mut targets);
        assert_eq!(result, CollisionResult::default());
        assert_eq!(targets.len(), 1);
    }

    #[test]
    fn test_bonus_miss_is_not_primary() {
        let kind = TargetKind::Stack;
        let mut targets = vec![Target::new(1, kind, Vec2::new(-50.0, 100.0), 0.0)];
        let result = resolve(None, &mut targets);
        assert_eq!(result.missed, vec![TargetKind::Stack]);
        assert_eq!(result.primary_misses(), 0);
    }

    #[test]
    fn test_empty_list_is_noop() {
        let mut targets = Vec::new();
        assert_eq!(resolve(Some(Vec2::ZERO), &mut targets), CollisionResult::default());
    }
}
