//! Orbit trail storage
//!
//! A trail is the chronological history of a body's world-space positions.
//! Points are only ever appended. With a `Capped` policy the oldest point is
//! dropped once the capacity is reached, otherwise the trail grows without bound.

use std::collections::VecDeque;

use crate::simulation::states::NVec2;

/// How a trail treats its length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailPolicy {
    #[default]
    Unbounded,
    Capped(usize),
}

impl TrailPolicy {
    /// `None` in a scenario file means unbounded
    pub fn from_capacity(capacity: Option<usize>) -> Self {
        match capacity {
            Some(n) => TrailPolicy::Capped(n.max(1)),
            None => TrailPolicy::Unbounded,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<NVec2>,
    policy: TrailPolicy,
    pushed: u64, // total appends, survives capping
}

impl Trail {
    pub fn new(policy: TrailPolicy) -> Self {
        Self {
            points: VecDeque::new(),
            policy,
            pushed: 0,
        }
    }

    pub fn push(&mut self, p: NVec2) {
        if let TrailPolicy::Capped(cap) = self.policy {
            while self.points.len() >= cap {
                self.points.pop_front();
            }
        }
        self.points.push_back(p);
        self.pushed += 1;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points ever appended
    pub fn total_pushed(&self) -> u64 {
        self.pushed
    }

    pub fn policy(&self) -> TrailPolicy {
        self.policy
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_trail_drops_oldest() {
        let mut trail = Trail::new(TrailPolicy::Capped(3));
        for i in 0..5 {
            trail.push(NVec2::new(i as f64, 0.0));
        }
        let xs: Vec<f64> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(trail.total_pushed(), 5);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        assert_eq!(TrailPolicy::from_capacity(Some(0)), TrailPolicy::Capped(1));
        assert_eq!(TrailPolicy::from_capacity(None), TrailPolicy::Unbounded);
    }
}
