//! Collision bookkeeping keyed by unordered tag pairs.

use std::collections::HashMap;

use crate::body::BodyTag;
use crate::vec2::{midpoint, Vec2};

/// Unordered pair of body tags. `TagPair::new(a, b) == TagPair::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagPair(BodyTag, BodyTag);

impl TagPair {
    pub fn new(a: BodyTag, b: BodyTag) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn contains(self, tag: BodyTag) -> bool {
        self.0 == tag || self.1 == tag
    }

    /// The member that is not `tag`, if `tag` is part of the pair.
    pub fn other(self, tag: BodyTag) -> Option<BodyTag> {
        if self.0 == tag {
            Some(self.1)
        } else if self.1 == tag {
            Some(self.0)
        } else {
            None
        }
    }
}

/// Approximate world-space contact point for a pair of bodies given their
/// origins. The ball is small, so its centre stands in for the contact;
/// otherwise the midpoint of the two origins is used.
pub fn approximate_contact(a: BodyTag, a_pos: Vec2, b: BodyTag, b_pos: Vec2) -> Vec2 {
    if a == BodyTag::Ball {
        a_pos
    } else if b == BodyTag::Ball {
        b_pos
    } else {
        midpoint(a_pos, b_pos)
    }
}

/// Contacts currently touching, plus the contacts that began during the
/// current physics step. Values are approximate world-space contact points.
#[derive(Debug, Default, Clone)]
pub struct CollisionLedger {
    active: HashMap<TagPair, Vec2>,
    step: HashMap<TagPair, Vec2>,
}

impl CollisionLedger {
    /// Forget the previous step's contacts. Active contacts persist.
    pub fn begin_step(&mut self) {
        self.step.clear();
    }

    pub fn begin_contact(&mut self, a: BodyTag, b: BodyTag, point: Vec2) {
        let pair = TagPair::new(a, b);
        self.active.insert(pair, point);
        self.step.insert(pair, point);
    }

    /// Returns the last contact point if the pair was touching.
    pub fn end_contact(&mut self, a: BodyTag, b: BodyTag) -> Option<Vec2> {
        self.active.remove(&TagPair::new(a, b))
    }

    /// Drop every active contact involving `tag`, e.g. when the body is
    /// removed from the world before the engine reports the separation.
    pub fn forget(&mut self, tag: BodyTag) {
        self.active.retain(|pair, _| !pair.contains(tag));
    }

    pub fn is_touching(&self, a: BodyTag, b: BodyTag) -> bool {
        self.active.contains_key(&TagPair::new(a, b))
    }

    pub fn touched_this_step(&self, a: BodyTag, b: BodyTag) -> Option<Vec2> {
        self.step.get(&TagPair::new(a, b)).copied()
    }

    pub fn active(&self) -> impl Iterator<Item = (TagPair, Vec2)> + '_ {
        self.active.iter().map(|(k, v)| (*k, *v))
    }

    pub fn this_step(&self) -> impl Iterator<Item = (TagPair, Vec2)> + '_ {
        self.step.iter().map(|(k, v)| (*k, *v))
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn step_len(&self) -> usize {
        self.step.len()
    }
}
