use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

pub type NodeId = u32;

/// non-negative, finite edge weight. integer and fractional weights are both allowed,
/// NaN is excluded so weights are totally ordered
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Weight(f64);

/// sum of weights along a path
pub type Distance = Weight;

/// vertices are identified by their label, internally they are mapped to dense node ids in declaration order
pub type Vertex = String;

pub type NodeIds = Vec<NodeId>;
pub type Arclist = [(NodeId, Weight)];

/// tentative distance of a vertex, `None` means the vertex has not been reached (yet)
pub type TentativeDistance = Option<Distance>;

impl Weight {

    pub const ZERO: Weight = Weight(0.0);

    /// `None` for negative, infinite and NaN values
    pub fn new(value: f64) -> Option<Weight> {
        if value.is_finite() && value >= 0.0 {
            Some(Weight(value + 0.0)) // turns -0.0 into 0.0
        }
        else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weight {

    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Weight::new(value).ok_or_else(|| format!("weight {} is not a finite non-negative number", value))
    }
}

impl From<Weight> for f64 {

    fn from(weight: Weight) -> f64 {
        weight.0
    }
}

impl From<u32> for Weight {

    fn from(value: u32) -> Weight {
        Weight(f64::from(value))
    }
}

impl PartialEq for Weight {

    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {

    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {

    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialEq<f64> for Weight {

    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl Add for Weight {

    type Output = Weight;

    fn add(self, other: Weight) -> Weight {
        Weight(self.0 + other.0)
    }
}

impl Sum for Weight {

    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::ZERO, Add::add)
    }
}

impl fmt::Display for Weight {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
