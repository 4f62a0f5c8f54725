//! Response envelopes for recommendation results

use crate::rank::ScoredNeighbor;
use serde::Serialize;

/// Friend recommendations for one user
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FriendReport {
    pub user: String,
    pub recommendations: Vec<String>,
}

impl FriendReport {
    #[must_use]
    pub fn new(user: impl Into<String>, recommendations: Vec<String>) -> Self {
        Self {
            user: user.into(),
            recommendations,
        }
    }
}

/// Hobby and club suggestions for one user
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HobbyReport {
    pub user: String,
    pub hobby_club_recommendations: Vec<String>,
}

impl HobbyReport {
    #[must_use]
    pub fn new(user: impl Into<String>, hobby_club_recommendations: Vec<String>) -> Self {
        Self {
            user: user.into(),
            hobby_club_recommendations,
        }
    }
}

/// Profiles matched against an ad-hoc query vector
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchReport {
    pub matches: Vec<ScoredNeighbor>,
}

impl MatchReport {
    #[must_use]
    pub fn new(matches: Vec<ScoredNeighbor>) -> Self {
        Self { matches }
    }
}
