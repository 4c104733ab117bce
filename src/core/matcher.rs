use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::{MatchCriteria, MatchFilters, RankedMatch, ScoringWeights, Student, StudyGroup};
use crate::core::{
    filters::{common_courses, matches_filters, shared_courses},
    scoring::calculate_compatibility,
};

/// Minimum mean compatibility a candidate needs against a forming group
pub const DEFAULT_ADMISSION_THRESHOLD: f64 = 70.0;

/// Default number of ranked partners returned
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Default upper bound on study group size
pub const DEFAULT_MAX_GROUP_SIZE: usize = 5;

/// Result of the filtered matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Compatibility engine - ranks partners and forms study groups
///
/// All operations are pure over the supplied slices; the matcher only
/// carries its scoring weights and group admission threshold.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    admission_threshold: f64,
}

/// Descending by overall compatibility; equal scores keep their input order
/// because callers only use stable sorts.
fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            admission_threshold: DEFAULT_ADMISSION_THRESHOLD,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn with_admission_threshold(mut self, threshold: f64) -> Self {
        self.admission_threshold = threshold;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn admission_threshold(&self) -> f64 {
        self.admission_threshold
    }

    /// Score a single pair of students
    pub fn compatibility(&self, a: &Student, b: &Student) -> MatchCriteria {
        calculate_compatibility(a, b, &self.weights)
    }

    /// Rank candidates against a target student
    ///
    /// # Arguments
    /// * `target` - The student looking for partners
    /// * `candidates` - Candidate pool; any entry sharing the target's id is skipped
    /// * `limit` - Maximum number of matches to return (0 yields nothing)
    ///
    /// # Returns
    /// Matches sorted by overall compatibility, highest first. Ties keep
    /// the candidates' input order.
    pub fn find_best_matches(
        &self,
        target: &Student,
        candidates: &[Student],
        limit: usize,
    ) -> Vec<RankedMatch> {
        self.rank(target, candidates.iter(), limit)
    }

    /// Apply search filters, then rank the remaining candidates
    pub fn find_filtered_matches(
        &self,
        target: &Student,
        candidates: &[Student],
        filters: &MatchFilters,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let filtered = candidates
            .iter()
            .filter(|candidate| matches_filters(candidate, filters));
        let matches = self.rank(target, filtered, limit);

        tracing::debug!(
            "Ranked {} of {} candidates for {}",
            matches.len(),
            total_candidates,
            target.id
        );

        MatchResult {
            matches,
            total_candidates,
        }
    }

    fn rank<'a>(
        &self,
        target: &Student,
        candidates: impl Iterator<Item = &'a Student>,
        limit: usize,
    ) -> Vec<RankedMatch> {
        if limit == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<RankedMatch> = candidates
            // Self-matching is never allowed
            .filter(|candidate| candidate.id != target.id)
            .map(|candidate| RankedMatch {
                compatibility: self.compatibility(target, candidate),
                shared_courses: shared_courses(target, candidate),
                student: candidate.clone(),
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| {
            by_score_desc(
                a.compatibility.overall_compatibility,
                b.compatibility.overall_compatibility,
            )
        });
        ranked.truncate(limit);
        ranked
    }

    /// Greedily partition students into study groups
    ///
    /// # Algorithm
    /// 1. Walk students in input order, skipping anyone already placed
    /// 2. Seed a group and rank every unplaced student against the seed
    /// 3. Admit a candidate when its mean compatibility with all current
    ///    members reaches the admission threshold, until the group is full
    /// 4. Keep groups of two or more; a lone seed stays unplaced
    ///
    /// Groups are returned by average pairwise compatibility, highest first.
    /// The partition depends on input order and is not globally optimal.
    pub fn suggest_study_groups(
        &self,
        students: &[Student],
        max_group_size: usize,
    ) -> Vec<StudyGroup> {
        let mut used: HashSet<&str> = HashSet::new();
        let mut groups: Vec<StudyGroup> = Vec::new();

        for seed in students {
            if used.contains(seed.id.as_str()) {
                continue;
            }

            let mut ranked: Vec<(&Student, f64)> = students
                .iter()
                .filter(|s| s.id != seed.id && !used.contains(s.id.as_str()))
                .map(|s| (s, self.compatibility(seed, s).overall_compatibility))
                .collect();
            ranked.sort_by(|a, b| by_score_desc(a.1, b.1));

            let mut members: Vec<&Student> = vec![seed];
            for (candidate, _) in ranked {
                if members.len() >= max_group_size {
                    break;
                }
                // Duplicate ids in the input collapse to the first admitted record
                if members.iter().any(|m| m.id == candidate.id) {
                    continue;
                }

                let mean = members
                    .iter()
                    .map(|member| self.compatibility(member, candidate).overall_compatibility)
                    .sum::<f64>()
                    / members.len() as f64;

                if mean >= self.admission_threshold {
                    members.push(candidate);
                }
            }

            if members.len() < 2 {
                tracing::trace!("Discarding single-member group seeded by {}", seed.id);
                continue;
            }

            for &member in &members {
                used.insert(member.id.as_str());
            }

            let members: Vec<Student> = members.into_iter().cloned().collect();
            groups.push(StudyGroup {
                average_compatibility: self.average_pairwise_compatibility(&members),
                common_courses: common_courses(&members),
                members,
            });
        }

        groups.sort_by(|a, b| by_score_desc(a.average_compatibility, b.average_compatibility));

        tracing::debug!("Formed {} study groups from {} students", groups.len(), students.len());
        groups
    }

    /// Mean overall compatibility across all unordered member pairs (0 below two members)
    pub fn average_pairwise_compatibility(&self, members: &[Student]) -> f64 {
        let mut total = 0.0;
        let mut pairs = 0usize;

        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                total += self.compatibility(a, b).overall_compatibility;
                pairs += 1;
            }
        }

        if pairs == 0 {
            0.0
        } else {
            total / pairs as f64
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
