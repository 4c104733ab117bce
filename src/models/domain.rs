use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Student profile used for compatibility scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub gpa: f64,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(rename = "studyPreferences", default)]
    pub study_preferences: Vec<String>,
    #[serde(rename = "availableHours", default)]
    pub available_hours: Vec<String>,
    #[serde(rename = "studyGoals", default)]
    pub study_goals: Vec<String>,
}

/// Per-pair compatibility breakdown, every component in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchCriteria {
    #[serde(rename = "commonCourses")]
    pub common_courses: f64,
    #[serde(rename = "scheduleOverlap")]
    pub schedule_overlap: f64,
    #[serde(rename = "studyStyleCompatibility")]
    pub study_style_compatibility: f64,
    #[serde(rename = "academicLevel")]
    pub academic_level: f64,
    #[serde(rename = "overallCompatibility")]
    pub overall_compatibility: f64,
}

/// A candidate ranked against a target student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub student: Student,
    pub compatibility: MatchCriteria,
    #[serde(rename = "sharedCourses")]
    pub shared_courses: Vec<String>,
}

/// A suggested study group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyGroup {
    pub members: Vec<Student>,
    #[serde(rename = "averageCompatibility")]
    pub average_compatibility: f64,
    #[serde(rename = "commonCourses")]
    pub common_courses: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Individual,
    Group,
    Tutoring,
}

/// A single logged study session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    pub id: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    #[serde(rename = "groupId", default)]
    pub group_id: Option<String>,
    pub subject: String,
    /// Minutes, not validated (negative and fractional values pass through)
    pub duration: f64,
    pub date: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Nominally 1-10, not validated
    pub effectiveness: f64,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl StudySession {
    /// Calendar day (UTC) the session took place on
    pub fn day(&self) -> chrono::NaiveDate {
        self.date.date_naive()
    }
}

/// Cumulative minutes per subject, kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectDistribution {
    entries: Vec<(String, f64)>,
}

impl SubjectDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, subject: &str, minutes: f64) {
        match self.entries.iter_mut().find(|(s, _)| s == subject) {
            Some((_, total)) => *total += minutes,
            None => self.entries.push((subject.to_string(), minutes)),
        }
    }

    pub fn get(&self, subject: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(s, _)| s == subject)
            .map(|(_, minutes)| *minutes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(s, m)| (s.as_str(), *m))
    }
}

impl Serialize for SubjectDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (subject, minutes) in &self.entries {
            map.serialize_entry(subject, minutes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SubjectDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = SubjectDistribution;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of subject to minutes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut distribution = SubjectDistribution::new();
                while let Some((subject, minutes)) = access.next_entry::<String, f64>()? {
                    distribution.add(&subject, minutes);
                }
                Ok(distribution)
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}

/// Aggregated collaboration metrics for one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationMetrics {
    #[serde(rename = "totalStudyHours")]
    pub total_study_hours: f64,
    #[serde(rename = "groupSessionsAttended")]
    pub group_sessions_attended: u32,
    #[serde(rename = "tutoringSessionsReceived")]
    pub tutoring_sessions_received: u32,
    #[serde(rename = "tutoringSessionsGiven")]
    pub tutoring_sessions_given: u32,
    #[serde(rename = "averageGroupSize")]
    pub average_group_size: f64,
    #[serde(rename = "subjectDistribution")]
    pub subject_distribution: SubjectDistribution,
    #[serde(rename = "collaborationEffectiveness")]
    pub collaboration_effectiveness: f64,
    #[serde(rename = "peerRating")]
    pub peer_rating: f64,
    #[serde(rename = "streakDays")]
    pub streak_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSizePrediction {
    #[serde(rename = "recommendedSize")]
    pub recommended_size: u32,
    pub confidence: f64,
}

/// Inclusive GPA bounds used by candidate filters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GpaRange {
    pub min: f64,
    pub max: Option<f64>,
}

#[derive(Debug, Error, PartialEq)]
pub enum GpaRangeError {
    #[error("invalid GPA range '{0}', expected forms like '3.5+' or '3.0-3.5'")]
    Malformed(String),

    #[error("GPA range lower bound {min} exceeds upper bound {max}")]
    Inverted { min: f64, max: f64 },
}

impl GpaRange {
    pub fn contains(&self, gpa: f64) -> bool {
        gpa >= self.min && self.max.map_or(true, |max| gpa <= max)
    }
}

impl FromStr for GpaRange {
    type Err = GpaRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let malformed = || GpaRangeError::Malformed(s.to_string());

        if let Some(lower) = trimmed.strip_suffix('+') {
            let min = lower.trim().parse::<f64>().map_err(|_| malformed())?;
            return Ok(Self { min, max: None });
        }

        let (lower, upper) = trimmed.split_once('-').ok_or_else(malformed)?;
        let min = lower.trim().parse::<f64>().map_err(|_| malformed())?;
        let max = upper.trim().parse::<f64>().map_err(|_| malformed())?;
        if min > max {
            return Err(GpaRangeError::Inverted { min, max });
        }

        Ok(Self { min, max: Some(max) })
    }
}

impl TryFrom<String> for GpaRange {
    type Error = GpaRangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GpaRange> for String {
    fn from(range: GpaRange) -> Self {
        match range.max {
            Some(max) => format!("{}-{}", range.min, max),
            None => format!("{}+", range.min),
        }
    }
}

/// Optional candidate pre-filters applied before ranking
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchFilters {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(rename = "studyStyle", default)]
    pub study_style: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(rename = "gpaRange", default)]
    pub gpa_range: Option<GpaRange>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub common_courses: f64,
    pub schedule_overlap: f64,
    pub study_style: f64,
    pub academic_level: f64,
}

/// Tolerance when checking that weights sum to one
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("weight '{name}' must be non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("weight '{name}' must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("weights must sum to 1.0, got {sum}")]
    NotNormalized { sum: f64 },
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.common_courses + self.schedule_overlap + self.study_style + self.academic_level
    }

    /// Composite scores stay within [0, 100] only for non-negative weights summing to one
    pub fn validate(&self) -> Result<(), WeightsError> {
        let named = [
            ("common_courses", self.common_courses),
            ("schedule_overlap", self.schedule_overlap),
            ("study_style", self.study_style),
            ("academic_level", self.academic_level),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(WeightsError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { name, value });
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError::NotNormalized { sum });
        }

        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            common_courses: 0.35,
            schedule_overlap: 0.25,
            study_style: 0.25,
            academic_level: 0.15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_normalized() {
        assert!(ScoringWeights::default().validate().is_ok());
    }

    #[test]
    fn test_weights_drift_rejected() {
        let weights = ScoringWeights {
            common_courses: 0.4,
            ..ScoringWeights::default()
        };
        assert!(matches!(weights.validate(), Err(WeightsError::NotNormalized { .. })));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            common_courses: 0.7,
            academic_level: -0.2,
            ..ScoringWeights::default()
        };
        assert_eq!(
            weights.validate(),
            Err(WeightsError::Negative { name: "academic_level", value: -0.2 })
        );
    }

    #[test]
    fn test_non_finite_weight_rejected() {
        let weights = ScoringWeights {
            study_style: f64::NAN,
            ..ScoringWeights::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(matches!(err, WeightsError::NotFinite { name: "study_style", .. }));
        assert!(err.to_string().contains("finite"));

        let weights = ScoringWeights {
            schedule_overlap: f64::INFINITY,
            ..ScoringWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(WeightsError::NotFinite { name: "schedule_overlap", .. })
        ));
    }

    #[test]
    fn test_gpa_range_parsing() {
        let open: GpaRange = "3.5+".parse().unwrap();
        assert_eq!(open, GpaRange { min: 3.5, max: None });
        assert!(open.contains(3.9));
        assert!(!open.contains(3.4));

        let closed: GpaRange = "3.0-3.5".parse().unwrap();
        assert!(closed.contains(3.0));
        assert!(closed.contains(3.5));
        assert!(!closed.contains(3.6));

        assert!(matches!("abc".parse::<GpaRange>(), Err(GpaRangeError::Malformed(_))));
        assert!(matches!("3.5-3.0".parse::<GpaRange>(), Err(GpaRangeError::Inverted { .. })));
    }

    #[test]
    fn test_subject_distribution_keeps_first_seen_order() {
        let mut distribution = SubjectDistribution::new();
        distribution.add("Physics", 30.0);
        distribution.add("Calculus", 60.0);
        distribution.add("Physics", 45.5);

        let entries: Vec<_> = distribution.iter().collect();
        assert_eq!(entries, vec![("Physics", 75.5), ("Calculus", 60.0)]);

        let json = serde_json::to_string(&distribution).unwrap();
        assert_eq!(json, r#"{"Physics":75.5,"Calculus":60.0}"#);

        let back: SubjectDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, distribution);
    }

    #[test]
    fn test_session_type_wire_format() {
        let json = r#"{
            "id": "s1",
            "studentId": "st1",
            "subject": "Calc",
            "duration": 90,
            "date": "2024-03-01T10:00:00Z",
            "type": "tutoring",
            "effectiveness": 7
        }"#;
        let session: StudySession = serde_json::from_str(json).unwrap();
        assert_eq!(session.session_type, SessionType::Tutoring);
        assert_eq!(session.group_id, None);
        assert_eq!(session.day(), chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_session_duration_accepts_negative_and_fractional_minutes() {
        let session = |duration: &str| {
            format!(
                r#"{{"id":"s1","studentId":"st1","subject":"Calc","duration":{},"date":"2024-03-01T10:00:00Z","type":"group","effectiveness":5}}"#,
                duration
            )
        };

        let negative: StudySession = serde_json::from_str(&session("-30")).unwrap();
        assert_eq!(negative.duration, -30.0);

        let fractional: StudySession = serde_json::from_str(&session("45.5")).unwrap();
        assert_eq!(fractional.duration, 45.5);
    }
}
