//! Canned multi-day study plans.

use serde::{Deserialize, Serialize};

use super::Catalog;

pub const DEFAULT_PLAN_TOPIC: &str = "Cloud Security";
pub const DEFAULT_PLAN_DAYS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlanEntry {
    pub day: u32,
    pub topic: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub topic: String,
    pub entries: Vec<StudyPlanEntry>,
}

impl Catalog {
    /// Plan for `topic` truncated to `days`. Unknown topics get the default plan;
    /// a missing or zero day count means five days.
    pub fn study_plan(&self, topic: Option<&str>, days: Option<usize>) -> Vec<StudyPlanEntry> {
        let topic = topic.map(str::trim).filter(|t| !t.is_empty()).unwrap_or(DEFAULT_PLAN_TOPIC);
        let days = days.filter(|d| *d > 0).unwrap_or(DEFAULT_PLAN_DAYS);
        let plans = self.study_plans.list();
        let plan = plans
            .iter()
            .find(|p| p.topic.eq_ignore_ascii_case(topic))
            .or_else(|| plans.iter().find(|p| p.topic == DEFAULT_PLAN_TOPIC));
        plan.map(|p| p.entries.iter().take(days).cloned().collect())
            .unwrap_or_default()
    }
}

fn entry(day: u32, topic: &str, duration: &str, description: &str) -> StudyPlanEntry {
    StudyPlanEntry {
        day,
        topic: topic.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
    }
}

pub fn builtin_study_plans() -> Vec<StudyPlan> {
    vec![
        StudyPlan {
            topic: "Cloud Security".to_string(),
            entries: vec![
                entry(1, "Introduction to Cloud Computing", "2-3 hours", "Understand cloud fundamentals, service models (IaaS, PaaS, SaaS), and deployment models"),
                entry(2, "Cloud Security Fundamentals", "3-4 hours", "Learn about shared responsibility model, CIA triad, and cloud-specific threats"),
                entry(3, "Identity and Access Management", "2-3 hours", "Study IAM best practices, MFA, and zero-trust architecture"),
                entry(4, "Data Protection & Encryption", "3-4 hours", "Explore encryption methods, key management, and data privacy"),
                entry(5, "Security Monitoring & Compliance", "2-3 hours", "Review logging, monitoring tools, and compliance frameworks (GDPR, HIPAA)"),
            ],
        },
        StudyPlan {
            topic: "Machine Learning".to_string(),
            entries: vec![
                entry(1, "ML Fundamentals & Python Setup", "2-3 hours", "Install libraries, review linear algebra and statistics basics"),
                entry(2, "Supervised Learning Algorithms", "3-4 hours", "Study regression, classification, and model evaluation metrics"),
                entry(3, "Unsupervised Learning & Clustering", "2-3 hours", "Explore K-means, hierarchical clustering, and dimensionality reduction"),
                entry(4, "Neural Networks & Deep Learning", "3-4 hours", "Understand perceptrons, backpropagation, and CNNs"),
                entry(5, "Model Deployment & Real-world Projects", "2-3 hours", "Learn deployment strategies and work on a mini-project"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn defaults_and_truncation() {
        let c = Catalog::builtin(Utc::now());
        let plan = c.study_plan(None, None);
        assert_eq!(plan.len(), 5);
        assert_eq!(plan[0].topic, "Introduction to Cloud Computing");

        let ml = c.study_plan(Some("machine learning"), Some(3));
        assert_eq!(ml.len(), 3);
        assert_eq!(ml[2].topic, "Unsupervised Learning & Clustering");

        assert_eq!(c.study_plan(Some("Astrophysics"), Some(0)), plan);
        assert_eq!(c.study_plan(None, Some(40)).len(), 5);
    }
}
