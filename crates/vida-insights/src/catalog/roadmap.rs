use super::domain::{ArticleId, Audience, Catalog};
use serde::Serialize;

/// Ordered learning path for one audience.
#[derive(Debug, Clone, Copy)]
pub struct LearningPath {
    pub audience: Audience,
    pub title: &'static str,
    pub description: &'static str,
    pub steps: &'static [&'static str],
}

const LEARNING_PATHS: [LearningPath; 5] = [
    LearningPath {
        audience: Audience::All,
        title: "Foundations",
        description: "Essential knowledge for everyone. Start here.",
        steps: &["8", "9", "1", "7", "5", "10"],
    },
    LearningPath {
        audience: Audience::Student,
        title: "Student Path",
        description: "Protect your social media, grades, and future career.",
        steps: &["8", "5", "1", "7"],
    },
    LearningPath {
        audience: Audience::Parent,
        title: "Parent Path",
        description: "Keep your family safe and guide your kids online.",
        steps: &["8", "3", "11", "10"],
    },
    LearningPath {
        audience: Audience::Business,
        title: "Business Path",
        description: "Secure your revenue, data, and reputation.",
        steps: &["8", "6", "2", "5"],
    },
    LearningPath {
        audience: Audience::Educator,
        title: "Educator Path",
        description: "Resources and curriculum for the digital classroom.",
        steps: &["8", "4", "5", "1"],
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapStep {
    pub position: usize,
    pub article_id: ArticleId,
    pub title: String,
    pub read_time_minutes: u16,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapPathView {
    pub audience: Audience,
    pub title: &'static str,
    pub description: &'static str,
    pub steps: Vec<RoadmapStep>,
}

pub struct Roadmap;

impl Roadmap {
    pub fn paths() -> &'static [LearningPath] {
        &LEARNING_PATHS
    }

    pub fn path_for(audience: Audience) -> Option<&'static LearningPath> {
        Self::paths().iter().find(|path| path.audience == audience)
    }

    /// Every path with its steps bound to catalog articles. Steps pointing at
    /// articles missing from the catalog are left out and numbering stays
    /// contiguous.
    pub fn resolve(catalog: &Catalog) -> Vec<RoadmapPathView> {
        Self::paths()
            .iter()
            .map(|path| path.resolve(catalog))
            .collect()
    }
}

impl LearningPath {
    pub fn resolve(&self, catalog: &Catalog) -> RoadmapPathView {
        let steps = self
            .steps
            .iter()
            .filter_map(|id| catalog.get(&ArticleId::from(*id)))
            .enumerate()
            .map(|(index, article)| RoadmapStep {
                position: index + 1,
                article_id: article.id.clone(),
                title: article.title.clone(),
                read_time_minutes: article.read_time_minutes,
                summary: article.summary.clone(),
            })
            .collect();

        RoadmapPathView {
            audience: self.audience,
            title: self.title,
            description: self.description,
            steps,
        }
    }
}
