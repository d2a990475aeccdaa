use serde::{Deserialize, Serialize};

use crate::formatting::{blocks::Block, format, taxonomy::Taxonomy};

/// Article metadata returned by the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInfo {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journalist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_elements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_structure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_flow: Option<String>,
}

/// The three raw report texts, one per audience.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reports {
    pub comprehensive: String,
    pub journalist: String,
    pub student: String,
}

impl Reports {
    pub fn get(&self, audience: Audience) -> &str {
        match audience {
            Audience::Comprehensive => &self.comprehensive,
            Audience::Journalist => &self.journalist,
            Audience::Student => &self.student,
        }
    }
}

/// Full payload of one analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub article_info: ArticleInfo,
    pub reports: Reports,
}

impl AnalysisResult {
    /// Formats every audience's report with the same taxonomy.
    pub fn format_reports(&self, taxonomy: &Taxonomy) -> FormattedReports {
        FormattedReports {
            comprehensive: format(&self.reports.comprehensive, taxonomy),
            journalist: format(&self.reports.journalist, taxonomy),
            student: format(&self.reports.student, taxonomy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// General readers.
    Comprehensive,
    /// Working journalists.
    Journalist,
    /// Students.
    Student,
}

impl Audience {
    /// Tab order.
    pub const ALL: [Audience; 3] = [
        Audience::Comprehensive,
        Audience::Journalist,
        Audience::Student,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Audience::Comprehensive => "시민을 위한 종합 리포트",
            Audience::Journalist => "기자를 위한 전문 리포트",
            Audience::Student => "학생을 위한 교육 리포트",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Audience::Comprehensive => "시민",
            Audience::Journalist => "기자",
            Audience::Student => "학생",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Audience::Comprehensive => "일반 독자가 이해하기 쉬운 언어",
            Audience::Journalist => "윤리 규범 근거와 구체적 대안 제시",
            Audience::Student => "문답식 교육 자료",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Audience::Comprehensive => 0,
            Audience::Journalist => 1,
            Audience::Student => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Formatted blocks for each audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedReports {
    pub comprehensive: Vec<Block>,
    pub journalist: Vec<Block>,
    pub student: Vec<Block>,
}

impl FormattedReports {
    pub fn get(&self, audience: Audience) -> &[Block] {
        match audience {
            Audience::Comprehensive => &self.comprehensive,
            Audience::Journalist => &self.journalist,
            Audience::Student => &self.student,
        }
    }
}
