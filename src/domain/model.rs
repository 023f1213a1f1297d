use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    pub title: String,
    pub company: String,
    pub company_url: Option<String>,
    pub location: String,
    pub logo: Option<String>,
    pub gpa: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub description: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: Option<String>,
    pub description: ProjectDescription,
    pub technologies: Option<Vec<String>>,
    pub github: Option<String>,
    pub live_url: Option<String>,
}

/// A project description is authored either as one paragraph or as a list of
/// bullet points. Both shapes stay supported; the variant is resolved once at
/// parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectDescription {
    Text(String),
    Bullets(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub authors: Vec<String>,
    #[serde(deserialize_with = "deserialize_year")]
    pub year: i64,
    pub url: Option<String>,
    pub doi: Option<String>,
    pub pdf: Option<String>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub journal: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub pages: Option<String>,
    pub conference: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDoc {
    pub experiences: Vec<ExperienceRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsDoc {
    pub projects: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationsDoc {
    pub your_name: Option<String>,
    pub publications: Vec<PublicationRecord>,
}

impl PublicationsDoc {
    pub fn author_name(&self) -> &str {
        self.your_name.as_deref().unwrap_or("")
    }
}

/// Years appear in source documents both as JSON numbers and as numeric
/// strings ("2019"). Anything else fails the parse.
fn deserialize_year<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Number(i64),
        Text(String),
    }

    match YearRepr::deserialize(deserializer)? {
        YearRepr::Number(n) => Ok(n),
        YearRepr::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid year: '{}'", s))),
    }
}
