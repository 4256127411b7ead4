//! Pure record-to-markup rendering.
//!
//! Each `render_*` function turns one record into one self-contained card.
//! The `*_list` variants concatenate cards in input order. Every record
//! field is HTML-escaped before it is interpolated, in element text and in
//! attribute values alike.

use crate::models::{
    NewsItem, OpportunityRecord, PersonRecord, ProjectRecord, ResearchArea,
};

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape text for use in HTML element content or a quoted attribute value.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Render keywords as one `<span>` tag each, in order.
fn keyword_tags(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|k| format!("<span>{}</span>", escape_html(k)))
        .collect()
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

/// An optional text field, treating `""` the same as a missing value.
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

pub fn render_news_item(item: &NewsItem) -> String {
    format!(
        concat!(
            "<div class=\"news-ticker__item\">\n",
            "    <span class=\"news-ticker__date\">{date}</span>\n",
            "    <span class=\"news-ticker__text\">{text}</span>\n",
            "</div>\n",
        ),
        date = escape_html(&item.date),
        text = escape_html(&item.text),
    )
}

pub fn render_news_list(items: &[NewsItem]) -> String {
    items.iter().map(render_news_item).collect()
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

/// Render one person card. Lead cards carry `person--lead`, everyone else
/// `person--fellow`. The LinkedIn link appears only when the record has one.
pub fn render_person_card(person: &PersonRecord, is_lead: bool) -> String {
    let modifier = if is_lead { "person--lead" } else { "person--fellow" };
    let name = escape_html(&person.name);

    let linkedin = person
        .linkedin()
        .map(|url| {
            format!(
                "    <a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"person__linkedin\">LinkedIn</a>\n",
                escape_html(url)
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            "<div class=\"person {modifier} card-accent\">\n",
            "    <img src=\"{photo}\" alt=\"{name}\" class=\"person__photo\">\n",
            "    <div class=\"person__name\">{name}</div>\n",
            "    <div class=\"person__keywords\">{keywords}</div>\n",
            "{linkedin}",
            "</div>\n",
        ),
        modifier = modifier,
        photo = escape_html(&person.photo),
        name = name,
        keywords = escape_html(&person.keywords),
        linkedin = linkedin,
    )
}

pub fn render_person_list(people: &[PersonRecord], is_lead: bool) -> String {
    people
        .iter()
        .map(|person| render_person_card(person, is_lead))
        .collect()
}

// ---------------------------------------------------------------------------
// Projects and research
// ---------------------------------------------------------------------------

pub fn render_project_card(project: &ProjectRecord) -> String {
    let status = escape_html(&project.status);
    format!(
        concat!(
            "<article class=\"project-card card-accent fade-in\">\n",
            "    <div class=\"project-card__header\">\n",
            "        <h3>{title}</h3>\n",
            "        <span class=\"project-card__status project-card__status--{status}\">{status}</span>\n",
            "    </div>\n",
            "    <p>{description}</p>\n",
            "    <div class=\"project-card__keywords\">{keywords}</div>\n",
            "</article>\n",
        ),
        title = escape_html(&project.title),
        status = status,
        description = escape_html(&project.description),
        keywords = keyword_tags(&project.keywords),
    )
}

pub fn render_project_list(projects: &[ProjectRecord]) -> String {
    projects.iter().map(render_project_card).collect()
}

pub fn render_research_card(area: &ResearchArea) -> String {
    format!(
        concat!(
            "<article class=\"research-area fade-in\">\n",
            "    <h3>{title}</h3>\n",
            "    <p class=\"research-area__subtitle\">{subtitle}</p>\n",
            "    <p>{description}</p>\n",
            "    <div class=\"research-area__keywords\">{keywords}</div>\n",
            "</article>\n",
        ),
        title = escape_html(&area.title),
        subtitle = escape_html(&area.subtitle),
        description = escape_html(&area.description),
        keywords = keyword_tags(&area.keywords),
    )
}

pub fn render_research_list(areas: &[ResearchArea]) -> String {
    areas.iter().map(render_research_card).collect()
}

// ---------------------------------------------------------------------------
// Opportunities
// ---------------------------------------------------------------------------

/// Render one opportunity card.
///
/// Background, commitment, and the download link appear when present and
/// non-empty. The benefits and screening-question lists appear only when
/// present and non-empty.
pub fn render_opportunity_card(opp: &OpportunityRecord) -> String {
    let status = escape_html(&opp.status);

    let mut out = format!(
        concat!(
            "<div class=\"opportunity-card\">\n",
            "    <h3>{title} <span class=\"status-badge status-badge--{status}\">{status}</span></h3>\n",
            "    <p>{description}</p>\n",
        ),
        title = escape_html(&opp.title),
        status = status,
        description = escape_html(&opp.description),
    );

    if let Some(background) = non_empty(&opp.background) {
        out.push_str(&format!(
            "    <h4>Preferred Background</h4>\n    <p>{}</p>\n",
            escape_html(background)
        ));
    }

    if let Some(commitment) = non_empty(&opp.commitment) {
        out.push_str(&format!(
            "    <h4>Time Commitment</h4>\n    <p>{}</p>\n",
            escape_html(commitment)
        ));
    }

    if let Some(benefits) = opp.benefits.as_deref().filter(|b| !b.is_empty()) {
        out.push_str(&format!(
            "    <h4>What You&#39;ll Gain</h4>\n    <ul>{}</ul>\n",
            list_items(benefits)
        ));
    }

    if let Some(questions) = opp
        .screening_questions
        .as_deref()
        .filter(|q| !q.is_empty())
    {
        out.push_str(&format!(
            concat!(
                "    <div class=\"screening-questions\">\n",
                "        <h4>Screening Questions</h4>\n",
                "        <ol>{}</ol>\n",
                "    </div>\n",
            ),
            list_items(questions)
        ));
    }

    if let Some(file) = non_empty(&opp.download_file) {
        out.push_str(&format!(
            concat!(
                "    <div style=\"margin-top: var(--space-xl);\">\n",
                "        <a href=\"{}\" download class=\"download-btn\">Download Job Description</a>\n",
                "    </div>\n",
            ),
            escape_html(file)
        ));
    }

    out.push_str("</div>\n");
    out
}

pub fn render_opportunity_list(opportunities: &[OpportunityRecord]) -> String {
    opportunities.iter().map(render_opportunity_card).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
