//! The authored work experiences and projects behind the detail pages.

use crate::content::{ContentKind, ContentRecord, NarrativeField};
use crate::{FolioResult, Registry};

pub fn records() -> FolioResult<Vec<ContentRecord>> {
    let mut records = works()?;
    records.extend(projects()?);
    Ok(records)
}

/// The built-in registry.
pub fn registry() -> FolioResult<Registry> {
    Registry::new(records()?)
}

fn works() -> FolioResult<Vec<ContentRecord>> {
    let osep = ContentRecord::new(
        ContentKind::Work,
        "osep-statistician",
        "Statistician / Data Analyst – OSEP",
    )?
    .subtitle("Public Service Observatory (OSEP) | 3-Month Internship (2024) | Abidjan, Cocody")
    .description(
        "Designed the analysis plan, reporting framework, and questionnaires for the National \
         Survey on Public Service Quality (ENQSP). Conducted data analysis and visualization of \
         survey results.",
    )
    .narrative(NarrativeField::paragraph(
        "About OSEP",
        "The Public Service Observatory (OSEP) is an organization dedicated to improving public \
         service delivery in Côte d'Ivoire by collecting and analyzing data on service quality. \
         It collaborates with government entities to provide actionable insights for \
         policy-making.",
    )?)
    .narrative(NarrativeField::tasks(
        "Tasks Performed",
        [
            "Developed the analysis plan and reporting framework for the ENQSP.",
            "Designed and tested survey questionnaires to ensure data accuracy.",
            "Performed statistical analysis using R to identify trends and patterns.",
            "Created data visualizations (charts, dashboards) to present findings to stakeholders.",
        ],
    )?)
    .tags(["Survey Design", "Data Analysis", "R", "ENQSP"])
    .images(["/works/osep1.png", "/works/osep2.png"])?
    .cover("/works/osep2.png")?;

    Ok(vec![osep])
}

fn projects() -> FolioResult<Vec<ContentRecord>> {
    Ok(vec![
        project(
            "banking-churn-analysis",
            "Banking Churn Analysis",
            "Developed a Shiny app for processing and interactively visualizing banking data to \
             segment customers by churn risk.",
            &["Shiny", "R", "Data Analysis"],
            "/banque.png",
            "https://nfahh0-ben-cherif.shinyapps.io/CLIENT_DE_BANQUE/",
        )?,
        project(
            "foot-analyst",
            "Foot Analyst",
            "Built a Shiny app in R for interactive visualization of Caribbean football teams' \
             statistics, presented at a workshop for scouting insights.",
            &["R", "Shiny", "Data Visualization"],
            "/foot.png",
            "https://kaboubakarjunior2268.shinyapps.io/Foot_Analyst/",
        )?,
        project(
            "cocoaguard",
            "CocoaGuard",
            "Developed a system to predict cocoa pod diseases using CNNs and DBNs, with a voting \
             system based on three ML algorithms to enhance prediction accuracy.",
            &["TensorFlow", "Keras", "scikit-learn", "Pandas", "NumPy"],
            "/cocoaguard.png",
            "https://github.com/aboudiakiteaz12/cocoaguard",
        )?,
        project(
            "servicebot",
            "ServiceBot",
            "Created a local AI assistant based on the Deepseek model to classify user concerns \
             and handle service requests automatically.",
            &["Deepseek", "Python", "NLP", "Machine Learning"],
            "/servicebot.jpg",
            "https://github.com/aboudiakiteaz12/servicebot",
        )?,
        project(
            "govinsights",
            "GovInsights",
            "Built a Shiny app for interactive visualization of user concerns, aiding government \
             decision-makers with trends and priority identification.",
            &["Shiny", "Plotly", "ggplot2", "dplyr", "tidyverse"],
            "/govinsights.png",
            "https://github.com/aboudiakiteaz12/govinsights",
        )?,
    ])
}

fn project(
    id: &str,
    title: &str,
    description: &str,
    tags: &[&str],
    image: &str,
    link: &str,
) -> FolioResult<ContentRecord> {
    ContentRecord::new(ContentKind::Project, id, title)?
        .subtitle("Personal project")
        .description(description)
        .tags(tags.iter().copied())
        .images([image])?
        .link(link)
}
