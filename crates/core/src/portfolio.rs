//! Literal content for the home page sections.
//!
//! None of this is looked up by id; sections render these arrays as they are.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub cv_path: &'static str,
    pub portrait: &'static str,
    /// Technology chips shown under the call-to-action buttons.
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub title: &'static str,
    pub period: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactCta {
    pub heading: &'static str,
    pub text: &'static str,
    pub email: &'static str,
}

/// Everything the home page shows apart from the registry cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub brand_prefix: &'static str,
    pub brand_name: &'static str,
    pub hero: Hero,
    pub about: &'static str,
    pub works_intro: &'static str,
    pub projects_intro: &'static str,
    pub education: &'static [EducationEntry],
    pub skills: &'static [SkillGroup],
    pub socials: &'static [SocialLink],
    pub contact: ContactCta,
    pub credits: &'static str,
    pub owner: &'static str,
}

const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        title: "Master in Data Science (Ongoing)",
        period: "2023 - 2025",
        institution: "Université Félix Houphouët Boigny, Cocody, Abidjan",
        description: "Specializing in statistics, programming, and AI.",
    },
    EducationEntry {
        title: "Master in Financial Engineering",
        period: "2022 - 2024",
        institution: "Institut Supérieur de Mécanique de Paris (ISM Paris)",
        description: "Focused on financial modeling and data analysis.",
    },
    EducationEntry {
        title: "Bachelor in Economic Statistics",
        period: "2019 - 2022",
        institution: "UNISAT, Cocody, Abidjan",
        description: "Foundation in economics and statistical analysis.",
    },
];

const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Programming",
        skills: &[
            "Python",
            "R",
            "Shiny",
            "SQL",
            "Pandas",
            "Tensorflow",
            "Keras",
            "Scikit-learn",
            "Numpy",
            "NLTK",
            "SpacY",
            "dplyr",
            "tidyverse",
        ],
    },
    SkillGroup {
        category: "Data Visualization",
        skills: &[
            "Tableau",
            "Power BI",
            "Shiny",
            "Excel",
            "Matplotlib",
            "Seaborn",
            "Plotly",
            "ggplot2",
        ],
    },
    SkillGroup {
        category: "Statistics & Tools",
        skills: &[
            "Stata",
            "Eviews",
            "Word",
            "PowerPoint",
            "FlaskApi",
            "Random Forest",
            "Logistic Regression",
            "SVM",
            "NLP",
        ],
    },
];

const SOCIALS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/zkr56",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/abou-diakite-9996b0330/",
    },
    SocialLink {
        label: "Email",
        url: "mailto:aboudiakiteaz12@gmail.com",
    },
];

const TECHNOLOGIES: &[&str] = &[
    "Python",
    "R",
    "Shiny",
    "SQL",
    "Tableau",
    "Power BI",
    "Scala",
    "Eviews",
    "Pandas",
    "Tensorflow",
    "Keras",
    "Scikit-learn",
    "Numpy",
    "NLTK",
    "SpacY",
    "Matplotlib",
    "Seaborn",
    "Plotly",
    "ggplot2",
    "dplyr",
    "tidyverse",
];

/// The site owner's profile.
pub fn profile() -> Profile {
    Profile {
        brand_prefix: "My",
        brand_name: "Portfolio",
        hero: Hero {
            badge: "STUDENT DATA SCIENTIST",
            headline: "Serious. Analytical.",
            headline_accent: "Computer Engineer.",
            name: "Abou Diakite",
            tagline: "Student IT professional",
            cv_path: "/cvAbou.pdf",
            portrait: "/abouprofiles.jpg",
            technologies: TECHNOLOGIES,
        },
        about: "I’m Abou Diakite, a dedicated IT student currently pursuing a Master’s in Data \
                Science. With a strong foundation in statistics, programming, and artificial \
                intelligence, I approach challenges with a serious and analytical mindset. I \
                thrive in collaborative environments, bringing an open-minded attitude and a \
                passion for continuous learning. Beyond tech, I enjoy manga, basketball, and \
                football, which keep me inspired and grounded.",
        works_intro: "A selection of my hands-on experience, problem-solving abilities, and \
                      passion for learning.",
        projects_intro: "A selection of my most recent projects",
        education: EDUCATION,
        skills: SKILLS,
        socials: SOCIALS,
        contact: ContactCta {
            heading: "Interested in a collaboration?",
            text: "I am currently available for internships or exciting data science \
                   opportunities.",
            email: "aboudiakiteaz12@gmail.com",
        },
        credits: "Created by Marc Kassi",
        owner: "Abou Diakite",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_groups_keep_declared_order() {
        let profile = profile();
        let categories: Vec<&str> = profile.skills.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec!["Programming", "Data Visualization", "Statistics & Tools"]
        );
        assert_eq!(profile.skills[0].skills.first(), Some(&"Python"));
    }

    #[test]
    fn education_is_most_recent_first() {
        let periods: Vec<&str> = profile().education.iter().map(|e| e.period).collect();
        assert_eq!(periods, vec!["2023 - 2025", "2022 - 2024", "2019 - 2022"]);
    }
}
