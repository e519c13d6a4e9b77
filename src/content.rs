//! Hand-authored site content.
//!
//! Everything here is immutable, compile-time data. The only logic is the
//! ordering and grouping applied before render: certificates, projects, and
//! experience entries are shown newest-first by descending id, and skills
//! are grouped under a fixed category order.

/// Records carrying a monotonically increasing id, newest authored last.
pub trait Numbered {
    fn id(&self) -> u32;
}

/// Render order for id-carrying records: descending by id.
pub fn newest_first<T: Numbered>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by(|a, b| b.id().cmp(&a.id()));
    items
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub id: u32,
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

impl Numbered for ExperienceEntry {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry {
    pub id: u32,
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub id: u32,
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    /// Preview image path. When absent, no preview affordance is offered.
    pub preview: Option<&'static str>,
}

impl Numbered for Certificate {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub blog_url: Option<&'static str>,
}

impl Numbered for Project {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    Software,
    Tools,
    Other,
    Soft,
}

impl SkillCategory {
    /// Categories in render order.
    pub const ALL: [Self; 5] = [
        Self::Languages,
        Self::Software,
        Self::Tools,
        Self::Other,
        Self::Soft,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Languages => "Programming Languages & Frameworks",
            Self::Software => "Software",
            Self::Tools => "Tools",
            Self::Other => "Other Skills",
            Self::Soft => "Soft Skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
}

/// Skills grouped under [`SkillCategory::ALL`] order, authored order within
/// each group.
pub fn grouped_skills() -> Vec<(SkillCategory, Vec<Skill>)> {
    let all = skills();
    SkillCategory::ALL
        .iter()
        .map(|&category| {
            let group = all
                .iter()
                .filter(|skill| skill.category == category)
                .cloned()
                .collect();
            (category, group)
        })
        .collect()
}

pub fn it_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            id: 1,
            role: "Junior Java Developer",
            company: "Intive GmbH",
            period: "2018 - 2019",
            description: "Entry-level backend developer focused on learning core Java and Spring \
                          concepts while contributing to small features and bug fixes under close \
                          mentorship.",
            achievements: &[
                "Delivered small features and bugfixes under supervision in an Agile team",
                "Participated in daily stand-ups, sprint planning, and retrospectives",
                "Collaborated with senior developers to learn best practices in software development",
                "Gained experience in RESTful API development and integration",
                "Worked with Spring Boot and Hibernate for backend development",
                "Participated in code reviews and pair programming sessions",
                "Used Jira and Git for daily workflow and communication",
            ],
        },
        ExperienceEntry {
            id: 2,
            role: "Java Developer",
            company: "Intive GmbH",
            period: "2019 - 2022",
            description: "Independent backend developer responsible for implementing and \
                          maintaining core business features in Java and Spring-based \
                          applications, collaborating closely with cross-functional teams.",
            achievements: &[
                "Responsible for end-to-end feature implementation",
                "Regular contributor to code reviews and team discussions",
                "Works independently on modules while coordinating with other teams",
                "Involved in troubleshooting production issues and debugging complex problems",
                "Mentored junior developers in day-to-day tasks and best practices",
                "Participated in Agile ceremonies and contributed to sprint planning",
                "Collaborated with cross-functional teams to deliver high-quality software",
            ],
        },
        ExperienceEntry {
            id: 3,
            role: "Senior Java Developer",
            company: "Intive GmbH",
            period: "2022 - Present",
            description: "Technical leader and backend architect driving the design of scalable \
                          Java microservices, mentoring developers, and ensuring code quality \
                          and alignment with business goals.",
            achievements: &[
                "Designed and led implementation of scalable microservice-based architecture",
                "Responsible for critical modules and system-wide technical decisions",
                "Conducted thorough code reviews and mentored multiple junior and mid-level developers",
                "Collaborated directly with Product Owners, DevOps, and QA to align tech with business goals",
                "Resolved high-priority production issues, conducted root cause analysis and implemented long-term fixes",
                "Advocated for engineering best practices, clean code and knowledge sharing in the team",
                "Participated in architecture discussions and contributed to technical roadmaps",
            ],
        },
    ]
}

pub fn marine_experience() -> Vec<ExperienceEntry> {
    vec![ExperienceEntry {
        id: 1,
        role: "Field Service Engineer",
        company: "Alphatron Marine Poland",
        period: "2013 - 2018",
        description: "Provided technical support and maintenance for marine equipment across \
                      international vessels.",
        achievements: &[
            "Led complex troubleshooting and repair operations under strict time constraints",
            "Communicated effectively with international crews using English as primary language",
            "Managed critical equipment maintenance ensuring vessel compliance with safety regulations",
            "Demonstrated strong problem-solving skills in high-pressure situations",
            "Developed documentation and reporting skills",
        ],
    }]
}

/// Day-to-day duties shared by all three Intive positions, rendered once
/// under the IT timeline.
pub fn it_scope_of_duties() -> &'static [&'static str] {
    &[
        "Design, development and maintenance of Java + Spring Boot backend applications deployed on the OpenShift environment",
        "Dividing and migrating monoliths to a microservices architecture",
        "Migrating systems to newer versions (Java 8>11>17, Spring Boot 2>3)",
        "Integrations with other systems using REST and SOAP",
        "Creating unit, integration and e2e tests (JUnit, Mockito, Pact)",
        "Taking care of code quality by doing code review and quality monitoring using SonarQube",
        "Analysis of system operation based on Prometheus, Grafana, ELK",
        "Working with Oracle and PostgreSQL databases",
        "Handling and resolving support tickets based on JIRA tickets and Confluence documentation",
        "Working with code management tools like Git and GitLab",
        "Onboarding and internal trainings for people joining the project",
        "Close cooperation with team members and the client",
    ]
}

/// Technology names bolded inside the scope-of-duties list.
pub const HIGHLIGHT_KEYWORDS: &[&str] = &[
    "Java",
    "Spring Boot",
    "OpenShift",
    "microservices architecture",
    "REST",
    "SOAP",
    "JUnit",
    "Mockito",
    "Pact",
    "code review",
    "SonarQube",
    "Prometheus",
    "Grafana",
    "ELK",
    "Oracle",
    "PostgreSQL",
    "JIRA",
    "Confluence",
    "GitLab",
    "Git",
];

/// Wrap keyword occurrences in `<strong>` markup for `inner_html` rendering.
///
/// Scans left to right; where two keywords start at the same position the
/// longer one wins, so "Git" never splits "GitLab". Matched regions are
/// consumed and never wrapped twice.
pub fn highlight_keywords(text: &str, keywords: &[&str]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let mut earliest: Option<(usize, &str)> = None;
        for keyword in keywords {
            if let Some(pos) = rest.find(keyword) {
                let better = match earliest {
                    Some((best_pos, best_kw)) => {
                        pos < best_pos || (pos == best_pos && keyword.len() > best_kw.len())
                    }
                    None => true,
                };
                if better {
                    earliest = Some((pos, keyword));
                }
            }
        }
        let Some((pos, keyword)) = earliest else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..pos]);
        out.push_str("<strong class=\"text-primary-600 dark:text-primary-400\">");
        out.push_str(keyword);
        out.push_str("</strong>");
        rest = &rest[pos + keyword.len()..];
    }
}

pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            id: 1,
            degree: "Master's degree",
            institution: "West Pomeranian University of Technology in Szczecin - Faculty of Electrical Engineering",
            period: "2012 - 2013",
            description: "Specialized in Electronics and Telecommunication",
        },
        EducationEntry {
            id: 2,
            degree: "Engineer's degree",
            institution: "West Pomeranian University of Technology in Szczecin - Faculty of Electrical Engineering",
            period: "2008 - 2012",
            description: "Specialized in Electronics and Telecommunications",
        },
        EducationEntry {
            id: 3,
            degree: "Certified Electronics Technician",
            institution: "Prof. M. T. Huber Electrical and Electronic School Complex in Szczecin (ZSEE/TME)",
            period: "2004 - 2008",
            description: "Specialized in Electronics",
        },
    ]
}

pub fn certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: 1,
            name: "Scrum master school",
            issuer: "intive - (internal training)",
            date: "2019",
            preview: None,
        },
        Certificate {
            id: 2,
            name: "Introduction to OpenShift Applications (DO101)",
            issuer: "Red Hat",
            date: "2020",
            preview: Some("/certificates/openshift_DO101.png"),
        },
        Certificate {
            id: 3,
            name: "Why hacking web applications so easy?",
            issuer: "Sekurak",
            date: "2025",
            preview: Some("/certificates/why-hacking-web-applications-so-easy.png"),
        },
        Certificate {
            id: 4,
            name: "10xDevs - Using Generative AI in Software Development (Certificate with Distinction)",
            issuer: "Przeprogramowani",
            date: "2025",
            preview: Some("/certificates/10xDevs.png"),
        },
        Certificate {
            id: 5,
            name: "Introduction to the MongoDB",
            issuer: "Udemy",
            date: "2025",
            preview: Some("/certificates/Introduction_to_the_MongoDB.png"),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "10xCards",
            description: "A tool that leverages AI to generate flashcards from text, making \
                          studying more efficient and effective.",
            image: "/projects/10xCards.gif",
            tags: &[
                "React",
                "Node.js",
                "Astro",
                "TypeScript",
                "Tailwind CSS",
                "Supabase",
                "Vitest",
                "Cloudflare",
                "GitHub Actions",
            ],
            github_url: Some("https://github.com/pBachta/10x-cards-astro"),
            live_url: Some("https://10x-cards-ab6.pages.dev"),
            blog_url: None,
        },
        Project {
            id: 2,
            title: "This Portfolio",
            description: "A personal portfolio website showcasing my skills, projects, etc. \
                          Built with Rust, Leptos, and Tailwind CSS.",
            image: "/projects/portfolio.gif",
            tags: &["Rust", "Leptos", "WebAssembly", "Tailwind CSS"],
            github_url: Some("https://github.com/pBachta/pbachta.github.io"),
            live_url: None,
            blog_url: None,
        },
    ]
}

pub fn skills() -> Vec<Skill> {
    use SkillCategory::*;
    [
        ("Java", Languages),
        ("SQL", Languages),
        ("Spring Boot", Languages),
        ("Spring Data JPA", Languages),
        ("Feign", Languages),
        ("RestTemplate", Languages),
        ("Jackson", Languages),
        ("Lombok", Languages),
        ("Swagger", Languages),
        ("And more...", Languages),
        ("IntelliJ IDEA", Software),
        ("Visual Studio Code", Software),
        ("Cursor", Software),
        ("Postman", Software),
        ("SoapUI", Software),
        ("Eclipse Memory Analyzer", Software),
        ("Docker", Software),
        ("And more...", Software),
        ("Maven", Tools),
        ("Git", Tools),
        ("GitHub Actions", Tools),
        ("CI/CD", Tools),
        ("Jira", Tools),
        ("SonarQube", Tools),
        ("OpenShift", Tools),
        ("JUnit", Tools),
        ("Mockito", Tools),
        ("And more...", Tools),
        ("Generative AI", Other),
        ("Database Design", Other),
        ("DevOps", Other),
        ("API Development", Other),
        ("System Architecture", Other),
        ("Agile Methodologies", Other),
        ("And more...", Other),
        ("Communication", Soft),
        ("Team Collaboration", Soft),
        ("Mentoring", Soft),
        ("Problem Solving", Soft),
        ("Critical Thinking", Soft),
        ("Cross-functional collaboration", Soft),
        ("Adaptability", Soft),
        ("Self-Management", Soft),
        ("And more...", Soft),
    ]
    .into_iter()
    .map(|(name, category)| Skill { name, category })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEntry {
    pub title: &'static str,
    pub content: &'static str,
    pub link: &'static str,
    /// Opens in a new tab when set (external links, not mailto).
    pub external: bool,
}

pub fn contact_entries() -> Vec<ContactEntry> {
    vec![
        ContactEntry {
            title: "Email",
            content: "pBachtaDev@gmail.com",
            link: "mailto:pBachtaDev@gmail.com",
            external: false,
        },
        ContactEntry {
            title: "Location",
            content: "Szczecin, Poland",
            link: "https://maps.google.com/?q=Szczecin,Poland",
            external: true,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon_class: &'static str,
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            label: "GitHub",
            href: "https://github.com/pBachta",
            icon_class: "devicon-github-plain",
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/paweł-bachta-9065ab125/",
            icon_class: "devicon-linkedin-plain",
        },
        SocialLink {
            label: "Email",
            href: "mailto:pBachtaDev@gmail.com",
            icon_class: "extra-email",
        },
    ]
}

/// CV documents offered for download from the hero section.
pub fn cv_downloads() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Download CV [PL]", "/cv/Pawel_Bachta_CV_PL.pdf"),
        ("Download CV [EN]", "/cv/Pawel_Bachta_CV_EN.pdf"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item(u32);

    impl Numbered for Item {
        fn id(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_newest_first_descending_by_id() {
        let sorted = newest_first(vec![Item(1), Item(2), Item(3), Item(4)]);
        assert_eq!(sorted, vec![Item(4), Item(3), Item(2), Item(1)]);
    }

    #[test]
    fn test_certificates_render_newest_first() {
        let ids: Vec<u32> = newest_first(certificates()).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_projects_render_newest_first() {
        let ids: Vec<u32> = newest_first(projects()).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_preview_affordance_only_with_asset() {
        let certs = certificates();
        let without = certs.iter().find(|c| c.id == 1).unwrap();
        assert!(without.preview.is_none());
        assert!(certs.iter().filter(|c| c.preview.is_some()).count() >= 1);
    }

    #[test]
    fn test_grouped_skills_keeps_category_order_and_entries() {
        let grouped = grouped_skills();
        let categories: Vec<SkillCategory> = grouped.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, SkillCategory::ALL.to_vec());

        let total: usize = grouped.iter().map(|(_, group)| group.len()).sum();
        assert_eq!(total, skills().len());
        for (category, group) in grouped {
            assert!(group.iter().all(|s| s.category == category));
        }
    }

    #[test]
    fn test_experience_timeline_newest_first() {
        let roles: Vec<&str> = newest_first(it_experience())
            .iter()
            .map(|e| e.role)
            .collect();
        assert_eq!(
            roles,
            vec![
                "Senior Java Developer",
                "Java Developer",
                "Junior Java Developer"
            ]
        );
    }

    #[test]
    fn test_highlight_wraps_keyword() {
        let html = highlight_keywords("Working with Oracle databases", &["Oracle"]);
        assert_eq!(
            html,
            "Working with <strong class=\"text-primary-600 dark:text-primary-400\">Oracle</strong> databases"
        );
    }

    #[test]
    fn test_highlight_prefers_longest_match_at_same_position() {
        let html = highlight_keywords("tools like Git and GitLab", &["Git", "GitLab"]);
        // "GitLab" is wrapped whole, not split into a nested "Git" wrap
        assert!(html.contains(">GitLab</strong>"));
        assert!(html.contains(">Git</strong> and"));
        assert!(!html.contains("<strong class=\"text-primary-600 dark:text-primary-400\"><strong"));
    }

    #[test]
    fn test_highlight_without_matches_is_identity() {
        let text = "Close cooperation with team members and the client";
        assert_eq!(highlight_keywords(text, HIGHLIGHT_KEYWORDS), text);
    }

    #[test]
    fn test_every_duty_highlights_cleanly() {
        for duty in it_scope_of_duties() {
            let html = highlight_keywords(duty, HIGHLIGHT_KEYWORDS);
            // Balanced markup: every open tag has a close tag
            assert_eq!(html.matches("<strong").count(), html.matches("</strong>").count());
            assert!(!html.contains("<strong class=\"text-primary-600 dark:text-primary-400\"><strong"));
        }
    }
}
