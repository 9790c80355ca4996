//! Static seed for the content store.
//!
//! The data here is the single source of truth for every section renderer.
//! It is hand-written, read-only, and built exactly once per process.

use std::sync::OnceLock;

use super::*;

static STORE: OnceLock<ContentStore> = OnceLock::new();

/// Global accessor for the content store. Seeded on first call.
pub fn store() -> &'static ContentStore {
    STORE.get_or_init(seed)
}

fn seed() -> ContentStore {
    ContentStore {
        profile: profile(),
        summary: summary(),
        statistics: statistics(),
        experience: experience(),
        skills: skills(),
        core_competencies: core_competencies(),
        projects: projects(),
        certifications: certifications(),
        education: education(),
        contact: contact(),
        footer: footer(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Lay Been Tan".into(),
        title: "Senior Program Manager | Vulnerability Management Expert".into(),
        location: "Ottawa, ON Canada".into(),
        email: "laybeentan@yahoo.com".into(),
        linkedin: "https://www.linkedin.com/in/lay-been-tan-1262502".into(),
        years_experience: 31,
        current_company: "Nokia".into(),
        specialization: "Vulnerability Management for Telecommunications".into(),
        tagline: "Leading critical vulnerability management initiatives across \
                  Nokia's global telecommunications infrastructure. Specialized in \
                  securing enterprise-level telecom products with proven expertise \
                  in risk assessment and remediation strategies."
            .into(),
    }
}

fn summary() -> ProfessionalSummary {
    ProfessionalSummary {
        overview: "A seasoned telecommunications professional with over three \
                   decades of experience in program management, specializing in \
                   vulnerability management and security initiatives across \
                   enterprise-level telecom infrastructure."
            .into(),
        paragraphs: vec![
            "As a Senior Program Manager at Nokia, I lead critical vulnerability \
             management initiatives that protect telecommunications infrastructure \
             serving millions of users worldwide. My expertise spans across multiple \
             domains including Ethernet, GSM, and SIP technologies."
                .into(),
            "With a distinguished career beginning at Newbridge Networks Corporation \
             in 1994, I've witnessed and contributed to the evolution of \
             telecommunications technology. My role encompasses strategic planning, \
             risk assessment, cross-functional team leadership, and the \
             implementation of comprehensive security frameworks."
                .into(),
            "My approach combines technical depth with strategic vision, ensuring \
             that vulnerability management processes not only address current \
             threats but also anticipate future challenges in the rapidly evolving \
             telecommunications landscape."
                .into(),
        ],
        strengths: vec![
            Strength {
                icon: IconTag::Idea,
                title: "Quick Learner".into(),
                description: "Rapidly adapts to new technologies and evolving \
                              security landscapes in telecommunications"
                    .into(),
            },
            Strength {
                icon: IconTag::Target,
                title: "Dedicated Professional".into(),
                description: "Consistently delivers high-quality results with \
                              unwavering commitment to excellence"
                    .into(),
            },
            Strength {
                icon: IconTag::Users,
                title: "Independent Worker".into(),
                description: "Effectively manages complex projects with minimal \
                              supervision while maintaining high standards"
                    .into(),
            },
        ],
        expertise: vec![
            "Vulnerability Management & Risk Assessment".into(),
            "Telecommunications Security Frameworks".into(),
            "Program & Project Leadership".into(),
            "Cross-functional Team Management".into(),
            "5G Network Security Compliance".into(),
        ],
    }
}

fn statistics() -> Statistics {
    Statistics {
        years_experience: 31,
        years_at_current: 15,
        projects_managed: 100,
        security_domains: 5,
        team_size_managed: 25,
        budget_managed: "$2.5M+".into(),
    }
}

fn experience() -> Vec<ExperienceEntry> {
    // Newest first. Order is significant for rendering only.
    vec![
        ExperienceEntry {
            company: "Nokia".into(),
            role: "Senior Program Manager".into(),
            period: Period {
                start: "January 2010".into(),
                end: None,
            },
            years: "15 years".into(),
            location: "Ottawa, Canada".into(),
            kind: "Current Role".into(),
            description: "Lead comprehensive vulnerability management programs for \
                          Nokia's telecommunications portfolio, overseeing security \
                          initiatives across multiple product lines and ensuring \
                          compliance with international security standards."
                .into(),
            achievements: vec![
                "Established enterprise-wide vulnerability assessment frameworks \
                 reducing security incidents by 40%"
                    .into(),
                "Managed cross-functional teams of 25+ engineers across multiple \
                 time zones"
                    .into(),
                "Implemented automated vulnerability scanning processes increasing \
                 detection efficiency by 60%"
                    .into(),
                "Led security compliance initiatives for 5G network infrastructure \
                 deployments"
                    .into(),
            ],
            technologies: vec![
                "Vulnerability Management".into(),
                "Risk Assessment".into(),
                "Security Frameworks".into(),
                "5G Security".into(),
                "Compliance Management".into(),
            ],
        },
        ExperienceEntry {
            company: "Nokia".into(),
            role: "Technical Project Manager".into(),
            period: Period {
                start: "2006".into(),
                end: Some("2010".into()),
            },
            years: "4 years".into(),
            location: "Ottawa, Canada".into(),
            kind: "Previous Role".into(),
            description: "Managed technical projects focused on telecommunications \
                          infrastructure development, coordinating between \
                          engineering teams and ensuring project deliverables met \
                          quality and timeline requirements."
                .into(),
            achievements: vec![
                "Successfully delivered 15+ critical telecom infrastructure \
                 projects on time and within budget"
                    .into(),
                "Introduced agile project management methodologies improving team \
                 productivity by 35%"
                    .into(),
                "Coordinated with international teams across North America and \
                 Europe"
                    .into(),
                "Established quality assurance processes that reduced \
                 post-deployment issues by 50%"
                    .into(),
            ],
            technologies: vec![
                "Project Management".into(),
                "Agile Methodologies".into(),
                "Quality Assurance".into(),
                "Team Leadership".into(),
                "Process Improvement".into(),
            ],
        },
        ExperienceEntry {
            company: "Nokia".into(),
            role: "Technical Project Manager".into(),
            period: Period {
                start: "1994".into(),
                end: Some("2006".into()),
            },
            years: "12 years".into(),
            location: "Ottawa, Canada".into(),
            kind: "Foundation Role".into(),
            description: "Started career managing technical projects in \
                          telecommunications, developing expertise in GSM, Ethernet, \
                          and SIP technologies while building strong foundation in \
                          project management and team leadership."
                .into(),
            achievements: vec![
                "Managed migration projects from legacy systems to modern telecom \
                 infrastructure"
                    .into(),
                "Developed standardized project management processes adopted \
                 company-wide"
                    .into(),
                "Led technical training programs for junior project managers".into(),
                "Maintained 98% project success rate across diverse technical \
                 initiatives"
                    .into(),
            ],
            technologies: vec![
                "GSM".into(),
                "Ethernet".into(),
                "SIP".into(),
                "Legacy System Migration".into(),
                "Technical Training".into(),
                "Process Development".into(),
            ],
        },
        ExperienceEntry {
            company: "Alcatel Canada".into(),
            role: "Software Development Engineering Manager".into(),
            period: Period {
                start: "2000".into(),
                end: Some("2006".into()),
            },
            years: "6 years".into(),
            location: "Canada".into(),
            kind: "Leadership Role".into(),
            description: "Led software development engineering teams, overseeing \
                          the design and implementation of telecommunications \
                          software solutions while managing engineering resources \
                          and project timelines."
                .into(),
            achievements: vec![
                "Managed engineering teams developing next-generation telecom \
                 software platforms"
                    .into(),
                "Implemented software development lifecycle improvements reducing \
                 time-to-market by 25%"
                    .into(),
                "Established quality metrics and testing frameworks for software \
                 products"
                    .into(),
                "Mentored 20+ junior engineers in software development best \
                 practices"
                    .into(),
            ],
            technologies: vec![
                "Software Engineering".into(),
                "Team Management".into(),
                "SDLC".into(),
                "Quality Metrics".into(),
                "Mentoring".into(),
                "Product Development".into(),
            ],
        },
        ExperienceEntry {
            company: "Newbridge Networks Corporation".into(),
            role: "Software Design Manager".into(),
            period: Period {
                start: "1994".into(),
                end: Some("2000".into()),
            },
            years: "6 years".into(),
            location: "Canada".into(),
            kind: "Career Start".into(),
            description: "Beginning of telecommunications career, managing software \
                          design projects and building foundational expertise in \
                          network technologies and software development management."
                .into(),
            achievements: vec![
                "Led design of innovative network software solutions for \
                 enterprise clients"
                    .into(),
                "Established design review processes improving software quality \
                 and reliability"
                    .into(),
                "Collaborated with hardware teams on integrated network solutions"
                    .into(),
                "Built expertise in networking protocols and telecommunications \
                 standards"
                    .into(),
            ],
            technologies: vec![
                "Network Software Design".into(),
                "Software Architecture".into(),
                "Design Reviews".into(),
                "Hardware Integration".into(),
                "Networking Protocols".into(),
            ],
        },
    ]
}

fn skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            icon: IconTag::Shield,
            title: "Vulnerability Management".into(),
            skills: vec![
                Skill { name: "Risk Assessment".into(), proficiency: 95 },
                Skill { name: "Security Frameworks".into(), proficiency: 90 },
                Skill { name: "Threat Analysis".into(), proficiency: 92 },
                Skill { name: "Compliance Management".into(), proficiency: 88 },
                Skill { name: "Incident Response".into(), proficiency: 85 },
            ],
        },
        SkillCategory {
            icon: IconTag::Network,
            title: "Telecommunications".into(),
            skills: vec![
                Skill { name: "Ethernet".into(), proficiency: 95 },
                Skill { name: "GSM".into(), proficiency: 92 },
                Skill { name: "SIP".into(), proficiency: 90 },
                Skill { name: "5G Infrastructure".into(), proficiency: 85 },
                Skill { name: "Network Architecture".into(), proficiency: 88 },
            ],
        },
        SkillCategory {
            icon: IconTag::Users,
            title: "Project Management".into(),
            skills: vec![
                Skill { name: "Agile Methodologies".into(), proficiency: 92 },
                Skill { name: "Team Leadership".into(), proficiency: 95 },
                Skill { name: "Stakeholder Management".into(), proficiency: 90 },
                Skill { name: "Resource Planning".into(), proficiency: 88 },
                Skill { name: "Quality Assurance".into(), proficiency: 90 },
            ],
        },
        SkillCategory {
            icon: IconTag::Gear,
            title: "Technical Leadership".into(),
            skills: vec![
                Skill { name: "Software Engineering".into(), proficiency: 85 },
                Skill { name: "System Architecture".into(), proficiency: 82 },
                Skill { name: "Process Improvement".into(), proficiency: 92 },
                Skill { name: "Technical Mentoring".into(), proficiency: 88 },
                Skill { name: "Innovation Management".into(), proficiency: 85 },
            ],
        },
    ]
}

fn core_competencies() -> Vec<String> {
    [
        "Strategic Planning",
        "Cross-functional Leadership",
        "Risk Mitigation",
        "Security Architecture",
        "Vendor Management",
        "Budget Management",
        "Process Optimization",
        "Quality Systems",
        "International Projects",
        "Technology Innovation",
        "Team Building",
        "Client Relations",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            icon: IconTag::Shield,
            title: "Enterprise Vulnerability Management Framework".into(),
            category: "Security Infrastructure".into(),
            status: "Completed".into(),
            duration: "2022 - 2024".into(),
            description: "Led the design and implementation of a comprehensive \
                          vulnerability management framework across Nokia's global \
                          telecommunications infrastructure, covering 500+ network \
                          components and serving millions of users."
                .into(),
            challenges: vec![
                "Integrating disparate legacy security systems across multiple \
                 product lines"
                    .into(),
                "Establishing unified vulnerability assessment standards for \
                 global teams"
                    .into(),
                "Ensuring minimal disruption to ongoing telecommunications services"
                    .into(),
            ],
            solutions: vec![
                "Developed phased migration strategy reducing system downtime by 85%"
                    .into(),
                "Created automated vulnerability scanning protocols increasing \
                 detection speed by 60%"
                    .into(),
                "Established cross-regional security review boards ensuring \
                 consistent standards"
                    .into(),
            ],
            impact: vec![
                "40% reduction in critical security incidents across the portfolio"
                    .into(),
                "Improved compliance ratings from regulatory bodies by 35%".into(),
                "Enhanced threat response time from 48 hours to 6 hours average"
                    .into(),
            ],
            technologies: vec![
                "Vulnerability Scanning".into(),
                "Risk Assessment".into(),
                "Compliance Frameworks".into(),
                "Automation Tools".into(),
                "Security Analytics".into(),
            ],
            metrics: vec![
                Metric { key: "budget".into(), value: "$2.5M".into() },
                Metric { key: "teamSize".into(), value: "25+ Engineers".into() },
                Metric { key: "timeline".into(), value: "24 Months".into() },
                Metric { key: "coverage".into(), value: "500+ Components".into() },
            ],
        },
        ProjectEntry {
            icon: IconTag::Network,
            title: "5G Network Security Compliance Initiative".into(),
            category: "Network Infrastructure".into(),
            status: "Ongoing".into(),
            duration: "2023 - Present".into(),
            description: "Spearheading security compliance efforts for Nokia's 5G \
                          network infrastructure deployment, ensuring adherence to \
                          international security standards and regulatory \
                          requirements across North American markets."
                .into(),
            challenges: vec![
                "Navigating complex international security regulations for 5G \
                 deployment"
                    .into(),
                "Coordinating security assessments across multiple vendor \
                 partnerships"
                    .into(),
                "Balancing security requirements with performance optimization needs"
                    .into(),
            ],
            solutions: vec![
                "Established comprehensive security assessment protocols for 5G \
                 components"
                    .into(),
                "Created vendor security certification program reducing evaluation \
                 time by 50%"
                    .into(),
                "Implemented continuous monitoring systems for real-time compliance \
                 tracking"
                    .into(),
            ],
            impact: vec![
                "Successfully achieved security certification for 12 major 5G \
                 deployments"
                    .into(),
                "Reduced regulatory approval timeline by 30% through proactive \
                 compliance"
                    .into(),
                "Established Nokia as industry leader in 5G security best practices"
                    .into(),
            ],
            technologies: vec![
                "5G Security".into(),
                "Regulatory Compliance".into(),
                "Vendor Management".into(),
                "Continuous Monitoring".into(),
                "Risk Analysis".into(),
            ],
            metrics: vec![
                Metric { key: "budget".into(), value: "$1.8M".into() },
                Metric { key: "teamSize".into(), value: "18 Specialists".into() },
                Metric { key: "timeline".into(), value: "Ongoing".into() },
                Metric { key: "coverage".into(), value: "12 Deployments".into() },
            ],
        },
        ProjectEntry {
            icon: IconTag::Trend,
            title: "Legacy System Modernization Program".into(),
            category: "Infrastructure Transformation".into(),
            status: "Completed".into(),
            duration: "2020 - 2022".into(),
            description: "Managed the strategic modernization of legacy \
                          telecommunications systems, transitioning critical \
                          infrastructure to modern platforms while maintaining \
                          service continuity for enterprise clients."
                .into(),
            challenges: vec![
                "Migrating mission-critical systems with zero-downtime requirements"
                    .into(),
                "Managing complex dependencies between legacy and modern systems"
                    .into(),
                "Training teams on new technologies while maintaining operational \
                 excellence"
                    .into(),
            ],
            solutions: vec![
                "Developed parallel running strategy enabling seamless system \
                 transitions"
                    .into(),
                "Created comprehensive testing frameworks ensuring system \
                 reliability"
                    .into(),
                "Implemented knowledge transfer programs for technical teams".into(),
            ],
            impact: vec![
                "Successfully migrated 50+ legacy systems with 99.9% uptime \
                 maintained"
                    .into(),
                "Reduced operational costs by 25% through system optimization"
                    .into(),
                "Improved system performance benchmarks by 45% post-migration"
                    .into(),
            ],
            technologies: vec![
                "System Migration".into(),
                "Legacy Modernization".into(),
                "Performance Optimization".into(),
                "Change Management".into(),
                "Quality Assurance".into(),
            ],
            metrics: vec![
                Metric { key: "budget".into(), value: "$3.2M".into() },
                Metric { key: "teamSize".into(), value: "32 Engineers".into() },
                Metric { key: "timeline".into(), value: "30 Months".into() },
                Metric { key: "coverage".into(), value: "50+ Systems".into() },
            ],
        },
        ProjectEntry {
            icon: IconTag::Users,
            title: "Cross-Functional Security Training Initiative".into(),
            category: "Organizational Development".into(),
            status: "Completed".into(),
            duration: "2021 - 2023".into(),
            description: "Designed and implemented comprehensive security awareness \
                          and training programs for telecommunications teams, \
                          establishing security-first culture across multiple \
                          departments and geographical locations."
                .into(),
            challenges: vec![
                "Creating engaging security training for diverse technical skill \
                 levels"
                    .into(),
                "Ensuring consistent security practices across global teams".into(),
                "Measuring and improving security awareness effectiveness".into(),
            ],
            solutions: vec![
                "Developed role-specific security training modules for different \
                 technical domains"
                    .into(),
                "Created interactive simulation exercises based on real \
                 vulnerability scenarios"
                    .into(),
                "Implemented gamified learning platforms increasing engagement by \
                 70%"
                    .into(),
            ],
            impact: vec![
                "Trained 200+ engineers across 5 countries on security best \
                 practices"
                    .into(),
                "Achieved 95% completion rate for mandatory security training \
                 programs"
                    .into(),
                "Reduced human-error security incidents by 60% within first year"
                    .into(),
            ],
            technologies: vec![
                "Training Development".into(),
                "Security Awareness".into(),
                "E-Learning Platforms".into(),
                "Performance Metrics".into(),
                "Cultural Change".into(),
            ],
            metrics: vec![
                Metric { key: "budget".into(), value: "$450K".into() },
                Metric { key: "teamSize".into(), value: "8 Trainers".into() },
                Metric { key: "timeline".into(), value: "18 Months".into() },
                Metric { key: "coverage".into(), value: "200+ Engineers".into() },
            ],
        },
    ]
}

fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            name: "Certified SAFe® 4 Product Owner".into(),
            issuer: "Scaled Agile".into(),
            date_obtained: "2020-03".into(),
            status: "Current".into(),
            relevance: "Agile Program Management".into(),
        },
        Certification {
            name: "Product Manager Certification".into(),
            issuer: "Professional Certification Body".into(),
            date_obtained: "2019-08".into(),
            status: "Current".into(),
            relevance: "Strategic Product Leadership".into(),
        },
    ]
}

fn education() -> Vec<EducationEntry> {
    vec![EducationEntry {
        degree: "Bachelor's Degree".into(),
        institution: "Acadia University".into(),
        start_year: "1990".into(),
        end_year: "1994".into(),
        location: "Nova Scotia, Canada".into(),
    }]
}

fn contact() -> ContactInfo {
    ContactInfo {
        methods: vec![
            ContactMethod {
                icon: IconTag::Mail,
                title: "Email".into(),
                value: "laybeentan@yahoo.com".into(),
                href: Some("mailto:laybeentan@yahoo.com".into()),
                description: "For professional inquiries and opportunities".into(),
                primary: true,
            },
            ContactMethod {
                icon: IconTag::Link,
                title: "LinkedIn".into(),
                value: "Connect on LinkedIn".into(),
                href: Some("https://www.linkedin.com/in/lay-been-tan-1262502".into()),
                description: "Professional network and career updates".into(),
                primary: true,
            },
            ContactMethod {
                icon: IconTag::Pin,
                title: "Location".into(),
                value: "Ottawa, ON Canada".into(),
                href: None,
                description: "Available for local and remote opportunities".into(),
                primary: false,
            },
        ],
        availability: vec![
            Availability {
                icon: IconTag::Users,
                title: "Consulting Opportunities".into(),
                description: "Available for telecommunications security consulting \
                              and vulnerability management projects"
                    .into(),
            },
            Availability {
                icon: IconTag::Calendar,
                title: "Speaking Engagements".into(),
                description: "Open to industry conferences and professional \
                              development sessions on telecom security"
                    .into(),
            },
            Availability {
                icon: IconTag::Phone,
                title: "Professional Mentoring".into(),
                description: "Offering guidance to emerging project managers in \
                              telecommunications industry"
                    .into(),
            },
        ],
        pitch: vec![
            "31+ years of telecommunications expertise".into(),
            "Proven vulnerability management leadership".into(),
            "Quick learner who works with minimal supervision".into(),
            "Dedicated to delivering exceptional results".into(),
        ],
        response_note: "I typically respond to professional inquiries within 24-48 \
                        hours. For urgent matters, please indicate priority in your \
                        subject line."
            .into(),
    }
}

fn footer() -> FooterContent {
    FooterContent {
        tagline: "Senior Program Manager specializing in vulnerability management \
                  and telecommunications security, with over three decades of \
                  industry leadership experience."
            .into(),
        facts: vec![
            FooterFact {
                icon: IconTag::Pin,
                text: "Ottawa, ON Canada".into(),
            },
            FooterFact {
                icon: IconTag::Calendar,
                text: "Available for Consulting".into(),
            },
            FooterFact {
                icon: IconTag::Award,
                text: "SAFe® 4 Certified".into(),
            },
        ],
        sections: vec![
            FooterSection {
                title: "Professional Profile".into(),
                items: vec![
                    "31+ Years Experience".into(),
                    "Senior Program Manager".into(),
                    "Vulnerability Management Expert".into(),
                    "Telecommunications Specialist".into(),
                ],
            },
            FooterSection {
                title: "Core Expertise".into(),
                items: vec![
                    "Risk Assessment & Management".into(),
                    "Security Frameworks".into(),
                    "Program Leadership".into(),
                    "Team Management".into(),
                ],
            },
            FooterSection {
                title: "Technologies".into(),
                items: vec![
                    "Ethernet & GSM".into(),
                    "SIP Protocols".into(),
                    "5G Infrastructure".into(),
                    "Security Analytics".into(),
                ],
            },
        ],
        notice: "This portfolio showcases professional experience and expertise. \
                 All project details are presented in accordance with \
                 confidentiality agreements and industry standards."
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_seeded_once() {
        let a = store() as *const ContentStore;
        let b = store() as *const ContentStore;
        assert_eq!(a, b);
    }

    #[test]
    fn experience_is_ordered_newest_first() {
        let exp = &store().experience;
        assert_eq!(exp.len(), 5);
        assert_eq!(exp[0].kind, "Current Role");
        assert!(exp[0].period.end.is_none());
        assert_eq!(exp.last().unwrap().company, "Newbridge Networks Corporation");
    }

    #[test]
    fn proficiencies_are_in_display_range() {
        for cat in &store().skills {
            for skill in &cat.skills {
                assert!(skill.proficiency <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn project_metrics_use_conventional_keys() {
        for project in &store().projects {
            let keys: Vec<&str> = project.metrics.iter().map(|m| m.key.as_str()).collect();
            assert_eq!(keys, ["budget", "teamSize", "timeline", "coverage"]);
        }
    }

    #[test]
    fn profile_matches_statistics_headline() {
        let s = store();
        assert_eq!(s.profile.years_experience, s.statistics.years_experience);
    }
}
