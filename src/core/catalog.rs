use crate::core::{ExperienceItem, Project};

/// Fixed portfolio content, built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
    experience: Vec<ExperienceItem>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    title: &str,
    description: &str,
    stack: &[&str],
    github: Option<&str>,
    api_docs: Option<&str>,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        stack: strings(stack),
        github: github.map(str::to_string),
        api_docs: api_docs.map(str::to_string),
    }
}

fn experience(
    title: &str,
    organization: &str,
    period: &str,
    description: &str,
    tags: &[&str],
) -> ExperienceItem {
    ExperienceItem {
        title: title.to_string(),
        organization: organization.to_string(),
        period: period.to_string(),
        description: description.to_string(),
        tags: strings(tags),
    }
}

impl Catalog {
    pub fn portfolio() -> Self {
        let projects = vec![
            project(
                "Scalable Task Queue with Distributed Workers",
                "Built a Celery + RabbitMQ based task processing system with autoscaling workers, metrics, and retries.",
                &["Python", "FastAPI", "Celery", "RabbitMQ", "Docker", "Prometheus"],
                Some("https://github.com/example/scalable-task-queue"),
                None,
            ),
            project(
                "API Gateway & Auth Service",
                "Kong gateway with JWT auth service, rate limiting, and observability integrated.",
                &["Kong", "PostgreSQL", "Redis", "Go", "Docker", "Grafana"],
                Some("https://github.com/example/api-gateway-auth"),
                Some("https://api.example.com/docs"),
            ),
            project(
                "Event-Driven Microservices",
                "Microservices communicating via Kafka with schema registry and idempotent consumers.",
                &["Node.js", "TypeScript", "Kafka", "PostgreSQL", "Docker", "Kubernetes"],
                Some("https://github.com/example/event-driven-services"),
                None,
            ),
        ];

        let experience = vec![
            experience(
                "Open-source Contributor",
                "FastAPI Ecosystem",
                "2022 — Present",
                "Contributed bug fixes and performance tweaks, improved docs, and triaged issues.",
                &["FastAPI", "Open Source", "Performance"],
            ),
            experience(
                "Freelance Backend Developer",
                "Remote",
                "2021 — 2024",
                "Delivered APIs, database schemas, and deployment pipelines for startups and solo founders.",
                &["APIs", "Databases", "CI/CD"],
            ),
            experience(
                "Personal Projects",
                "Various",
                "Ongoing",
                "R&D on distributed systems, caching strategies, and resilience patterns.",
                &["Kafka", "Caching", "Resilience"],
            ),
        ];

        Self {
            projects,
            experience,
        }
    }

    pub fn list_projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn list_experience(&self) -> &[ExperienceItem] {
        &self.experience
    }
}
